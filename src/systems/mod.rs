//! Systems - per-step physics passes (integration, narrow phase, response)

pub mod collision;
pub mod forces;
pub mod resolve;

pub use collision::{dispatch, Manifold};
pub use resolve::resolve;
