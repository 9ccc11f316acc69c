use thiserror::Error;

/// Errors surfaced by the entity store, spatial index and scene loader.
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// Store is full and has no inactive slot to recycle.
    #[error("entity limit reached (capacity {capacity})")]
    EntityLimitReached { capacity: usize },

    /// The monotonic id counter ran out; ids are never reused.
    #[error("entity ids exhausted")]
    IdsExhausted,

    /// Grid could not be built; the world keeps running on the O(n^2) path.
    #[error("spatial index creation failed: {reason}")]
    SpatialIndexCreationFailed { reason: String },

    #[error("invalid scene: {0}")]
    InvalidScene(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PhysicsError {
    pub(crate) fn index_failed(reason: impl Into<String>) -> Self {
        PhysicsError::SpatialIndexCreationFailed { reason: reason.into() }
    }
}
