use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Snapshot of the last physics step.
///
/// Counters are always filled; the `*_ms` timings stay at zero unless perf
/// metrics are enabled on the world.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) broad_phase_ms: f64,
    pub(super) narrow_phase_ms: f64,
    /// Candidate slots returned by grid queries (or visited pairs in fallback mode)
    pub(super) candidates: u32,
    /// Pairs that passed the id ordering and layer filter
    pub(super) pairs_tested: u32,
    pub(super) contacts: u32,
    pub(super) dropped_refs: u32,
    /// Entities whose neighbours overflowed `max_query_results` and needed
    /// more than one query
    pub(super) truncated_queries: u32,
    pub(super) used_fallback: bool,
    pub(super) active_entities: u32,
}

impl StepStats {
    pub(crate) fn reset(&mut self) {
        *self = StepStats::default();
    }
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn broad_phase_ms(&self) -> f64 { self.broad_phase_ms }
    #[wasm_bindgen(getter)]
    pub fn narrow_phase_ms(&self) -> f64 { self.narrow_phase_ms }
    #[wasm_bindgen(getter)]
    pub fn candidates(&self) -> u32 { self.candidates }
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn dropped_refs(&self) -> u32 { self.dropped_refs }
    #[wasm_bindgen(getter)]
    pub fn truncated_queries(&self) -> u32 { self.truncated_queries }
    #[wasm_bindgen(getter)]
    pub fn used_fallback(&self) -> bool { self.used_fallback }
    #[wasm_bindgen(getter)]
    pub fn active_entities(&self) -> u32 { self.active_entities }
}
