//! Calculation core
//!
//! Pure, synchronous, side-effect-free: no I/O, no shared mutable state.
//! Safe to call concurrently from independent request handlers.
//!
//! Pipeline: PrimaryMetrics -> [derivation] -> RiskParameters -> [risk] ->
//! RiskResults. The log-scale transform converts one input for display and
//! never feeds the pipeline.

pub mod constants;
pub mod derivation;
pub mod logscale;
pub mod risk;
pub mod state;
