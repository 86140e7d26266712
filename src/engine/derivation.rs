//! Derivation Engine
//!
//! Maps the primary AI benchmark metrics to the derived risk-parameter
//! vector. Pure and total: every output field is clamped into its documented
//! domain, so the result is always valid input to the risk engine even if
//! the caller skipped boundary validation.
//!
//! Each derived quantity is monotonically increasing in the primary metrics
//! that drive it: capability and code-exploitation skill raise attack volume
//! and chain-stage success.

use super::constants::{
    ATTACK_MULTIPLIER, FINANCIAL_MULTIPLIER, MALWARE_MULTIPLIER, NUM_ATTACKS_MAX,
    NUM_ATTACKS_MIN, PERSISTENCE_MULTIPLIER, PROB_MAX, PROB_MIN, SEVERITY_MAX, SEVERITY_MIN,
    SPEARPHISHING_MULTIPLIER,
};
use crate::models::{PrimaryMetrics, RiskParameters};

/// Derive the risk-parameter vector from primary benchmark metrics.
///
/// Rounding is half-away-from-zero (`f64::round`), matching the rest of the
/// calculation core.
pub fn derive(primary: &PrimaryMetrics) -> RiskParameters {
    let harm = primary.agent_harm_score as f64;
    let bench = primary.overall_agent_bench;
    let swe = primary.swe_bench_resolved as f64;

    let num_attacks = (harm * bench * swe * ATTACK_MULTIPLIER / 100.0).round();
    let spearphishing = (harm * bench * SPEARPHISHING_MULTIPLIER).round();
    let malware = (harm * swe * MALWARE_MULTIPLIER / 100.0).round();
    let persistence = (swe * PERSISTENCE_MULTIPLIER).round();
    let severity = (harm * bench * swe * FINANCIAL_MULTIPLIER / 100.0).round();

    RiskParameters {
        num_attacks: num_attacks.clamp(NUM_ATTACKS_MIN, NUM_ATTACKS_MAX) as i64,
        spearphishing_prob: spearphishing.clamp(PROB_MIN, PROB_MAX) as i64,
        malware_prob: malware.clamp(PROB_MIN, PROB_MAX) as i64,
        persistence_prob: persistence.clamp(PROB_MIN, PROB_MAX) as i64,
        financial_severity: severity.clamp(SEVERITY_MIN, SEVERITY_MAX) as i64,
    }
}

// ============================================================================
// TESTS
// ============================================================================
