//! Risk Engine
//!
//! Compound-probability breach model plus a weighted linear risk score.
//! Pure and total for in-domain input; out-of-domain behavior is unspecified
//! and guarded by validation at the HTTP boundary.

use super::constants::{
    CURRENCY_UNIT_SCALE, INDUSTRY_AVERAGE_MILLIONS, NUM_ATTACKS_MAX, RISK_SCORE_MAX,
    SCORE_WEIGHT, SEVERITY_MAX, WORST_CASE_MULTIPLIER,
};
use crate::models::{RiskLevel, RiskParameters, RiskResults};

/// Run the full risk model over one parameter vector.
pub fn assess(params: &RiskParameters) -> RiskResults {
    let spearphishing = params.spearphishing_prob as f64 / 100.0;
    let malware = params.malware_prob as f64 / 100.0;
    let persistence = params.persistence_prob as f64 / 100.0;
    let attacks = params.num_attacks as f64;
    let severity = params.financial_severity as f64;

    // A breach requires all three chain stages to succeed on the same attack
    let breach_prob_per_attack = spearphishing * malware * persistence;

    // Probability of at least one breach across independent attempts
    let annual_breach_probability = 1.0 - (1.0 - breach_prob_per_attack).powf(attacks);

    // Expectation of Binomial(numAttacks, breachProbPerAttack)
    let expected_annual_breaches = breach_prob_per_attack * attacks;

    // Currency-millions, retained at full floating precision
    let annual_risk_exposure = expected_annual_breaches * severity;

    // Five dimensions, each normalized to its domain maximum, equal weight,
    // hard-capped at 100
    let risk_score = ((attacks / NUM_ATTACKS_MAX) * SCORE_WEIGHT
        + spearphishing * SCORE_WEIGHT
        + malware * SCORE_WEIGHT
        + persistence * SCORE_WEIGHT
        + (severity / SEVERITY_MAX) * SCORE_WEIGHT)
        .round()
        .min(RISK_SCORE_MAX) as i64;

    RiskResults {
        annual_risk_exposure,
        risk_score,
        risk_level: RiskLevel::from_score(risk_score),
        expected_annual_breaches,
        annual_breach_probability,
        worst_case: severity * WORST_CASE_MULTIPLIER,
        industry_average: INDUSTRY_AVERAGE_MILLIONS,
    }
}

/// Exposure in whole currency units, for the persisted record.
///
/// The response keeps currency-millions; both representations come from the
/// same `assess` call so client- and server-side values cannot drift.
pub fn exposure_whole_units(results: &RiskResults) -> i64 {
    (results.annual_risk_exposure * CURRENCY_UNIT_SCALE).round() as i64
}

// ============================================================================
// TESTS
// ============================================================================
