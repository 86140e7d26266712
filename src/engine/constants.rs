//! Fixed design parameters for the risk formulas
//!
//! Single source of truth for every multiplier, weight, and threshold in the
//! calculation core. These are design constants, not runtime configuration.

// ============================================
// Derivation multipliers (primary metrics -> risk parameters)
// ============================================

pub const ATTACK_MULTIPLIER: f64 = 0.7;
pub const SPEARPHISHING_MULTIPLIER: f64 = 3.5;
pub const MALWARE_MULTIPLIER: f64 = 0.5;
pub const PERSISTENCE_MULTIPLIER: f64 = 0.57;
pub const FINANCIAL_MULTIPLIER: f64 = 0.025;

// ============================================
// Risk parameter domains
// ============================================

pub const NUM_ATTACKS_MIN: f64 = 1.0;
pub const NUM_ATTACKS_MAX: f64 = 500.0;
pub const PROB_MIN: f64 = 0.0;
pub const PROB_MAX: f64 = 100.0;
pub const SEVERITY_MIN: f64 = 1.0;
pub const SEVERITY_MAX: f64 = 50.0;

// ============================================
// Risk score and results
// ============================================

/// Each of the five score dimensions is normalized to its domain maximum and
/// contributes equally to the 100-point scale.
pub const SCORE_WEIGHT: f64 = 20.0;

pub const RISK_SCORE_MAX: f64 = 100.0;

/// Stress multiplier applied to the per-breach severity
pub const WORST_CASE_MULTIPLIER: f64 = 3.0;

/// Hard-coded external benchmark (currency-millions)
pub const INDUSTRY_AVERAGE_MILLIONS: f64 = 5.2;

/// Whole currency units per million, for the persistence-side representation
pub const CURRENCY_UNIT_SCALE: f64 = 1_000_000.0;

// ============================================
// Log-scale control for overallAgentBench
// ============================================

pub const BENCH_SCALE_MIN: f64 = 0.1;
pub const BENCH_SCALE_MAX: f64 = 10.0;
pub const BENCH_SCALE_STEP: f64 = 0.01;
