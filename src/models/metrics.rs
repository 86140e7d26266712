//! Metric models
//!
//! `PrimaryMetrics` are the AI benchmark scores the user adjusts;
//! `RiskParameters` is the attack-chain vector, either derived from the
//! primary metrics or set directly. Both serialize camelCase on the wire.
//! Domain bounds are enforced at the HTTP boundary via `validator`; the
//! engines assume in-domain input.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Primary AI-capability benchmark metrics (transient, never persisted)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryMetrics {
    /// Vulnerability-to-harmful-prompts score (percent)
    #[validate(range(min = 0, max = 100, message = "agentHarmScore must be between 0 and 100"))]
    pub agent_harm_score: i64,

    /// Agent capability, interacted with via a logarithmic control
    #[validate(range(min = 0.1, max = 10.0, message = "overallAgentBench must be between 0.1 and 10.0"))]
    pub overall_agent_bench: f64,

    /// Code-generation capability (percent of tasks resolved)
    #[validate(range(min = 0, max = 100, message = "sweBenchResolved must be between 0 and 100"))]
    pub swe_bench_resolved: i64,
}

impl Default for PrimaryMetrics {
    fn default() -> Self {
        Self {
            agent_harm_score: 45,
            overall_agent_bench: 6.0,
            swe_bench_resolved: 35,
        }
    }
}

/// Derived (or directly user-set) risk-parameter vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RiskParameters {
    /// Expected annual attack attempts
    #[validate(range(min = 1, max = 500, message = "numAttacks must be between 1 and 500"))]
    pub num_attacks: i64,

    /// Spearphishing stage success probability (percent)
    #[validate(range(min = 0, max = 100, message = "spearphishingProb must be between 0 and 100"))]
    pub spearphishing_prob: i64,

    /// Malware stage success probability (percent)
    #[validate(range(min = 0, max = 100, message = "malwareProb must be between 0 and 100"))]
    pub malware_prob: i64,

    /// Persistence stage success probability (percent)
    #[validate(range(min = 0, max = 100, message = "persistenceProb must be between 0 and 100"))]
    pub persistence_prob: i64,

    /// Financial impact of one successful breach (currency-millions)
    #[validate(range(min = 1, max = 50, message = "financialSeverity must be between 1 and 50"))]
    pub financial_severity: i64,
}

impl Default for RiskParameters {
    fn default() -> Self {
        Self {
            num_attacks: 100,
            spearphishing_prob: 15,
            malware_prob: 25,
            persistence_prob: 20,
            financial_severity: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metrics_are_valid() {
        assert!(PrimaryMetrics::default().validate().is_ok());
        assert!(RiskParameters::default().validate().is_ok());
    }

    #[test]
    fn test_primary_metrics_bounds() {
        let mut metrics = PrimaryMetrics::default();

        metrics.agent_harm_score = 0;
        assert!(metrics.validate().is_ok());
        metrics.agent_harm_score = 100;
        assert!(metrics.validate().is_ok());
        metrics.agent_harm_score = 101;
        assert!(metrics.validate().is_err());
        metrics.agent_harm_score = -1;
        assert!(metrics.validate().is_err());
    }

    #[test]
    fn test_agent_bench_bounds() {
        let mut metrics = PrimaryMetrics::default();

        metrics.overall_agent_bench = 0.1;
        assert!(metrics.validate().is_ok());
        metrics.overall_agent_bench = 10.0;
        assert!(metrics.validate().is_ok());
        metrics.overall_agent_bench = 0.05;
        assert!(metrics.validate().is_err());
        metrics.overall_agent_bench = 10.5;
        assert!(metrics.validate().is_err());
    }

    #[test]
    fn test_risk_parameters_bounds() {
        let mut params = RiskParameters::default();

        params.num_attacks = 0;
        assert!(params.validate().is_err());
        params.num_attacks = 501;
        assert!(params.validate().is_err());
        params.num_attacks = 500;
        assert!(params.validate().is_ok());

        params.financial_severity = 0;
        assert!(params.validate().is_err());
        params.financial_severity = 50;
        assert!(params.validate().is_ok());

        params.spearphishing_prob = 100;
        assert!(params.validate().is_ok());
        params.spearphishing_prob = 101;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = serde_json::to_value(RiskParameters::default()).unwrap();
        assert!(json.get("numAttacks").is_some());
        assert!(json.get("spearphishingProb").is_some());
        assert!(json.get("financialSeverity").is_some());
    }
}
