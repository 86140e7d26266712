//! Assessment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::metrics::{PrimaryMetrics, RiskParameters};

/// Three-band categorical summary of a 0-100 risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Band thresholds: 40 and 70 belong to the higher band.
    pub fn from_score(score: i64) -> Self {
        if score < 40 {
            RiskLevel::Low
        } else if score < 70 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Full output of one risk assessment, recomputed on every calculate call
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskResults {
    /// Expected annual loss in currency-millions
    pub annual_risk_exposure: f64,
    pub risk_score: i64,
    pub risk_level: RiskLevel,
    pub expected_annual_breaches: f64,
    /// Probability of at least one successful breach in a year
    pub annual_breach_probability: f64,
    /// Stress scenario, 3x the per-breach severity
    pub worst_case: f64,
    /// External benchmark constant (currency-millions)
    pub industry_average: f64,
}

/// Immutable persisted snapshot of one assessment
///
/// `annual_risk_exposure` is stored in whole currency units (not millions);
/// the conversion happens once at the boundary so the stored integer and the
/// response value come from the same `assess` call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub id: i64,
    pub user_id: i64,
    #[serde(flatten)]
    pub parameters: RiskParameters,
    pub annual_risk_exposure: i64,
    pub risk_score: i64,
    pub risk_level: RiskLevel,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for the store (id is assigned at creation)
#[derive(Debug, Clone)]
pub struct NewAssessment {
    pub user_id: i64,
    pub parameters: RiskParameters,
    pub annual_risk_exposure: i64,
    pub risk_score: i64,
    pub risk_level: RiskLevel,
    pub created_at: DateTime<Utc>,
}

/// Body of POST /api/v1/risk/calculate
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub parameters: RiskParameters,

    /// When present, the assessment is persisted for this owner
    pub user_id: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    #[serde(flatten)]
    pub results: RiskResults,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_id: Option<i64>,
}

/// Body of POST /api/v1/risk/derive
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeriveRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub primary: PrimaryMetrics,

    /// Raw 0-100 position of the capability slider; when present it
    /// overrides `overallAgentBench` via the log-scale transform
    pub bench_slider_position: Option<f64>,
}

/// Body of POST /api/v1/risk/derive responses
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeriveResponse {
    #[serde(flatten)]
    pub parameters: RiskParameters,
    /// 0-100 position of `overallAgentBench` on the log-scale control
    pub bench_slider_position: f64,
}
