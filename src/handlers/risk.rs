//! Risk assessment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::engine::constants::{BENCH_SCALE_MAX, BENCH_SCALE_MIN, BENCH_SCALE_STEP};
use crate::engine::{logscale, risk, state::ParameterState};
use crate::models::{
    AssessmentRecord, CalculateRequest, CalculateResponse, DeriveRequest, DeriveResponse,
    NewAssessment,
};
use crate::{AppError, AppResult, AppState};

/// Run the risk model over a caller-supplied parameter vector, persisting a
/// snapshot when a user id is attached.
pub async fn calculate(
    State(app): State<AppState>,
    Json(req): Json<CalculateRequest>,
) -> AppResult<Json<CalculateResponse>> {
    req.validate()?;

    let results = risk::assess(&req.parameters);

    let assessment_id = match req.user_id {
        Some(user_id) => {
            let record = app.store.create(NewAssessment {
                user_id,
                parameters: req.parameters,
                annual_risk_exposure: risk::exposure_whole_units(&results),
                risk_score: results.risk_score,
                risk_level: results.risk_level,
                created_at: Utc::now(),
            });
            tracing::debug!("Stored assessment {} for user {}", record.id, user_id);
            Some(record.id)
        }
        None => None,
    };

    Ok(Json(CalculateResponse {
        results,
        assessment_id,
    }))
}

/// Derive the risk-parameter vector from primary benchmark metrics.
///
/// Server-side twin of the benchmark tab: mode entry into derived state,
/// plus the log-scale position of the capability input for the client
/// control. A raw slider position, when supplied, overrides the capability
/// value through the same transform the control uses.
pub async fn derive(Json(req): Json<DeriveRequest>) -> AppResult<Json<DeriveResponse>> {
    req.validate()?;

    let mut primary = req.primary;
    if let Some(position) = req.bench_slider_position {
        primary.overall_agent_bench =
            logscale::to_linear(position, BENCH_SCALE_MIN, BENCH_SCALE_MAX, BENCH_SCALE_STEP);
    }

    let state = ParameterState::new(primary);
    let bench_slider_position = logscale::to_display(
        primary.overall_agent_bench,
        BENCH_SCALE_MIN,
        BENCH_SCALE_MAX,
    );

    Ok(Json(DeriveResponse {
        parameters: *state.parameters(),
        bench_slider_position,
    }))
}

/// Fetch one stored assessment.
pub async fn get(
    State(app): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AssessmentRecord>> {
    app.store
        .get(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Assessment not found".to_string()))
}

/// List stored assessments for one user.
pub async fn list_by_user(
    State(app): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<AssessmentRecord>>> {
    Ok(Json(app.store.list_by_user(user_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{PrimaryMetrics, RiskLevel, RiskParameters};
    use crate::store::AssessmentStore;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState {
            store: Arc::new(AssessmentStore::new()),
            config: Config {
                port: 0,
                docs_dir: "documentation".into(),
                environment: "test".to_string(),
            },
        }
    }

    fn calculate_request(user_id: Option<i64>) -> CalculateRequest {
        CalculateRequest {
            parameters: RiskParameters::default(),
            user_id,
        }
    }

    #[tokio::test]
    async fn test_calculate_without_user_skips_store() {
        let app = test_state();
        let response = calculate(State(app.clone()), Json(calculate_request(None)))
            .await
            .unwrap();

        assert_eq!(response.0.assessment_id, None);
        assert_eq!(response.0.results.risk_score, 18);
        assert_eq!(response.0.results.risk_level, RiskLevel::Low);
        assert!(app.store.list_by_user(1).is_empty());
    }

    #[tokio::test]
    async fn test_calculate_with_user_persists_whole_units() {
        let app = test_state();
        let response = calculate(State(app.clone()), Json(calculate_request(Some(4))))
            .await
            .unwrap();

        let id = response.0.assessment_id.unwrap();
        let record = app.store.get(id).unwrap();
        assert_eq!(record.user_id, 4);
        // 3.75 million stored as whole currency units
        assert_eq!(record.annual_risk_exposure, 3_750_000);
        assert_eq!(record.risk_score, response.0.results.risk_score);
    }

    #[tokio::test]
    async fn test_calculate_rejects_out_of_domain() {
        let app = test_state();
        let mut req = calculate_request(Some(1));
        req.parameters.num_attacks = 501;

        let err = calculate(State(app.clone()), Json(req)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        // Rejected before the engine ran, nothing stored
        assert!(app.store.list_by_user(1).is_empty());
    }

    #[tokio::test]
    async fn test_derive_returns_derived_vector() {
        let req = DeriveRequest {
            primary: PrimaryMetrics::default(),
            bench_slider_position: None,
        };
        let response = derive(Json(req)).await.unwrap();

        assert_eq!(response.0.parameters.num_attacks, 66);
        assert_eq!(response.0.parameters.spearphishing_prob, 100);
        // log10(6)/log10(10) * 100
        assert!((response.0.bench_slider_position - 77.815).abs() < 1e-3);
    }

    #[tokio::test]
    async fn test_derive_slider_position_overrides_bench() {
        let req = DeriveRequest {
            primary: PrimaryMetrics::default(),
            bench_slider_position: Some(50.0),
        };
        let response = derive(Json(req)).await.unwrap();

        // Position 50 -> sqrt(10) snapped to 3.16; round-tripped back out
        assert!((response.0.bench_slider_position - 49.9687).abs() < 1e-2);
        // Derivation used the overridden capability: 45*3.16*35*0.7/100 = 34.839
        assert_eq!(response.0.parameters.num_attacks, 35);
    }

    #[tokio::test]
    async fn test_derive_rejects_out_of_domain() {
        let req = DeriveRequest {
            primary: PrimaryMetrics {
                overall_agent_bench: 42.0,
                ..PrimaryMetrics::default()
            },
            bench_slider_position: None,
        };
        let err = derive(Json(req)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_absent_is_not_found() {
        let err = get(State(test_state()), Path(1)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
