//! Parameter state tracking
//!
//! The risk-parameter vector has exactly one source of truth at a time:
//! either it mirrors the primary metrics (re-derived on every edit), or it is
//! edited directly. The mode switch is explicit; there is no implicit
//! reactive recomputation.

use serde::{Deserialize, Serialize};

use super::derivation;
use crate::models::{PrimaryMetrics, RiskParameters};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterMode {
    /// Risk parameters are edited directly
    Independent,
    /// Risk parameters are recomputed from the primary metrics
    DerivedFromPrimary,
}

/// Current primary metrics and risk parameters under one explicit mode
#[derive(Debug, Clone)]
pub struct ParameterState {
    mode: ParameterMode,
    primary: PrimaryMetrics,
    parameters: RiskParameters,
}

impl ParameterState {
    /// Starts in derived mode with parameters computed from `primary`.
    pub fn new(primary: PrimaryMetrics) -> Self {
        Self {
            mode: ParameterMode::DerivedFromPrimary,
            parameters: derivation::derive(&primary),
            primary,
        }
    }

    #[allow(dead_code)]
    pub fn mode(&self) -> ParameterMode {
        self.mode
    }

    #[allow(dead_code)]
    pub fn primary(&self) -> &PrimaryMetrics {
        &self.primary
    }

    pub fn parameters(&self) -> &RiskParameters {
        &self.parameters
    }

    /// Entering derived mode re-derives immediately, so stale hand-edited
    /// values never survive the switch.
    #[allow(dead_code)]
    pub fn set_mode(&mut self, mode: ParameterMode) {
        self.mode = mode;
        if self.mode == ParameterMode::DerivedFromPrimary {
            self.parameters = derivation::derive(&self.primary);
        }
    }

    /// Updates the primary metrics, re-deriving the parameters while in
    /// derived mode.
    #[allow(dead_code)]
    pub fn set_primary(&mut self, primary: PrimaryMetrics) {
        self.primary = primary;
        if self.mode == ParameterMode::DerivedFromPrimary {
            self.parameters = derivation::derive(&self.primary);
        }
    }

    /// Writes the parameters directly. Refused while derived; returns whether
    /// the write was applied.
    #[allow(dead_code)]
    pub fn set_parameters(&mut self, parameters: RiskParameters) -> bool {
        match self.mode {
            ParameterMode::Independent => {
                self.parameters = parameters;
                true
            }
            ParameterMode::DerivedFromPrimary => false,
        }
    }
}

impl Default for ParameterState {
    fn default() -> Self {
        Self::new(PrimaryMetrics::default())
    }
}
