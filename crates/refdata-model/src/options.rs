//! Configuration options for an aggregation run.

use serde::{Deserialize, Serialize};

/// How multiple country→duty rows for the same country are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DutyPolicy {
    /// At most one distinct duty per country; conflicting rows abort the run.
    #[default]
    Unique,
    /// The last row in source order wins.
    LastWins,
}

/// Options controlling aggregation behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationOptions {
    /// Treat a currency without a primary symbol as fatal.
    pub strict_symbols: bool,

    pub duty_policy: DutyPolicy,
}

impl AggregationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for publishing builds: every currency must carry a symbol.
    pub fn strict() -> Self {
        Self {
            strict_symbols: true,
            duty_policy: DutyPolicy::Unique,
        }
    }

    #[must_use]
    pub fn with_strict_symbols(mut self, enable: bool) -> Self {
        self.strict_symbols = enable;
        self
    }

    #[must_use]
    pub fn with_duty_policy(mut self, policy: DutyPolicy) -> Self {
        self.duty_policy = policy;
        self
    }
}
