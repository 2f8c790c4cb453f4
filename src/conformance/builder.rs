//! Builder API for conformance rules.

use crate::conformance::rules::{ConformanceRules, CustomCheck};
use crate::conformance::violations::Check;
use crate::sim::Sample;

/// Builder for conformance rules. Starts with every built-in check enabled.
pub struct ConformanceBuilder {
    checks: Vec<Check>,
    custom: Vec<CustomCheck>,
}

impl ConformanceBuilder {
    pub fn new() -> Self {
        Self {
            checks: Check::ALL.to_vec(),
            custom: Vec::new(),
        }
    }

    /// Run only the listed built-in checks
    pub fn only(mut self, checks: &[Check]) -> Self {
        self.checks = checks.to_vec();
        self
    }

    /// Skip a built-in check
    pub fn disable(mut self, check: Check) -> Self {
        self.checks.retain(|c| *c != check);
        self
    }

    /// Add a per-sample predicate; a `false` result is reported with `error_msg`
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&Sample) -> bool + Send + Sync + 'static,
    {
        self.custom.push((Box::new(predicate), error_msg));
        self
    }

    /// Build the rules
    pub fn build(self) -> ConformanceRules {
        ConformanceRules {
            checks: self.checks,
            custom: self.custom,
        }
    }
}

impl Default for ConformanceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
