//! Conformance rules evaluated over a trace.

use crate::conformance::violations::{Check, ConformanceViolation};
use crate::core::{next_state, outputs, ControllerState};
use crate::sim::{Sample, Trace};

/// Type alias for user-supplied sample predicates and their messages.
pub type CustomCheck = (Box<dyn Fn(&Sample) -> bool + Send + Sync>, String);

/// Contract checks to run over a trace.
/// Collects ALL violations rather than stopping at the first one.
pub struct ConformanceRules {
    pub(crate) checks: Vec<Check>,
    pub(crate) custom: Vec<CustomCheck>,
}

impl Default for ConformanceRules {
    fn default() -> Self {
        Self {
            checks: Check::ALL.to_vec(),
            custom: Vec::new(),
        }
    }
}

impl ConformanceRules {
    /// Checks this rule set runs, in order.
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Check every sample of `trace`.
    /// Returns `Err` with every violation found, in sample order.
    pub fn check(&self, trace: &Trace) -> Result<(), Vec<ConformanceViolation>> {
        let violations: Vec<_> = trace
            .samples()
            .iter()
            .flat_map(|sample| self.check_sample(sample))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            tracing::event!(
                tracing::Level::DEBUG,
                violations = violations.len(),
                "trace failed conformance"
            );
            Err(violations)
        }
    }

    /// Check a single sample.
    pub fn check_sample(&self, sample: &Sample) -> Vec<ConformanceViolation> {
        let mut violations = Vec::new();

        for check in &self.checks {
            match check {
                Check::MutualExclusion => mutual_exclusion(sample, &mut violations),
                Check::ResetDominance => reset_dominance(sample, &mut violations),
                Check::LevelSampling => level_sampling(sample, &mut violations),
                Check::CombinationalOutputs => combinational(sample, &mut violations),
            }
        }

        for (predicate, message) in &self.custom {
            if !predicate(sample) {
                violations.push(ConformanceViolation::CustomCheckFailed {
                    index: sample.index,
                    message: message.clone(),
                });
            }
        }

        violations
    }
}

fn mutual_exclusion(sample: &Sample, violations: &mut Vec<ConformanceViolation>) {
    let count = sample.outputs.asserted_count();
    if count > 1 {
        violations.push(ConformanceViolation::MultipleOutputs {
            index: sample.index,
            count,
        });
    }
}

fn reset_dominance(sample: &Sample, violations: &mut Vec<ConformanceViolation>) {
    if sample.is_tick()
        && sample.sampled_inputs.reset_asserted()
        && sample.state != ControllerState::Idle
    {
        violations.push(ConformanceViolation::ResetIgnored {
            index: sample.index,
            state: sample.state,
        });
    }
    if sample.inputs.reset_asserted() && !sample.outputs.is_idle() {
        violations.push(ConformanceViolation::OutputsDuringReset {
            index: sample.index,
        });
    }
}

fn level_sampling(sample: &Sample, violations: &mut Vec<ConformanceViolation>) {
    if !sample.is_tick() {
        if sample.state != sample.before {
            violations.push(ConformanceViolation::UnclockedTransition {
                index: sample.index,
                from: sample.before,
                to: sample.state,
            });
        }
        return;
    }

    // Reset ticks belong to the reset check.
    if sample.sampled_inputs.reset_asserted() {
        return;
    }

    let expected = next_state(sample.before, sample.sampled_inputs);
    if sample.state != expected {
        violations.push(ConformanceViolation::EdgeSensitive {
            index: sample.index,
            from: sample.before,
            to: sample.state,
            expected,
        });
    }
}

fn combinational(sample: &Sample, violations: &mut Vec<ConformanceViolation>) {
    if sample.outputs != outputs(sample.state, sample.inputs) {
        violations.push(ConformanceViolation::RegisteredOutputs {
            index: sample.index,
        });
    }
}
