//! Outcome recording and the run-wide report accumulator.
//!
//! Rules stream their outcomes into a single [`Report`] as they evaluate.
//! Failures print immediately; passes print only in verbose mode but are
//! always counted. The report decides the overall process result at the end
//! of the run.

use std::fmt;

use crate::output::OutputContext;

/// Pass/fail status of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Fail,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() keeps width specifiers working on the tag
        f.pad(match self {
            Status::Pass => "pass",
            Status::Fail => "fail",
        })
    }
}

/// One recorded check result with its human-readable explanation.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub status: Status,
    pub message: String,
}

impl Outcome {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            status: Status::Pass,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: Status::Fail,
            message: message.into(),
        }
    }
}

/// Run-wide accumulator of check outcomes.
///
/// Mutated in place by every rule evaluation across every document in the
/// run. Invariant: `issues <= checked` after every `record` call.
pub struct Report {
    ctx: OutputContext,
    checked: u64,
    issues: u64,
    outcomes: Vec<Outcome>,
}

impl Report {
    pub fn new(ctx: OutputContext) -> Self {
        Self {
            ctx,
            checked: 0,
            issues: 0,
            outcomes: Vec::new(),
        }
    }

    /// Record one outcome: count it, and print it according to the output
    /// policy (failures always, passes only in verbose mode).
    pub fn record(&mut self, outcome: Outcome) {
        self.checked += 1;
        match outcome.status {
            Status::Fail => {
                self.issues += 1;
                self.ctx
                    .print_data(format!("{:<5}{}", outcome.status, outcome.message));
            }
            Status::Pass => {
                self.ctx
                    .print_info(format!("{:<5}{}", outcome.status, outcome.message));
            }
        }
        self.outcomes.push(outcome);
    }

    /// Print the end-of-run summary line.
    pub fn summary(&self) {
        self.ctx.print_data(format!(
            "Checked {} item(s), found {} problem(s).",
            self.checked, self.issues
        ));
    }

    /// True when no recorded outcome was a failure.
    pub fn is_clean(&self) -> bool {
        self.issues == 0
    }

    pub fn checked(&self) -> u64 {
        self.checked
    }

    pub fn issues(&self) -> u64 {
        self.issues
    }

    /// All recorded outcomes in evaluation order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }
}
