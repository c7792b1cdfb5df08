use policyspec_types::Outcome;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub passed: u32,
    pub failed: u32,
    /// Failed outcomes that named no items at all.
    pub degenerate: u32,
}

impl OutcomeCounts {
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        let mut counts = OutcomeCounts::default();
        for o in outcomes {
            if o.passed {
                counts.passed += 1;
            } else {
                counts.failed += 1;
                if o.is_degenerate() {
                    counts.degenerate += 1;
                }
            }
        }
        counts
    }
}

/// Outcomes of a batch of assertions against one policy, in assertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationReport {
    pub outcomes: Vec<Outcome>,
    pub counts: OutcomeCounts,
}

impl EvaluationReport {
    pub fn all_passed(&self) -> bool {
        self.counts.failed == 0
    }
}
