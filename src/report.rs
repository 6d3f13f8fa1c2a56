//! Evaluation results and lookup cost reporting.

/// Overall verdict derived from the recorded reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Strong,
}

/// Outcome of evaluating one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    /// Human-readable reasons the password was rejected; empty for a
    /// strong password.
    pub reasons: Vec<String>,
    /// True when the password or its digit-stripped base form is a
    /// dictionary word.
    pub dictionary_derived: bool,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        if self.reasons.is_empty() {
            PasswordStrength::Strong
        } else {
            PasswordStrength::Weak
        }
    }
}

/// Snapshot of the four tables' cumulative comparison counters.
///
/// Counts are lifetime totals since table construction, not per-password
/// deltas; callers wanting the cost of a single check diff two
/// snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComparisonReport {
    pub chaining_sampled: u64,
    pub chaining_sequential: u64,
    pub probing_sampled: u64,
    pub probing_sequential: u64,
}

impl ComparisonReport {
    /// Labelled rows in a stable order, ready for printing.
    pub fn rows(&self) -> [(&'static str, u64); 4] {
        [
            (
                "Separate Chaining with hash function (x37)",
                self.chaining_sampled,
            ),
            (
                "Separate Chaining with hash function (x31)",
                self.chaining_sequential,
            ),
            (
                "Linear Probing with hash function (x37)",
                self.probing_sampled,
            ),
            (
                "Linear Probing with hash function (x31)",
                self.probing_sequential,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_follows_reasons() {
        let clean = PasswordEvaluation {
            reasons: vec![],
            dictionary_derived: false,
        };
        assert_eq!(clean.strength(), PasswordStrength::Strong);

        let flagged = PasswordEvaluation {
            reasons: vec!["Password must be at least 8 characters".to_string()],
            dictionary_derived: false,
        };
        assert_eq!(flagged.strength(), PasswordStrength::Weak);
    }

    #[test]
    fn test_report_rows_order() {
        let report = ComparisonReport {
            chaining_sampled: 1,
            chaining_sequential: 2,
            probing_sampled: 3,
            probing_sequential: 4,
        };
        let rows = report.rows();
        assert_eq!(rows[0].1, 1);
        assert_eq!(rows[3].1, 4);
        assert!(rows[0].0.contains("Chaining"));
        assert!(rows[2].0.contains("Probing"));
    }
}
