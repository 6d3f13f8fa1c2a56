//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::hashing::HashVariant;
use crate::report::{ComparisonReport, PasswordEvaluation};
use crate::tables::{CapacityError, ChainedHashTable, DictionaryTable, ProbingHashTable};

/// Bucket count of the chaining tables.
pub const CHAINING_TABLE_CAPACITY: usize = 1000;

/// Slot count of the probing tables, sized with slack over the expected
/// 10,000-word list so inserts never exhaust it.
pub const PROBING_TABLE_CAPACITY: usize = 20_000;

const MIN_LENGTH: usize = 8;

/// Drives the four instrumented tables: loads the word list into every
/// table, then checks passwords against them and reports lookup costs.
///
/// Each table pairs one collision-resolution strategy with one hash
/// variant, so the comparison counters expose how strategy and hash
/// function each contribute to lookup cost.
pub struct StrengthEvaluator {
    chaining_sampled: ChainedHashTable,
    chaining_sequential: ChainedHashTable,
    probing_sampled: ProbingHashTable,
    probing_sequential: ProbingHashTable,
}

impl StrengthEvaluator {
    pub fn new() -> Self {
        Self::with_capacities(CHAINING_TABLE_CAPACITY, PROBING_TABLE_CAPACITY)
    }

    /// Creates an evaluator with explicit table capacities.
    ///
    /// The probing capacity must comfortably exceed the word list size,
    /// or [`load`](Self::load) will fail with [`CapacityError`].
    pub fn with_capacities(chaining: usize, probing: usize) -> Self {
        Self {
            chaining_sampled: ChainedHashTable::new(chaining, HashVariant::LegacySampled),
            chaining_sequential: ChainedHashTable::new(chaining, HashVariant::FullSequential),
            probing_sampled: ProbingHashTable::new(probing, HashVariant::LegacySampled),
            probing_sequential: ProbingHashTable::new(probing, HashVariant::FullSequential),
        }
    }

    /// Bulk-loads the ordered word list into all four tables.
    ///
    /// Returns the number of words loaded.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if a probing table runs out of slots;
    /// the evaluator should be rebuilt with a larger probing capacity.
    pub fn load<I>(&mut self, words: I) -> Result<usize, CapacityError>
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        let mut count = 0;
        for (word, rank) in words {
            for table in self.tables_mut() {
                table.insert(&word, rank)?;
            }
            count += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Loaded {} dictionary words into 4 tables", count);

        Ok(count)
    }

    /// Evaluates a password: minimum length, then dictionary membership
    /// of the password itself and of its base form with ASCII digits
    /// stripped (so "account8" is caught through "account").
    ///
    /// Every table is queried with both forms, so the four comparison
    /// counters accumulate over an identical query sequence and stay
    /// directly comparable.
    pub fn evaluate(&mut self, password: &SecretString) -> PasswordEvaluation {
        let pwd = password.expose_secret();
        let mut reasons = Vec::new();

        if pwd.chars().count() < MIN_LENGTH {
            reasons.push(format!("Password must be at least {} characters", MIN_LENGTH));
        }

        let base: String = pwd.chars().filter(|c| !c.is_ascii_digit()).collect();

        let mut dictionary_derived = false;
        for table in self.tables_mut() {
            let raw_hit = table.contains(pwd);
            let base_hit = table.contains(&base);
            if raw_hit || base_hit {
                dictionary_derived = true;
            }
        }

        if dictionary_derived {
            reasons.push(
                "Password is a dictionary word or a dictionary word followed by digits"
                    .to_string(),
            );
        }

        PasswordEvaluation {
            reasons,
            dictionary_derived,
        }
    }

    /// Snapshot of the cumulative comparison counts of all four tables.
    pub fn comparison_report(&self) -> ComparisonReport {
        ComparisonReport {
            chaining_sampled: self.chaining_sampled.comparison_count(),
            chaining_sequential: self.chaining_sequential.comparison_count(),
            probing_sampled: self.probing_sampled.comparison_count(),
            probing_sequential: self.probing_sequential.comparison_count(),
        }
    }

    fn tables_mut(&mut self) -> [&mut dyn DictionaryTable; 4] {
        [
            &mut self.chaining_sampled,
            &mut self.chaining_sequential,
            &mut self.probing_sampled,
            &mut self.probing_sequential,
        ]
    }
}

impl Default for StrengthEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::PasswordStrength;
    use crate::words_from_reader;
    use std::io::Cursor;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn loaded_evaluator() -> StrengthEvaluator {
        let words = words_from_reader(Cursor::new(
            "the\nof\nand\nabout\naccount\npeople\nhistory\npassword\n",
        ))
        .expect("Failed to parse fixture words");

        let mut evaluator = StrengthEvaluator::with_capacities(100, 200);
        let count = evaluator.load(words).expect("Failed to load fixture words");
        assert_eq!(count, 8);
        evaluator
    }

    #[test]
    fn test_load_leaves_counters_untouched() {
        let evaluator = loaded_evaluator();
        assert_eq!(evaluator.comparison_report(), ComparisonReport::default());
    }

    #[test]
    fn test_evaluate_dictionary_word_plus_digits() {
        let mut evaluator = loaded_evaluator();
        let evaluation = evaluator.evaluate(&secret("account8"));

        assert!(evaluation.dictionary_derived);
        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
        assert!(
            evaluation
                .reasons
                .iter()
                .any(|r| r.contains("dictionary word"))
        );
    }

    #[test]
    fn test_evaluate_exact_dictionary_word() {
        let mut evaluator = loaded_evaluator();
        let evaluation = evaluator.evaluate(&secret("password"));

        assert!(evaluation.dictionary_derived);
        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
    }

    #[test]
    fn test_evaluate_random_password_is_strong() {
        let mut evaluator = loaded_evaluator();
        let evaluation = evaluator.evaluate(&secret("9a$D#qW7!uX&Lv3zT"));

        assert!(!evaluation.dictionary_derived);
        assert!(evaluation.reasons.is_empty());
        assert_eq!(evaluation.strength(), PasswordStrength::Strong);
    }

    #[test]
    fn test_evaluate_short_password() {
        let mut evaluator = loaded_evaluator();
        let evaluation = evaluator.evaluate(&secret("abc"));

        assert!(!evaluation.dictionary_derived);
        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
        assert!(
            evaluation
                .reasons
                .iter()
                .any(|r| r.contains("at least 8 characters"))
        );
    }

    #[test]
    fn test_short_dictionary_word_collects_both_reasons() {
        let mut evaluator = loaded_evaluator();
        let evaluation = evaluator.evaluate(&secret("the"));

        assert!(evaluation.dictionary_derived);
        assert_eq!(evaluation.reasons.len(), 2);
    }

    #[test]
    fn test_counters_are_monotonic_across_evaluations() {
        let mut evaluator = loaded_evaluator();

        evaluator.evaluate(&secret("account8"));
        let first = evaluator.comparison_report();

        evaluator.evaluate(&secret("history1"));
        let second = evaluator.comparison_report();

        let first_rows = first.rows();
        let second_rows = second.rows();
        for ((_, a), (_, b)) in first_rows.iter().zip(second_rows.iter()) {
            assert!(b >= a);
        }

        // a dictionary hit costs at least one comparison per table
        assert!(first.rows().iter().all(|(_, count)| *count >= 1));
    }

    #[test]
    fn test_load_beyond_probing_capacity_fails() {
        let words = vec![
            ("apple".to_string(), 1),
            ("banana".to_string(), 2),
            ("cherry".to_string(), 3),
        ];

        let mut evaluator = StrengthEvaluator::with_capacities(10, 2);
        let result = evaluator.load(words);
        assert_eq!(result, Err(CapacityError { capacity: 2 }));
    }

    #[test]
    fn test_all_digit_password_checks_empty_base() {
        let mut evaluator = loaded_evaluator();
        let evaluation = evaluator.evaluate(&secret("12345678"));

        assert!(!evaluation.dictionary_derived);
        assert_eq!(evaluation.strength(), PasswordStrength::Strong);
    }
}
