//! Password dictionary checking with lookup cost comparison
//!
//! Checks passwords against a reference word list held in four
//! instrumented hash tables: separate chaining and linear probing, each
//! paired with two string-hash functions. Every lookup counts key
//! comparisons, so collision-resolution strategies and hash functions
//! can be compared empirically over the same query sequence.
//!
//! # Features
//!
//! - `remote`: fetch the word list over HTTP
//! - `tracing`: enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: custom path to the word list file
//!   (default: `./assets/wordlist.10000.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_dictcheck::{StrengthEvaluator, load_wordlist};
//! use secrecy::SecretString;
//!
//! let mut evaluator = StrengthEvaluator::new();
//! let words = load_wordlist().expect("Failed to load word list");
//! evaluator.load(words).expect("Word list exceeds probing capacity");
//!
//! let password = SecretString::new("account8".to_string().into());
//! let evaluation = evaluator.evaluate(&password);
//!
//! println!("Strength: {:?}", evaluation.strength());
//! for reason in &evaluation.reasons {
//!     println!("  {}", reason);
//! }
//! for (label, comparisons) in evaluator.comparison_report().rows() {
//!     println!("{}: {}", label, comparisons);
//! }
//! ```

// Internal modules
mod dictionary;
mod evaluator;
mod hashing;
mod report;
mod tables;

// Public API
pub use dictionary::{
    DictionaryError, load_wordlist, load_wordlist_from_path, wordlist_path, words_from_reader,
};
#[cfg(feature = "remote")]
pub use dictionary::{DEFAULT_WORDLIST_URL, fetch_wordlist};
pub use evaluator::{CHAINING_TABLE_CAPACITY, PROBING_TABLE_CAPACITY, StrengthEvaluator};
pub use hashing::{HashVariant, hash_index};
pub use report::{ComparisonReport, PasswordEvaluation, PasswordStrength};
pub use tables::{CapacityError, ChainedHashTable, DictionaryTable, Entry, ProbingHashTable};
