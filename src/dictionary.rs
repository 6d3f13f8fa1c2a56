//! Word list loading.
//!
//! Produces the ordered `(word, rank)` sequence the tables are populated
//! from. Rank is the 1-based position of the word in the source list.

use std::io::BufRead;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The 10,000-word list the original cost measurements were made against.
#[cfg(feature = "remote")]
pub const DEFAULT_WORDLIST_URL: &str = "https://www.mit.edu/~ecprice/wordlist.10000";

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Word list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read word list: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Word list is empty")]
    EmptyList,
    #[cfg(feature = "remote")]
    #[error("Failed to fetch word list: {0}")]
    FetchError(#[from] ureq::Error),
}

/// Returns the word list file path.
///
/// Priority:
/// 1. Environment variable `PWD_WORDLIST_PATH`
/// 2. Default path `./assets/wordlist.10000.txt`
pub fn wordlist_path() -> PathBuf {
    std::env::var("PWD_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/wordlist.10000.txt"))
}

/// Loads the word list from the configured path.
///
/// # Errors
///
/// Returns error if the file does not exist, cannot be read, or contains
/// no words.
pub fn load_wordlist() -> Result<Vec<(String, u32)>, DictionaryError> {
    load_wordlist_from_path(wordlist_path())
}

/// Loads the word list from a specific file path.
///
/// Words keep their file order; ranks are assigned 1-based in that
/// order. Blank lines are skipped.
///
/// # Errors
///
/// Returns error if the file does not exist, cannot be read, or contains
/// no words.
pub fn load_wordlist_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<(String, u32)>, DictionaryError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Word list load FAILED: file not found {:?}", path);
        return Err(DictionaryError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let words = words_from_reader(content.as_bytes())?;

    #[cfg(feature = "tracing")]
    tracing::info!("Word list loaded: {} words from {:?}", words.len(), path);

    Ok(words)
}

/// Builds the ranked word sequence from any line-oriented reader.
///
/// This is the injection point that keeps the hashing core testable
/// without filesystem or network access.
pub fn words_from_reader<R: BufRead>(reader: R) -> Result<Vec<(String, u32)>, DictionaryError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        let rank = words.len() as u32 + 1;
        words.push((word.to_owned(), rank));
    }

    if words.is_empty() {
        return Err(DictionaryError::EmptyList);
    }
    Ok(words)
}

/// Fetches the word list over HTTP.
///
/// # Errors
///
/// Returns error if the request fails or the response body contains no
/// words.
///
/// # Example
///
/// ```rust,no_run
/// let words = pwd_dictcheck::fetch_wordlist(pwd_dictcheck::DEFAULT_WORDLIST_URL)?;
/// # Ok::<(), pwd_dictcheck::DictionaryError>(())
/// ```
#[cfg(feature = "remote")]
pub fn fetch_wordlist(url: &str) -> Result<Vec<(String, u32)>, DictionaryError> {
    let response = ureq::get(url).call()?;
    let body = response.into_body().read_to_string()?;

    #[cfg(feature = "tracing")]
    tracing::info!("Fetched word list from {}", url);

    words_from_reader(body.as_bytes())
}
