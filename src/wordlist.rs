//! Owned word list with a uniform-length invariant
//!
//! Words are identified by their index (0..N-1) in list order. The
//! constructor enforces that every entry has the same length, so the
//! rest of the crate can index and compare words without re-checking.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{LadderError, Result};

/// An immutable list of equal-length words.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    word_len: usize,
}

impl WordList {
    /// Build a list from owned words, inferring the shared length from
    /// the first entry. An empty list is valid (with length 0).
    pub fn new(words: Vec<String>) -> Result<Self> {
        let word_len = words.first().map(|w| w.len()).unwrap_or(0);
        Self::with_word_len(words, word_len)
    }

    /// Build a list, validating every entry against a required length.
    pub fn with_word_len(words: Vec<String>, word_len: usize) -> Result<Self> {
        for word in &words {
            if word.len() != word_len {
                return Err(LadderError::WordLengthMismatch {
                    word: word.clone(),
                    expected: word_len,
                    actual: word.len(),
                });
            }
        }
        debug!(count = words.len(), word_len, "word list loaded");
        Ok(Self { words, word_len })
    }

    /// Read one word per line, skipping blank lines.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
        Self::new(words)
    }

    /// Read a word list from a file, one word per line.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Shared length of every word in the list.
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Index of the first occurrence of `word`, by list order.
    pub fn position_of(&self, word: &str) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_new_infers_length() {
        let list = WordList::new(owned(&["cat", "cot", "dot"])).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.word_len(), 3);
        assert!(!list.is_empty());
    }

    #[test]
    fn test_empty_list() {
        let list = WordList::new(Vec::new()).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.word_len(), 0);
        assert_eq!(list.position_of("cat"), None);
    }

    #[test]
    fn test_mixed_lengths_rejected() {
        let err = WordList::new(owned(&["cat", "goose"])).unwrap_err();
        assert!(matches!(
            err,
            LadderError::WordLengthMismatch {
                expected: 3,
                actual: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_with_word_len_rejects_short_entry() {
        let err = WordList::with_word_len(owned(&["cat"]), 4).unwrap_err();
        assert!(matches!(
            err,
            LadderError::WordLengthMismatch { expected: 4, .. }
        ));
    }

    #[test]
    fn test_position_of_first_occurrence() {
        let list = WordList::new(owned(&["cat", "dot", "cat"])).unwrap();
        assert_eq!(list.position_of("cat"), Some(0));
        assert_eq!(list.position_of("dot"), Some(1));
        assert_eq!(list.position_of("dog"), None);
    }

    #[test]
    fn test_get() {
        let list = WordList::new(owned(&["cat", "dot"])).unwrap();
        assert_eq!(list.get(1), Some("dot"));
        assert_eq!(list.get(2), None);
    }

    #[test]
    fn test_from_reader_skips_blank_lines() {
        let input = "hit\n\nhot\n  dot  \n";
        let list = WordList::from_reader(Cursor::new(input)).unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["hit", "hot", "dot"]);
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "hit").unwrap();
        writeln!(file, "hot").unwrap();
        writeln!(file, "cog").unwrap();

        let list = WordList::from_path(&path).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.position_of("cog"), Some(2));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = WordList::from_path("/nonexistent/words.txt").unwrap_err();
        assert!(matches!(err, LadderError::Io(_)));
    }
}
