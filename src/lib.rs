//! Wordladder Core Library
//!
//! Solves the word ladder problem: given two equal-length words and a
//! word list, find a shortest chain of words from the list where each
//! word differs from the previous one in exactly one character.

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod wordlist;
