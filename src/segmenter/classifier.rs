// WHY: The boundary rules are the only non-trivial logic in the segmenter
// Predicates are total over any input string, including the empty string

use std::sync::Arc;

use crate::abbreviations::AbbreviationSet;

/// Suffixes that mark a word as a possible sentence end
pub const TERMINAL_SUFFIXES: &[&str] = &[".", ".)", ".\"", ".\u{201D}", ".\u{2019}", "!", "?"];

/// Closing delimiters that can follow terminal punctuation
pub const SOFT_PUNCTUATION: &[char] = &[')', '"', '\u{201D}'];

/// Three-period ellipsis; never a sentence end
pub const ELLIPSIS: &str = "...";

/// Word that continues a citation after `Id.` or a reporter cite
pub const PINCITE_WORD: &str = "at";

/// Prior words shorter than this (in chars) are treated as initials
pub const MIN_TERMINAL_WORD_CHARS: usize = 3;

/// Which rule decided whether `word` continues the current sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryDecision {
    /// First word of a paragraph
    FirstWord,
    /// Empty token from consecutive spaces
    EmptyWord,
    /// Prior word carries no terminal punctuation
    NoTerminalPunctuation,
    /// Prior word is a known abbreviation
    Abbreviation,
    /// Prior word has an earlier period, like `U.S.`
    InternalPeriod,
    /// Word is the pincite `at`
    Pincite,
    /// Prior word is too short to end a sentence, like `J.`
    ShortPrior,
    /// Word starts with a lowercase letter
    LowercaseStart,
    /// None of the continuation rules fired
    Boundary,
}

impl BoundaryDecision {
    pub fn is_boundary(self) -> bool {
        matches!(self, BoundaryDecision::Boundary)
    }
}

/// Classifies words adjacent to punctuation as sentence ends or continuations
#[derive(Debug, Clone)]
pub struct BoundaryClassifier {
    abbreviations: Arc<AbbreviationSet>,
}

impl BoundaryClassifier {
    pub fn new(abbreviations: Arc<AbbreviationSet>) -> Self {
        Self { abbreviations }
    }

    pub fn abbreviations(&self) -> &AbbreviationSet {
        &self.abbreviations
    }

    /// True when the word ends in terminal punctuation and contains no ellipsis
    pub fn has_terminal_punctuation(word: &str) -> bool {
        if word.contains(ELLIPSIS) {
            return false;
        }
        TERMINAL_SUFFIXES.iter().any(|suffix| word.ends_with(suffix))
    }

    /// True when the word contains a closing paren or double quote anywhere
    pub fn has_soft_punctuation(word: &str) -> bool {
        word.contains(SOFT_PUNCTUATION)
    }

    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(word)
    }

    /// Decide whether `word` starts a new sentence given the word before it
    pub fn decide(&self, prior: &str, word: &str) -> BoundaryDecision {
        if word.is_empty() {
            return BoundaryDecision::EmptyWord;
        }
        if !Self::has_terminal_punctuation(prior) {
            return BoundaryDecision::NoTerminalPunctuation;
        }
        if self.is_abbreviation(prior) {
            return BoundaryDecision::Abbreviation;
        }
        if has_internal_period(prior) && !Self::has_soft_punctuation(prior) {
            return BoundaryDecision::InternalPeriod;
        }
        if word == PINCITE_WORD {
            return BoundaryDecision::Pincite;
        }
        if prior.chars().count() < MIN_TERMINAL_WORD_CHARS {
            return BoundaryDecision::ShortPrior;
        }
        if word.chars().next().is_some_and(char::is_lowercase) {
            return BoundaryDecision::LowercaseStart;
        }
        BoundaryDecision::Boundary
    }
}

// A period anywhere before the final char
fn has_internal_period(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next_back();
    chars.as_str().contains('.')
}
