// WHY: Segmentation results with character offsets for downstream legal-NLP consumers
// Offsets are char counts into the input; sentence offsets follow single-space-joined text

use serde::{Deserialize, Serialize};

/// Sentence with its tokens and char offsets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
    pub tokens: Vec<String>,
    pub start: usize,
    pub end: usize,
}

impl Sentence {
    /// Length of the joined text in chars (always `end - start`)
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }
}

/// Newline-delimited span of input with its sentences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub start: usize,
    pub end: usize,
    pub sentences: Vec<Sentence>,
}

impl Paragraph {
    /// Sentence texts in order
    pub fn sentence_texts(&self) -> Vec<String> {
        self.sentences.iter().map(|s| s.text.clone()).collect()
    }
}

/// Either plain sentence strings per paragraph or fully annotated paragraphs
///
/// Serializes untagged, so an empty result is `[]` for both variants and the variant
/// cannot be recovered from JSON. Deserialize annotated output as `Vec<Paragraph>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SegmentationResult {
    Plain(Vec<Vec<String>>),
    Annotated(Vec<Paragraph>),
}

impl SegmentationResult {
    pub fn paragraph_count(&self) -> usize {
        match self {
            SegmentationResult::Plain(paragraphs) => paragraphs.len(),
            SegmentationResult::Annotated(paragraphs) => paragraphs.len(),
        }
    }

    pub fn sentence_count(&self) -> usize {
        match self {
            SegmentationResult::Plain(paragraphs) => paragraphs.iter().map(Vec::len).sum(),
            SegmentationResult::Annotated(paragraphs) => {
                paragraphs.iter().map(|p| p.sentences.len()).sum()
            }
        }
    }

    /// Plain view regardless of variant
    pub fn into_plain(self) -> Vec<Vec<String>> {
        match self {
            SegmentationResult::Plain(paragraphs) => paragraphs,
            SegmentationResult::Annotated(paragraphs) => {
                paragraphs.iter().map(Paragraph::sentence_texts).collect()
            }
        }
    }
}

/// Accumulates tokens of the sentence under construction
#[derive(Debug)]
pub(crate) struct SentenceBuilder {
    tokens: Vec<String>,
    start: usize,
}

impl SentenceBuilder {
    pub(crate) fn new(start: usize, first: &str) -> Self {
        Self {
            tokens: vec![first.to_string()],
            start,
        }
    }

    pub(crate) fn push(&mut self, word: &str) {
        self.tokens.push(word.to_string());
    }

    /// Join tokens with single spaces and compute the end offset
    pub(crate) fn finish(self) -> Sentence {
        let text = self.tokens.join(" ");
        let end = self.start + text.chars().count();
        Sentence {
            text,
            tokens: self.tokens,
            start: self.start,
            end,
        }
    }
}
