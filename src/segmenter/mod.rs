// WHY: Main segmenter interface: paragraphs by newline, sentences by word-level boundary rules
// Immutable after construction so one instance can serve many callers concurrently

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, trace};

pub mod classifier;
pub mod types;

pub use classifier::{BoundaryClassifier, BoundaryDecision};
pub use types::{Paragraph, SegmentationResult, Sentence};

use crate::abbreviations::AbbreviationSet;
use types::SentenceBuilder;

/// Configuration for abbreviation loading
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Caller-supplied abbreviations
    pub abbreviations: Vec<String>,
    /// Use only `abbreviations`; no built-in resources are read
    pub override_builtin: bool,
    /// Read the named category files from this directory instead of the embedded bundle
    pub resource_dir: Option<PathBuf>,
}

impl SegmenterConfig {
    /// Resolve the configured abbreviation set
    pub fn load_abbreviations(&self) -> Result<Arc<AbbreviationSet>> {
        if self.override_builtin {
            return Ok(Arc::new(AbbreviationSet::from_entries(&self.abbreviations)));
        }

        let base = match &self.resource_dir {
            Some(dir) => Arc::new(AbbreviationSet::from_dir(dir)?),
            None => AbbreviationSet::builtin(),
        };

        if self.abbreviations.is_empty() {
            Ok(base)
        } else {
            let merged = (*base).clone().extend(&self.abbreviations);
            Ok(Arc::new(merged))
        }
    }
}

/// Legal-text segmenter
#[derive(Debug, Clone)]
pub struct Segmenter {
    classifier: BoundaryClassifier,
}

impl Segmenter {
    /// Create segmenter from configuration; fails only if a resource cannot be read
    pub fn new(config: SegmenterConfig) -> Result<Self> {
        let abbreviations = config.load_abbreviations()?;
        info!(
            entries = abbreviations.len(),
            override_builtin = config.override_builtin,
            "Segmenter initialized"
        );
        Ok(Self::from_abbreviations(abbreviations))
    }

    /// Create segmenter with the built-in abbreviation categories
    pub fn with_builtin_abbreviations() -> Result<Self> {
        Self::new(SegmenterConfig::default())
    }

    /// Create segmenter whose abbreviation set is exactly `entries`
    pub fn with_abbreviations<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_abbreviations(Arc::new(AbbreviationSet::from_entries(entries)))
    }

    pub fn from_abbreviations(abbreviations: Arc<AbbreviationSet>) -> Self {
        Self {
            classifier: BoundaryClassifier::new(abbreviations),
        }
    }

    pub fn classifier(&self) -> &BoundaryClassifier {
        &self.classifier
    }

    pub fn abbreviations(&self) -> &AbbreviationSet {
        self.classifier.abbreviations()
    }

    /// Segment into paragraphs of plain sentence strings
    pub fn segment(&self, text: &str) -> Vec<Vec<String>> {
        self.segment_with_metadata(text)
            .iter()
            .map(Paragraph::sentence_texts)
            .collect()
    }

    /// Segment into paragraphs and sentences annotated with char offsets
    pub fn segment_with_metadata(&self, text: &str) -> Vec<Paragraph> {
        let mut paragraphs = Vec::new();
        let mut offset = 0;

        for line in text.split('\n') {
            if line.is_empty() {
                offset += 1;
                continue;
            }
            let paragraph = self.segment_paragraph(line, offset);
            offset = paragraph.end + 1;
            paragraphs.push(paragraph);
        }

        debug!(
            chars = text.chars().count(),
            paragraphs = paragraphs.len(),
            "Segmentation complete"
        );
        paragraphs
    }

    /// Plain or annotated result depending on `include_metadata`
    pub fn segment_as(&self, text: &str, include_metadata: bool) -> SegmentationResult {
        if include_metadata {
            SegmentationResult::Annotated(self.segment_with_metadata(text))
        } else {
            SegmentationResult::Plain(self.segment(text))
        }
    }

    /// Segment a single line that starts at char offset `start` in the original text
    pub fn segment_paragraph(&self, paragraph_text: &str, start: usize) -> Paragraph {
        let words: Vec<&str> = paragraph_text.split(' ').collect();
        let mut sentences = Vec::new();
        let mut current = SentenceBuilder::new(start, words[0]);
        trace!(word = words[0], decision = ?BoundaryDecision::FirstWord, "Boundary decision");

        for pair in words.windows(2) {
            let (prior, word) = (pair[0], pair[1]);
            let decision = self.classifier.decide(prior, word);
            trace!(prior, word, ?decision, "Boundary decision");

            if decision.is_boundary() {
                let sentence = current.finish();
                current = SentenceBuilder::new(sentence.end + 1, word);
                sentences.push(sentence);
            } else {
                current.push(word);
            }
        }
        sentences.push(current.finish());

        let end = start + paragraph_text.chars().count();
        debug!(start, end, sentences = sentences.len(), "Paragraph segmented");

        Paragraph {
            start,
            end,
            sentences,
        }
    }
}
