pub mod abbreviations;
pub mod output;
pub mod reader;
pub mod segmenter;

// Re-export main types for convenient access
pub use abbreviations::{normalize_word, AbbreviationCategory, AbbreviationSet};
pub use segmenter::{
    BoundaryClassifier, BoundaryDecision, Paragraph, SegmentationResult, Segmenter,
    SegmenterConfig, Sentence,
};
