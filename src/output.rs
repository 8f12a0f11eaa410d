// WHY: Rendering of segmentation results for the CLI and for tests that compare golden output
// TSV lines reuse the index<TAB>sentence<TAB>(span) layout used for aux files

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::segmenter::{Paragraph, SegmentationResult};

/// Output format for rendered results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One trimmed sentence per line
    #[default]
    Text,
    /// index<TAB>sentence<TAB>(start,end)
    Tsv,
    /// Serialized `SegmentationResult`
    Json,
}

/// One sentence per line, trimmed
pub fn render_text(paragraphs: &[Vec<String>]) -> String {
    let mut out = String::new();
    for sentence in paragraphs.iter().flatten() {
        out.push_str(sentence.trim());
        out.push('\n');
    }
    out
}

/// Sentences numbered across the whole document with their char offsets
pub fn render_tsv(paragraphs: &[Paragraph]) -> Result<String> {
    let mut out = String::new();
    let sentences = paragraphs.iter().flat_map(|p| p.sentences.iter());
    for (index, sentence) in sentences.enumerate() {
        writeln!(out, "{}\t{}\t({},{})", index, sentence.text, sentence.start, sentence.end)?;
    }
    Ok(out)
}

pub fn render_json(result: &SegmentationResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render a result in the requested format
/// TSV needs offsets; a plain result is rendered as text instead
pub fn render(result: &SegmentationResult, format: OutputFormat) -> Result<String> {
    match (format, result) {
        (OutputFormat::Json, _) => render_json(result),
        (OutputFormat::Tsv, SegmentationResult::Annotated(paragraphs)) => render_tsv(paragraphs),
        (_, SegmentationResult::Plain(paragraphs)) => Ok(render_text(paragraphs)),
        (OutputFormat::Text, SegmentationResult::Annotated(paragraphs)) => {
            let plain: Vec<Vec<String>> = paragraphs.iter().map(Paragraph::sentence_texts).collect();
            Ok(render_text(&plain))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::Segmenter;

    fn segmenter() -> Segmenter {
        Segmenter::with_abbreviations(["Inc."])
    }

    #[test]
    fn test_render_text_trims_each_sentence() {
        let paragraphs = segmenter().segment("   Rule 23 applies. It is strict.");
        assert_eq!(render_text(&paragraphs), "Rule 23 applies.\nIt is strict.\n");
    }

    #[test]
    fn test_render_tsv_numbers_across_paragraphs() {
        let paragraphs = segmenter().segment_with_metadata("First one.\nSecond one. Third one.");
        let expected = "0\tFirst one.\t(0,10)\n1\tSecond one.\t(11,22)\n2\tThird one.\t(23,33)\n";
        assert_eq!(render_tsv(&paragraphs).unwrap(), expected);
    }

    #[test]
    fn test_render_json_annotated() {
        let result = segmenter().segment_as("Acme Inc. Sued.", true);
        let json = render(&result, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["sentences"][0]["text"], "Acme Inc. Sued.");
        assert_eq!(value[0]["sentences"][0]["end"], 15);
    }

    #[test]
    fn test_tsv_of_plain_result_falls_back_to_text() {
        let result = segmenter().segment_as("One here. Two here.", false);
        assert_eq!(render(&result, OutputFormat::Tsv).unwrap(), "One here.\nTwo here.\n");
    }

    #[test]
    fn test_render_dispatches_tsv_for_annotated_result() {
        let result = segmenter().segment_as("One here. Two here.", true);
        let rendered = render(&result, OutputFormat::Tsv).expect("TSV rendering should succeed");
        assert_eq!(rendered, "0\tOne here.\t(0,9)\n1\tTwo here.\t(10,19)\n");
    }
}
