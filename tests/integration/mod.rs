// Integration test utilities and legal-text fixtures
// WHY: Centralized fixtures keep expected sentence lists next to the texts they describe

#![allow(dead_code)]

use legal_segmenter::{AbbreviationCategory, Segmenter};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::TempDir;

static SHARED_SEGMENTER: OnceLock<Segmenter> = OnceLock::new();

/// Built-in segmenter shared across tests
pub fn builtin_segmenter() -> &'static Segmenter {
    SHARED_SEGMENTER.get_or_init(|| Segmenter::with_builtin_abbreviations().unwrap())
}

/// Excerpt from a Supreme Court opinion with reporter cites, pincites and curly quotes
pub const OPINION_TEXT: &str = "   Rule 23 does not set forth a mere pleading standard. A party seeking class certification must affirmatively demonstrate his compliance with the Rule\u{2014}that is, he must be prepared to prove that there are in fact sufficiently numerous parties, common questions of law or fact, etc. We recognized in Falcon that \u{201C}sometimes it may be necessary for the court to probe behind the pleadings before coming to rest on the certification question,\u{201D} 457 U. S., at 160, and that certification is proper only if \u{201C}the trial court is satisfied, after a rigorous analysis, that the prerequisites of Rule 23(a) have been satisfied,\u{201D} id., at 161; see id., at 160 (\u{201C}[A]ctual, not presumed, conformance with Rule 23(a) remains \u{2026} indispensable\u{201D}). Frequently that \u{201C}rigorous analysis\u{201D} will entail some overlap with the merits of the plaintiff \u{2019}s underlying claim. That cannot be helped. \u{201C} \u{2018}[T]he class determination generally involves considerations that are enmeshed in the factual and legal issues comprising the plaintiff \u{2019}s cause of action.\u{2019} \u{201D} Falcon, supra, at 160 (quoting Coopers & Lybrand v. Livesay, 437 U. S. 463, 469 (1978); some internal quotation marks omitted). Nor is there anything unusual about that consequence: The necessity of touching aspects of the merits in order to resolve preliminary matters, e.g., jurisdiction and venue, is a familiar feature of litigation. See Szabo v. Bridgeport Machines, Inc., 249 F. 3d 672, 676\u{2013}677 (CA7 2001) (Easterbrook, J.).";

/// Sentence starts (prefixes) and char offsets expected for OPINION_TEXT with built-in abbreviations
pub const OPINION_EXPECTED: &[(&str, usize, usize)] = &[
    ("   Rule 23 does not set forth", 0, 55),
    ("A party seeking class certification", 56, 726),
    ("Frequently that", 727, 841),
    ("That cannot be helped.", 842, 864),
    ("\u{201C} \u{2018}[T]he class determination", 865, 1153),
    ("Nor is there anything unusual", 1154, 1363),
    ("See Szabo v. Bridgeport Machines", 1364, 1456),
];

/// Multi-paragraph brief excerpt
pub const BRIEF_TEXT: &str = "Section 1983 applies.\nThe Court agrees.\n\n\nSo ordered.";

/// Temporary directory holding a full set of abbreviation resource files
pub struct ResourceFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl ResourceFixture {
    /// Copy every embedded category into a fresh temporary directory
    pub fn with_embedded_resources() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();
        for category in AbbreviationCategory::ALL {
            std::fs::write(root_path.join(category.file_name()), category.embedded())
                .expect("Failed to write resource file");
        }
        Self { temp_dir, root_path }
    }

    /// Replace one category file with custom content
    pub fn write_category(&self, category: AbbreviationCategory, content: &str) -> PathBuf {
        let path = self.root_path.join(category.file_name());
        std::fs::write(&path, content).expect("Failed to write resource file");
        path
    }

    pub fn remove_category(&self, category: AbbreviationCategory) {
        std::fs::remove_file(self.root_path.join(category.file_name()))
            .expect("Failed to remove resource file");
    }

    pub fn path(&self) -> &Path {
        &self.root_path
    }
}
