// WHY: Legal abbreviations ("Fed.", "Civ.", "Cal.") defeat naive period splitting
// Built-in word lists are embedded at compile time; a directory bundle can replace them

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

/// Characters stripped from a word before abbreviation lookup (every occurrence, not just edges)
pub const STRIPPED_CHARS: &[char] = &[')', '(', '"', '\u{201D}', '-', '\u{2019}'];

/// Named categories of built-in abbreviations, one resource file each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbbreviationCategory {
    CaseNames,
    CourtDocuments,
    CourtNames,
    GeographicalTerms,
    JudgesAndOfficials,
    LegislativeDocs,
    Months,
    Periodicals,
    PublishingTerms,
    Services,
    Subdivisions,
}

impl AbbreviationCategory {
    /// All categories in load order
    pub const ALL: [AbbreviationCategory; 11] = [
        AbbreviationCategory::CaseNames,
        AbbreviationCategory::CourtDocuments,
        AbbreviationCategory::CourtNames,
        AbbreviationCategory::GeographicalTerms,
        AbbreviationCategory::JudgesAndOfficials,
        AbbreviationCategory::LegislativeDocs,
        AbbreviationCategory::Months,
        AbbreviationCategory::Periodicals,
        AbbreviationCategory::PublishingTerms,
        AbbreviationCategory::Services,
        AbbreviationCategory::Subdivisions,
    ];

    /// Resource file name for this category
    pub fn file_name(self) -> &'static str {
        match self {
            AbbreviationCategory::CaseNames => "case_names.txt",
            AbbreviationCategory::CourtDocuments => "court_documents.txt",
            AbbreviationCategory::CourtNames => "court_names.txt",
            AbbreviationCategory::GeographicalTerms => "geographical_terms.txt",
            AbbreviationCategory::JudgesAndOfficials => "judges_and_officials.txt",
            AbbreviationCategory::LegislativeDocs => "legislative_docs.txt",
            AbbreviationCategory::Months => "months.txt",
            AbbreviationCategory::Periodicals => "periodicals.txt",
            AbbreviationCategory::PublishingTerms => "publishing_terms.txt",
            AbbreviationCategory::Services => "services.txt",
            AbbreviationCategory::Subdivisions => "subdivisions.txt",
        }
    }

    /// Embedded resource contents, one abbreviation per line
    pub fn embedded(self) -> &'static str {
        match self {
            AbbreviationCategory::CaseNames => include_str!("../resources/abbreviations/case_names.txt"),
            AbbreviationCategory::CourtDocuments => include_str!("../resources/abbreviations/court_documents.txt"),
            AbbreviationCategory::CourtNames => include_str!("../resources/abbreviations/court_names.txt"),
            AbbreviationCategory::GeographicalTerms => include_str!("../resources/abbreviations/geographical_terms.txt"),
            AbbreviationCategory::JudgesAndOfficials => include_str!("../resources/abbreviations/judges_and_officials.txt"),
            AbbreviationCategory::LegislativeDocs => include_str!("../resources/abbreviations/legislative_docs.txt"),
            AbbreviationCategory::Months => include_str!("../resources/abbreviations/months.txt"),
            AbbreviationCategory::Periodicals => include_str!("../resources/abbreviations/periodicals.txt"),
            AbbreviationCategory::PublishingTerms => include_str!("../resources/abbreviations/publishing_terms.txt"),
            AbbreviationCategory::Services => include_str!("../resources/abbreviations/services.txt"),
            AbbreviationCategory::Subdivisions => include_str!("../resources/abbreviations/subdivisions.txt"),
        }
    }
}

/// Strip enclosing punctuation so `(Fed.` and `Fed.”` look up as `Fed.`
pub fn normalize_word(word: &str) -> Cow<'_, str> {
    if word.contains(STRIPPED_CHARS) {
        Cow::Owned(word.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect())
    } else {
        Cow::Borrowed(word)
    }
}

static BUILTIN: OnceLock<Arc<AbbreviationSet>> = OnceLock::new();

/// Immutable set of normalized words that end in a period without ending a sentence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbbreviationSet {
    entries: HashSet<String>,
}

impl AbbreviationSet {
    /// Override mode: the set is exactly the supplied entries
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::default().extend(entries)
    }

    /// Built-in categories, parsed once per process and shared
    pub fn builtin() -> Arc<AbbreviationSet> {
        BUILTIN
            .get_or_init(|| {
                let mut set = AbbreviationSet::default();
                for category in AbbreviationCategory::ALL {
                    let before = set.len();
                    set.insert_lines(category.embedded());
                    debug!(
                        category = category.file_name(),
                        added = set.len() - before,
                        "Loaded embedded abbreviation category"
                    );
                }
                info!(entries = set.len(), "Built-in abbreviation set ready");
                Arc::new(set)
            })
            .clone()
    }

    /// Load every named category file from `dir`
    /// WHY: a missing resource is a configuration error and must surface at construction time
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut set = AbbreviationSet::default();

        for category in AbbreviationCategory::ALL {
            let path = dir.join(category.file_name());
            let content = fs::read_to_string(&path).with_context(|| {
                format!(
                    "Failed to read abbreviation resource {} from {}",
                    category.file_name(),
                    path.display()
                )
            })?;
            let before = set.len();
            set.insert_lines(&content);
            debug!(path = %path.display(), added = set.len() - before, "Loaded abbreviation resource");
        }

        info!(dir = %dir.display(), entries = set.len(), "Abbreviation resources loaded");
        Ok(set)
    }

    /// Merge additional entries while the set is still being built
    pub fn extend<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            self.insert(entry.as_ref());
        }
        self
    }

    /// Membership after normalization; `Fed.` also matches a registered `Fed`
    pub fn contains(&self, word: &str) -> bool {
        let normalized = normalize_word(word);
        if self.entries.contains(&*normalized) {
            return true;
        }
        match normalized.strip_suffix('.') {
            Some(stem) if !stem.is_empty() => self.entries.contains(stem),
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    fn insert_lines(&mut self, content: &str) {
        for line in content.lines() {
            self.insert(line);
        }
    }

    // Blank entries are dropped so `contains("")` never holds
    fn insert(&mut self, entry: &str) {
        let normalized = normalize_word(entry.trim());
        if !normalized.is_empty() {
            self.entries.insert(normalized.into_owned());
        }
    }
}
