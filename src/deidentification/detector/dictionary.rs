//! Dictionary-based name detector
//!
//! A deliberately simple baseline: a token is a name when it appears in a
//! first-name dictionary and is capitalised in the source text. Swap the
//! [`NameSource`] (or the whole detector) for an NER model in production.

use super::PhiDetector;
use crate::deidentification::models::{DetectedSpan, PhiCategory};
use crate::domain::{Result, ScrubError};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Confidence reported for dictionary name matches
pub const NAME_CONFIDENCE: f32 = 0.60;

const COMMON_FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Christopher", "Nancy", "Daniel", "Lisa", "Matthew", "Betty", "Anthony",
    "Margaret", "Mark", "Sandra", "Donald", "Ashley", "Steven", "Kimberly", "Paul", "Emily",
    "Andrew", "Donna", "Joshua", "Michelle", "Kenneth", "Dorothy", "Kevin", "Carol", "Brian",
    "Amanda", "George", "Melissa", "Timothy", "Deborah", "Ronald", "Stephanie", "Edward",
    "Rebecca", "Jason", "Sharon", "Jeffrey", "Laura", "Ryan", "Cynthia", "Jacob", "Kathleen",
    "Gary", "Amy", "Nicholas", "Shirley", "Eric", "Angela", "Jonathan", "Helen", "Stephen",
    "Anna", "Larry", "Brenda", "Justin", "Pamela", "Scott", "Nicole", "Brandon", "Samantha",
    "Frank", "Katherine", "Benjamin", "Emma", "Gregory", "Ruth", "Samuel", "Christine",
    "Patrick", "Catherine", "Alexander", "Debra", "Jack", "Rachel", "Dennis", "Carolyn", "Jerry",
    "Janet", "Tyler", "Maria", "Jane", "Peter", "Alice", "Henry", "Olivia", "Sophia", "Noah",
    "Liam", "Ethan", "Mia", "Ava", "Isabella", "Lucas", "Grace",
];

/// Source of known first names
///
/// Lookups are case-insensitive. Implementations must be cheap to query and
/// safe to share across threads.
pub trait NameSource: Send + Sync {
    /// Whether `word` is a known name
    fn contains(&self, word: &str) -> bool;

    /// Number of names known to the source
    fn len(&self) -> usize;

    /// True when the source knows no names
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory set of first names, stored lower-cased
#[derive(Debug, Clone, Default)]
pub struct NameDictionary {
    names: HashSet<String>,
}

impl NameDictionary {
    /// Dictionary of common English first names
    pub fn common_first_names() -> Self {
        Self::from_names(COMMON_FIRST_NAMES.iter().copied())
    }

    /// Build a dictionary from any iterator of names
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        dictionary.extend(names);
        dictionary
    }

    /// Load a dictionary file with one name per line
    ///
    /// Blank lines and lines starting with `#` are ignored.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScrubError::Dictionary(format!(
                "Failed to read name dictionary {}: {e}",
                path.display()
            ))
        })?;

        let dictionary = Self::from_names(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        );

        if dictionary.names.is_empty() {
            return Err(ScrubError::Dictionary(format!(
                "Name dictionary {} contains no names",
                path.display()
            )));
        }

        Ok(dictionary)
    }

    /// Add names to the dictionary
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.names.extend(
            names
                .into_iter()
                .map(|n| n.as_ref().trim().to_lowercase())
                .filter(|n| !n.is_empty()),
        );
    }
}

impl NameSource for NameDictionary {
    fn contains(&self, word: &str) -> bool {
        self.names.contains(&word.to_lowercase())
    }

    fn len(&self) -> usize {
        self.names.len()
    }
}

/// Detects capitalised dictionary names
pub struct NameDetector {
    source: Arc<dyn NameSource>,
    replacement: String,
}

impl NameDetector {
    /// Create a detector backed by `source`
    pub fn new(source: Arc<dyn NameSource>) -> Self {
        Self {
            source,
            replacement: PhiCategory::Name.default_replacement().to_string(),
        }
    }

    /// Override the replacement token
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = replacement.into();
        self
    }

    fn is_separator(c: char) -> bool {
        c.is_whitespace()
            || matches!(
                c,
                ',' | '.' | ';' | ':' | '!' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '"'
                    | '\'' | '/' | '-' | '@'
            )
    }

    fn starts_uppercase(token: &str) -> bool {
        token.chars().next().is_some_and(char::is_uppercase)
    }
}

impl Default for NameDetector {
    fn default() -> Self {
        Self::new(Arc::new(NameDictionary::common_first_names()))
    }
}

impl std::fmt::Debug for NameDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameDetector")
            .field("names", &self.source.len())
            .field("replacement", &self.replacement)
            .finish()
    }
}

impl PhiDetector for NameDetector {
    fn category(&self) -> PhiCategory {
        PhiCategory::Name
    }

    fn confidence(&self) -> f32 {
        NAME_CONFIDENCE
    }

    /// Each qualifying token is located at its first occurrence in `text`.
    /// That occurrence is skipped when a span already collected in this scan
    /// (from a higher-priority detector or an earlier name) fully covers it.
    fn detect(&self, text: &str, claimed: &[DetectedSpan]) -> Vec<DetectedSpan> {
        let mut spans: Vec<DetectedSpan> = Vec::new();

        for token in text.split(Self::is_separator).filter(|t| !t.is_empty()) {
            if !Self::starts_uppercase(token) || !self.source.contains(token) {
                continue;
            }

            let Some(start) = text.find(token) else {
                continue;
            };
            let end = start + token.len();

            let covered = claimed
                .iter()
                .chain(spans.iter())
                .any(|span| span.covers(start, end));
            if covered {
                continue;
            }

            spans.push(DetectedSpan::new(
                PhiCategory::Name,
                text,
                start,
                end,
                NAME_CONFIDENCE,
                self.replacement.as_str(),
            ));
        }

        spans
    }
}
