//! Provides the ranked-list data model and its text loader.
//!
//! A ranking is a plain text file with one entity identifier per line, as
//! written by the upstream scoring tools: only the first tab/whitespace
//! delimited field of each line is the identifier, and any trailing fields
//! (scores, annotations) are ignored. Order is significant and preserved
//! exactly as read; duplicates are permitted and never collapsed.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("I/O error while reading ranking: {0}")]
    Io(#[from] io::Error),

    #[error("Line {line} has no identifier field")]
    MissingIdentifier { line: usize },
}

/// An ordered list of entity identifiers, highest-ranked first.
///
/// Index 0 is the top-ranked entity. The list is immutable once loaded; the
/// null-model sampler shuffles *copies* of the identifiers, never the list
/// itself, so the ordering used for the observed statistic stays intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedList {
    ids: Vec<String>,
}

impl RankedList {
    /// Loads a ranking from a positional text file.
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::Io`] if the file cannot be read, or
    /// [`RankingError::MissingIdentifier`] if any line lacks an identifier
    /// field (a blank or all-whitespace line). No partial list is produced.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RankingError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads a ranking from a buffered reader, one identifier per line.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, RankingError> {
        let mut ids = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let id = line
                .split_whitespace()
                .next()
                .ok_or(RankingError::MissingIdentifier { line: index + 1 })?;
            ids.push(id.to_string());
        }
        Ok(Self { ids })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The identifiers in rank order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of distinct identifiers the two full lists have in common,
    /// disregarding order. This bounds how much overlap any pair of prefixes
    /// can ever achieve.
    pub fn shared_count(&self, other: &RankedList) -> usize {
        let mine: HashSet<&str> = self.ids.iter().map(String::as_str).collect();
        other
            .ids
            .iter()
            .map(String::as_str)
            .collect::<HashSet<&str>>()
            .intersection(&mine)
            .count()
    }
}

impl From<Vec<String>> for RankedList {
    fn from(ids: Vec<String>) -> Self {
        Self { ids }
    }
}

impl<'a> FromIterator<&'a str> for RankedList {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().map(str::to_string).collect(),
        }
    }
}
