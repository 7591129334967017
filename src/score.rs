/// Persistent top-5 high-score table.
///
/// Stored as a flat `NAME|SCORE` text file, one entry per line, rewritten
/// in full on every insertion and at shutdown.  Malformed lines (wrong
/// name length, non-numeric score) are silently skipped on load.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub const TABLE_CAPACITY: usize = 5;
pub const NAME_LENGTH: usize = 3;

const DELIMITER: char = '|';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

/// Entries stay sorted descending by score; never more than
/// `TABLE_CAPACITY` of them.
#[derive(Default)]
pub struct HighScoreTable {
    entries: Vec<ScoreEntry>,
}

pub fn is_valid_name(name: &str) -> bool {
    name.chars().count() == NAME_LENGTH
}

fn is_valid_number(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

impl HighScoreTable {
    pub fn new() -> Self {
        HighScoreTable {
            entries: Vec::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Insertion index keeping the table sorted descending, or `None`
    /// when the score ranks below a full table (or is zero).
    pub fn position_for(&self, score: u32) -> Option<usize> {
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.score < score {
                return Some(i);
            }
        }

        if score > 0 && self.entries.len() < TABLE_CAPACITY {
            return Some(self.entries.len());
        }

        None
    }

    pub fn is_eligible(&self, score: u32) -> bool {
        self.position_for(score).is_some()
    }

    /// Inserts in sorted position, dropping the lowest entry when full.
    /// Ineligible scores are a silent no-op.
    pub fn save_score(&mut self, name: &str, score: u32) -> bool {
        let Some(index) = self.position_for(score) else {
            return false;
        };

        self.entries.insert(
            index,
            ScoreEntry {
                name: name.to_string(),
                score,
            },
        );
        self.entries.truncate(TABLE_CAPACITY);

        true
    }

    pub fn highest(&self) -> u32 {
        self.entries.first().map(|e| e.score).unwrap_or(0)
    }

    pub fn load(path: &Path) -> Self {
        let mut table = HighScoreTable::new();

        let Ok(contents) = fs::read_to_string(path) else {
            return table;
        };

        for line in contents.lines().take(TABLE_CAPACITY) {
            let mut parts = line.splitn(2, DELIMITER);
            let name = parts.next().unwrap_or("");
            let score = parts.next().unwrap_or("").trim_end();

            if is_valid_name(name) && is_valid_number(score) {
                if let Ok(score) = score.parse() {
                    table.save_score(name, score);
                }
            }
        }

        table
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut file = fs::File::create(path)?;

        for entry in &self.entries {
            writeln!(file, "{}{}{}", entry.name, DELIMITER, entry.score)?;
        }

        Ok(())
    }
}
