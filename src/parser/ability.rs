use std::collections::BTreeMap;

use crate::models::{AbilityRecord, SkillEntry};
use crate::rating::{is_classification, RatingScale};

use super::section::extract_section;

pub const ABILITY_HEADING: &str = "## Before/After ハイライト";

pub struct AbilityParser {
    scale: RatingScale,
}

impl AbilityParser {
    pub fn new() -> Self {
        Self {
            scale: RatingScale::new(),
        }
    }

    /// Parses the before/after skills section of one ability report.
    /// Returns `None` when the heading is absent or no line in the section
    /// has the accepted shape; such reports disqualify the learner.
    pub fn parse(&self, document: &str) -> Option<AbilityRecord> {
        let section = extract_section(document, ABILITY_HEADING)?;

        let mut stats = BTreeMap::new();
        let mut total_growth = 0;

        for line in section.lines() {
            let Some((label, entry)) = self.parse_line(line) else {
                continue;
            };
            // Duplicate labels overwrite, but every occurrence still counts
            // toward the total.
            total_growth += entry.growth;
            stats.insert(label, entry);
        }

        let record = AbilityRecord {
            stats,
            total_growth,
        };

        if record.is_empty() {
            return None;
        }

        Some(record)
    }

    // Accepted shape: `- <label>: <before> → <after>`. Anything else is
    // ignored.
    fn parse_line(&self, line: &str) -> Option<(String, SkillEntry)> {
        let (raw_label, values) = line.split_once(':')?;
        let (before, after) = values.split_once('→')?;

        let label = raw_label.trim_matches(|c| c == '-' || c == ' ').to_string();
        let before = before.trim();
        let after = after.trim();

        // A role classification marks a category, not a level; a delta
        // between categories is meaningless.
        let growth = if is_classification(before) || is_classification(after) {
            0
        } else {
            self.scale.score(after) - self.scale.score(before)
        };

        Some((
            label,
            SkillEntry {
                before: before.to_string(),
                after: after.to_string(),
                growth,
            },
        ))
    }
}

impl Default for AbilityParser {
    fn default() -> Self {
        Self::new()
    }
}
