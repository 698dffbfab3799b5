use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub before: String,
    pub after: String,
    pub growth: i32,
}

#[derive(Debug, Clone, Default)]
pub struct AbilityRecord {
    pub stats: BTreeMap<String, SkillEntry>,
    pub total_growth: i32,
}

impl AbilityRecord {
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
