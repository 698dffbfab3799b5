use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::narrative::NarrativeSummary;
use super::skill::SkillEntry;

/// One qualifying learner: both reports existed and parsed non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnerRecord {
    pub id: String,
    pub growth_score: i32,
    pub stats: BTreeMap<String, SkillEntry>,
    pub story: NarrativeSummary,
}
