use std::collections::HashMap;

/// Marks a rating value as a role classification rather than a proficiency
/// level. Classification values never contribute growth.
pub const CLASSIFICATION_MARKER: &str = "型";

const RATING_TABLE: &[(&str, i32)] = &[
    ("なし", 1),
    ("あまり自信がない", 1),
    ("あまりそう思わない", 1),
    ("あまり明確でない", 1),
    ("不安／苦手", 1),
    ("未提出", 0),
    ("個人で少しだけ", 2),
    ("どちらとも言えない", 3),
    ("やや自信がある", 4),
    ("ややそう思う", 4),
    ("自信がある", 5),
    ("とてもそう思う", 5),
    ("明確", 5),
    ("得意", 5),
    // Role classifications score 0 and are excluded from growth arithmetic
    // by the marker check.
    ("サポート型", 0),
    ("アイデア型", 0),
    ("リーダー型", 0),
];

pub struct RatingScale {
    scores: HashMap<&'static str, i32>,
}

impl RatingScale {
    pub fn new() -> Self {
        Self {
            scores: RATING_TABLE.iter().copied().collect(),
        }
    }

    /// Score in [0, 5] for a rating label. Unknown labels score 0.
    pub fn score(&self, label: &str) -> i32 {
        self.scores.get(label).copied().unwrap_or(0)
    }
}

impl Default for RatingScale {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_classification(value: &str) -> bool {
    value.contains(CLASSIFICATION_MARKER)
}
