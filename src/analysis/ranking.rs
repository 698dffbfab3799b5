use crate::models::LearnerRecord;

pub struct GrowthRanker {
    top_count: usize,
}

impl GrowthRanker {
    pub fn new(top_count: usize) -> Self {
        Self { top_count }
    }

    /// Sorts descending by growth score and keeps the top slice. The sort is
    /// stable, so learners with equal scores keep their enumeration order.
    pub fn select(&self, mut learners: Vec<LearnerRecord>) -> Vec<LearnerRecord> {
        learners.sort_by(|a, b| b.growth_score.cmp(&a.growth_score));
        learners.truncate(self.top_count);
        learners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NarrativeSummary;
    use std::collections::BTreeMap;

    fn learner(id: &str, growth_score: i32) -> LearnerRecord {
        LearnerRecord {
            id: id.to_string(),
            growth_score,
            stats: BTreeMap::new(),
            story: NarrativeSummary::default(),
        }
    }

    fn ids(learners: &[LearnerRecord]) -> Vec<&str> {
        learners.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_descending_with_stable_ties() {
        let ranker = GrowthRanker::new(5);
        let selected = ranker.select(vec![learner("a", 3), learner("b", 7), learner("c", 7)]);
        assert_eq!(ids(&selected), ["b", "c", "a"]);
    }

    #[test]
    fn test_truncates_to_top_count() {
        let ranker = GrowthRanker::new(2);
        let selected = ranker.select(vec![
            learner("a", 1),
            learner("b", 4),
            learner("c", 3),
            learner("d", 2),
        ]);
        assert_eq!(ids(&selected), ["b", "c"]);
    }

    #[test]
    fn test_shorter_list_passes_through() {
        let ranker = GrowthRanker::new(5);
        let selected = ranker.select(vec![learner("a", -2), learner("b", 0)]);
        assert_eq!(ids(&selected), ["b", "a"]);
    }

    #[test]
    fn test_empty_list() {
        let ranker = GrowthRanker::new(5);
        assert!(ranker.select(Vec::new()).is_empty());
    }
}
