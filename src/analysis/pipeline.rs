use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{Config, REPORT_EXTENSION};
use crate::error::Result;
use crate::models::LearnerRecord;
use crate::parser::{AbilityParser, ProcessParser};

use super::ranking::GrowthRanker;

#[derive(Debug, Clone)]
pub struct GrowthReport {
    /// Learners that had both reports and parsed non-empty.
    pub total_qualifying: usize,
    /// Top slice after ranking, at most the configured count.
    pub selected: Vec<LearnerRecord>,
}

impl GrowthReport {
    /// Writes the selected learners as pretty-printed JSON: two-space
    /// indentation, non-ASCII text emitted literally.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.selected)?;
        fs::write(path, json)?;
        Ok(())
    }
}

pub struct AnalysisPipeline {
    ability_parser: AbilityParser,
    process_parser: ProcessParser,
    ranker: GrowthRanker,
    config: Config,
}

impl AnalysisPipeline {
    pub fn new(config: Config) -> Self {
        let ranker = GrowthRanker::new(config.top_count);
        Self {
            ability_parser: AbilityParser::new(),
            process_parser: ProcessParser::new(),
            ranker,
            config,
        }
    }

    pub fn run(&self) -> Result<GrowthReport> {
        // Step 1: enumerate learners from the ability directory
        let learner_ids = self.enumerate_learners()?;
        tracing::info!("Found {} ability reports to analyze", learner_ids.len());

        let pb = ProgressBar::new(learner_ids.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} learners")
                .unwrap()
                .progress_chars("#>-"),
        );

        // Step 2: join each ability report with its process counterpart
        let mut learners = Vec::new();
        for id in &learner_ids {
            if let Some(record) = self.analyze_learner(id)? {
                learners.push(record);
            }
            pb.inc(1);
        }
        pb.finish_with_message("Parsed all reports");

        let total_qualifying = learners.len();

        // Step 3: rank by growth score and keep the top slice
        let selected = self.ranker.select(learners);

        Ok(GrowthReport {
            total_qualifying,
            selected,
        })
    }

    /// Ids of learners with an ability report, in lexicographic order so
    /// equal-score ranking ties are reproducible across filesystems.
    fn enumerate_learners(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();

        for entry in fs::read_dir(&self.config.ability_dir)? {
            let path = entry?.path();

            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(REPORT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }

        ids.sort();
        Ok(ids)
    }

    // Returns Ok(None) when the learner does not qualify: missing process
    // report, or either document parsed empty. Read failures propagate and
    // abort the run.
    fn analyze_learner(&self, id: &str) -> Result<Option<LearnerRecord>> {
        let ability_path = self.report_path(&self.config.ability_dir, id);
        let process_path = self.report_path(&self.config.process_dir, id);

        if !process_path.exists() {
            tracing::debug!("Skipping {}: no process report", id);
            return Ok(None);
        }

        let ability_doc = fs::read_to_string(&ability_path)?;
        let process_doc = fs::read_to_string(&process_path)?;

        let Some(ability) = self.ability_parser.parse(&ability_doc) else {
            tracing::debug!("Skipping {}: ability report parsed empty", id);
            return Ok(None);
        };
        let Some(story) = self.process_parser.parse(&process_doc) else {
            tracing::debug!("Skipping {}: process report parsed empty", id);
            return Ok(None);
        };

        Ok(Some(LearnerRecord {
            id: id.to_string(),
            growth_score: ability.total_growth,
            stats: ability.stats,
            story,
        }))
    }

    fn report_path(&self, dir: &Path, id: &str) -> PathBuf {
        dir.join(format!("{}.{}", id, REPORT_EXTENSION))
    }
}
