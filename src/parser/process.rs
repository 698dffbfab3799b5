use crate::models::NarrativeSummary;

use super::section::extract_section;

pub const PROCESS_HEADING: &str = "## 起承転結サマリー";

const KI_MARKER: &str = "- 起:";
const SHO_MARKER: &str = "- 承:";
const TEN_MARKER: &str = "- 転:";
const KETSU_MARKER: &str = "- 結:";

pub struct ProcessParser;

impl ProcessParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses the four-act summary of one process report. Acts whose marker
    /// never appears stay absent. Returns `None` when the heading is absent
    /// or no act matched; such reports disqualify the learner.
    pub fn parse(&self, document: &str) -> Option<NarrativeSummary> {
        let section = extract_section(document, PROCESS_HEADING)?;

        let mut summary = NarrativeSummary::default();

        for line in section.lines() {
            if let Some(text) = line.strip_prefix(KI_MARKER) {
                summary.ki = Some(text.trim().to_string());
            } else if let Some(text) = line.strip_prefix(SHO_MARKER) {
                summary.sho = Some(text.trim().to_string());
            } else if let Some(text) = line.strip_prefix(TEN_MARKER) {
                summary.ten = Some(text.trim().to_string());
            } else if let Some(text) = line.strip_prefix(KETSU_MARKER) {
                summary.ketsu = Some(text.trim().to_string());
            }
        }

        if summary.is_empty() {
            return None;
        }

        Some(summary)
    }
}

impl Default for ProcessParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_parse_all_four_acts() {
        let doc = indoc! {"
            # 制作プロセス

            ## 起承転結サマリー
            - 起: テーマ選びに迷った
            - 承: 毎週少しずつ実装を進めた
            - 転: 発表直前に仕様を変えた
            - 結: 完成して発表できた

            ## 感想
            楽しかった。
        "};

        let summary = ProcessParser::new().parse(doc).unwrap();
        assert_eq!(summary.ki.as_deref(), Some("テーマ選びに迷った"));
        assert_eq!(summary.sho.as_deref(), Some("毎週少しずつ実装を進めた"));
        assert_eq!(summary.ten.as_deref(), Some("発表直前に仕様を変えた"));
        assert_eq!(summary.ketsu.as_deref(), Some("完成して発表できた"));
    }

    #[test]
    fn test_missing_acts_stay_absent() {
        let doc = "## 起承転結サマリー\n- 起: 始まり\n- 結: 終わり\n";
        let summary = ProcessParser::new().parse(doc).unwrap();
        assert!(summary.ki.is_some());
        assert!(summary.sho.is_none());
        assert!(summary.ten.is_none());
        assert!(summary.ketsu.is_some());
    }

    #[test]
    fn test_unrecognized_lines_ignored() {
        let doc = indoc! {"
            ## 起承転結サマリー
            メモ書き
            - 起: 始まり
            - 補足: これは無視される
        "};
        let summary = ProcessParser::new().parse(doc).unwrap();
        assert_eq!(summary.ki.as_deref(), Some("始まり"));
        assert!(summary.sho.is_none());
    }

    #[test]
    fn test_missing_heading_yields_none() {
        let doc = "# レポート\n- 起: 始まり\n";
        assert!(ProcessParser::new().parse(doc).is_none());
    }

    #[test]
    fn test_no_matching_acts_yields_none() {
        let doc = "## 起承転結サマリー\nマーカーのない行だけ\n";
        assert!(ProcessParser::new().parse(doc).is_none());
    }
}
