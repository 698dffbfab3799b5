/// Returns the body of the section introduced by `heading`: everything from
/// the line after the heading up to the next `##` heading or the end of the
/// document. `None` when the heading is absent.
pub fn extract_section(document: &str, heading: &str) -> Option<String> {
    let mut lines = document.lines();

    lines.by_ref().find(|line| line.trim_end() == heading)?;

    let body: Vec<&str> = lines.take_while(|line| !line.starts_with("##")).collect();

    Some(body.join("\n").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_bounded_by_next_heading() {
        let doc = "# Report\n\n## Target\nline one\nline two\n\n## Next\nother";
        let body = extract_section(doc, "## Target").unwrap();
        assert_eq!(body, "line one\nline two");
    }

    #[test]
    fn test_section_runs_to_end_of_document() {
        let doc = "## Target\nonly line\n";
        let body = extract_section(doc, "## Target").unwrap();
        assert_eq!(body, "only line");
    }

    #[test]
    fn test_missing_heading() {
        let doc = "# Report\n\n## Other\ncontent\n";
        assert!(extract_section(doc, "## Target").is_none());
    }

    #[test]
    fn test_heading_with_trailing_whitespace() {
        let doc = "## Target  \ncontent\n";
        let body = extract_section(doc, "## Target").unwrap();
        assert_eq!(body, "content");
    }

    #[test]
    fn test_empty_section_body() {
        let doc = "## Target\n## Next\ncontent\n";
        assert_eq!(extract_section(doc, "## Target").unwrap(), "");
    }
}
