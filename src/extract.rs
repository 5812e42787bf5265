//! Submission form extraction
//!
//! Turns a Markdown issue body into a map of `### Title` sections, then picks
//! the five form fields out of that map.

use crate::config::FormLabels;
use crate::types::Candidate;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Section title -> section content, both trimmed
pub type SectionMap = HashMap<String, String>;

const HEADING_MARKER: &str = "###";

/// Heading at the start of the haystack: marker, title line, newline.
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^###\s*(.*?)\s*\n").expect("hardcoded heading pattern is valid")
});

/// Split an issue body into its `###` sections
///
/// Each section runs from the end of its title line up to the next `###`
/// (wherever it appears) or the end of the text. Text before the first
/// heading is ignored, and a marker without a newline after it does not open
/// a section. When a title repeats, the later section replaces the earlier.
///
/// Never fails: any input yields a (possibly empty) map.
pub fn parse_sections(body: &str) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut pos = 0;

    while let Some(offset) = body[pos..].find(HEADING_MARKER) {
        let at = pos + offset;

        let Some(caps) = HEADING.captures(&body[at..]) else {
            // Not a heading here; resume one byte on so "####" still matches
            pos = at + 1;
            continue;
        };

        let title = caps.get(1).map_or("", |m| m.as_str()).trim();
        let content_start = at + caps.get(0).map_or(0, |m| m.end());
        let content_end = body[content_start..]
            .find(HEADING_MARKER)
            .map_or(body.len(), |i| content_start + i);

        let content = body[content_start..content_end].trim();
        sections.insert(title.to_string(), content.to_string());

        pos = content_end;
    }

    sections
}

/// Extract the submission form fields from an issue body
///
/// A label that has no matching section yields `None`.
pub fn extract_candidate(body: &str, labels: &FormLabels) -> Candidate {
    let mut sections = parse_sections(body);

    Candidate {
        name: sections.remove(&labels.name),
        link: sections.remove(&labels.link),
        avatar: sections.remove(&labels.avatar),
        descr: sections.remove(&labels.descr),
        screenshot: sections.remove(&labels.screenshot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormTemplate;

    const ALICE: &str = "### blog name\nAlice's Blog\n### blog URL\nhttps://alice.example\n### blog icon\nhttps://alice.example/avatar.png\n### blog description\nThoughts on distributed systems.\n";

    #[test]
    fn test_parse_sections_basic() {
        let sections = parse_sections(ALICE);
        assert_eq!(sections.len(), 4);
        assert_eq!(sections["blog name"], "Alice's Blog");
        assert_eq!(sections["blog URL"], "https://alice.example");
        assert_eq!(sections["blog description"], "Thoughts on distributed systems.");
    }

    #[test]
    fn test_parse_sections_trims_blank_lines() {
        let body = "###   blog name   \r\n\n\n  Alice's Blog  \n\n\n### blog URL\n\nhttps://alice.example\n\n";
        let sections = parse_sections(body);
        assert_eq!(sections["blog name"], "Alice's Blog");
        assert_eq!(sections["blog URL"], "https://alice.example");
    }

    #[test]
    fn test_parse_sections_keeps_multiline_content() {
        let body = "### blog description\nline one\n\nline two\n";
        let sections = parse_sections(body);
        assert_eq!(sections["blog description"], "line one\n\nline two");
    }

    #[test]
    fn test_parse_sections_ignores_preamble() {
        let body = "Please add me!\n\n### blog name\nAlice";
        let sections = parse_sections(body);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections["blog name"], "Alice");
    }

    #[test]
    fn test_parse_sections_last_duplicate_wins() {
        let body = "### blog name\nFirst\n### blog name\nSecond\n";
        let sections = parse_sections(body);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections["blog name"], "Second");
    }

    #[test]
    fn test_parse_sections_is_total() {
        assert!(parse_sections("").is_empty());
        assert!(parse_sections("no headings here at all").is_empty());
        assert!(parse_sections("###").is_empty());
        assert!(parse_sections("### dangling title").is_empty());
        assert!(parse_sections("## h2 only\ntext").is_empty());
    }

    #[test]
    fn test_parse_sections_heading_without_body() {
        let sections = parse_sections("### blog name\n");
        assert_eq!(sections["blog name"], "");
    }

    #[test]
    fn test_parse_sections_four_hashes() {
        let sections = parse_sections("#### blog name\nAlice\n");
        assert_eq!(sections["# blog name"], "Alice");
    }

    #[test]
    fn test_parse_sections_content_stops_at_inline_marker() {
        let sections = parse_sections("### blog name\nAlice ### not a title\n");
        assert_eq!(sections["blog name"], "Alice");
        assert_eq!(sections["not a title"], "");
    }

    #[test]
    fn test_extract_candidate_full() {
        let labels = FormTemplate::english().labels;
        let body = format!("{ALICE}### blog homepage screenshot\nhttps://alice.example/shot.png\n");
        let candidate = extract_candidate(&body, &labels);

        assert_eq!(candidate.name.as_deref(), Some("Alice's Blog"));
        assert_eq!(candidate.link.as_deref(), Some("https://alice.example"));
        assert_eq!(
            candidate.avatar.as_deref(),
            Some("https://alice.example/avatar.png")
        );
        assert_eq!(
            candidate.descr.as_deref(),
            Some("Thoughts on distributed systems.")
        );
        assert_eq!(
            candidate.screenshot.as_deref(),
            Some("https://alice.example/shot.png")
        );
    }

    #[test]
    fn test_extract_candidate_missing_is_none_not_empty() {
        let labels = FormTemplate::english().labels;
        let candidate = extract_candidate("### blog name\n\n### blog URL\nhttps://x\n", &labels);

        assert_eq!(candidate.name.as_deref(), Some(""));
        assert_eq!(candidate.avatar, None);
        assert_eq!(candidate.screenshot, None);
    }

    #[test]
    fn test_extract_candidate_chinese_form() {
        let labels = FormTemplate::chinese().labels;
        let body = "### 博客名称\n小明的博客\n### 博客地址\nhttps://xm.example\n### 博客图标\nhttps://xm.example/a.png\n### 博客描述\n记录生活\n";
        let candidate = extract_candidate(body, &labels);

        assert_eq!(candidate.name.as_deref(), Some("小明的博客"));
        assert_eq!(candidate.descr.as_deref(), Some("记录生活"));
        assert_eq!(candidate.screenshot, None);
    }
}
