//! Test data factories for friend-links types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use friend_links::config::{CategorySelector, FormTemplate, TriageConfig};
use friend_links::types::{Issue, RepoConfig};
use std::path::Path;

/// Registry with the friends category at position 2
pub const REGISTRY_YAML: &str = r"- class_name: Tools
  class_desc: Things I use
  link_list:
    - name: Hexo
      link: https://hexo.io/
      avatar: https://hexo.io/icon.png
      descr: Blog framework
- class_name: Mentors
  link_list: []
- class_name: Friends
  class_desc: People I read
  link_list:
    - name: Bob
      link: https://bob.example
      avatar: https://bob.example/a.png
      descr: Bob writes
";

/// Issue body with every required section
pub const ALICE_BODY: &str = "### blog name
Alice's Blog
### blog URL
https://alice.example
### blog icon
https://alice.example/avatar.png
### blog description
Thoughts on distributed systems.
";

/// Issue body without the icon section
pub const ALICE_NO_ICON_BODY: &str = "### blog name
Alice's Blog
### blog URL
https://alice.example
### blog description
Thoughts on distributed systems.
";

/// Build a complete form body for a named blog
pub fn form_body(name: &str) -> String {
    let slug = name.to_lowercase();
    format!(
        "### blog name\n{name}\n### blog URL\nhttps://{slug}.example\n### blog icon\nhttps://{slug}.example/icon.png\n### blog description\n{name} writes things\n"
    )
}

/// Create an open issue
pub fn make_issue(number: u64, body: Option<&str>) -> Issue {
    Issue {
        number,
        body: body.map(ToString::to_string),
        html_url: format!("https://github.com/testowner/testrepo/issues/{number}"),
        created_at: Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 6, 2, 9, 0, 0).unwrap(),
        state: "open".to_string(),
    }
}

/// Repository config for tests
pub fn repo_config() -> RepoConfig {
    RepoConfig {
        owner: "testowner".to_string(),
        repo: "testrepo".to_string(),
        host: None,
    }
}

/// Triage config writing to the Friends category of `registry_path`
pub fn triage_config(registry_path: &Path) -> TriageConfig {
    TriageConfig {
        repo: repo_config(),
        registry_path: registry_path.to_path_buf(),
        category: CategorySelector::Name("Friends".to_string()),
        template: FormTemplate::english(),
        dry_run: false,
    }
}
