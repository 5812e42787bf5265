//! Runtime configuration
//!
//! Everything the pipeline needs is carried in [`TriageConfig`], built once at
//! startup and passed down explicitly.

use crate::error::{Error, Result};
use crate::types::RepoConfig;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default registry location inside a Hexo site
pub const DEFAULT_REGISTRY_PATH: &str = "source/_data/link.yml";

/// Default title of the category that receives new links
pub const DEFAULT_CATEGORY: &str = "Friends";

/// Section titles used by the issue form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLabels {
    /// Label of the blog name section
    pub name: String,
    /// Label of the blog URL section
    pub link: String,
    /// Label of the blog icon section
    pub avatar: String,
    /// Label of the blog description section
    pub descr: String,
    /// Label of the optional homepage screenshot section
    pub screenshot: String,
}

/// Comment text posted back on processed issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notices {
    /// Posted when the submission is added to the registry
    pub accepted: String,
    /// Posted when the submission is missing required fields
    pub rejected: String,
}

/// A localised issue form: the labels to look for and the replies to post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTemplate {
    /// Field section labels
    pub labels: FormLabels,
    /// Reply texts
    pub notices: Notices,
}

impl FormTemplate {
    /// English issue form
    pub fn english() -> Self {
        Self {
            labels: FormLabels {
                name: "blog name".to_string(),
                link: "blog URL".to_string(),
                avatar: "blog icon".to_string(),
                descr: "blog description".to_string(),
                screenshot: "blog homepage screenshot".to_string(),
            },
            notices: Notices {
                accepted: "Thanks for your friend-link request! Your blog has been added to the blogroll.".to_string(),
                rejected: "Sorry, your friend-link request is missing required information. Please complete the form and submit it again.".to_string(),
            },
        }
    }

    /// Chinese issue form
    pub fn chinese() -> Self {
        Self {
            labels: FormLabels {
                name: "博客名称".to_string(),
                link: "博客地址".to_string(),
                avatar: "博客图标".to_string(),
                descr: "博客描述".to_string(),
                screenshot: "博客首页".to_string(),
            },
            notices: Notices {
                accepted: "感谢您的友链申请！您的信息已被添加到我的博客。".to_string(),
                rejected: "很抱歉，您的友链申请缺少必要信息，请补全后重新提交。".to_string(),
            },
        }
    }
}

impl Default for FormTemplate {
    fn default() -> Self {
        Self::english()
    }
}

impl FromStr for FormTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::english()),
            "zh" | "chinese" => Ok(Self::chinese()),
            other => Err(Error::Config(format!(
                "unknown form template '{other}' (expected 'en' or 'zh')"
            ))),
        }
    }
}

/// How the registry category that receives new links is located
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelector {
    /// Category whose title matches
    Name(String),
    /// Category at a fixed zero-based position
    Index(usize),
}

impl Default for CategorySelector {
    fn default() -> Self {
        Self::Name(DEFAULT_CATEGORY.to_string())
    }
}

impl FromStr for CategorySelector {
    type Err = Error;

    /// Parses `index:N` as a position, anything else as a title
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::Config("category must not be empty".to_string()));
        }

        match s.strip_prefix("index:") {
            Some(idx) => idx
                .trim()
                .parse()
                .map(Self::Index)
                .map_err(|_| Error::Config(format!("invalid category index: {idx}"))),
            None => Ok(Self::Name(s.to_string())),
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "'{name}'"),
            Self::Index(idx) => write!(f, "index {idx}"),
        }
    }
}

/// Configuration for one triage run
#[derive(Debug, Clone)]
pub struct TriageConfig {
    /// Repository whose issues are triaged
    pub repo: RepoConfig,
    /// Path of the YAML link registry
    pub registry_path: PathBuf,
    /// Category receiving accepted links
    pub category: CategorySelector,
    /// Issue form labels and reply texts
    pub template: FormTemplate,
    /// Decide only; no comments, closes or registry writes
    pub dry_run: bool,
}
