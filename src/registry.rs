//! YAML link registry
//!
//! The registry is a sequence of categories, each a mapping with a title key
//! and a `link_list` of entries:
//!
//! ```yaml
//! - class_name: Friends
//!   class_desc: People I read
//!   link_list:
//!     - name: Alice's Blog
//!       link: https://alice.example
//! ```
//!
//! Categories are kept as raw YAML mappings so that everything this tool does
//! not understand (extra keys, key order, other categories) survives a merge.

use crate::config::CategorySelector;
use crate::error::{Error, Result};
use crate::types::Submission;
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info};

/// Keys that may hold a category's title, in lookup order
const TITLE_KEYS: [&str; 2] = ["class_name", "title"];

/// Key holding a category's entries
const LINK_LIST_KEY: &str = "link_list";

/// A line whose plain scalar value YAML 1.1 loaders (js-yaml included) read
/// as a timestamp: `2024-06-01`, `2024-06-01T08:00:00Z` and variants
static PLAIN_TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^([ \t]*(?:- )*(?:[^\s'#-][^\n]*?: )?)",
        r"(\d{4}-\d{2}-\d{2}",
        r"|\d{4}-\d{1,2}-\d{1,2}(?:[Tt]|[ \t]+)\d{1,2}:\d{2}:\d{2}(?:\.\d*)?",
        r"(?:[ \t]*(?:Z|[-+]\d{1,2}(?::\d{2})?))?)$",
    ))
    .expect("valid regex")
});

/// A line that opens a literal or folded block scalar
static BLOCK_SCALAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|: |- )[|>][0-9+-]*$").expect("valid regex"));

/// An in-memory copy of the registry file
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRegistry {
    path: PathBuf,
    categories: Vec<Mapping>,
}

impl LinkRegistry {
    /// Read and parse the registry at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::RegistryRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &text)
    }

    /// Parse registry text that belongs at `path`
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let parse_err = |message: String| Error::RegistryParse {
            path: path.to_path_buf(),
            message,
        };

        let document: Value = serde_yaml::from_str(text).map_err(|e| parse_err(e.to_string()))?;

        let Value::Sequence(items) = document else {
            return Err(parse_err(
                "expected a top-level sequence of categories".to_string(),
            ));
        };

        let categories = items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| match item {
                Value::Mapping(mapping) => Ok(mapping),
                _ => Err(parse_err(format!("category {idx} is not a mapping"))),
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Loaded registry {} with {} categories",
            path.display(),
            categories.len()
        );

        Ok(Self {
            path: path.to_path_buf(),
            categories,
        })
    }

    /// Where this registry is persisted
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw category mappings in file order
    pub fn categories(&self) -> &[Mapping] {
        &self.categories
    }

    /// Category titles in file order (None for untitled categories)
    pub fn category_titles(&self) -> Vec<Option<&str>> {
        self.categories.iter().map(category_title).collect()
    }

    /// Position of the category matching `selector`
    pub fn find_category(&self, selector: &CategorySelector) -> Result<usize> {
        let found = match selector {
            CategorySelector::Name(name) => self
                .categories
                .iter()
                .position(|c| category_title(c).is_some_and(|t| t.trim() == name.trim())),
            CategorySelector::Index(idx) => (*idx < self.categories.len()).then_some(*idx),
        };

        found.ok_or_else(|| Error::CategoryNotFound(selector.to_string()))
    }

    /// Number of entries in the category matching `selector`
    ///
    /// Fails with [`Error::RegistryParse`] when the category's `link_list`
    /// is something other than a sequence, so this doubles as a check that
    /// [`append`](Self::append) will succeed.
    pub fn entry_count(&self, selector: &CategorySelector) -> Result<usize> {
        let idx = self.find_category(selector)?;
        Ok(self.link_list(idx, selector)?.map_or(0, <[Value]>::len))
    }

    /// Entries of category `idx`; None when the list is absent or null
    fn link_list(&self, idx: usize, selector: &CategorySelector) -> Result<Option<&[Value]>> {
        match self.categories[idx].get(LINK_LIST_KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Sequence(list)) => Ok(Some(list.as_slice())),
            Some(_) => Err(Error::RegistryParse {
                path: self.path.clone(),
                message: format!("{LINK_LIST_KEY} of category {selector} is not a sequence"),
            }),
        }
    }

    /// Append `batch` to the end of the matching category, in order
    ///
    /// Nothing is modified if the category cannot be found or an entry
    /// cannot be represented. Returns the number of entries appended.
    pub fn append(&mut self, selector: &CategorySelector, batch: &[Submission]) -> Result<usize> {
        let idx = self.find_category(selector)?;
        self.link_list(idx, selector)?;

        let entries = batch
            .iter()
            .map(serde_yaml::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::RegistryWrite {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        let category = &mut self.categories[idx];
        if let Some(Value::Sequence(list)) = category.get_mut(LINK_LIST_KEY) {
            list.extend(entries);
        } else {
            category.insert(Value::from(LINK_LIST_KEY), Value::Sequence(entries));
        }

        Ok(batch.len())
    }

    /// Serialize the registry back to YAML
    ///
    /// String values shaped like dates are single-quoted so that the site
    /// generator keeps reading them as strings.
    pub fn to_yaml(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(&self.categories).map_err(|e| Error::RegistryWrite {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(quote_timestamps(&yaml))
    }

    /// Replace the file on disk with this registry
    ///
    /// Writes a temporary file next to the target and renames it over the
    /// original, so a failure leaves the old file untouched. The existing
    /// file's permissions carry over to the replacement.
    pub fn save(&self) -> Result<()> {
        let yaml = self.to_yaml()?;
        let write_err = |message: String| Error::RegistryWrite {
            path: self.path.clone(),
            message,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| write_err(e.to_string()))?;
        tmp.write_all(yaml.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| write_err(e.to_string()))?;

        match fs::metadata(&self.path) {
            Ok(meta) => tmp
                .as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| write_err(e.to_string()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(write_err(e.to_string())),
        }

        tmp.persist(&self.path)
            .map_err(|e| write_err(e.error.to_string()))?;

        debug!("Wrote registry {}", self.path.display());
        Ok(())
    }
}

/// Single-quote plain scalars that a YAML 1.1 loader would turn into dates
///
/// serde_yaml only quotes strings that would otherwise read back as null,
/// bool or number.
fn quote_timestamps(yaml: &str) -> String {
    let mut out = String::with_capacity(yaml.len());
    let mut block_parent: Option<usize> = None;

    for line in yaml.lines() {
        let indent = line.len() - line.trim_start_matches(' ').len();

        if block_parent.is_some_and(|parent| line.trim().is_empty() || indent > parent) {
            out.push_str(line);
        } else {
            block_parent = block_scalar_parent(line);
            out.push_str(&PLAIN_TIMESTAMP.replace(line, "${1}'${2}'"));
        }
        out.push('\n');
    }

    out
}

/// Column of the key or dash owning a block scalar opened on `line`
///
/// Lines indented past this column belong to the block.
fn block_scalar_parent(line: &str) -> Option<usize> {
    let line = line.trim_end();
    if !BLOCK_SCALAR.is_match(line) {
        return None;
    }

    let body = line.trim_start_matches([' ', '-']);
    let column = line.len() - body.len();
    if body.starts_with(['|', '>']) {
        // `- |`: the block hangs off the dash itself
        Some(column.saturating_sub(2))
    } else {
        Some(column)
    }
}

fn category_title(category: &Mapping) -> Option<&str> {
    TITLE_KEYS
        .iter()
        .find_map(|key| category.get(*key).and_then(Value::as_str))
}

/// Load the registry, append `batch` to the selected category and persist it
///
/// The registry is always loaded and the category resolved, so a broken
/// registry fails the run even when nothing was accepted. An empty batch
/// leaves the file untouched. Returns the number of entries written.
pub fn merge_and_persist(
    path: &Path,
    selector: &CategorySelector,
    batch: &[Submission],
) -> Result<usize> {
    let mut registry = LinkRegistry::load(path)?;
    let before = registry.entry_count(selector)?;

    if batch.is_empty() {
        debug!("No new links; leaving {} untouched", path.display());
        return Ok(0);
    }

    let added = registry.append(selector, batch)?;
    registry.save()?;

    info!(
        "Registry category {} grew from {} to {} entries",
        selector,
        before,
        before + added
    );
    Ok(added)
}
