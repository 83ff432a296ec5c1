//! Page descriptors and the group mapping the ordering phases operate on.
//!
//! Pages are produced by discovery (outside this crate) and arrive here as
//! plain data. The engine only ever moves a [`Page`] within the group named by
//! its `menu_path`, or from the pending placement set into that group.
//!
//! # Front Matter
//!
//! Ordering directives are read from YAML front matter:
//!
//! ```yaml
//! title: Installation
//! autoSort: 10        # numeric priority, higher sorts first
//! autoPrev: overview  # place immediately after `overview`
//! autoNext: faq       # place immediately before `faq` (ignored if autoPrev is set)
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FrontmatterError;

/// A single documentation page as seen by the ordering engine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// File name without extension (e.g., `"getting-started"`, `"README"`).
    pub filename: String,
    /// Group key the page belongs to (e.g., `"/guide/"`).
    pub menu_path: String,
    /// Path relative to the docs root (e.g., `"guide/getting-started.md"`).
    pub relative_path: String,
    /// Creation timestamp in milliseconds. `0` when unknown.
    #[serde(default)]
    pub created_time: i64,
    /// Ordering directives and title from front matter.
    #[serde(default)]
    pub frontmatter: Frontmatter,
}

impl Page {
    /// Create a page with empty front matter and an unknown creation time.
    #[must_use]
    pub fn new(
        filename: impl Into<String>,
        menu_path: impl Into<String>,
        relative_path: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            menu_path: menu_path.into(),
            relative_path: relative_path.into(),
            created_time: 0,
            frontmatter: Frontmatter::default(),
        }
    }

    /// Set the creation timestamp.
    #[must_use]
    pub fn with_created_time(mut self, created_time: i64) -> Self {
        self.created_time = created_time;
        self
    }

    /// Replace the front matter.
    #[must_use]
    pub fn with_frontmatter(mut self, frontmatter: Frontmatter) -> Self {
        self.frontmatter = frontmatter;
        self
    }

    /// Whether the page has a known creation time.
    #[must_use]
    pub fn is_tracked(&self) -> bool {
        self.created_time != 0
    }

    /// Numeric priority used by the priority pass.
    ///
    /// Missing or NaN priorities count as `0`. Negative zero is folded into
    /// zero so it ties with pages that declare no priority.
    #[must_use]
    pub fn priority(&self) -> f64 {
        match self.frontmatter.auto_sort {
            Some(p) if !p.is_nan() && p != 0.0 => p,
            _ => 0.0,
        }
    }

    /// The effective placement directive, if any.
    ///
    /// A page can only be inserted in one place, so `autoPrev` wins over
    /// `autoNext` when both are present.
    #[must_use]
    pub fn placement(&self) -> Option<Placement<'_>> {
        fn non_empty(directive: &Option<String>) -> Option<&str> {
            directive.as_deref().filter(|s| !s.is_empty())
        }

        non_empty(&self.frontmatter.auto_prev)
            .map(Placement::After)
            .or_else(|| non_empty(&self.frontmatter.auto_next).map(Placement::Before))
    }

    /// Whether the filename matches the reserved index name (ASCII case-insensitive).
    #[must_use]
    pub fn is_index(&self, index_name: &str) -> bool {
        self.filename.eq_ignore_ascii_case(index_name)
    }
}

/// Ordering-related front matter of a page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    /// Declared page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Numeric priority.
    ///
    /// Accepts numbers, numeric strings (decimal, or `0x`/`0o`/`0b` prefixed
    /// integers) and booleans (`true` is 1, `false` is 0). Other values are
    /// treated as unset.
    #[serde(
        default,
        deserialize_with = "deserialize_priority",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_sort: Option<f64>,
    /// Sibling filename this page must directly follow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_prev: Option<String>,
    /// Sibling filename this page must directly precede.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_next: Option<String>,
}

impl Frontmatter {
    /// Parse front matter from YAML content.
    ///
    /// Empty content returns a default instance. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(content: &str) -> Result<Self, FrontmatterError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(trimmed).map_err(FrontmatterError::Parse)
    }
}

fn deserialize_priority<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPriority {
        Number(f64),
        Bool(bool),
        Text(String),
        Other(serde_yaml::Value),
    }

    let raw = Option::<RawPriority>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| match raw {
        RawPriority::Number(n) => Some(n),
        RawPriority::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
        RawPriority::Text(s) => parse_priority(&s),
        RawPriority::Other(_) => None,
    }))
}

/// Parse a priority written as text. Empty text is unset.
#[allow(clippy::cast_precision_loss)]
fn parse_priority(text: &str) -> Option<f64> {
    let text = text.trim();
    let radix_prefixes = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];

    for (prefix, radix) in radix_prefixes {
        if let Some(digits) = text.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    text.parse::<f64>().ok()
}

/// Effective placement directive of a page, borrowing the anchor name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement<'a> {
    /// `autoPrev`: directly after the named sibling.
    After(&'a str),
    /// `autoNext`: directly before the named sibling.
    Before(&'a str),
}

impl<'a> Placement<'a> {
    /// Filename of the anchor sibling.
    #[must_use]
    pub fn anchor(self) -> &'a str {
        match self {
            Self::After(anchor) | Self::Before(anchor) => anchor,
        }
    }

    /// Index at which the page should be inserted into `siblings`.
    ///
    /// Returns `None` if the anchor is not among the siblings.
    #[must_use]
    pub fn insertion_index(self, siblings: &[Page]) -> Option<usize> {
        let anchor = self.anchor();
        let position = siblings.iter().position(|p| p.filename == anchor)?;
        Some(match self {
            Self::After(_) => position + 1,
            Self::Before(_) => position,
        })
    }
}

/// Insertion-ordered mapping from group key (menu path) to its page sequence.
///
/// Keys are unique. Iteration follows the order in which keys were first
/// inserted, which is the order the group sequencer rearranges.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageGroups {
    groups: Vec<(String, Vec<Page>)>,
    index: HashMap<String, usize>,
}

impl PageGroups {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a group.
    ///
    /// Replacing keeps the group's position and returns the previous pages.
    pub fn insert(&mut self, menu_path: impl Into<String>, pages: Vec<Page>) -> Option<Vec<Page>> {
        let menu_path = menu_path.into();
        if let Some(&idx) = self.index.get(&menu_path) {
            return Some(std::mem::replace(&mut self.groups[idx].1, pages));
        }
        self.index.insert(menu_path.clone(), self.groups.len());
        self.groups.push((menu_path, pages));
        None
    }

    /// Append a page to the group named by its `menu_path`, creating the group if needed.
    pub fn push(&mut self, page: Page) {
        if let Some(pages) = self.get_mut(&page.menu_path) {
            pages.push(page);
        } else {
            self.insert(page.menu_path.clone(), vec![page]);
        }
    }

    /// Pages of a group.
    #[must_use]
    pub fn get(&self, menu_path: &str) -> Option<&Vec<Page>> {
        self.index.get(menu_path).map(|&idx| &self.groups[idx].1)
    }

    /// Mutable pages of a group.
    pub fn get_mut(&mut self, menu_path: &str) -> Option<&mut Vec<Page>> {
        self.index
            .get(menu_path)
            .map(|&idx| &mut self.groups[idx].1)
    }

    /// Whether a group exists.
    #[must_use]
    pub fn contains_key(&self, menu_path: &str) -> bool {
        self.index.contains_key(menu_path)
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of pages across all groups.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.groups.iter().map(|(_, pages)| pages.len()).sum()
    }

    /// Group keys in iteration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(key, _)| key.as_str())
    }

    /// Groups in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Page])> {
        self.groups
            .iter()
            .map(|(key, pages)| (key.as_str(), pages.as_slice()))
    }

    /// Groups in iteration order, with mutable page sequences.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Vec<Page>)> {
        self.groups
            .iter_mut()
            .map(|(key, pages)| (key.as_str(), pages))
    }
}

impl FromIterator<(String, Vec<Page>)> for PageGroups {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Page>)>>(iter: I) -> Self {
        let mut groups = Self::new();
        for (menu_path, pages) in iter {
            groups.insert(menu_path, pages);
        }
        groups
    }
}

impl IntoIterator for PageGroups {
    type Item = (String, Vec<Page>);
    type IntoIter = std::vec::IntoIter<(String, Vec<Page>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Split discovered pages into the group mapping and the pending placement set.
///
/// Pages without a placement directive are appended to their group (groups
/// appear in first-seen order). Pages carrying `autoPrev`/`autoNext` are
/// returned separately, in discovery order, for the placement resolver.
#[must_use]
pub fn partition_pages(pages: impl IntoIterator<Item = Page>) -> (PageGroups, Vec<Page>) {
    let mut groups = PageGroups::new();
    let mut pending = Vec::new();

    for page in pages {
        if page.placement().is_some() {
            pending.push(page);
        } else {
            groups.push(page);
        }
    }

    (groups, pending)
}
