//! Bulk sorting of pages within each group.
//!
//! Every group is ordered by the same pipeline:
//!
//! 1. Primary sort with the selected [`SortMode`] (or a custom comparator)
//! 2. Optionally pull the index page to the front
//! 3. Priority pass: `autoSort` descending, missing priority counts as 0
//! 4. Optionally pull the index page to the front again (forced)
//!
//! All sorts are stable, so equal keys keep the order produced by the
//! previous step.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::diagnostics::Warning;
use crate::error::SortError;
use crate::page::{Page, PageGroups};

/// Default reserved filename of a group's landing page.
pub const DEFAULT_INDEX_NAME: &str = "README";

/// User-supplied page comparator for [`SortMode::Custom`].
pub type PageComparator = Arc<dyn Fn(&Page, &Page) -> Ordering + Send + Sync>;

/// Bulk sort mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Filename ascending.
    #[default]
    Asc,
    /// Filename descending.
    Desc,
    /// Creation time ascending (oldest first).
    CreatedTimeAsc,
    /// Creation time descending (newest first).
    CreatedTimeDesc,
    /// User-supplied comparator.
    Custom,
}

impl SortMode {
    /// Whether this mode orders pages by creation time.
    #[must_use]
    pub fn is_time_based(self) -> bool {
        matches!(self, Self::CreatedTimeAsc | Self::CreatedTimeDesc)
    }
}

/// Options controlling the bulk sort.
#[derive(Clone)]
pub struct SortOptions {
    /// Sort mode. `None` falls back to [`SortMode::Asc`].
    pub mode: Option<SortMode>,
    /// Comparator used when `mode` is [`SortMode::Custom`].
    pub comparator: Option<PageComparator>,
    /// Pull the index page to the front before the priority pass.
    pub readme_first: bool,
    /// Pull the index page to the front after the priority pass.
    pub readme_first_force: bool,
    /// Reserved filename of the index page (matched case-insensitively).
    pub index_name: String,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            mode: None,
            comparator: None,
            readme_first: true,
            readme_first_force: false,
            index_name: DEFAULT_INDEX_NAME.to_owned(),
        }
    }
}

impl fmt::Debug for SortOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortOptions")
            .field("mode", &self.mode)
            .field("comparator", &self.comparator.as_ref().map(|_| ".."))
            .field("readme_first", &self.readme_first)
            .field("readme_first_force", &self.readme_first_force)
            .field("index_name", &self.index_name)
            .finish()
    }
}

impl SortOptions {
    /// Switch to [`SortMode::Custom`] ordering with the given comparator.
    ///
    /// The comparator must be a total order and return [`Ordering::Equal`]
    /// for equal keys. A comparator that never reports equality (such as
    /// `if a > b { Greater } else { Less }`) may cause the sort to panic.
    ///
    /// The index pulls and the priority pass still run after the
    /// comparator.
    #[must_use]
    pub fn with_comparator<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&Page, &Page) -> Ordering + Send + Sync + 'static,
    {
        self.mode = Some(SortMode::Custom);
        self.comparator = Some(Arc::new(comparator));
        self
    }

    /// Set the sort mode.
    #[must_use]
    pub fn with_mode(mut self, mode: SortMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

/// Primary comparison strategy resolved from [`SortOptions`].
enum Strategy<'a> {
    Filename { descending: bool },
    CreatedTime { descending: bool },
    Custom(&'a PageComparator),
}

impl<'a> Strategy<'a> {
    fn resolve(options: &'a SortOptions) -> Result<Self, SortError> {
        Ok(match options.mode.unwrap_or_default() {
            SortMode::Asc => Self::Filename { descending: false },
            SortMode::Desc => Self::Filename { descending: true },
            SortMode::CreatedTimeAsc => Self::CreatedTime { descending: false },
            SortMode::CreatedTimeDesc => Self::CreatedTime { descending: true },
            SortMode::Custom => {
                Self::Custom(options.comparator.as_ref().ok_or(SortError::MissingComparator)?)
            }
        })
    }

    fn compare(&self, a: &Page, b: &Page) -> Ordering {
        match self {
            Self::Filename { descending } => directed(a.filename.cmp(&b.filename), *descending),
            Self::CreatedTime { descending } => {
                directed(a.created_time.cmp(&b.created_time), *descending)
            }
            Self::Custom(comparator) => comparator(a, b),
        }
    }

    fn is_time_based(&self) -> bool {
        matches!(self, Self::CreatedTime { .. })
    }
}

fn directed(ordering: Ordering, descending: bool) -> Ordering {
    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}

/// Sort every group's pages in place.
///
/// Returns warnings for pages without a creation time when a time-based
/// mode is selected.
///
/// # Errors
///
/// Returns [`SortError::MissingComparator`] if the custom mode is selected
/// without a comparator. No group is modified in that case.
pub fn sort_groups(
    groups: &mut PageGroups,
    options: &SortOptions,
) -> Result<Vec<Warning>, SortError> {
    let strategy = Strategy::resolve(options)?;
    let mut warnings = Vec::new();

    for (menu_path, pages) in groups.iter_mut() {
        if strategy.is_time_based() {
            report_untracked(menu_path, pages, &mut warnings);
        }
        sort_group(pages, &strategy, options);
    }

    tracing::debug!(
        groups = groups.len(),
        pages = groups.page_count(),
        mode = ?options.mode.unwrap_or_default(),
        "Sorted sidebar groups"
    );

    Ok(warnings)
}

fn report_untracked(menu_path: &str, pages: &[Page], warnings: &mut Vec<Warning>) {
    for page in pages.iter().filter(|p| !p.is_tracked()) {
        tracing::warn!(
            menu_path = %menu_path,
            filename = %page.filename,
            "Page has no creation time, ordering by time is not meaningful"
        );
        warnings.push(Warning::UntrackedPage {
            menu_path: menu_path.to_owned(),
            filename: page.filename.clone(),
        });
    }
}

fn sort_group(pages: &mut [Page], strategy: &Strategy<'_>, options: &SortOptions) {
    pages.sort_by(|a, b| strategy.compare(a, b));

    if options.readme_first {
        move_index_to_front(pages, &options.index_name);
    }

    sort_by_priority(pages);

    // The priority pass may have moved the index page away again
    if options.readme_first_force {
        move_index_to_front(pages, &options.index_name);
    }
}

/// Move the first page named `index_name` to position 0, keeping the rest in order.
pub fn move_index_to_front(pages: &mut [Page], index_name: &str) {
    if let Some(idx) = pages.iter().position(|p| p.is_index(index_name)) {
        pages[..=idx].rotate_right(1);
    }
}

/// Stable sort by `autoSort` priority, highest first.
pub fn sort_by_priority(pages: &mut [Page]) {
    pages.sort_by(|a, b| b.priority().total_cmp(&a.priority()));
}
