//! The full ordering run: bulk sort, placement, group sequencing.

use crate::diagnostics::Warning;
use crate::error::SortError;
use crate::page::{Page, PageGroups};
use crate::placement::resolve_placements;
use crate::sequence::sequence_groups;
use crate::sort::{SortOptions, sort_groups};

/// Result of a successful ordering run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SidebarOutcome {
    /// Ordered groups, deepest menu paths first.
    pub groups: PageGroups,
    /// Non-fatal warnings in the order they were detected.
    pub warnings: Vec<Warning>,
}

/// Order a sidebar.
///
/// Takes ownership of the group mapping and the pending placement set and
/// runs the phases in sequence:
///
/// 1. [`sort_groups`] orders every group
/// 2. [`resolve_placements`] inserts pending pages next to their anchors
/// 3. [`sequence_groups`] puts deeper menu paths first
///
/// # Errors
///
/// Returns [`SortError::MissingComparator`] if the custom mode is selected
/// without a comparator. Nothing is returned in that case.
pub fn order_sidebar(
    mut groups: PageGroups,
    pending: Vec<Page>,
    options: &SortOptions,
) -> Result<SidebarOutcome, SortError> {
    let mut warnings = sort_groups(&mut groups, options)?;
    warnings.extend(resolve_placements(&mut groups, pending));
    let groups = sequence_groups(groups);

    tracing::debug!(
        groups = groups.len(),
        pages = groups.page_count(),
        warnings = warnings.len(),
        "Sidebar ordered"
    );

    Ok(SidebarOutcome { groups, warnings })
}
