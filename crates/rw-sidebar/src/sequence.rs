//! Ordering of groups so deeper menu paths come first.
//!
//! Sidebar configurations are matched top to bottom and the first matching
//! group wins. A shallow key such as `/guide/` would otherwise capture pages
//! under `/guide/advanced/`.

use crate::page::PageGroups;

/// Reorder groups by key length, longest first.
///
/// Keys of equal length keep their incoming relative order. Length is
/// counted in characters, not bytes.
#[must_use]
pub fn sequence_groups(groups: PageGroups) -> PageGroups {
    let mut entries: Vec<_> = groups.into_iter().collect();
    entries.sort_by_key(|(menu_path, _)| std::cmp::Reverse(menu_path.chars().count()));
    entries.into_iter().collect()
}
