//! Sidebar page ordering for RW.
//!
//! This crate orders documentation pages that have already been discovered
//! and grouped by menu path:
//! - [`sort_groups`]: bulk sort within each group (filename, creation time,
//!   or a custom comparator), index page pulling, and `autoSort` priorities
//! - [`resolve_placements`]: `autoPrev`/`autoNext` placement next to a sibling
//! - [`sequence_groups`]: deeper menu paths before shallower ones
//!
//! [`order_sidebar`] runs all three in order.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use rw_sidebar::{Frontmatter, Page, SortMode, SortOptions, order_sidebar, partition_pages};
//!
//! let faq = Page::new("faq", "/guide/", "guide/faq.md")
//!     .with_frontmatter(Frontmatter::from_yaml("autoPrev: install")?);
//! let pages = vec![
//!     Page::new("usage", "/guide/", "guide/usage.md"),
//!     Page::new("install", "/guide/", "guide/install.md"),
//!     faq,
//! ];
//!
//! let (groups, pending) = partition_pages(pages);
//! let options = SortOptions::default().with_mode(SortMode::Asc);
//! let outcome = order_sidebar(groups, pending, &options)?;
//!
//! let order: Vec<_> = outcome.groups.get("/guide/").unwrap().iter().map(|p| p.filename.as_str()).collect();
//! assert_eq!(order, ["install", "faq", "usage"]);
//! # Ok(())
//! # }
//! ```

mod diagnostics;
mod error;
mod page;
mod pipeline;
mod placement;
mod sequence;
mod sort;

pub use diagnostics::Warning;
pub use error::{FrontmatterError, SortError};
pub use page::{Frontmatter, Page, PageGroups, Placement, partition_pages};
pub use pipeline::{SidebarOutcome, order_sidebar};
pub use placement::resolve_placements;
pub use sequence::sequence_groups;
pub use sort::{
    DEFAULT_INDEX_NAME, PageComparator, SortMode, SortOptions, move_index_to_front,
    sort_by_priority, sort_groups,
};
