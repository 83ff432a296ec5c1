//! Relative placement of pages next to a named sibling.
//!
//! Pages with `autoPrev`/`autoNext` are inserted into already-sorted groups.
//! An anchor may itself be a pending page, so resolution retries until no
//! more progress can be made:
//!
//! - Pages are taken from the work queue last-in first-out.
//! - A page whose anchor is present is inserted, and every page waiting in
//!   the retry list goes back onto the work queue.
//! - A page whose anchor is missing moves to the retry list.
//!
//! Each insertion removes one page from the outstanding set and a failed
//! attempt shrinks the work queue, so the loop terminates. Whatever is left
//! in the retry list can never be placed.

use crate::diagnostics::Warning;
use crate::page::{Page, PageGroups};

/// Insert pending pages next to their anchors.
///
/// Returns a warning for each page that could not be placed. Those pages
/// are dropped and appear in no group.
pub fn resolve_placements(groups: &mut PageGroups, pending: Vec<Page>) -> Vec<Warning> {
    let total = pending.len();
    let mut queue = pending;
    let mut retry: Vec<Page> = Vec::new();

    while let Some(page) = queue.pop() {
        match try_place(groups, page) {
            Ok(()) => queue.append(&mut retry),
            Err(page) => retry.push(page),
        }
    }

    tracing::debug!(
        placed = total - retry.len(),
        unresolved = retry.len(),
        "Resolved page placements"
    );

    retry.into_iter().map(unresolved_warning).collect()
}

/// Insert `page` next to its anchor, or hand it back if the anchor is missing.
fn try_place(groups: &mut PageGroups, page: Page) -> Result<(), Page> {
    let Some(siblings) = groups.get_mut(&page.menu_path) else {
        return Err(page);
    };

    let index = page
        .placement()
        .and_then(|placement| placement.insertion_index(siblings));

    match index {
        Some(index) => {
            siblings.insert(index, page);
            Ok(())
        }
        None => Err(page),
    }
}

fn unresolved_warning(page: Page) -> Warning {
    let anchor = page.placement().map(|p| p.anchor().to_owned());

    tracing::warn!(
        menu_path = %page.menu_path,
        filename = %page.filename,
        title = page.frontmatter.title.as_deref().unwrap_or_default(),
        anchor = anchor.as_deref().unwrap_or_default(),
        "Placement target not found, page will not appear in the sidebar"
    );

    Warning::UnresolvedPlacement {
        anchor,
        title: page.frontmatter.title,
        filename: page.filename,
        menu_path: page.menu_path,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn page(filename: &str) -> Page {
        Page::new(filename, "/guide/", format!("guide/{filename}.md"))
    }

    fn after(filename: &str, anchor: &str) -> Page {
        let mut p = page(filename);
        p.frontmatter.auto_prev = Some(anchor.to_owned());
        p
    }

    fn before(filename: &str, anchor: &str) -> Page {
        let mut p = page(filename);
        p.frontmatter.auto_next = Some(anchor.to_owned());
        p
    }

    fn group(filenames: &[&str]) -> PageGroups {
        let mut groups = PageGroups::new();
        groups.insert("/guide/", filenames.iter().map(|f| page(f)).collect());
        groups
    }

    fn names(groups: &PageGroups, menu_path: &str) -> Vec<String> {
        groups
            .get(menu_path)
            .unwrap()
            .iter()
            .map(|p| p.filename.clone())
            .collect()
    }

    #[test]
    fn test_after_anchor() {
        let mut groups = group(&["a", "b", "c"]);
        let warnings = resolve_placements(&mut groups, vec![after("x", "a")]);
        assert!(warnings.is_empty());
        assert_eq!(names(&groups, "/guide/"), vec!["a", "x", "b", "c"]);
    }

    #[test]
    fn test_before_anchor() {
        let mut groups = group(&["a", "b", "c"]);
        resolve_placements(&mut groups, vec![before("x", "a")]);
        assert_eq!(names(&groups, "/guide/"), vec!["x", "a", "b", "c"]);
    }

    #[test]
    fn test_after_last_page_appends() {
        let mut groups = group(&["a", "b"]);
        resolve_placements(&mut groups, vec![after("x", "b")]);
        assert_eq!(names(&groups, "/guide/"), vec!["a", "b", "x"]);
    }

    #[test]
    fn test_prev_wins_over_next() {
        let mut groups = group(&["a", "b", "c"]);
        let mut p = after("x", "c");
        p.frontmatter.auto_next = Some("a".to_owned());
        resolve_placements(&mut groups, vec![p]);
        assert_eq!(names(&groups, "/guide/"), vec!["a", "b", "c", "x"]);
    }

    #[test]
    fn test_chain_resolves_in_any_order() {
        // p1 -> p2 -> p3 -> b (present)
        let chain = vec![after("p1", "p2"), after("p2", "p3"), after("p3", "b")];

        let mut forward = group(&["a", "b", "c"]);
        assert!(resolve_placements(&mut forward, chain.clone()).is_empty());

        let mut reversed = group(&["a", "b", "c"]);
        let mut rev = chain;
        rev.reverse();
        assert!(resolve_placements(&mut reversed, rev).is_empty());

        let expected = vec!["a", "b", "p3", "p2", "p1", "c"];
        assert_eq!(names(&forward, "/guide/"), expected);
        assert_eq!(names(&reversed, "/guide/"), expected);
    }

    #[test]
    fn test_mixed_directions_chain() {
        // y goes before x, x goes after a
        let mut groups = group(&["a", "b"]);
        let warnings = resolve_placements(&mut groups, vec![after("x", "a"), before("y", "x")]);
        assert!(warnings.is_empty());
        assert_eq!(names(&groups, "/guide/"), vec!["a", "y", "x", "b"]);
    }

    #[test]
    fn test_independent_placements_processed_last_first() {
        // Both target `a`; the later one is placed first, then pushed right
        let mut groups = group(&["a", "b"]);
        resolve_placements(&mut groups, vec![after("x", "a"), after("y", "a")]);
        assert_eq!(names(&groups, "/guide/"), vec!["a", "x", "y", "b"]);
    }

    #[test]
    fn test_missing_anchor_reported_and_dropped() {
        let mut groups = group(&["a", "b"]);
        let mut d = after("d", "z");
        d.frontmatter.title = Some("Deploying".to_owned());

        let warnings = resolve_placements(&mut groups, vec![d]);

        assert_eq!(names(&groups, "/guide/"), vec!["a", "b"]);
        assert_eq!(
            warnings,
            vec![Warning::UnresolvedPlacement {
                menu_path: "/guide/".to_owned(),
                filename: "d".to_owned(),
                title: Some("Deploying".to_owned()),
                anchor: Some("z".to_owned()),
            }]
        );
    }

    #[test]
    fn test_anchor_in_other_group_is_unresolved() {
        let mut groups = group(&["a"]);
        groups.insert("/api/", vec![Page::new("z", "/api/", "api/z.md")]);

        let warnings = resolve_placements(&mut groups, vec![after("d", "z")]);

        assert_eq!(warnings.len(), 1);
        assert_eq!(names(&groups, "/guide/"), vec!["a"]);
        assert_eq!(names(&groups, "/api/"), vec!["z"]);
    }

    #[test]
    fn test_missing_group_is_unresolved() {
        let mut groups = PageGroups::new();
        let warnings = resolve_placements(&mut groups, vec![after("d", "a")]);
        assert_eq!(warnings.len(), 1);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_cycle_is_unresolved() {
        let mut groups = group(&["a"]);
        let warnings = resolve_placements(&mut groups, vec![after("x", "y"), after("y", "x")]);
        assert_eq!(warnings.len(), 2);
        assert_eq!(names(&groups, "/guide/"), vec!["a"]);
    }

    #[test]
    fn test_page_without_directive_is_unresolved() {
        let mut groups = group(&["a"]);
        let warnings = resolve_placements(&mut groups, vec![page("loose")]);
        assert_eq!(
            warnings,
            vec![Warning::UnresolvedPlacement {
                menu_path: "/guide/".to_owned(),
                filename: "loose".to_owned(),
                title: None,
                anchor: None,
            }]
        );
    }

    #[test]
    fn test_unresolved_does_not_disturb_resolved() {
        let mut groups = group(&["a", "b"]);
        let warnings = resolve_placements(
            &mut groups,
            vec![after("x", "a"), after("ghost", "nope"), before("y", "b")],
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(names(&groups, "/guide/"), vec!["a", "x", "y", "b"]);
    }
}
