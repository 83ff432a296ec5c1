//! Non-fatal data-quality warnings produced while ordering.
//!
//! Warnings are returned to the caller as values so they can be shown in
//! whatever form the orchestrator prefers. Each warning is also logged via
//! `tracing` at the point it is detected.

use std::fmt;

/// A data-quality problem that did not stop the ordering run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    /// Page has no creation time but a time-based sort mode was requested.
    ///
    /// The page is still sorted, using a zero timestamp.
    UntrackedPage {
        /// Group the page belongs to.
        menu_path: String,
        /// Page filename.
        filename: String,
    },
    /// Placement directive never resolved to an anchor in the page's group.
    ///
    /// The page is dropped from the output.
    UnresolvedPlacement {
        /// Group the page belongs to.
        menu_path: String,
        /// Page filename.
        filename: String,
        /// Declared title from front matter.
        title: Option<String>,
        /// Filename named by the directive, if the page had one.
        anchor: Option<String>,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UntrackedPage {
                menu_path,
                filename,
            } => write!(
                f,
                "{menu_path}{filename} has no creation time and cannot be ordered by time"
            ),
            Self::UnresolvedPlacement {
                menu_path,
                filename,
                title,
                anchor,
            } => {
                write!(f, "{menu_path}{filename}")?;
                if let Some(title) = title {
                    write!(f, " ({title})")?;
                }
                match anchor {
                    Some(anchor) => write!(
                        f,
                        " points to missing sibling `{anchor}` and will not appear in the sidebar"
                    ),
                    None => write!(
                        f,
                        " has no placement directive and will not appear in the sidebar"
                    ),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untracked_display() {
        let warning = Warning::UntrackedPage {
            menu_path: "/guide/".to_owned(),
            filename: "draft".to_owned(),
        };
        assert_eq!(
            warning.to_string(),
            "/guide/draft has no creation time and cannot be ordered by time"
        );
    }

    #[test]
    fn test_unresolved_display_with_title() {
        let warning = Warning::UnresolvedPlacement {
            menu_path: "/guide/".to_owned(),
            filename: "d".to_owned(),
            title: Some("Deploying".to_owned()),
            anchor: Some("z".to_owned()),
        };
        assert_eq!(
            warning.to_string(),
            "/guide/d (Deploying) points to missing sibling `z` and will not appear in the sidebar"
        );
    }

    #[test]
    fn test_unresolved_display_without_directive() {
        let warning = Warning::UnresolvedPlacement {
            menu_path: "/".to_owned(),
            filename: "orphan".to_owned(),
            title: None,
            anchor: None,
        };
        assert_eq!(
            warning.to_string(),
            "/orphan has no placement directive and will not appear in the sidebar"
        );
    }
}
