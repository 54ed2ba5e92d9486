//! Derive the navigation tree from the site manifest.
//!
//! The manifest (`site.json`) maps each content path to its frontmatter:
//!
//! ```json
//! { "components/actions/button": { "frontMatter": { "title": "Button" } } }
//! ```
//!
//! Every path segment becomes a node keyed by the segment. Segments without
//! their own manifest entry become title-less grouping nodes.

use crate::error::DocsiteError;
use crate::frontmatter::FrontMatter;
use crate::nav::{NavNode, NavTree, NodeId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteEntry {
    pub front_matter: FrontMatter,
}

/// Content path to frontmatter, in manifest order.
pub type SiteJson = IndexMap<String, SiteEntry>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SiteNavOptions {
    /// Keep entries marked `draft: true`.
    pub include_drafts: bool,
}

/// Build a navigation tree from manifest entries.
pub fn build_nav_from_site(
    site: &SiteJson,
    options: SiteNavOptions,
) -> Result<NavTree, DocsiteError> {
    let mut tree = NavTree::new();
    let mut skipped = 0usize;

    for (path, entry) in site {
        if entry.front_matter.draft && !options.include_drafts {
            skipped += 1;
            continue;
        }
        let segments = split_path(path)?;
        let id = ensure_path(&mut tree, &segments)?;
        let node = tree.node_mut(id).ok_or(DocsiteError::UnknownNode(id))?;
        apply_front_matter(node, &entry.front_matter);
    }

    tracing::debug!(
        entries = site.len(),
        drafts_skipped = skipped,
        nodes = tree.len(),
        "built navigation from site manifest"
    );
    Ok(tree)
}

fn split_path(path: &str) -> Result<Vec<&str>, DocsiteError> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Err(DocsiteError::InvalidSite(format!(
            "empty content path `{path}`"
        )));
    }
    let segments: Vec<&str> = trimmed.split('/').collect();
    if segments.iter().any(|segment| segment.trim().is_empty()) {
        return Err(DocsiteError::InvalidSite(format!(
            "empty segment in content path `{path}`"
        )));
    }
    Ok(segments)
}

fn ensure_path(tree: &mut NavTree, segments: &[&str]) -> Result<NodeId, DocsiteError> {
    let mut parent: Option<NodeId> = None;
    for segment in segments {
        let id = match tree.child(parent, segment) {
            Some(existing) => existing,
            None => match parent {
                None => tree.insert_root(*segment, NavNode::default()),
                Some(parent) => tree.insert_child(parent, *segment, NavNode::default())?,
            },
        };
        parent = Some(id);
    }
    parent.ok_or_else(|| DocsiteError::InvalidSite("empty content path".to_string()))
}

fn apply_front_matter(node: &mut NavNode, fm: &FrontMatter) {
    node.title = Some(fm.nav_label().to_string());
    node.description = fm
        .short_description
        .clone()
        .or_else(|| fm.description.clone());
    node.order = fm.order;
    node.icon = fm.icon.clone();
    node.status = fm.status;
    node.hide_from_nav = fm.hide_from_nav;
    node.hide_children = fm.hide_children;
    node.new_section = fm.new_section;
    node.expanded = fm.expanded;
    node.featured = fm.featured;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::resolve;

    fn site(raw: &str) -> SiteJson {
        serde_json::from_str(raw).expect("site manifest")
    }

    #[test]
    fn nested_paths_become_nested_nodes() {
        let manifest = site(
            r#"{
                "components": {"frontMatter": {"title": "Components", "order": 2}},
                "components/actions/button": {"frontMatter": {"title": "Button", "navTitle": "Buttons"}},
                "foundations": {"frontMatter": {"title": "Foundations", "order": 1}}
            }"#,
        );
        let tree = build_nav_from_site(&manifest, SiteNavOptions::default()).expect("valid");
        let resolved = resolve(&tree).expect("acyclic");

        let top: Vec<_> = resolved.nodes.iter().map(|n| n.key.as_str()).collect();
        assert_eq!(top, vec!["foundations", "components"]);

        let actions = resolved.find("/components/actions").expect("grouping node");
        assert_eq!(actions.title, None);
        let button = resolved.find("/components/actions/button").expect("page");
        assert_eq!(button.title.as_deref(), Some("Buttons"));
    }

    #[test]
    fn child_before_parent_still_merges() {
        let manifest = site(
            r#"{
                "patterns/date-picking": {"frontMatter": {"title": "Date picking"}},
                "patterns": {"frontMatter": {"title": "Patterns", "hideChildren": true}}
            }"#,
        );
        let tree = build_nav_from_site(&manifest, SiteNavOptions::default()).expect("valid");
        assert_eq!(tree.len(), 2);

        let resolved = resolve(&tree).expect("acyclic");
        assert_eq!(resolved.nodes[0].title.as_deref(), Some("Patterns"));
        assert!(resolved.nodes[0].hide_children);
        assert!(!resolved.nodes[0].children[0].rendered);
    }

    #[test]
    fn drafts_are_skipped_unless_requested() {
        let manifest = site(
            r#"{
                "tools": {"frontMatter": {"title": "Tools"}},
                "tools/wip": {"frontMatter": {"title": "WIP", "draft": true}}
            }"#,
        );
        let published = build_nav_from_site(&manifest, SiteNavOptions::default()).expect("valid");
        assert_eq!(published.len(), 1);

        let all = build_nav_from_site(
            &manifest,
            SiteNavOptions {
                include_drafts: true,
            },
        )
        .expect("valid");
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn empty_segments_are_rejected() {
        let manifest = site(r#"{"components//button": {"frontMatter": {"title": "Button"}}}"#);
        assert!(matches!(
            build_nav_from_site(&manifest, SiteNavOptions::default()),
            Err(DocsiteError::InvalidSite(_))
        ));

        let manifest = site(r#"{"/": {"frontMatter": {"title": "Home"}}}"#);
        assert!(build_nav_from_site(&manifest, SiteNavOptions::default()).is_err());
    }
}
