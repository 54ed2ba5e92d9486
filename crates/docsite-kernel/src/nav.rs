//! Navigation tree storage and resolution.
//!
//! Nodes live in an arena ([`NavTree`]) and refer to their children by
//! [`NodeId`]. A tree read from nested JSON is acyclic by construction; a
//! tree assembled with [`NavTree::attach_child`] may link any node under any
//! parent, so [`resolve`] guards against a node reappearing among its own
//! descendants. Sharing one node between unrelated branches is allowed.
//!
//! Resolution turns the arena into an ordered, read-only view:
//!
//! ```text
//! NavTree (arena, insertion-ordered children)
//!     │  resolve: order siblings, compute visible/rendered, paths, urls
//! ResolvedNav
//!     ├── rendered()  pruned to what the sidebar shows
//!     ├── sitemap()   every node, hidden ones included
//!     └── digest()    stable content hash
//! ```

use crate::error::DocsiteError;
use crate::frontmatter::Status;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::cmp::Ordering;
use std::fmt;

const NAV_DIGEST_PREFIX: &str = "nav1_";

/// Identity of a node inside one [`NavTree`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The per-node fields of a navigation entry.
///
/// Flags default to `false`; nothing is inherited from the parent. `order`
/// is any JSON number, so a page can be slotted between two siblings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub hide_from_nav: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub hide_children: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub new_section: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub expanded: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub featured: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Nested wire form of a navigation entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavItem {
    #[serde(flatten)]
    pub node: NavNode,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub children: IndexMap<String, NavItem>,
}

/// Top-level wire form: `{"children": {...}}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavJson {
    #[serde(default)]
    pub children: IndexMap<String, NavItem>,
}

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    node: NavNode,
    children: IndexMap<String, NodeId>,
}

/// Arena of navigation nodes with insertion-ordered child maps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavTree {
    slots: Vec<Slot>,
    roots: IndexMap<String, NodeId>,
}

impl NavTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes stored in the arena.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Store a node without linking it anywhere yet.
    pub fn add_node(&mut self, node: NavNode) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            node,
            children: IndexMap::new(),
        });
        id
    }

    /// Link an existing node at the top level under `key`.
    ///
    /// Reusing a key replaces the previous link but keeps its position.
    pub fn attach_root(&mut self, key: impl Into<String>, id: NodeId) -> Result<(), DocsiteError> {
        self.check(id)?;
        self.roots.insert(key.into(), id);
        Ok(())
    }

    /// Link an existing node as a child of `parent` under `key`.
    pub fn attach_child(
        &mut self,
        parent: NodeId,
        key: impl Into<String>,
        child: NodeId,
    ) -> Result<(), DocsiteError> {
        self.check(child)?;
        let slot = self
            .slots
            .get_mut(parent.0)
            .ok_or(DocsiteError::UnknownNode(parent))?;
        slot.children.insert(key.into(), child);
        Ok(())
    }

    pub fn insert_root(&mut self, key: impl Into<String>, node: NavNode) -> NodeId {
        let id = self.add_node(node);
        self.roots.insert(key.into(), id);
        id
    }

    pub fn insert_child(
        &mut self,
        parent: NodeId,
        key: impl Into<String>,
        node: NavNode,
    ) -> Result<NodeId, DocsiteError> {
        self.check(parent)?;
        let id = self.add_node(node);
        self.attach_child(parent, key, id)?;
        Ok(id)
    }

    pub fn node(&self, id: NodeId) -> Option<&NavNode> {
        self.slots.get(id.0).map(|slot| &slot.node)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut NavNode> {
        self.slots.get_mut(id.0).map(|slot| &mut slot.node)
    }

    pub fn roots(&self) -> &IndexMap<String, NodeId> {
        &self.roots
    }

    pub fn children(&self, id: NodeId) -> Option<&IndexMap<String, NodeId>> {
        self.slots.get(id.0).map(|slot| &slot.children)
    }

    /// The child linked under `key`, or the top-level node when `parent` is `None`.
    pub fn child(&self, parent: Option<NodeId>, key: &str) -> Option<NodeId> {
        match parent {
            None => self.roots.get(key).copied(),
            Some(parent) => self.children(parent)?.get(key).copied(),
        }
    }

    fn check(&self, id: NodeId) -> Result<(), DocsiteError> {
        if id.0 < self.slots.len() {
            Ok(())
        } else {
            Err(DocsiteError::UnknownNode(id))
        }
    }

    /// Load the nested wire form. The result is always acyclic.
    pub fn from_json(json: &NavJson) -> Self {
        let mut tree = Self::new();
        for (key, item) in &json.children {
            let id = tree.add_item(item);
            tree.roots.insert(key.clone(), id);
        }
        tree
    }

    fn add_item(&mut self, item: &NavItem) -> NodeId {
        let id = self.add_node(item.node.clone());
        for (key, child) in &item.children {
            let child_id = self.add_item(child);
            self.slots[id.0].children.insert(key.clone(), child_id);
        }
        id
    }

    /// Write the tree back to the nested wire form, keeping insertion order.
    pub fn to_json(&self) -> Result<NavJson, DocsiteError> {
        let mut ancestors = Vec::new();
        let mut keys = Vec::new();
        let mut children = IndexMap::new();
        for (key, &id) in &self.roots {
            keys.push(key.clone());
            children.insert(key.clone(), self.item(id, &mut ancestors, &mut keys)?);
            keys.pop();
        }
        Ok(NavJson { children })
    }

    fn item(
        &self,
        id: NodeId,
        ancestors: &mut Vec<NodeId>,
        keys: &mut Vec<String>,
    ) -> Result<NavItem, DocsiteError> {
        if ancestors.contains(&id) {
            return Err(DocsiteError::Cycle { path: keys.clone() });
        }
        let slot = self.slots.get(id.0).ok_or(DocsiteError::UnknownNode(id))?;
        ancestors.push(id);
        let mut children = IndexMap::new();
        for (key, &child) in &slot.children {
            keys.push(key.clone());
            children.insert(key.clone(), self.item(child, ancestors, keys)?);
            keys.pop();
        }
        ancestors.pop();
        Ok(NavItem {
            node: slot.node.clone(),
            children,
        })
    }
}

/// A node of the resolved navigation view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedNavNode {
    pub id: NodeId,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    pub path: Vec<String>,
    pub url: String,
    /// `false` when the node itself sets `hideFromNav`.
    pub visible: bool,
    /// Whether the sidebar shows this node: visible, under a rendered
    /// parent, and not hidden by the parent's `hideChildren`.
    pub rendered: bool,
    pub hide_children: bool,
    pub new_section: bool,
    pub expanded: bool,
    pub featured: bool,
    pub children: Vec<ResolvedNavNode>,
}

impl ResolvedNavNode {
    /// Label for listings: the title, else the key.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.key)
    }

    fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }
}

/// One line of the sitemap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub loc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub visible: bool,
    pub depth: usize,
}

/// Ordered, read-only result of [`resolve`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolvedNav {
    pub nodes: Vec<ResolvedNavNode>,
}

impl ResolvedNav {
    /// Nodes in the view, hidden ones included.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(ResolvedNavNode::count).sum()
    }

    /// Pre-order walk over every node.
    pub fn walk(&self) -> Vec<&ResolvedNavNode> {
        let mut out = Vec::new();
        let mut stack: Vec<&ResolvedNavNode> = self.nodes.iter().rev().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    pub fn find(&self, url: &str) -> Option<&ResolvedNavNode> {
        self.walk().into_iter().find(|node| node.url == url)
    }

    /// Copy containing only the nodes the sidebar shows.
    pub fn rendered(&self) -> ResolvedNav {
        fn prune(nodes: &[ResolvedNavNode]) -> Vec<ResolvedNavNode> {
            nodes
                .iter()
                .filter(|node| node.rendered)
                .map(|node| ResolvedNavNode {
                    children: prune(&node.children),
                    ..node.clone()
                })
                .collect()
        }
        ResolvedNav {
            nodes: prune(&self.nodes),
        }
    }

    /// Every node in pre-order, prefixed with `base_url` when given.
    pub fn sitemap(&self, base_url: Option<&str>) -> Vec<SitemapEntry> {
        let base = base_url.unwrap_or_default().trim_end_matches('/');
        self.walk()
            .into_iter()
            .map(|node| SitemapEntry {
                loc: format!("{base}{}", node.url),
                title: node.title.clone(),
                visible: node.visible,
                depth: node.path.len(),
            })
            .collect()
    }

    /// `nav1_` + SHA-256 hex over the compact JSON of the resolved nodes.
    ///
    /// Arena ids are left out, so equal content digests equally whatever
    /// order the nodes were stored in.
    pub fn digest(&self) -> String {
        let mut value = serde_json::to_value(&self.nodes).unwrap_or_default();
        strip_ids(&mut value);
        let bytes = serde_json::to_vec(&value).unwrap_or_default();
        format!("{NAV_DIGEST_PREFIX}{:x}", Sha256::digest(bytes))
    }
}

fn strip_ids(value: &mut Value) {
    match value {
        Value::Array(nodes) => nodes.iter_mut().for_each(strip_ids),
        Value::Object(fields) => {
            fields.remove("id");
            if let Some(children) = fields.get_mut("children") {
                strip_ids(children);
            }
        }
        _ => {}
    }
}

struct Parent<'a> {
    path: &'a [String],
    rendered: bool,
    hides_children: bool,
}

/// Order, flag and path every node of `tree`.
///
/// Siblings with an explicit `order` come first, ascending, ties kept in
/// insertion order; siblings without one follow in insertion order. Fails
/// with [`DocsiteError::Cycle`] when a node is reachable from itself.
pub fn resolve(tree: &NavTree) -> Result<ResolvedNav, DocsiteError> {
    let mut ancestors = Vec::new();
    let mut keys = Vec::new();
    let root = Parent {
        path: &[],
        rendered: true,
        hides_children: false,
    };
    let nodes = resolve_siblings(tree, &tree.roots, &root, &mut ancestors, &mut keys)?;
    let resolved = ResolvedNav { nodes };
    tracing::debug!(
        stored = tree.len(),
        resolved = resolved.node_count(),
        "resolved navigation tree"
    );
    Ok(resolved)
}

fn resolve_siblings(
    tree: &NavTree,
    children: &IndexMap<String, NodeId>,
    parent: &Parent<'_>,
    ancestors: &mut Vec<NodeId>,
    keys: &mut Vec<String>,
) -> Result<Vec<ResolvedNavNode>, DocsiteError> {
    let mut ordered: Vec<(usize, &String, NodeId, &NavNode)> = Vec::with_capacity(children.len());
    for (index, (key, &id)) in children.iter().enumerate() {
        let node = tree.node(id).ok_or(DocsiteError::UnknownNode(id))?;
        ordered.push((index, key, id, node));
    }
    ordered.sort_by(|&(a_index, _, _, a), &(b_index, _, _, b)| {
        compare_order(a.order, b.order).then(a_index.cmp(&b_index))
    });

    let mut resolved = Vec::with_capacity(ordered.len());
    for (_, key, id, node) in ordered {
        keys.push(key.clone());
        if ancestors.contains(&id) {
            return Err(DocsiteError::Cycle { path: keys.clone() });
        }
        ancestors.push(id);
        let entry = resolve_node(tree, key, id, node, parent, ancestors, keys)?;
        ancestors.pop();
        keys.pop();
        resolved.push(entry);
    }
    Ok(resolved)
}

/// Explicit orders first, ascending; missing orders last.
fn compare_order(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn resolve_node(
    tree: &NavTree,
    key: &str,
    id: NodeId,
    node: &NavNode,
    parent: &Parent<'_>,
    ancestors: &mut Vec<NodeId>,
    keys: &mut Vec<String>,
) -> Result<ResolvedNavNode, DocsiteError> {
    let segment = node.slug.clone().unwrap_or_else(|| key.to_string());
    let mut path = parent.path.to_vec();
    path.push(segment);

    let visible = !node.hide_from_nav;
    let rendered = visible && parent.rendered && !parent.hides_children;

    let children = match tree.children(id) {
        Some(children) if !children.is_empty() => {
            let this = Parent {
                path: &path,
                rendered,
                hides_children: node.hide_children,
            };
            resolve_siblings(tree, children, &this, ancestors, keys)?
        }
        _ => Vec::new(),
    };

    Ok(ResolvedNavNode {
        id,
        key: key.to_string(),
        title: node.title.clone(),
        description: node.description.clone(),
        slug: node.slug.clone(),
        order: node.order,
        icon: node.icon.clone(),
        color: node.color.clone(),
        status: node.status,
        url: format!("/{}", path.join("/")),
        path,
        visible,
        rendered,
        hide_children: node.hide_children,
        new_section: node.new_section,
        expanded: node.expanded,
        featured: node.featured,
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ordered(order: f64) -> NavNode {
        NavNode {
            order: Some(order),
            ..NavNode::default()
        }
    }

    fn keys(nodes: &[ResolvedNavNode]) -> Vec<&str> {
        nodes.iter().map(|node| node.key.as_str()).collect()
    }

    #[test]
    fn explicit_order_first_then_insertion_order() {
        let mut tree = NavTree::new();
        tree.insert_root("a", ordered(2.0));
        tree.insert_root("b", ordered(1.0));
        tree.insert_root("c", NavNode::default());

        let resolved = resolve(&tree).expect("acyclic");
        assert_eq!(keys(&resolved.nodes), vec!["b", "a", "c"]);
    }

    #[test]
    fn equal_order_keeps_insertion_order() {
        let mut tree = NavTree::new();
        tree.insert_root("z", NavNode::default());
        tree.insert_root("y", ordered(5.0));
        tree.insert_root("x", ordered(5.0));
        tree.insert_root("w", ordered(-1.0));

        let resolved = resolve(&tree).expect("acyclic");
        assert_eq!(keys(&resolved.nodes), vec!["w", "y", "x", "z"]);
    }

    #[test]
    fn fractional_order_slots_between_siblings() {
        let json: NavJson = serde_json::from_str(
            r#"{"children": {"a": {"order": 1.5}, "b": {"order": 1}, "c": {"order": 2}}}"#,
        )
        .expect("fractional orders parse");
        let resolved = resolve(&NavTree::from_json(&json)).expect("acyclic");
        assert_eq!(keys(&resolved.nodes), vec!["b", "a", "c"]);
        assert_eq!(resolved.nodes[1].order, Some(1.5));
    }

    #[test]
    fn self_child_is_a_cycle() {
        let mut tree = NavTree::new();
        let x = tree.insert_root("x", NavNode::default());
        tree.attach_child(x, "x", x).expect("known ids");

        assert_eq!(
            resolve(&tree),
            Err(DocsiteError::Cycle {
                path: vec!["x".into(), "x".into()]
            })
        );
        assert!(tree.to_json().is_err());
    }

    #[test]
    fn indirect_cycle_is_detected() {
        let mut tree = NavTree::new();
        let a = tree.insert_root("a", NavNode::default());
        let b = tree.insert_child(a, "b", NavNode::default()).expect("parent");
        tree.attach_child(b, "back", a).expect("known ids");

        assert!(matches!(
            resolve(&tree),
            Err(DocsiteError::Cycle { path }) if path == ["a", "b", "back"]
        ));
    }

    #[test]
    fn shared_subtree_and_duplicate_slugs_are_legal() {
        let mut tree = NavTree::new();
        let shared = tree.add_node(NavNode {
            slug: Some("overview".into()),
            ..NavNode::default()
        });
        let left = tree.insert_root("left", NavNode::default());
        let right = tree.insert_root("right", NavNode::default());
        tree.attach_child(left, "overview", shared).expect("known ids");
        tree.attach_child(right, "overview", shared).expect("known ids");

        let resolved = resolve(&tree).expect("a DAG is not a cycle");
        let urls: Vec<_> = resolved.walk().iter().map(|n| n.url.clone()).collect();
        assert_eq!(
            urls,
            vec!["/left", "/left/overview", "/right", "/right/overview"]
        );
    }

    #[test]
    fn hidden_nodes_are_flagged_not_dropped() {
        let mut tree = NavTree::new();
        let parent = tree.insert_root(
            "components",
            NavNode {
                hide_children: true,
                ..NavNode::default()
            },
        );
        tree.insert_child(parent, "button", NavNode::default())
            .expect("parent");
        tree.insert_root(
            "secret",
            NavNode {
                hide_from_nav: true,
                ..NavNode::default()
            },
        );

        let resolved = resolve(&tree).expect("acyclic");
        assert_eq!(resolved.node_count(), tree.len());

        let button = resolved.find("/components/button").expect("kept");
        assert!(button.visible);
        assert!(!button.rendered);

        let secret = resolved.find("/secret").expect("kept");
        assert!(!secret.visible);
        assert!(!secret.rendered);

        let shown = resolved.rendered();
        assert_eq!(keys(&shown.nodes), vec!["components"]);
        assert!(shown.nodes[0].children.is_empty());
    }

    #[test]
    fn flags_are_not_inherited() {
        let mut tree = NavTree::new();
        let parent = tree.insert_root(
            "foundations",
            NavNode {
                expanded: true,
                featured: true,
                ..NavNode::default()
            },
        );
        tree.insert_child(parent, "color", NavNode::default())
            .expect("parent");

        let resolved = resolve(&tree).expect("acyclic");
        let child = &resolved.nodes[0].children[0];
        assert!(!child.expanded);
        assert!(!child.featured);
    }

    #[test]
    fn slug_overrides_key_in_urls() {
        let json: NavJson = serde_json::from_str(
            r#"{"children": {"Tokens": {"slug": "design-tokens", "children": {"color": {}}}}}"#,
        )
        .expect("nav json");
        let resolved = resolve(&NavTree::from_json(&json)).expect("acyclic");
        let child = &resolved.nodes[0].children[0];
        assert_eq!(child.path, vec!["design-tokens", "color"]);
        assert_eq!(child.url, "/design-tokens/color");
    }

    #[test]
    fn json_keeps_document_order() {
        let raw = r#"{"children": {"zeta": {}, "alpha": {}, "mid": {"order": 1}}}"#;
        let json: NavJson = serde_json::from_str(raw).expect("nav json");
        let tree = NavTree::from_json(&json);

        let resolved = resolve(&tree).expect("acyclic");
        insta::assert_json_snapshot!(keys(&resolved.nodes), @r#"
        [
          "mid",
          "zeta",
          "alpha"
        ]
        "#);

        assert_eq!(tree.to_json().expect("acyclic"), json);
    }

    #[test]
    fn sitemap_includes_hidden_nodes() {
        let mut tree = NavTree::new();
        tree.insert_root(
            "hidden",
            NavNode {
                hide_from_nav: true,
                title: Some("Hidden".into()),
                ..NavNode::default()
            },
        );
        let resolved = resolve(&tree).expect("acyclic");
        let sitemap = resolved.sitemap(Some("https://example.com/"));
        assert_eq!(
            sitemap,
            vec![SitemapEntry {
                loc: "https://example.com/hidden".into(),
                title: Some("Hidden".into()),
                visible: false,
                depth: 1,
            }]
        );
    }

    #[test]
    fn digest_tracks_content_not_ids() {
        let mut first = NavTree::new();
        first.add_node(NavNode::default());
        first.insert_root("a", ordered(1.0));

        let mut second = NavTree::new();
        second.insert_root("a", ordered(1.0));

        let one = resolve(&first).expect("acyclic").digest();
        let two = resolve(&second).expect("acyclic").digest();
        assert_eq!(one, two);
        assert!(one.starts_with(NAV_DIGEST_PREFIX));

        second.node_mut(NodeId(0)).expect("node").featured = true;
        assert_ne!(one, resolve(&second).expect("acyclic").digest());
    }

    #[test]
    fn digest_covers_order_and_slug() {
        let mut tree = NavTree::new();
        let a = tree.insert_root("a", ordered(1.0));
        let base = resolve(&tree).expect("acyclic").digest();
        assert_eq!(base.len(), NAV_DIGEST_PREFIX.len() + 64);

        tree.node_mut(a).expect("node").order = Some(1.5);
        let reordered = resolve(&tree).expect("acyclic").digest();
        assert_ne!(base, reordered);

        tree.node_mut(a).expect("node").slug = Some("alpha".into());
        assert_ne!(reordered, resolve(&tree).expect("acyclic").digest());
    }

    #[test]
    fn attaching_unknown_node_fails() {
        let mut tree = NavTree::new();
        let a = tree.insert_root("a", NavNode::default());
        assert_eq!(
            tree.attach_child(a, "ghost", NodeId(7)),
            Err(DocsiteError::UnknownNode(NodeId(7)))
        );
    }
}
