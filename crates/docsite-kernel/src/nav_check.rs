//! Deterministic navigation lint.

use crate::error::DocsiteError;
use crate::nav::{NavTree, ResolvedNavNode, resolve};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::OnceLock;

pub const NAV_CHECK_KIND: &str = "docsite.nav.check.v1";

pub const FAILURE_CLASS_SLUG_INVALID: &str = "nav.slug.invalid";
pub const FAILURE_CLASS_CYCLE: &str = "nav.cycle";
pub const FAILURE_CLASS_UNRESOLVED: &str = "nav.unresolved";
pub const WARNING_CLASS_TITLE_MISSING: &str = "nav.title.missing";
pub const WARNING_CLASS_ORDER_DUPLICATE: &str = "nav.order.duplicate";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavFinding {
    pub url: String,
    pub class: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavCheckSummary {
    pub node_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavCheckReport {
    pub check_kind: String,
    pub result: String,
    pub failure_classes: Vec<String>,
    pub warning_classes: Vec<String>,
    pub errors: Vec<NavFinding>,
    pub warnings: Vec<NavFinding>,
    pub summary: NavCheckSummary,
}

impl NavCheckReport {
    pub fn accepted(&self) -> bool {
        self.result == "accepted"
    }
}

fn slug_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug regex must compile"))
}

pub fn is_valid_slug(slug: &str) -> bool {
    slug_re().is_match(slug)
}

fn collect_classes(findings: &[NavFinding]) -> Vec<String> {
    findings
        .iter()
        .map(|finding| finding.class.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn check_nav(tree: &NavTree) -> NavCheckReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut node_count = 0;

    match resolve(tree) {
        Ok(resolved) => {
            node_count = resolved.node_count();
            check_siblings(&resolved.nodes, "/", &mut errors, &mut warnings);
        }
        Err(DocsiteError::Cycle { path }) => errors.push(NavFinding {
            url: format!("/{}", path.join("/")),
            class: FAILURE_CLASS_CYCLE.to_string(),
            message: format!("node revisits an ancestor via {}", path.join(" > ")),
        }),
        Err(other) => errors.push(NavFinding {
            url: "/".to_string(),
            class: FAILURE_CLASS_UNRESOLVED.to_string(),
            message: other.to_string(),
        }),
    }

    let failure_classes = collect_classes(&errors);
    let warning_classes = collect_classes(&warnings);
    let result = if errors.is_empty() {
        "accepted"
    } else {
        "rejected"
    };

    NavCheckReport {
        check_kind: NAV_CHECK_KIND.to_string(),
        result: result.to_string(),
        failure_classes,
        warning_classes,
        summary: NavCheckSummary {
            node_count,
            error_count: errors.len(),
            warning_count: warnings.len(),
        },
        errors,
        warnings,
    }
}

fn check_siblings(
    siblings: &[ResolvedNavNode],
    parent_url: &str,
    errors: &mut Vec<NavFinding>,
    warnings: &mut Vec<NavFinding>,
) {
    let mut orders: Vec<(f64, &str)> = Vec::new();
    for node in siblings {
        if let Some(order) = node.order {
            orders.push((order, &node.key));
        }

        if let Some(slug) = node.slug.as_deref() {
            if !is_valid_slug(slug) {
                errors.push(NavFinding {
                    url: node.url.clone(),
                    class: FAILURE_CLASS_SLUG_INVALID.to_string(),
                    message: format!("slug `{slug}` is not lowercase kebab-case"),
                });
            }
        }

        if node.title.is_none() && node.children.is_empty() {
            warnings.push(NavFinding {
                url: node.url.clone(),
                class: WARNING_CLASS_TITLE_MISSING.to_string(),
                message: "leaf node has no title".to_string(),
            });
        }

        check_siblings(&node.children, &node.url, errors, warnings);
    }

    orders.sort_by(|a, b| a.0.total_cmp(&b.0));
    for run in orders.chunk_by(|a, b| a.0.total_cmp(&b.0).is_eq()) {
        if run.len() > 1 {
            let keys: Vec<&str> = run.iter().map(|&(_, key)| key).collect();
            warnings.push(NavFinding {
                url: parent_url.to_string(),
                class: WARNING_CLASS_ORDER_DUPLICATE.to_string(),
                message: format!("order {} shared by {}", run[0].0, keys.join(", ")),
            });
        }
    }
}
