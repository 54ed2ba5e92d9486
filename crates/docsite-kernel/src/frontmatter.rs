//! Frontmatter records produced by the content loader.
//!
//! Parsing frontmatter out of markdown happens upstream; this module only
//! fixes the shape of what arrives, so the site builder and the search
//! payloads agree on field names and status tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle tag shown next to a page or component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    New,
    Deprecated,
    Alpha,
    Beta,
    Information,
    Legacy,
    Warning,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Deprecated => "Deprecated",
            Self::Alpha => "Alpha",
            Self::Beta => "Beta",
            Self::Information => "Information",
            Self::Legacy => "Legacy",
            Self::Warning => "Warning",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "new" => Ok(Self::New),
            "deprecated" => Ok(Self::Deprecated),
            "alpha" => Ok(Self::Alpha),
            "beta" => Ok(Self::Beta),
            "information" => Ok(Self::Information),
            "legacy" => Ok(Self::Legacy),
            "warning" => Ok(Self::Warning),
            _ => Err(format!("unknown status: {s}")),
        }
    }
}

/// A scalar that content authors may write either quoted or bare.
///
/// Keywords like `2` and release markers like `v10.1` both show up in
/// frontmatter; both are kept as their text form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl TextOrNumber {
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => number.to_string(),
        }
    }
}

/// A live example attached to a component page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    pub file_name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Metadata block at the top of a content document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav_title: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub no_index: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lede: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_discussions_link: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<TextOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default)]
    pub hide_from_nav: bool,
    #[serde(default)]
    pub hide_children: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_img: Option<String>,
    #[serde(default)]
    pub expanded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released_in: Option<TextOrNumber>,
    #[serde(default, rename = "showTOC")]
    pub show_toc: bool,
    #[serde(default, rename = "collapsibleTOC")]
    pub collapsible_toc: bool,
    #[serde(default)]
    pub new_section: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub primitives: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
}

impl FrontMatter {
    /// The label used in navigation: `navTitle` when set, else `title`.
    pub fn nav_label(&self) -> &str {
        self.nav_title.as_deref().unwrap_or(&self.title)
    }

    /// Keywords normalized to text.
    pub fn keyword_texts(&self) -> Vec<String> {
        self.keywords.iter().map(TextOrNumber::to_text).collect()
    }
}
