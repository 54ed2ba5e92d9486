//! Long-form content records: patterns and quick guides.
//!
//! A pattern page documents either one way of solving a problem or several
//! variants of it. Both shapes arrive untagged; the variant list is what
//! tells them apart.

use crate::frontmatter::{FrontMatter, Status, TextOrNumber};
use crate::meta::PatternMeta;
use serde::{Deserialize, Serialize};

/// Markdown source, rendered downstream.
pub type MarkdownString = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternExample {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandbox_context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternVariant {
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub how_it_helps: MarkdownString,
    pub useful_to_know: MarkdownString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<PatternExample>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleVariantPattern {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub related_resources: MarkdownString,
    pub how_it_helps: MarkdownString,
    pub useful_to_know: MarkdownString,
    pub example: PatternExample,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiVariantPattern {
    pub variants: Vec<PatternVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub related_resources: MarkdownString,
}

/// A pattern page body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pattern {
    Single(SingleVariantPattern),
    Multi(MultiVariantPattern),
}

impl Pattern {
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Single(pattern) => pattern.description.as_deref(),
            Self::Multi(pattern) => pattern.description.as_deref(),
        }
    }

    pub fn related_resources(&self) -> &str {
        match self {
            Self::Single(pattern) => &pattern.related_resources,
            Self::Multi(pattern) => &pattern.related_resources,
        }
    }

    /// A single-variant pattern counts as one variant.
    pub fn variant_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multi(pattern) => pattern.variants.len(),
        }
    }

    pub fn variant(&self, slug: &str) -> Option<&PatternVariant> {
        match self {
            Self::Single(_) => None,
            Self::Multi(pattern) => pattern.variants.iter().find(|v| v.slug == slug),
        }
    }

    /// Every live example, in page order.
    pub fn examples(&self) -> Vec<&PatternExample> {
        match self {
            Self::Single(pattern) => vec![&pattern.example],
            Self::Multi(pattern) => pattern
                .variants
                .iter()
                .filter_map(|variant| variant.example.as_ref())
                .collect(),
        }
    }
}

/// Frontmatter of a pattern page. Unlike [`FrontMatter`], `description`
/// and `lede` are required: the index page lists the description and the
/// detail page opens with the lede.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternFrontMatter {
    pub title: String,
    pub description: String,
    pub lede: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav_title: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default)]
    pub hide_from_nav: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_img: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<TextOrNumber>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
}

impl PatternFrontMatter {
    /// Payload for the pattern's search hit.
    pub fn search_meta(&self) -> PatternMeta {
        PatternMeta {
            title: self.title.clone(),
            description: self.description.clone(),
            preview_img: self.preview_img.clone(),
        }
    }

    /// General frontmatter, for feeding a pattern page to the site builder.
    pub fn to_front_matter(&self) -> FrontMatter {
        FrontMatter {
            title: self.title.clone(),
            nav_title: self.nav_title.clone(),
            draft: self.draft,
            description: Some(self.description.clone()),
            lede: Some(self.lede.clone()),
            order: self.order,
            status: self.status,
            hide_from_nav: self.hide_from_nav,
            preview_img: self.preview_img.clone(),
            keywords: self.keywords.clone(),
            variants: self.variants.clone(),
            ..FrontMatter::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickGuideRow {
    pub question: String,
    pub answer: String,
}

/// Question/answer table shown at the top of a page, opened by a query
/// parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickGuide {
    pub title: String,
    pub query_param: String,
    pub rows: Vec<QuickGuideRow>,
}

impl QuickGuide {
    pub fn answer(&self, question: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.question == question)
            .map(|row| row.answer.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_variant_pattern_parses_untagged() {
        let raw = r#"{
            "title": "Date picking",
            "description": "Pick one date or a range.",
            "relatedResources": "* [Date picker](/components/date-picker)",
            "howItHelps": "Keeps dates unambiguous.",
            "usefulToKnow": "Default to today.",
            "example": {"code": "<DatePicker />", "previewContext": "<Page>{children}</Page>"}
        }"#;

        let pattern: Pattern = serde_json::from_str(raw).expect("single variant");
        assert!(matches!(pattern, Pattern::Single(_)));
        assert_eq!(pattern.variant_count(), 1);
        assert_eq!(pattern.description(), Some("Pick one date or a range."));
        assert_eq!(pattern.examples()[0].code, "<DatePicker />");
        assert!(pattern.variant("single-date").is_none());
    }

    #[test]
    fn multi_variant_pattern_parses_untagged() {
        let raw = r#"{
            "relatedResources": "",
            "variants": [
                {
                    "title": "Single date",
                    "slug": "single-date",
                    "howItHelps": "One field.",
                    "usefulToKnow": "",
                    "example": {"code": "<A />"}
                },
                {
                    "title": "Date range",
                    "slug": "date-range",
                    "howItHelps": "Two fields.",
                    "usefulToKnow": ""
                }
            ]
        }"#;

        let pattern: Pattern = serde_json::from_str(raw).expect("multi variant");
        assert!(matches!(pattern, Pattern::Multi(_)));
        assert_eq!(pattern.variant_count(), 2);
        assert_eq!(
            pattern.variant("date-range").map(|v| v.title.as_str()),
            Some("Date range")
        );
        assert_eq!(pattern.examples().len(), 1);
        assert_eq!(pattern.description(), None);
    }

    #[test]
    fn pattern_without_either_shape_is_rejected() {
        let raw = r#"{"title": "Half a pattern", "relatedResources": ""}"#;
        assert!(serde_json::from_str::<Pattern>(raw).is_err());
    }

    #[test]
    fn pattern_front_matter_requires_description_and_lede() {
        let missing = r#"{"title": "Date picking", "description": "Pick dates."}"#;
        assert!(serde_json::from_str::<PatternFrontMatter>(missing).is_err());

        let raw = r#"{
            "title": "Date picking",
            "description": "Pick dates.",
            "lede": "Dates are hard.",
            "order": 2.5,
            "previewImg": "/images/patterns/date-picking.png",
            "variants": ["single-date", "date-range"]
        }"#;
        let fm: PatternFrontMatter = serde_json::from_str(raw).expect("pattern frontmatter");

        let meta = fm.search_meta();
        assert_eq!(meta.title, "Date picking");
        assert_eq!(meta.preview_img.as_deref(), Some("/images/patterns/date-picking.png"));

        let general = fm.to_front_matter();
        assert_eq!(general.lede.as_deref(), Some("Dates are hard."));
        assert_eq!(general.order, Some(2.5));
        assert_eq!(general.variants, vec!["single-date", "date-range"]);
    }

    #[test]
    fn quick_guide_looks_up_answers() {
        let raw = r#"{
            "title": "Which button should I use?",
            "queryParam": "button-guide",
            "rows": [{"question": "Primary action?", "answer": "Use a primary button."}]
        }"#;
        let guide: QuickGuide = serde_json::from_str(raw).expect("quick guide");
        assert_eq!(guide.query_param, "button-guide");
        assert_eq!(guide.answer("Primary action?"), Some("Use a primary button."));
        assert_eq!(guide.answer("Secondary?"), None);
    }
}
