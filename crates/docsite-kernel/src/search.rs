//! Search aggregation: rank scored hits and group them by category.
//!
//! The indexer hands over hits in the loose wire shape ([`RawSearchResult`]),
//! where `meta` is a record with one optional slot per category. Aggregation
//! validates each hit into a [`SearchResult`] whose payload is a sum type,
//! skips (and reports) hits that do not validate, then produces:
//!
//! Input read straight from a file goes through [`aggregate_records`], which
//! parses each record on its own so a malformed one only skips itself.
//!
//! ```text
//! ranked   score desc → category priority → id asc
//! grouped  one group per present category, in priority order
//! ```

use crate::error::{AggregationWarning, DocsiteError};
use crate::meta::{ComponentMeta, FoundationMeta, IconMeta, PatternMeta, TokenMeta};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Result categories, declared in priority order.
///
/// The derived `Ord` is the priority used for tie-breaking and for group
/// order, so the variant order must not change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultCategory {
    Foundations,
    Components,
    Patterns,
    Tokens,
    Icons,
}

impl SearchResultCategory {
    pub const PRIORITY: [Self; 5] = [
        Self::Foundations,
        Self::Components,
        Self::Patterns,
        Self::Tokens,
        Self::Icons,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Foundations => "foundations",
            Self::Components => "components",
            Self::Patterns => "patterns",
            Self::Tokens => "tokens",
            Self::Icons => "icons",
        }
    }
}

impl fmt::Display for SearchResultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SearchResultCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_ascii_lowercase();
        Self::PRIORITY
            .into_iter()
            .find(|category| category.as_str() == name)
            .ok_or_else(|| format!("unknown search result category: {s}"))
    }
}

/// Wire form of `meta`: at most one slot is expected to be populated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawSearchMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foundations: Option<FoundationMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<ComponentMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<PatternMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<TokenMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<IconMeta>,
}

impl RawSearchMeta {
    /// Categories whose slot is populated, in priority order.
    pub fn populated(&self) -> Vec<SearchResultCategory> {
        let slots = [
            (SearchResultCategory::Foundations, self.foundations.is_some()),
            (SearchResultCategory::Components, self.components.is_some()),
            (SearchResultCategory::Patterns, self.patterns.is_some()),
            (SearchResultCategory::Tokens, self.tokens.is_some()),
            (SearchResultCategory::Icons, self.icons.is_some()),
        ];
        slots
            .into_iter()
            .filter_map(|(category, present)| present.then_some(category))
            .collect()
    }
}

/// A search hit as emitted by the indexer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSearchResult {
    pub id: String,
    pub category: SearchResultCategory,
    pub url: String,
    pub score: f64,
    #[serde(default)]
    pub meta: RawSearchMeta,
}

/// Envelope fields of a record, read once `category` and `meta` are taken out.
#[derive(Deserialize)]
struct RecordEnvelope {
    id: String,
    url: String,
    score: f64,
}

impl RawSearchResult {
    /// Read one indexer record from untyped JSON.
    ///
    /// An unusable envelope (not an object, unknown category, missing id, url
    /// or score) fails with [`DocsiteError::MalformedRecord`]; a meta record
    /// that does not parse fails with [`DocsiteError::MalformedMeta`].
    pub fn from_value(index: usize, value: Value) -> Result<Self, DocsiteError> {
        let Value::Object(mut fields) = value else {
            return Err(DocsiteError::MalformedRecord {
                id: format!("#{index}"),
                reason: "record is not a JSON object".to_string(),
            });
        };
        let id = fields
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| format!("#{index}"));
        let malformed = |reason: String| DocsiteError::MalformedRecord {
            id: id.clone(),
            reason,
        };

        let category = match fields.remove("category") {
            Some(Value::String(name)) => name.parse::<SearchResultCategory>().map_err(malformed)?,
            Some(_) => return Err(malformed("`category` is not a string".to_string())),
            None => return Err(malformed("missing field `category`".to_string())),
        };
        let meta = fields.remove("meta").unwrap_or(Value::Null);
        let envelope: RecordEnvelope = serde_json::from_value(Value::Object(fields))
            .map_err(|err| malformed(err.to_string()))?;

        let meta = match meta {
            Value::Null => RawSearchMeta::default(),
            meta => serde_json::from_value(meta).map_err(|err| DocsiteError::MalformedMeta {
                id: envelope.id.clone(),
                category,
                reason: err.to_string(),
            })?,
        };

        Ok(Self {
            id: envelope.id,
            category,
            url: envelope.url,
            score: envelope.score,
            meta,
        })
    }
}

/// Validated category payload. The variant is the category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMeta {
    Foundations(FoundationMeta),
    Components(ComponentMeta),
    Patterns(PatternMeta),
    Tokens(TokenMeta),
    Icons(IconMeta),
}

impl SearchMeta {
    pub fn category(&self) -> SearchResultCategory {
        match self {
            Self::Foundations(_) => SearchResultCategory::Foundations,
            Self::Components(_) => SearchResultCategory::Components,
            Self::Patterns(_) => SearchResultCategory::Patterns,
            Self::Tokens(_) => SearchResultCategory::Tokens,
            Self::Icons(_) => SearchResultCategory::Icons,
        }
    }

    /// Human label for listings.
    pub fn title(&self) -> &str {
        match self {
            Self::Foundations(meta) => &meta.title,
            Self::Components(meta) => &meta.title,
            Self::Patterns(meta) => &meta.title,
            Self::Tokens(meta) => &meta.token.name,
            Self::Icons(meta) => &meta.icon.name,
        }
    }
}

/// A validated search hit.
///
/// Fields are private so the category can only come from the payload.
/// Serializes back to the wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RawSearchResult", try_from = "RawSearchResult")]
pub struct SearchResult {
    id: String,
    url: String,
    score: f64,
    meta: SearchMeta,
}

impl SearchResult {
    /// Fails with [`DocsiteError::NonFiniteScore`] for NaN or infinite scores.
    pub fn new(
        id: impl Into<String>,
        url: impl Into<String>,
        score: f64,
        meta: SearchMeta,
    ) -> Result<Self, DocsiteError> {
        let id = id.into();
        if !score.is_finite() {
            return Err(DocsiteError::NonFiniteScore { id });
        }
        Ok(Self {
            id,
            url: url.into(),
            score,
            meta,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn meta(&self) -> &SearchMeta {
        &self.meta
    }

    pub fn category(&self) -> SearchResultCategory {
        self.meta.category()
    }
}

impl TryFrom<RawSearchResult> for SearchResult {
    type Error = DocsiteError;

    fn try_from(raw: RawSearchResult) -> Result<Self, Self::Error> {
        let found = raw.meta.populated();
        if found.as_slice() != [raw.category] {
            return Err(DocsiteError::MetaMismatch {
                id: raw.id,
                category: raw.category,
                found,
            });
        }

        let RawSearchMeta {
            foundations,
            components,
            patterns,
            tokens,
            icons,
        } = raw.meta;
        let meta = match raw.category {
            SearchResultCategory::Foundations => foundations.map(SearchMeta::Foundations),
            SearchResultCategory::Components => components.map(SearchMeta::Components),
            SearchResultCategory::Patterns => patterns.map(SearchMeta::Patterns),
            SearchResultCategory::Tokens => tokens.map(SearchMeta::Tokens),
            SearchResultCategory::Icons => icons.map(SearchMeta::Icons),
        };
        let Some(meta) = meta else {
            return Err(DocsiteError::MetaMismatch {
                id: raw.id,
                category: raw.category,
                found: Vec::new(),
            });
        };

        Self::new(raw.id, raw.url, raw.score, meta)
    }
}

impl From<SearchResult> for RawSearchResult {
    fn from(result: SearchResult) -> Self {
        let category = result.category();
        let mut meta = RawSearchMeta::default();
        match result.meta {
            SearchMeta::Foundations(payload) => meta.foundations = Some(payload),
            SearchMeta::Components(payload) => meta.components = Some(payload),
            SearchMeta::Patterns(payload) => meta.patterns = Some(payload),
            SearchMeta::Tokens(payload) => meta.tokens = Some(payload),
            SearchMeta::Icons(payload) => meta.icons = Some(payload),
        }
        Self {
            id: result.id,
            category,
            url: result.url,
            score: result.score,
            meta,
        }
    }
}

/// Results of one category, in rank order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultGroup {
    pub category: SearchResultCategory,
    pub results: Vec<SearchResult>,
}

pub type GroupedSearchResults = Vec<SearchResultGroup>;

/// Output of [`aggregate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregation {
    pub ranked: Vec<SearchResult>,
    pub grouped: GroupedSearchResults,
    pub warnings: Vec<AggregationWarning>,
}

impl Aggregation {
    /// Number of input records skipped during validation.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn group(&self, category: SearchResultCategory) -> Option<&SearchResultGroup> {
        self.grouped.iter().find(|group| group.category == category)
    }
}

/// Rank order: score descending, then category priority, then id ascending.
pub fn compare_rank(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.category().cmp(&b.category()))
        .then_with(|| a.id.cmp(&b.id))
}

/// Validate, rank and group indexer hits.
///
/// Hits that fail validation are excluded from both `ranked` and `grouped`
/// and reported in `warnings`.
pub fn aggregate(results: Vec<RawSearchResult>) -> Aggregation {
    aggregate_checked(results.into_iter().map(SearchResult::try_from))
}

/// [`aggregate`] over untyped JSON records.
///
/// Each record is parsed on its own; one that does not parse is skipped and
/// reported like any other invalid hit.
pub fn aggregate_records(records: Vec<Value>) -> Aggregation {
    aggregate_checked(records.into_iter().enumerate().map(|(index, record)| {
        RawSearchResult::from_value(index, record).and_then(SearchResult::try_from)
    }))
}

fn aggregate_checked(
    results: impl Iterator<Item = Result<SearchResult, DocsiteError>>,
) -> Aggregation {
    let mut input_count = 0usize;
    let mut valid = Vec::new();
    let mut warnings = Vec::new();

    for checked in results {
        input_count += 1;
        match checked {
            Ok(result) => valid.push(result),
            Err(err) => {
                tracing::warn!(error = %err, "skipping search result");
                if let Some(warning) = AggregationWarning::from_error(&err) {
                    warnings.push(warning);
                }
            }
        }
    }

    let mut aggregation = aggregate_validated(valid);
    aggregation.warnings = warnings;
    tracing::debug!(
        input = input_count,
        ranked = aggregation.ranked.len(),
        groups = aggregation.grouped.len(),
        skipped = aggregation.warning_count(),
        "aggregated search results"
    );
    aggregation
}

/// Rank and group results that are already validated.
pub fn aggregate_validated(mut results: Vec<SearchResult>) -> Aggregation {
    results.sort_by(compare_rank);

    let mut by_category: BTreeMap<SearchResultCategory, Vec<SearchResult>> = BTreeMap::new();
    for result in &results {
        by_category
            .entry(result.category())
            .or_default()
            .push(result.clone());
    }

    // BTreeMap iterates in `Ord` order, which is the priority order.
    let grouped = by_category
        .into_iter()
        .map(|(category, results)| SearchResultGroup { category, results })
        .collect();

    Aggregation {
        ranked: results,
        grouped,
        warnings: Vec::new(),
    }
}
