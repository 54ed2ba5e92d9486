//! # Docsite Kernel
//!
//! The computational core behind a design-system documentation site: a
//! navigation tree resolver and a search result aggregator. Both are pure
//! functions over in-memory records; loading content, indexing and rendering
//! are collaborators that live elsewhere.
//!
//! ## Architecture
//!
//! ```text
//! SiteJson              ← content path → frontmatter manifest
//!     │ build_nav_from_site
//! NavTree               ← arena of NavNode, insertion-ordered children
//!     │ resolve / check_nav
//! ResolvedNav           ← ordered, flagged view (rendered, sitemap, digest)
//!
//! RawSearchResult*      ← indexer hits, loose meta record
//!     │ aggregate
//! Aggregation           ← ranked + grouped + skipped-record warnings
//! ```
//!
//! Alongside these live the content records the site feeds in: frontmatter,
//! pattern pages, quick guides and color palettes.

pub mod colors;
pub mod content;
pub mod error;
pub mod frontmatter;
pub mod meta;
pub mod nav;
pub mod nav_check;
pub mod search;
pub mod site;

pub use colors::{COLOR_SCALE_STEPS, ColorValue, ColorsJson};
pub use content::{
    MarkdownString, MultiVariantPattern, Pattern, PatternExample, PatternFrontMatter,
    PatternVariant, QuickGuide, QuickGuideRow, SingleVariantPattern,
};
pub use error::{AggregationWarning, DocsiteError, WarningKind};
pub use frontmatter::{Example, FrontMatter, Status, TextOrNumber};
pub use meta::{
    ComponentMeta, FoundationMeta, FoundationsCategory, IconMeta, IconMetadata, PatternMeta,
    TokenMeta, TokenProperties,
};
pub use nav::{
    NavItem, NavJson, NavNode, NavTree, NodeId, ResolvedNav, ResolvedNavNode, SitemapEntry,
    resolve,
};
pub use nav_check::{NAV_CHECK_KIND, NavCheckReport, NavFinding, NavCheckSummary, check_nav};
pub use search::{
    Aggregation, GroupedSearchResults, RawSearchMeta, RawSearchResult, SearchMeta, SearchResult,
    SearchResultCategory, SearchResultGroup, aggregate, aggregate_records, aggregate_validated,
};
pub use site::{SiteEntry, SiteJson, SiteNavOptions, build_nav_from_site};
