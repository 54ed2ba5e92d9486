use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docsite",
    about = "Docsite: resolve navigation trees and aggregate search results for documentation sites",
    version
)]
pub struct Cli {
    /// Path to docsite.toml (defaults to ./docsite.toml when present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a nav JSON file into an ordered, flagged tree
    NavResolve {
        /// Path to nav JSON (`{"children": {...}}`)
        nav: String,

        /// Drop nodes the sidebar would not show
        #[arg(long)]
        rendered_only: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Lint a nav JSON file (slugs, titles, duplicate orders)
    NavCheck {
        /// Path to nav JSON
        nav: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every navigation url, hidden pages included
    Sitemap {
        /// Path to nav JSON
        nav: String,

        /// Prefix for each location (overrides `base_url` from config)
        #[arg(long)]
        base_url: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build nav JSON from a site manifest (content path → frontmatter)
    SiteNav {
        /// Path to site JSON
        site: String,

        /// Keep entries marked as drafts (overrides `include_drafts` from config)
        #[arg(long)]
        include_drafts: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank and group a JSON array of search hits
    SearchAggregate {
        /// Path to search results JSON
        results: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
