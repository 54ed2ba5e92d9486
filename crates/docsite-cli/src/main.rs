//! Docsite CLI: the `docsite` command.

mod cli;
mod commands;
mod config;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let config = config::load_or_exit(cli.config.as_deref());
    support::init_tracing(config.log_filter.as_deref());

    match cli.command {
        Commands::NavResolve {
            nav,
            rendered_only,
            json,
        } => commands::nav_resolve::run(nav, rendered_only, json),

        Commands::NavCheck { nav, json } => commands::nav_check::run(nav, json),

        Commands::Sitemap {
            nav,
            base_url,
            json,
        } => commands::sitemap::run(nav, base_url.or(config.base_url), json),

        Commands::SiteNav {
            site,
            include_drafts,
            json,
        } => commands::site_nav::run(site, include_drafts || config.include_drafts, json),

        Commands::SearchAggregate { results, json } => {
            commands::search_aggregate::run(results, json)
        }
    }
}
