use crate::support::{print_json_or_exit, read_json_file_or_exit};
use docsite_kernel::{SiteJson, SiteNavOptions, build_nav_from_site};

pub fn run(site_path: String, include_drafts: bool, json_output: bool) {
    let site: SiteJson = read_json_file_or_exit(&site_path, "site manifest");
    let options = SiteNavOptions { include_drafts };
    let nav = build_nav_from_site(&site, options)
        .and_then(|tree| tree.to_json())
        .unwrap_or_else(|e| {
            eprintln!("error: {e}");
            std::process::exit(1);
        });

    if json_output {
        print_json_or_exit(&nav, "site-nav");
    } else {
        println!("docsite site-nav");
        println!("  Site path: {site_path}");
        println!("  Entries: {}", site.len());
        println!("  Include drafts: {include_drafts}");
        println!("  Top-level sections: {}", nav.children.len());
        for (key, item) in &nav.children {
            let title = item.node.title.as_deref().unwrap_or(key);
            println!("  - {title} ({} children)", item.children.len());
        }
    }
}
