use crate::support::{print_json_or_exit, read_json_file_or_exit};
use docsite_kernel::{NavJson, NavTree, resolve};
use serde_json::json;

pub fn run(nav_path: String, base_url: Option<String>, json_output: bool) {
    let nav: NavJson = read_json_file_or_exit(&nav_path, "nav");
    let resolved = resolve(&NavTree::from_json(&nav)).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    let entries = resolved.sitemap(base_url.as_deref());

    if json_output {
        let payload = json!({
            "navPath": nav_path,
            "baseUrl": base_url,
            "entryCount": entries.len(),
            "entries": entries,
        });
        print_json_or_exit(&payload, "sitemap");
    } else {
        for entry in &entries {
            let hidden = if entry.visible { "" } else { " (hidden)" };
            println!("{}{hidden}", entry.loc);
        }
    }
}
