use crate::support::{print_json_or_exit, read_json_file_or_exit};
use docsite_kernel::{NavJson, NavTree, ResolvedNavNode, resolve};
use serde_json::json;

fn print_node(node: &ResolvedNavNode, depth: usize) {
    let mut marks = Vec::new();
    if !node.visible {
        marks.push("hidden");
    } else if !node.rendered {
        marks.push("collapsed-away");
    }
    if node.expanded {
        marks.push("expanded");
    }
    if node.featured {
        marks.push("featured");
    }
    let status = node.status.map(|s| format!(" [{s}]")).unwrap_or_default();
    let marks = if marks.is_empty() {
        String::new()
    } else {
        format!(" ({})", marks.join(", "))
    };
    println!(
        "  {}{} {}{status}{marks}",
        "  ".repeat(depth),
        node.label(),
        node.url
    );
    for child in &node.children {
        print_node(child, depth + 1);
    }
}

pub fn run(nav_path: String, rendered_only: bool, json_output: bool) {
    let nav: NavJson = read_json_file_or_exit(&nav_path, "nav");
    let tree = NavTree::from_json(&nav);
    let resolved = resolve(&tree).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    let digest = resolved.digest();
    let node_count = resolved.node_count();
    let view = if rendered_only {
        resolved.rendered()
    } else {
        resolved
    };

    if json_output {
        let payload = json!({
            "navPath": nav_path,
            "nodeCount": node_count,
            "renderedOnly": rendered_only,
            "digest": digest,
            "nodes": view.nodes,
        });
        print_json_or_exit(&payload, "nav-resolve");
    } else {
        println!("docsite nav-resolve");
        println!("  Nav path: {nav_path}");
        println!("  Nodes: {node_count}");
        println!("  Digest: {digest}");
        for node in &view.nodes {
            print_node(node, 0);
        }
    }
}
