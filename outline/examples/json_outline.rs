//! JSON Outline Example
//!
//! Loads an exported outline, prints it, then clicks through a few rows and
//! prints where each click navigates.
//!
//! ```text
//! cargo run -p outline --example json_outline [path/to/outline.json]
//! ```

use std::fs::File;
use std::sync::Arc;

use log::LevelFilter;
use outline::prelude::*;
use serde_json::Value;
use simplelog::{Config, WriteLogger};

const DEFAULT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/examples/data/sample_outline.json");

fn print_view(controller: &OutlineController<JsonFileSource>) {
    println!("{}", controller.view().to_text());
    println!();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("json_outline.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_PATH.to_string());
    println!("Outline of {}\n", path);

    let controller = OutlineController::new()
        .with_navigate(|location: Value| println!("  -> navigate to {}", location));

    if let Some(fetch) = controller.set_document(Some(Arc::new(JsonFileSource::new(&path))))
        && let Err(e) = fetch.await
    {
        eprintln!("Error: {}", e);
        return;
    }
    if let Some(message) = controller.load_state().as_error() {
        eprintln!("Error: {}", message);
    }
    print_view(&controller);

    // Expand the first part and its introduction
    for row in [1, 2] {
        if let Some(node) = controller.visible_node(row) {
            println!("click row {} ({})", row, node.path);
        }
        controller.activate_row(row).finished().await;
    }
    print_view(&controller);

    // A leaf with an explicit destination
    println!("click row 3");
    controller.activate_row(3).finished().await;
    print_view(&controller);

    controller.expand_all();
    println!("expand all\n");
    print_view(&controller);

    controller.collapse_all();
    println!("collapse all\n");
    print_view(&controller);
}
