//! Basic page generation example.
//!
//! Run with: `cargo run --example basic_page`

use discordless_page::{Catalog, PageOptions, render_page};

fn main() {
    // The data module bundled with the crate
    let catalog = Catalog::bundled().expect("bundled data is valid JSON");

    let partition = catalog.partition();
    println!(
        "{} popular, {} less popular",
        partition.popular.len(),
        partition.less_popular.len()
    );

    // Render to HTML
    let html = render_page(&catalog, &PageOptions::default());

    // Write to file
    let output_path = "discordless.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
