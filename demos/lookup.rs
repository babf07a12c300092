//! Example: Resolve filenames to MIME types
//!
//! This example looks up every filename given on the command line, falling
//! back to a small sample set, and prints each resolved MIME type with
//! charset annotation.

use mimetab::Registry;

fn main() {
    let registry = Registry::new();

    // Filenames from the command line, or a sample set
    let args: Vec<String> = std::env::args().skip(1).collect();
    let filenames = if args.is_empty() {
        vec![
            "report.pdf".to_string(),
            "notes.txt".to_string(),
            "index.html".to_string(),
            "photo.JPG".to_string(),
            "backup.tar.gz".to_string(),
            "README".to_string(),
            ".bashrc".to_string(),
            "mystery.xyz".to_string(),
        ]
    } else {
        args
    };

    println!("Catalog entries: {}\n", registry.len());
    for filename in &filenames {
        match registry.lookup(filename, true, None) {
            Some(mime_type) => println!("  {:<24} {}", filename, mime_type),
            None => println!("  {:<24} unknown", filename),
        }
    }
}
