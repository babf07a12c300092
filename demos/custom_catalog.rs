//! Example: Process-wide registry with custom entries
//!
//! This example wires a shared registry into a process-wide static, the way
//! an application would, then registers custom extensions, removes a built-in
//! row, and resolves filenames from several call sites and threads.

use std::thread;

use once_cell::sync::Lazy;

use mimetab::SharedRegistry;

static MIME_TABLE: Lazy<SharedRegistry> = Lazy::new(SharedRegistry::new);

fn resolve(filename: &str) -> String {
    MIME_TABLE
        .lookup(filename, true, Some("application/octet-stream"))
        .unwrap_or_default()
}

fn main() {
    // Register project-specific extensions
    MIME_TABLE.set(".note,.scratch", "text/x-note");
    MIME_TABLE.set(".blueprint", "application/x-blueprint");

    // Markdown is not in the built-in table; serve it as plain text
    MIME_TABLE.set(".md", "text/plain");

    // Retire a built-in row
    MIME_TABLE.del(".swf");

    println!("today.note       -> {}", resolve("today.note"));
    println!("draft.scratch    -> {}", resolve("draft.scratch"));
    println!("tower.blueprint  -> {}", resolve("tower.blueprint"));
    println!("README.md        -> {}", resolve("README.md"));
    println!("banner.swf       -> {}", resolve("banner.swf"));

    // Lookups from other threads go through the same table
    let worker = thread::spawn(|| resolve("worker.note"));
    println!("worker.note      -> {}", worker.join().unwrap());
}
