// SharedRegistry tests: handle cloning, cross-thread visibility, and
// snapshot isolation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use mimetab::{Registry, SharedRegistry, DEFAULT_CHARSET};

#[test]
fn test_cloned_handles_share_state() {
    let registry = SharedRegistry::new();
    let other = registry.clone();

    assert!(registry.set(".note", "text/x-note"));
    assert_eq!(
        other.lookup("today.note", false, None),
        Some("text/x-note".to_string())
    );

    assert!(other.del(".note"));
    assert_eq!(registry.lookup("today.note", false, None), None);
}

#[test]
fn test_writes_from_spawned_threads() {
    let registry = SharedRegistry::new();
    let before = registry.len();

    // 1. Each thread registers its own extension through a handle clone
    let mut handles = Vec::new();
    for i in 0..8 {
        let registry = registry.clone();
        handles.push(thread::spawn(move || {
            let key = format!(".thread{}", i);
            assert!(registry.set(&key, "application/x-thread"));
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    // 2. Every entry is visible afterwards
    assert_eq!(registry.len(), before + 8);
    for i in 0..8 {
        let filename = format!("file.thread{}", i);
        assert_eq!(
            registry.lookup(&filename, false, None),
            Some("application/x-thread".to_string())
        );
    }
}

#[test]
fn test_concurrent_readers_and_writer() {
    let registry = SharedRegistry::new();
    let lookups = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for _ in 0..4 {
        let registry = registry.clone();
        let lookups = lookups.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..100 {
                // Seeded entries are never touched by the writer, so every
                // read must hit.
                let found = registry.lookup("report.pdf", false, None);
                assert_eq!(found, Some("application/pdf".to_string()));
                lookups.fetch_add(1, Ordering::SeqCst);
            }
        }));
    }

    let writer = {
        let registry = registry.clone();
        thread::spawn(move || {
            for i in 0..100 {
                registry.set(&format!(".gen{}", i), "application/x-generated");
            }
        })
    };

    for handle in handles {
        handle.join().unwrap();
    }
    writer.join().unwrap();

    assert_eq!(lookups.load(Ordering::SeqCst), 400);
    assert!(registry.contains(".gen99"));
}

#[test]
fn test_charset_through_handle() {
    let registry = SharedRegistry::new();
    assert_eq!(registry.charset(), DEFAULT_CHARSET);

    registry.set_charset("ISO-8859-1");
    assert_eq!(registry.charset(), "ISO-8859-1");
    assert_eq!(
        registry.lookup("notes.txt", true, None),
        Some("text/plain; charset=ISO-8859-1".to_string())
    );
}

/// Test that a snapshot is detached from later writes.
#[test]
fn test_snapshot_is_isolated() {
    let registry = SharedRegistry::new();
    let snapshot = registry.snapshot();

    registry.del(".pdf");
    registry.set(".novel", "text/x-novel");

    assert_eq!(
        snapshot.lookup("report.pdf", false, None),
        Some("application/pdf".to_string())
    );
    assert_eq!(snapshot.lookup("a.novel", false, None), None);
    assert_eq!(registry.lookup("report.pdf", false, None), None);
}

#[test]
fn test_for_each_visit_count() {
    let registry = SharedRegistry::new();
    let mut count = 0usize;
    registry.for_each(|_, _| count += 1);
    assert_eq!(count, registry.len());
}

#[test]
fn test_with_registry_wraps_custom_table() {
    let mut custom = Registry::empty();
    custom.set(".only", "application/x-only");

    let registry = SharedRegistry::with_registry(custom);
    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.lookup("file.only", false, None),
        Some("application/x-only".to_string())
    );
    assert_eq!(registry.lookup("report.pdf", false, None), None);
    assert_eq!(registry.get(".only"), Some("application/x-only".to_string()));
}

#[test]
fn test_default_handle_is_seeded() {
    let registry = SharedRegistry::default();
    assert!(!registry.is_empty());
    assert_eq!(
        registry.lookup("index.html", false, None),
        Some("text/html".to_string())
    );
}
