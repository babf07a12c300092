//! # mimetab - Nepsod MIME table
//!
//! A Rust-native extension-to-MIME-type catalog. Resolves filenames to MIME
//! type strings through a mutable registry seeded with the Apache httpd list.
//!
//! ## Overview
//!
//! mimetab derives a lookup key from a filename (the lowercased extension
//! from the last `.`, or the whole name for extension-less special files such
//! as `README`) and resolves it against a catalog of roughly 800 well-known
//! entries. Lookups can annotate `text/*` results with a charset and fall back
//! to a caller-supplied default type. The catalog can be extended or trimmed
//! at runtime.
//!
//! ## Core Concepts
//!
//! - **Registry**: the mutable catalog plus its default charset; `new()` is
//!   seeded with the built-in table, `empty()` starts blank
//! - **Charset**: per-lookup directive controlling `text/*` annotation
//! - **SharedRegistry**: clonable handle to one registry for concurrent use
//!
//! ## Example
//!
//! ```
//! use mimetab::Registry;
//!
//! let mut registry = Registry::new();
//!
//! assert_eq!(
//!     registry.lookup("report.pdf", false, None),
//!     Some("application/pdf".to_string())
//! );
//! assert_eq!(
//!     registry.lookup("notes.txt", true, None),
//!     Some("text/plain; charset=UTF-8".to_string())
//! );
//!
//! // Register a pair of custom extensions.
//! registry.set(".note,.scratch", "text/x-note");
//! assert_eq!(
//!     registry.lookup("today.note", false, None),
//!     Some("text/x-note".to_string())
//! );
//! ```

pub mod charset;
pub mod registry;
pub mod shared;

mod key;
mod seed;

pub use charset::{Charset, DEFAULT_CHARSET};
pub use registry::Registry;
pub use shared::SharedRegistry;
