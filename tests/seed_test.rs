// Built-in catalog tests: spot checks across the media type families plus the
// rows with registration-order significance.

use mimetab::Registry;

fn mime_of(filename: &str) -> Option<String> {
    Registry::new().lookup(filename, false, None)
}

/// Test that the seeded catalog has the full built-in table.
#[test]
fn test_seeded_catalog_size() {
    let registry = Registry::new();
    assert_eq!(registry.len(), 807);
}

#[test]
fn test_application_family() {
    assert_eq!(mime_of("sheet.123"), Some("application/vnd.lotus-1-2-3".to_string()));
    assert_eq!(
        mime_of("game.n-gage"),
        Some("application/vnd.nokia.n-gage.symbian.install".to_string())
    );
    assert_eq!(
        mime_of("survey.sfd-hdstx"),
        Some("application/vnd.hydrostatix.sof-data".to_string())
    );
    assert_eq!(
        mime_of("layout.fe_launch"),
        Some("application/vnd.denovo.fcselayout-link".to_string())
    );
    assert_eq!(mime_of("bundle.zip"), Some("application/zip".to_string()));
    assert_eq!(mime_of("data.json"), Some("application/json".to_string()));
    assert_eq!(mime_of("app.js"), Some("application/javascript".to_string()));
}

/// Test that every member of a comma row resolves to the shared value.
#[test]
fn test_comma_row_members() {
    for name in ["a.c4g", "a.c4d", "a.c4f", "a.c4p", "a.c4u"] {
        assert_eq!(
            mime_of(name),
            Some("application/vnd.clonk.c4group".to_string()),
            "{} should be a clonk group",
            name
        );
    }
    for name in ["a.jpeg", "a.jpg", "a.jpe"] {
        assert_eq!(mime_of(name), Some("image/jpeg".to_string()));
    }
    for name in ["a.txt", "a.text", "a.conf", "a.def", "a.list", "a.log", "a.in"] {
        assert_eq!(mime_of(name), Some("text/plain".to_string()));
    }
}

#[test]
fn test_audio_family() {
    assert_eq!(mime_of("song.mp3"), Some("audio/mpeg".to_string()));
    assert_eq!(mime_of("tune.mid"), Some("audio/midi".to_string()));
    assert_eq!(mime_of("clip.wav"), Some("audio/x-wav".to_string()));
}

#[test]
fn test_image_family() {
    assert_eq!(mime_of("shot.png"), Some("image/png".to_string()));
    assert_eq!(mime_of("fav.ico"), Some("image/x-icon".to_string()));
    assert_eq!(mime_of("logo.svg"), Some("image/svg+xml".to_string()));
    assert_eq!(mime_of("logo.svgz"), Some("image/svg+xml".to_string()));
}

#[test]
fn test_text_family() {
    assert_eq!(mime_of("style.css"), Some("text/css".to_string()));
    assert_eq!(mime_of("export.csv"), Some("text/csv".to_string()));
    assert_eq!(mime_of("invite.ics"), Some("text/calendar".to_string()));
}

#[test]
fn test_video_family() {
    assert_eq!(mime_of("movie.mp4"), Some("video/mp4".to_string()));
    assert_eq!(mime_of("movie.m4v"), Some("video/mp4".to_string()));
    assert_eq!(mime_of("clip.webm"), Some("video/webm".to_string()));
    assert_eq!(mime_of("clip.avi"), Some("video/x-msvideo".to_string()));
}

/// Test the archive rows registered at the end of the table. `.tgz` maps to
/// the tar type, not gzip.
#[test]
fn test_archive_rows() {
    assert_eq!(mime_of("dump.gz"), Some("application/x-gzip".to_string()));
    assert_eq!(mime_of("dump.tgz"), Some("application/x-tar".to_string()));
    assert_eq!(mime_of("dump.tar"), Some("application/x-tar".to_string()));
}

/// Test the e-book rows, including the ones the table registers twice with
/// the same value.
#[test]
fn test_ebook_rows() {
    assert_eq!(mime_of("book.epub"), Some("application/epub+zip".to_string()));
    assert_eq!(mime_of("book.mobi"), Some("application/x-mobipocket-ebook".to_string()));
    assert_eq!(mime_of("book.prc"), Some("application/x-mobipocket-ebook".to_string()));
}

#[test]
fn test_bare_special_files() {
    for name in [
        "README",
        "LICENSE",
        "COPYING",
        "TODO",
        "ABOUT",
        "AUTHORS",
        "CONTRIBUTORS",
    ] {
        assert_eq!(
            mime_of(name),
            Some("text/plain".to_string()),
            "{} should be plain text",
            name
        );
    }
}

/// Test the cache-manifest row, which mixes a bare filename with extensions.
#[test]
fn test_manifest_row() {
    // The bare token matches the whole filename only.
    assert_eq!(mime_of("manifest"), Some("text/cache-manifest".to_string()));

    // The dotted tokens match as extensions.
    assert_eq!(mime_of("app.manifest"), Some("text/cache-manifest".to_string()));
    assert_eq!(mime_of("app.mf"), Some("text/cache-manifest".to_string()));
    assert_eq!(mime_of("offline.appcache"), Some("text/cache-manifest".to_string()));
}

#[test]
fn test_realistic_filenames() {
    assert_eq!(mime_of("Makefile.in"), Some("text/plain".to_string()));
    assert_eq!(mime_of("jquery.min.js"), Some("application/javascript".to_string()));
    assert_eq!(mime_of("Photo 2024.JPEG"), Some("image/jpeg".to_string()));
    assert_eq!(mime_of("release-1.2.3.tar"), Some("application/x-tar".to_string()));
}
