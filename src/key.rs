/// Extension of `filename`, from its last `.` to the end of the name.
///
/// A dot at byte index zero does not start an extension, so dotfiles such as
/// `.bashrc` have none by this rule.
pub(crate) fn extension_of(filename: &str) -> Option<&str> {
    match filename.rfind('.') {
        Some(idx) if idx > 0 => Some(&filename[idx..]),
        _ => None,
    }
}

/// Catalog key for a filename: the lowercased extension when one exists,
/// otherwise the whole name verbatim. Extension-less special files
/// (`README`, `manifest`) and dotfiles are matched by full name,
/// case-sensitively.
pub(crate) fn lookup_key(filename: &str) -> String {
    match extension_of(filename) {
        Some(ext) => ext.to_lowercase(),
        None => filename.to_string(),
    }
}
