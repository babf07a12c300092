/// Charset applied to annotated lookups until a registry overrides it.
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// Per-lookup charset handling.
///
/// Text results can be served bare, tagged with the registry's configured
/// charset, or tagged with a charset chosen for this one call. `From`
/// conversions keep call sites short: `false`/`true` select [`Charset::Omit`]
/// and [`Charset::Default`], a string selects [`Charset::Custom`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Charset {
    /// Return stored values untouched.
    Omit,
    /// Annotate `text/*` values with the registry's current charset.
    Default,
    /// Annotate `text/*` values with the given charset.
    Custom(String),
}

impl From<bool> for Charset {
    fn from(include: bool) -> Self {
        if include {
            Charset::Default
        } else {
            Charset::Omit
        }
    }
}

impl From<&str> for Charset {
    fn from(charset: &str) -> Self {
        Charset::Custom(charset.to_string())
    }
}

impl From<String> for Charset {
    fn from(charset: String) -> Self {
        Charset::Custom(charset)
    }
}
