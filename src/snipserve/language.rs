//! Extension to language-label derivation.
//!
//! The label is a display hint for the client's highlighter, not a parsed or
//! validated classification. Both create and rename derive it through
//! [`detect`] so the stored `language`/`extension` pair can never drift from
//! the current `name`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const DEFAULT_LANGUAGE: &str = "text";

static LANGUAGE_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("js", "javascript"),
        ("jsx", "javascript"),
        ("ts", "typescript"),
        ("tsx", "typescript"),
        ("py", "python"),
        ("java", "java"),
        ("c", "c"),
        ("cpp", "cpp"),
        ("cs", "csharp"),
        ("php", "php"),
        ("rb", "ruby"),
        ("go", "go"),
        ("rs", "rust"),
        ("kt", "kotlin"),
        ("swift", "swift"),
        ("css", "css"),
        ("scss", "scss"),
        ("html", "html"),
        ("xml", "xml"),
        ("json", "json"),
        ("md", "markdown"),
        ("sql", "sql"),
        ("sh", "bash"),
        ("yml", "yaml"),
        ("yaml", "yaml"),
    ])
});

/// Language and extension derived from a filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detected {
    pub language: String,
    pub extension: String,
}

/// Derive the language label and stored extension from a filename.
///
/// The extension is the substring after the last `.`; a name with no dot
/// yields an extension equal to the whole name. Lookup is case-insensitive
/// and falls back to `text` for anything not in the table.
pub fn detect(name: &str) -> Detected {
    let ext = name.rsplit('.').next().unwrap_or(name);
    let language = LANGUAGE_MAP
        .get(ext.to_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_LANGUAGE);

    Detected {
        language: language.to_string(),
        extension: format!(".{ext}"),
    }
}
