use unicode_normalization::UnicodeNormalization;

use crate::types::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Txt,
}

impl DocumentKind {
    /// Kind from the text after the last dot, case-insensitive.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" => Some(DocumentKind::Txt),
            _ => None,
        }
    }
}

pub fn is_allowed(filename: &str) -> bool {
    DocumentKind::from_filename(filename).is_some()
}

pub fn check_size(len: usize, max: usize) -> AppResult<()> {
    if len > max {
        return Err(AppError::PayloadTooLarge { limit_bytes: max });
    }
    Ok(())
}

/// Reduce a client-supplied filename to a safe, flat name.
///
/// The name is NFKD-decomposed and reduced to ASCII, so accented letters keep
/// their base letter. Path separators become word breaks, whitespace runs
/// collapse to `_`, and anything outside `[A-Za-z0-9_.-]` is dropped. Returns
/// `None` when nothing usable is left.
pub fn sanitize_filename(filename: &str) -> Option<String> {
    let flattened: String = filename
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");

    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    let trimmed = kept.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
