//! Deterministic, filesystem-safe document names.
//!
//! Names follow the `[<publisher>] <author> - <title>.html` convention.
//! Characters that any supported platform refuses are stripped rather than
//! substituted, so the same record always maps to the same name. Collisions
//! are deliberately not detected here: saving the same publisher/author/title
//! twice overwrites the earlier document.

/// Characters rejected by at least one supported filesystem.
const ILLEGAL_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

const EXTENSION: &str = ".html";

/// Longest file name accepted by the common filesystems, in bytes.
const MAX_NAME_BYTES: usize = 255;

/// Derive the output file name for a story.
///
/// Never fails: illegal characters and control characters are dropped,
/// trailing dots and spaces are trimmed from the stem, and over-long stems
/// are truncated on a character boundary so the full name stays within
/// [`MAX_NAME_BYTES`].
pub fn document_file_name(publisher: &str, author: &str, title: &str) -> String {
    let stem = format!("[{publisher}] {author} - {title}");

    let mut cleaned: String = stem
        .chars()
        .filter(|ch| !ch.is_control() && !ILLEGAL_CHARS.contains(ch))
        .collect();

    truncate_to_boundary(&mut cleaned, MAX_NAME_BYTES - EXTENSION.len());

    // Windows rejects names ending in a dot or space.
    let trimmed_len = cleaned.trim_end_matches([' ', '.']).len();
    cleaned.truncate(trimmed_len);

    cleaned.push_str(EXTENSION);
    cleaned
}

fn truncate_to_boundary(value: &mut String, max_bytes: usize) {
    if value.len() <= max_bytes {
        return;
    }

    let mut cut = max_bytes;
    while !value.is_char_boundary(cut) {
        cut -= 1;
    }
    value.truncate(cut);
}
