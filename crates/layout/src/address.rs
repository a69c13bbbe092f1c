//! Splits free-form addresses into printable lines.

/// Segments shorter than this (in bytes, before trimming) are held back and
/// prefixed to the next long segment.
pub const MIN_FRAGMENT_LEN: usize = 10;

/// Splits a comma-delimited address into lines.
///
/// A short segment becomes the pending fragment, replacing any fragment that
/// was already pending. The next long segment is trimmed and emitted with the
/// pending fragment (as written, including its leading whitespace) in front
/// of it. A fragment still pending at the end of the input is dropped.
pub fn format_address(address: &str) -> Vec<String> {
    let mut lines = Vec::new();
    if address.is_empty() {
        return lines;
    }

    let mut pending: Option<&str> = None;
    for segment in address.split(',') {
        if segment.len() < MIN_FRAGMENT_LEN {
            pending = Some(segment);
            continue;
        }
        let trimmed = segment.trim();
        let line = match pending.take() {
            Some(prefix) if !prefix.is_empty() => format!("{}, {}", prefix, trimmed),
            _ => trimmed.to_string(),
        };
        lines.push(line);
    }

    if let Some(dropped) = pending {
        log::debug!("Dropping trailing address fragment {:?}", dropped);
    }
    lines
}
