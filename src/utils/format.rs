//! Label formatting helpers.

/// Drop a leading ordinal such as `"12. "` from a navigation label.
///
/// Labels without an ordinal are returned unchanged.
pub fn short_label(label: &str) -> &str {
    let digits = label.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return label;
    }
    match label[digits..].strip_prefix('.') {
        Some(rest) => rest.trim_start(),
        None => label,
    }
}

/// Badge text for a Q&A count.
pub fn questions_badge(count: u32) -> String {
    format!("{} Q&A", count)
}
