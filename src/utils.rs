use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `s` to at most `max_width` terminal columns, ending in "..." when cut.
/// Below three columns only as many dots as fit are returned.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width < 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}

/// Fraction of the quiz already behind the user, clamped to 1.0.
pub fn progress_ratio(current_index: usize, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    (current_index as f64 / total as f64).min(1.0)
}
