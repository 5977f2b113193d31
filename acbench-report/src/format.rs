//! Number formatting shared by the text reports

/// Compact number with `K`/`M` suffixes, `∞` for non-finite values
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        "∞".to_string()
    } else if n >= 1_000_000.0 {
        format!("{:.2}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{:.2}K", n / 1_000.0)
    } else {
        format!("{:.2}", n)
    }
}

/// Byte count scaled to `B`, `KB` or `MB`
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

/// Milliseconds with a unit chosen for readability
pub fn format_ms(ms: f64) -> String {
    if ms < 0.001 {
        format!("{:.2} ns", ms * 1_000_000.0)
    } else if ms < 1.0 {
        format!("{:.2} µs", ms * 1_000.0)
    } else if ms < 1_000.0 {
        format!("{:.2} ms", ms)
    } else {
        format!("{:.2} s", ms / 1_000.0)
    }
}
