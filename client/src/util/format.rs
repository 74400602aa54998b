//! Number and timestamp formatting for report views.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Thousands-separated integer, e.g. `12,500`.
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Cost per click in dollars, e.g. `$3.25`.
#[must_use]
pub fn format_cpc(cpc: f64) -> String {
    format!("${cpc:.2}")
}

/// Page load time, e.g. `1.24s`.
#[must_use]
pub fn format_seconds(secs: f64) -> String {
    format!("{secs:.2}s")
}

/// Trim an ISO-8601 timestamp to `YYYY-MM-DD HH:MM`.
#[must_use]
pub fn format_timestamp(iso: &str) -> String {
    let Some((date, time)) = iso.split_once('T') else {
        return iso.to_owned();
    };
    let hm: String = time.chars().take(5).collect();
    format!("{date} {hm}")
}
