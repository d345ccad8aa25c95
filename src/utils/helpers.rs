//! Display helper functions

/// Shorten an address-like string to `"<first n>...<last n>"`.
///
/// Inputs of length <= 2n are returned whole. Assumes single-byte
/// characters (base58 addresses and signatures are ASCII).
pub fn shorten_address(s: &str, n: usize) -> String {
    if s.len() <= n * 2 {
        return s.to_string();
    }
    format!("{}...{}", &s[..n], &s[s.len() - n..])
}

/// Human "time ago" label for a Unix timestamp in seconds.
pub fn time_ago(unix_secs: i64) -> String {
    elapsed_label(chrono::Utc::now().timestamp() - unix_secs)
}

fn elapsed_label(delta_secs: i64) -> String {
    let secs = delta_secs.max(0);
    if secs < 60 {
        format!("{}s ago", secs)
    } else if secs < 3_600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3_600)
    } else {
        format!("{}d ago", secs / 86_400)
    }
}

/// Native balance display, fixed at four decimals.
pub fn format_sol(amount: f64) -> String {
    format!("{:.4}", amount)
}
