//! Display formatting for counters and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a counter for display, grouped the way the browser's locale does it.
pub fn format_count(value: u64) -> String {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_precision_loss)]
        let number = js_sys::Number::from(value as f64);
        String::from(number.to_locale_string("default"))
    }
    #[cfg(not(feature = "csr"))]
    {
        group_thousands(value)
    }
}

/// Comma thousands separators (`12345` -> `"12,345"`).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse a displayed counter back to its value, ignoring grouping characters.
pub fn parse_count(text: &str) -> Option<u64> {
    let mut seen = false;
    let mut value: u64 = 0;
    for digit in text.chars().filter_map(|c| c.to_digit(10)) {
        seen = true;
        value = value.checked_mul(10)?.checked_add(u64::from(digit))?;
    }
    seen.then_some(value)
}

/// Format epoch milliseconds as a UTC `HH:MM:SS` clock.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_clock(epoch_ms: f64) -> String {
    let total_secs = (epoch_ms.max(0.0) / 1000.0).floor() as u64;
    let secs_of_day = total_secs % 86_400;
    format!(
        "{:02}:{:02}:{:02}",
        secs_of_day / 3600,
        (secs_of_day % 3600) / 60,
        secs_of_day % 60
    )
}

/// Label for the "last updated" line, in the browser's local time when available.
pub fn format_last_update(epoch_ms: Option<f64>) -> String {
    match epoch_ms {
        Some(ms) => format!("Last update: {}", local_clock(ms)),
        None => "Last update: --".to_owned(),
    }
}

fn local_clock(epoch_ms: f64) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(epoch_ms));
        String::from(date.to_locale_time_string("default"))
    }
    #[cfg(not(feature = "csr"))]
    {
        format_clock(epoch_ms)
    }
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}
