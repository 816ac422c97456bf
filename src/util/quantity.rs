//! Quantity input clamping for the add-to-cart forms.
//!
//! Quantity inputs carry `data-max-quantity` (the tradable amount of the
//! opportunity). Out-of-range or garbage input is corrected in place rather
//! than rejected.

#[cfg(test)]
#[path = "quantity_test.rs"]
mod quantity_test;

/// Attribute holding the upper bound on a quantity input.
pub const MAX_QUANTITY_ATTRIBUTE: &str = "data-max-quantity";

/// Clamp raw input into `1..=max`. Unparsable input becomes 1; fractional
/// input is truncated.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_quantity(raw: &str, max: u32) -> u32 {
    let max = max.max(1);
    let Ok(value) = raw.trim().parse::<f64>() else {
        return 1;
    };
    if !value.is_finite() || value < 1.0 {
        return 1;
    }
    if value >= f64::from(max) {
        return max;
    }
    value.trunc() as u32
}

/// Parse the `data-max-quantity` attribute; missing or invalid means no cap.
pub fn parse_max_quantity(raw: Option<&str>) -> u32 {
    match raw.map(|r| r.trim().parse::<u32>()) {
        Some(Ok(max)) if max > 0 => max,
        _ => u32::MAX,
    }
}

/// Clamp every `input[data-max-quantity]` that fires a `change` event.
#[cfg(feature = "csr")]
pub fn clamp_input_event(ev: &web_sys::Event) {
    use wasm_bindgen::JsCast;

    let Some(target) = ev.target() else {
        return;
    };
    let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
        return;
    };
    if !input.has_attribute(MAX_QUANTITY_ATTRIBUTE) {
        return;
    }
    let max = parse_max_quantity(input.get_attribute(MAX_QUANTITY_ATTRIBUTE).as_deref());
    let clamped = clamp_quantity(&input.value(), max).to_string();
    if input.value() != clamped {
        input.set_value(&clamped);
    }
}
