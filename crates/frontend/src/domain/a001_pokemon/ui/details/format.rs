//! Display helpers for the detail card.

const NOT_AVAILABLE: &str = "N/A";

/// Hectograms → `"6.0 kg"`. Absent or zero → `"N/A"`.
pub fn format_weight(hectograms: Option<u32>) -> String {
    match hectograms {
        Some(hg) if hg > 0 => format!("{:.1} kg", f64::from(hg) / 10.0),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Decimetres → `"0.4 m"`. Absent or zero → `"N/A"`.
pub fn format_height(decimetres: Option<u32>) -> String {
    match decimetres {
        Some(dm) if dm > 0 => format!("{:.1} m", f64::from(dm) / 10.0),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_capture_rate(rate: Option<u32>) -> String {
    rate.map(|r| r.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// "special-attack" → "Special attack": первая буква заглавная, первый дефис
/// заменяется пробелом.
pub fn stat_label(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str().replacen('-', " ", 1);
    first.to_uppercase().chain(rest.chars()).collect()
}
