use serde::{Deserialize, Serialize};

/// A measurement cell reduced to a plain number plus the suffix it carried.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedValue {
    pub value: f64,
    pub suffix: Option<char>,
}

/// Parses values such as `234M`, `1.5B`, `12m` or `42`.
///
/// `M` scales by a million and `B` by a billion; `m` is a unit (metres) and
/// leaves the number unchanged. Returns `None` for anything that is not a number.
pub fn normalize_value(raw: &str) -> Option<NormalizedValue> {
    let value = raw.trim();
    let (number, scale, suffix) = if let Some(n) = value.strip_suffix('M') {
        (n, 1e6, Some('M'))
    } else if let Some(n) = value.strip_suffix('B') {
        (n, 1e9, Some('B'))
    } else if let Some(n) = value.strip_suffix('m') {
        (n, 1.0, Some('m'))
    } else {
        (value, 1.0, None)
    };
    let parsed: f64 = number.trim().parse().ok()?;
    Some(NormalizedValue {
        value: parsed * scale,
        suffix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes() {
        assert_eq!(normalize_value("234M"), Some(NormalizedValue { value: 234e6, suffix: Some('M') }));
        assert_eq!(normalize_value("1.5B"), Some(NormalizedValue { value: 1.5e9, suffix: Some('B') }));
        assert_eq!(normalize_value("12m"), Some(NormalizedValue { value: 12.0, suffix: Some('m') }));
        assert_eq!(normalize_value(" 42 "), Some(NormalizedValue { value: 42.0, suffix: None }));
    }

    #[test]
    fn rejects_text() {
        assert_eq!(normalize_value("abc"), None);
        assert_eq!(normalize_value("M"), None);
        assert_eq!(normalize_value(""), None);
    }
}
