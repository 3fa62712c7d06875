//! Display formatting for operands
//!
//! The integer part is grouped per locale; the fractional part is kept
//! exactly as typed. Nothing here touches engine state.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::operand::{Operand, POINT};

/// Token shown for positive infinity
pub const INFINITY_TOKEN: &str = "∞";
/// Token shown for negative infinity
pub const NEG_INFINITY_TOKEN: &str = "-∞";
/// Token shown for not-a-number results
pub const NAN_TOKEN: &str = "NaN";

/// Number locale: controls the grouping separator and decimal symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberLocale {
    /// `1,234.5`
    #[default]
    En,
    /// `1.234,5`
    De,
    /// `1 234,5` with a narrow no-break space
    Fr,
    /// `1'234.5`
    Ch,
    /// `1234.5`, no grouping
    Plain,
}

impl NumberLocale {
    /// All supported locales
    pub const ALL: [Self; 5] = [Self::En, Self::De, Self::Fr, Self::Ch, Self::Plain];

    /// Thousands separator, `None` when the locale does not group
    #[must_use]
    pub const fn group_separator(&self) -> Option<char> {
        match self {
            Self::En => Some(','),
            Self::De => Some('.'),
            Self::Fr => Some('\u{202F}'),
            Self::Ch => Some('\''),
            Self::Plain => None,
        }
    }

    /// Decimal symbol
    #[must_use]
    pub const fn decimal_symbol(&self) -> char {
        match self {
            Self::En | Self::Ch | Self::Plain => '.',
            Self::De | Self::Fr => ',',
        }
    }

    /// Short lowercase name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Ch => "ch",
            Self::Plain => "plain",
        }
    }
}

impl std::fmt::Display for NumberLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown locale name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale '{0}' (expected one of: en, de, fr, ch, plain)")]
pub struct ParseLocaleError(pub String);

impl FromStr for NumberLocale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            "de" | "de-de" => Ok(Self::De),
            "fr" | "fr-fr" => Ok(Self::Fr),
            "ch" | "de-ch" => Ok(Self::Ch),
            "plain" | "none" => Ok(Self::Plain),
            _ => Err(ParseLocaleError(s.to_string())),
        }
    }
}

/// Formatting configuration injected into the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Locale used for grouping and the decimal symbol
    pub locale: NumberLocale,
}

impl FormatConfig {
    /// Creates a config for the given locale
    #[must_use]
    pub const fn new(locale: NumberLocale) -> Self {
        Self { locale }
    }
}

/// Formats operand text for display.
///
/// Splits on the first decimal point. The integer part is parsed and, if
/// numeric, grouped with the locale separator (leading zeros dropped,
/// sign kept). A non-numeric integer part, such as the empty string before
/// a leading point, renders as nothing. A fractional part, even an empty
/// one, is appended verbatim after the locale decimal symbol.
///
/// ```
/// use keycalc::core::{format_for_display, FormatConfig};
///
/// let en = FormatConfig::default();
/// assert_eq!(format_for_display("1234", &en), "1,234");
/// assert_eq!(format_for_display("1234.500", &en), "1,234.500");
/// assert_eq!(format_for_display(".5", &en), ".5");
/// ```
#[must_use]
pub fn format_for_display(operand: &str, config: &FormatConfig) -> String {
    let (integer_part, decimal_part) = match operand.split_once(POINT) {
        Some((int, dec)) => (int, Some(dec)),
        None => (operand, None),
    };

    let integer_display = format_integer(integer_part, config.locale).unwrap_or_default();

    match decimal_part {
        Some(dec) => format!(
            "{integer_display}{}{dec}",
            config.locale.decimal_symbol()
        ),
        None => integer_display,
    }
}

/// Formats an operand, rendering non-finite results as literal tokens
#[must_use]
pub fn format_operand(operand: &Operand, config: &FormatConfig) -> String {
    match operand {
        Operand::Computed(v) if v.is_nan() => NAN_TOKEN.to_string(),
        Operand::Computed(v) if v.is_infinite() => non_finite_token(*v).to_string(),
        _ => format_for_display(&operand.text(), config),
    }
}

fn non_finite_token(v: f64) -> &'static str {
    if v.is_nan() {
        NAN_TOKEN
    } else if v.is_sign_negative() {
        NEG_INFINITY_TOKEN
    } else {
        INFINITY_TOKEN
    }
}

/// Groups the integer part, `None` when it is not a number
fn format_integer(text: &str, locale: NumberLocale) -> Option<String> {
    let value = text.parse::<f64>().ok()?;

    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        let trimmed = digits.trim_start_matches('0');
        let trimmed = if trimmed.is_empty() { "0" } else { trimmed };
        let grouped = group_digits(trimmed, locale.group_separator());
        return Some(if negative { format!("-{grouped}") } else { grouped });
    }

    // Exponent or special spellings: fall back to the parsed value
    if !value.is_finite() {
        return Some(non_finite_token(value).to_string());
    }
    let whole = format!("{:.0}", value.abs().trunc());
    let grouped = group_digits(&whole, locale.group_separator());
    Some(if value.is_sign_negative() {
        format!("-{grouped}")
    } else {
        grouped
    })
}

/// Inserts `separator` every three digits from the right
fn group_digits(digits: &str, separator: Option<char>) -> String {
    let Some(sep) = separator else {
        return digits.to_string();
    };
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> FormatConfig {
        FormatConfig::new(NumberLocale::En)
    }

    // ===== Grouping =====

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", Some(',')), "1");
        assert_eq!(group_digits("123", Some(',')), "123");
        assert_eq!(group_digits("1234", Some(',')), "1,234");
        assert_eq!(group_digits("123456", Some(',')), "123,456");
        assert_eq!(group_digits("1234567", Some(',')), "1,234,567");
        assert_eq!(group_digits("1234567", None), "1234567");
    }

    // ===== format_for_display =====

    #[test]
    fn test_format_integer() {
        assert_eq!(format_for_display("1234", &en()), "1,234");
        assert_eq!(format_for_display("0", &en()), "0");
        assert_eq!(format_for_display("1000000", &en()), "1,000,000");
    }

    #[test]
    fn test_format_keeps_fraction_verbatim() {
        assert_eq!(format_for_display("1234.5600", &en()), "1,234.5600");
        assert_eq!(format_for_display("0.000", &en()), "0.000");
    }

    #[test]
    fn test_format_trailing_point() {
        assert_eq!(format_for_display("5.", &en()), "5.");
        assert_eq!(format_for_display("12345.", &en()), "12,345.");
    }

    #[test]
    fn test_format_leading_point_has_empty_integer() {
        assert_eq!(format_for_display(".5", &en()), ".5");
        assert_eq!(format_for_display(".", &en()), ".");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_for_display("", &en()), "");
    }

    #[test]
    fn test_format_drops_leading_zeros() {
        assert_eq!(format_for_display("007", &en()), "7");
        assert_eq!(format_for_display("000", &en()), "0");
        assert_eq!(format_for_display("00.5", &en()), "0.5");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_for_display("-1234.5", &en()), "-1,234.5");
        assert_eq!(format_for_display("-0.5", &en()), "-0.5");
        assert_eq!(format_for_display("-", &en()), "");
    }

    #[test]
    fn test_format_long_integer_keeps_digits() {
        assert_eq!(
            format_for_display("12345678901234567890", &en()),
            "12,345,678,901,234,567,890"
        );
    }

    #[test]
    fn test_format_exponent_falls_back_to_value() {
        assert_eq!(format_for_display("1e6", &en()), "1,000,000");
    }

    #[test]
    fn test_format_is_deterministic() {
        let a = format_for_display("98765.4321", &en());
        let b = format_for_display("98765.4321", &en());
        assert_eq!(a, b);
    }

    // ===== Locales =====

    #[test]
    fn test_format_locale_de() {
        let de = FormatConfig::new(NumberLocale::De);
        assert_eq!(format_for_display("1234567.89", &de), "1.234.567,89");
    }

    #[test]
    fn test_format_locale_fr() {
        let fr = FormatConfig::new(NumberLocale::Fr);
        assert_eq!(format_for_display("1234.5", &fr), "1\u{202F}234,5");
    }

    #[test]
    fn test_format_locale_ch() {
        let ch = FormatConfig::new(NumberLocale::Ch);
        assert_eq!(format_for_display("1234567", &ch), "1'234'567");
    }

    #[test]
    fn test_format_locale_plain() {
        let plain = FormatConfig::new(NumberLocale::Plain);
        assert_eq!(format_for_display("1234567.0", &plain), "1234567.0");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<NumberLocale>(), Ok(NumberLocale::En));
        assert_eq!("DE".parse::<NumberLocale>(), Ok(NumberLocale::De));
        assert_eq!("de-CH".parse::<NumberLocale>(), Ok(NumberLocale::Ch));
        assert_eq!("none".parse::<NumberLocale>(), Ok(NumberLocale::Plain));
        let err = "xx".parse::<NumberLocale>().unwrap_err();
        assert!(err.to_string().contains("unknown locale 'xx'"));
    }

    #[test]
    fn test_locale_display_round_trip() {
        for locale in NumberLocale::ALL {
            assert_eq!(locale.to_string().parse::<NumberLocale>(), Ok(locale));
        }
    }

    #[test]
    fn test_format_config_serde() {
        let cfg: FormatConfig = serde_json::from_str(r#"{"locale":"fr"}"#).unwrap();
        assert_eq!(cfg.locale, NumberLocale::Fr);
        let cfg: FormatConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.locale, NumberLocale::En);
    }

    // ===== format_operand =====

    #[test]
    fn test_format_operand_computed() {
        assert_eq!(format_operand(&Operand::Computed(10.0), &en()), "10");
        assert_eq!(format_operand(&Operand::Computed(12345.25), &en()), "12,345.25");
        assert_eq!(format_operand(&Operand::Computed(-2500.0), &en()), "-2,500");
    }

    #[test]
    fn test_format_operand_non_finite() {
        assert_eq!(format_operand(&Operand::Computed(f64::INFINITY), &en()), "∞");
        assert_eq!(
            format_operand(&Operand::Computed(f64::NEG_INFINITY), &en()),
            "-∞"
        );
        assert_eq!(format_operand(&Operand::Computed(f64::NAN), &en()), "NaN");
    }

    #[test]
    fn test_format_operand_typed() {
        assert_eq!(format_operand(&Operand::Typed("1000.10".into()), &en()), "1,000.10");
    }
}
