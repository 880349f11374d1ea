//! Conversions between display text and operand values.
//!
//! Display text is parsed leniently (a trailing point is fine, text without
//! digits is NaN) and results are printed in the shortest form that round
//! trips, laid out the way a pocket calculator shows them: no trailing `.0`,
//! exponent notation only for very large or very small magnitudes.

/// Magnitude at and above which results switch to exponent notation.
const EXPONENT_ABOVE: i32 = 21;
/// Magnitude below which results switch to exponent notation.
const EXPONENT_BELOW: i32 = -6;

/// Parse display text into an operand.
///
/// ```rust
/// use pocketcalc::core::parse_number;
///
/// assert_eq!(parse_number("12"), 12.0);
/// assert_eq!(parse_number("1."), 1.0);
/// assert_eq!(parse_number(".5"), 0.5);
/// assert!(parse_number("").is_nan());
/// assert!(parse_number(".").is_nan());
/// ```
pub fn parse_number(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Render an operand as display text.
///
/// ```rust
/// use pocketcalc::core::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(0.25), "0.25");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exponent) = decompose(value.abs());
    // `point` is where the decimal point falls relative to the digit string.
    let point = exponent + 1;
    let len = digits.len() as i32;

    let body = if len <= point && point <= EXPONENT_ABOVE {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= EXPONENT_ABOVE {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if EXPONENT_BELOW < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let (lead, rest) = digits.split_at(1);
        let mantissa = if rest.is_empty() {
            lead.to_string()
        } else {
            format!("{lead}.{rest}")
        };
        let exp_sign = if exponent >= 0 { "+" } else { "-" };
        format!("{mantissa}e{exp_sign}{}", exponent.abs())
    };

    format!("{sign}{body}")
}

/// Split a finite positive value into its shortest significant digits and
/// the decimal exponent of the leading digit.
fn decompose(value: f64) -> (String, i32) {
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    (digits, exponent.parse().unwrap_or(0))
}
