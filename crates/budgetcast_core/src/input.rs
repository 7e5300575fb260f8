//! Coercion of raw user text into amounts
//!
//! Anything that does not parse becomes `0.0`; `NaN` and infinities never
//! reach the engine.

/// Replace non-finite values with zero
#[must_use]
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Parse an amount typed by the user, with `.` as the preferred decimal mark.
///
/// See [`coerce_amount_in`].
#[must_use]
pub fn coerce_amount(raw: &str) -> f64 {
    coerce_amount_in(raw, '.', "")
}

/// Parse an amount typed by the user under a display currency.
///
/// `symbol` is removed once if present. Spaces, non-breaking spaces,
/// apostrophes and underscores are digit grouping and ignored. For `.` and `,`:
///
/// - when both appear, the one that comes last is the decimal mark and the
///   other is grouping, so `1,000.50` and `1.000,50` both read as 1000.5
/// - a mark that appears more than once is grouping (`1,000,000`)
/// - a single `decimal_separator` is the decimal mark
/// - a single other mark followed by exactly three digits is grouping
///   (`15,000` under `.`), otherwise it is the decimal mark (`12,5`)
///
/// Empty, unparsable or non-finite input yields `0.0`.
#[must_use]
pub fn coerce_amount_in(raw: &str, decimal_separator: char, symbol: &str) -> f64 {
    let trimmed = raw.trim();
    let unsymboled = if symbol.is_empty() {
        trimmed.to_string()
    } else {
        trimmed.replacen(symbol, "", 1)
    };

    let compact: String = unsymboled
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\u{202f}' | '_' | '\''))
        .collect();

    if compact.is_empty() {
        return 0.0;
    }

    normalize_marks(&compact, decimal_separator)
        .and_then(|normalized| normalized.parse::<f64>().ok())
        .map(sanitize)
        .unwrap_or(0.0)
}

/// Drop grouping marks and turn the decimal mark into `.`; `None` when the
/// marks are inconsistent.
fn normalize_marks(compact: &str, decimal_separator: char) -> Option<String> {
    let last_dot = compact.rfind('.');
    let last_comma = compact.rfind(',');

    let decimal = match (last_dot, last_comma) {
        (None, None) => None,
        (Some(dot), Some(comma)) => {
            let mark = if dot > comma { '.' } else { ',' };
            if compact.matches(mark).count() > 1 {
                return None;
            }
            Some(mark)
        }
        (Some(index), None) | (None, Some(index)) => {
            let mark = if last_dot.is_some() { '.' } else { ',' };
            let repeated = compact.matches(mark).count() > 1;
            let grouped_thousands = compact.len() - index - 1 == 3;
            if repeated || (mark != decimal_separator && grouped_thousands) {
                None
            } else {
                Some(mark)
            }
        }
    };

    Some(
        compact
            .chars()
            .filter_map(|c| match c {
                '.' | ',' if Some(c) == decimal => Some('.'),
                '.' | ',' => None,
                other => Some(other),
            })
            .collect(),
    )
}
