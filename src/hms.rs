/*!
Scanning of bare time-of-day strings into hour/minute/second components.

This scanner is independent of the date-time scanner in [`crate::scan`]:
it never resolves to an instant, its fields are unbounded digit runs
rather than fixed widths, and a field that is absent from the input
simply stays missing instead of failing the entry.
*/

use crate::{
    error::{Error, HmsError},
    util::parse,
};

/// The components of one scanned time-of-day entry.
///
/// Each component is independently `NaN` when its field was absent from
/// the input. No range checks are applied, so `75:00` scans to 75 hours.
#[derive(Clone, Copy, Debug)]
pub struct HmsParts {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HmsParts {
    pub(crate) fn missing() -> HmsParts {
        HmsParts { hour: f64::NAN, minute: f64::NAN, second: f64::NAN }
    }
}

/// Scan one time-of-day entry.
///
/// The `order` string names the fields to look for, drawn from the
/// letters `H`, `M` and `S` in any sequence. Fields are separated in the
/// input by arbitrary runs of non-digit bytes. The `S` field may carry a
/// fractional part with either `.` or `,` as the decimal separator.
///
/// # Errors
///
/// This returns an error when `order` contains a letter other than `H`,
/// `M` or `S`, and when the entry leaves content in either the input or
/// the order string behind (including an input with no digits at all).
///
/// # Example
///
/// ```
/// use datescan::hms;
///
/// let parts = hms::scan("HMS", "5:30:12.3")?;
/// assert_eq!((parts.hour, parts.minute, parts.second), (5.0, 30.0, 12.3));
/// # Ok::<(), datescan::Error>(())
/// ```
pub fn scan(order: &str, input: &str) -> Result<HmsParts, Error> {
    validate_order(order.as_bytes())?;
    Ok(scan_validated(order.as_bytes(), input.as_bytes())?)
}

/// Check that an order string only uses the letters `H`, `M` and `S`.
///
/// This is caller misuse rather than a content failure, so the batch
/// driver rejects the whole call with it before scanning any entry.
pub(crate) fn validate_order(order: &[u8]) -> Result<(), HmsError> {
    for &letter in order {
        match letter {
            b'H' | b'M' | b'S' => {}
            _ => return Err(HmsError::UnknownOrderLetter { letter }),
        }
    }
    Ok(())
}

/// Scan one entry against an already validated order string.
pub(crate) fn scan_validated(
    order: &[u8],
    input: &[u8],
) -> Result<HmsParts, HmsError> {
    let mut parts = HmsParts::missing();
    let mut ord = order;
    let mut inp = parse::skip_non_digits(input);
    // An input without a single digit leaves the whole order string
    // unconsumed below.
    if !inp.is_empty() {
        while let Some(&letter) = ord.first() {
            match letter {
                b'H' => parts.hour = digit_run(&mut inp),
                b'M' => parts.minute = digit_run(&mut inp),
                b'S' => {
                    let second = digit_run(&mut inp);
                    if !second.is_nan() {
                        parts.second = second + second_fraction(&mut inp);
                    }
                }
                _ => return Err(HmsError::UnknownOrderLetter { letter }),
            }
            inp = parse::skip_non_digits(inp);
            ord = &ord[1..];
        }
    }
    // The trailing-content rule is all or nothing: leftovers in either
    // cursor wipe fields that had already scanned fine.
    if !inp.is_empty() || !ord.is_empty() {
        return Err(HmsError::unfinished(inp, ord));
    }
    Ok(parts)
}

/// Consume every consecutive digit, or report a missing field as NaN.
///
/// The value accumulates in floating point, so absurdly long runs lose
/// precision instead of overflowing.
fn digit_run(inp: &mut &[u8]) -> f64 {
    if !inp.first().map_or(false, u8::is_ascii_digit) {
        return f64::NAN;
    }
    let mut value = 0.0;
    while let Some(&byte) = inp.first() {
        if !byte.is_ascii_digit() {
            break;
        }
        value = value * 10.0 + f64::from(byte - b'0');
        *inp = &inp[1..];
    }
    value
}

fn second_fraction(inp: &mut &[u8]) -> f64 {
    if !matches!(inp.first(), Some(b'.') | Some(b',')) {
        return 0.0;
    }
    *inp = &inp[1..];
    let (frac, rest) = parse::fraction(inp);
    *inp = rest;
    frac
}
