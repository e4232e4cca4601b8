/*!
Batch scanning with per-entry failure isolation.

The routines here run the entry scanners over a whole collection of
inputs. A malformed entry never aborts the batch: its output slot is set
to NaN and scanning continues. Enable the `logging` crate feature to get
a trace record of each failed entry and why it failed.
*/

use alloc::vec::Vec;

use crate::{
    error::Error,
    hms::{self, HmsParts},
    scan::{self, Mode},
};

/// Scan a batch of date-time entries into seconds since the Unix epoch.
///
/// This is the batch form of [`scan::seconds`]: one output value per
/// input, in order, with NaN for every entry that failed to scan.
///
/// # Example
///
/// ```
/// use datescan::{batch, Mode};
///
/// let got = batch::seconds(
///     &["2013-04-16 04:59:59", "not a date"],
///     "ymdHMS",
///     Mode::Order,
/// );
/// assert_eq!(got[0], 1366088399.0);
/// assert!(got[1].is_nan());
/// ```
#[cfg_attr(not(feature = "logging"), allow(unused_variables))]
pub fn seconds<I: AsRef<str>>(
    inputs: &[I],
    fmt: &str,
    mode: Mode,
) -> Vec<f64> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, input)| match scan::seconds(fmt, input.as_ref(), mode) {
            Ok(secs) => secs,
            Err(err) => {
                trace!("date-time entry {i} failed: {err}");
                f64::NAN
            }
        })
        .collect()
}

/// Scan a batch of time-of-day entries into hour/minute/second parts.
///
/// This is the batch form of [`hms::scan`]: one [`HmsParts`] per input,
/// in order. Components of entries that failed to scan are NaN.
///
/// # Errors
///
/// The order string is validated before any entry is scanned; a letter
/// outside `H`, `M` and `S` fails the whole call.
#[cfg_attr(not(feature = "logging"), allow(unused_variables))]
pub fn hms<I: AsRef<str>>(
    inputs: &[I],
    order: &str,
) -> Result<Vec<HmsParts>, Error> {
    hms::validate_order(order.as_bytes())?;
    Ok(inputs
        .iter()
        .enumerate()
        .map(|(i, input)| {
            match hms::scan_validated(
                order.as_bytes(),
                input.as_ref().as_bytes(),
            ) {
                Ok(parts) => parts,
                Err(err) => {
                    trace!("time-of-day entry {i} failed: {err}");
                    HmsParts::missing()
                }
            }
        })
        .collect())
}
