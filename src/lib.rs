/*!
A flexible date-time string parser.

This crate converts heterogeneous textual date-times into numeric values:
seconds since `1970-01-01T00:00:00` for full date-times, and separate
hour/minute/second components for bare time-of-day strings. It is built for
scrubbing messy batches of strings where the *shape* of each entry is known
but the separators are not.

Parsing is driven in one of two modes:

* [`Mode::Order`] — the caller supplies only the sequence of expected field
letters (like `"ymdHMS"`). Non-digit separators between fields are skipped
heuristically, so `2013-04-16`, `2013/04/16` and `2013 04 16` all parse with
the order `"ymd"`.
* [`Mode::Format`] — the caller supplies a literal template with `%`-escaped
fields (like `"%Y-%m-%d"`). Every non-field character must match the input
exactly.

# Example

Parse a batch of date-times by field order:

```
use datescan::{batch, Mode};

let got = batch::seconds(
    &["2013-04-16 04:59:59", "2013/04/16 04:59:59", "not a date"],
    "ymdHMS",
    Mode::Order,
);
assert_eq!(got[0], 1366088399.0);
assert_eq!(got[1], 1366088399.0);
assert!(got[2].is_nan());
```

Entries that fail to parse never abort the batch: their output slot is set
to NaN and processing continues. To get the actual error for a single entry,
use the entry-level routines instead:

```
use datescan::{scan, Mode};

let err = scan::seconds("%Y-%m-%d", "2013-02-30", Mode::Format).unwrap_err();
assert_eq!(err.to_string(), "day 30 is not valid for month 2 in year 2013");
```

And for bare clock times:

```
use datescan::hms;

let parts = hms::scan("HMS", "5:30:12.3")?;
assert_eq!((parts.hour, parts.minute, parts.second), (5.0, 30.0, 12.3));
# Ok::<(), datescan::Error>(())
```

# Supported fields

| Field | Meaning |
| ----- | ------- |
| `Y` | year, up to 4 digits |
| `y` | 2-digit year; `00-68` map to `2000-2068`, `69-99` to `1969-1999`; runs of more than two digits are taken as full years |
| `m` | month, `1-12` |
| `d` | day of the month, `1-31` (validated against the month afterwards) |
| `H` | hour on a 24 hour clock, `0-24` |
| `M` | minute, `0-60` |
| `S` | second, `0-61` (leap seconds are tolerated, not adjusted) |
| `z` | numeric UTC offset (`+0100`, `+01`, `+01:00`) or the literal `Z` |
| `Ou` | the literal UTC marker `Z` or `z` |
| `Oz` | ISO 8601 offset without a colon (`-0800`) |
| `OO` | ISO 8601 offset with a required colon (`-08:00`) |
| `Oo` | ISO 8601 hour-only offset (`-08`) |
| `OS` | second with an optional fractional part (`.` or `,` separator) |

In [`Mode::Format`] the same letters are written with a `%` escape, e.g.
`%Y-%m-%dT%H:%M:%OS%Ou`.

Offsets are applied with the sign inverted, reflecting conversion *to* UTC:
`12:00:00+01:00` is one hour earlier as an instant than `12:00:00+00:00`.

# Crate features

* **std** (enabled by default) - Implements `std::error::Error` and implies
`alloc`.
* **alloc** - Enables the [`batch`] module and richer error messages.
* **logging** - Trace-logs per-entry batch failures via the `log` crate.

# Scope

Only numeric offsets and the literal `Z`/`z` marker are understood; there
are no timezone-database lookups. The calendar is proleptic Gregorian.
Month and weekday *names* are not parsed, and there is no heuristic that
guesses a format from ambiguous input.
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

pub use crate::{error::Error, scan::Mode};

#[macro_use]
mod logging;

#[cfg(feature = "alloc")]
pub mod batch;
mod calendar;
mod error;
pub mod hms;
pub mod scan;
mod util;
