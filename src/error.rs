use crate::util::escape;

/// An error that can occur in this crate.
///
/// The entry-level routines [`scan::seconds`](crate::scan::seconds) and
/// [`hms::scan`](crate::hms::scan) report why a single entry failed to
/// parse through this type. The batch routines only surface it for
/// caller-misuse errors (an invalid time-of-day order string); per-entry
/// content failures become NaN output slots instead.
///
/// Other than implementing the [`std::error::Error`] trait when the `std`
/// feature is enabled, the [`core::fmt::Debug`] trait and the
/// [`core::fmt::Display`] trait, this error type currently provides no
/// introspection capabilities.
#[derive(Clone)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Clone, Debug)]
pub(crate) enum ErrorKind {
    Scan(ScanError),
    Hms(HmsError),
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self.kind() {
            ErrorKind::Scan(ref err) => err.fmt(f),
            ErrorKind::Hms(ref err) => err.fmt(f),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", &self.kind).finish()
        }
    }
}

/// A failure while scanning one date-time entry against a format or order
/// string.
#[derive(Clone, Debug)]
pub(crate) enum ScanError {
    /// A literal (non-field) format character did not match the input in
    /// strict format mode.
    LiteralMismatch {
        expected: u8,
        got: u8,
    },
    /// The input ended while a literal format character still required a
    /// match.
    LiteralEndOfInput {
        expected: u8,
    },
    /// The format string ended immediately after a `%` escape or an `O`
    /// extended marker, promising a field that never came.
    EndOfFormat,
    /// A field required a digit at the current input position, but the
    /// input had none (or had ended).
    ExpectedDigit {
        field: u8,
    },
    /// The input ran out while skipping ahead to a field that performs its
    /// own separator skipping.
    EndOfInput {
        field: u8,
    },
    /// A parsed field value was outside its allowed range.
    Range {
        what: &'static str,
        given: i64,
        min: i64,
        max: i64,
    },
    /// The parsed day does not exist in the parsed month/year.
    DayOfMonth {
        year: i64,
        month: i64,
        day: i64,
    },
    /// The extended UTC marker field did not find a literal `Z` or `z`.
    ExpectedUtcMarker,
    /// A timezone offset field did not find its leading `+` or `-`.
    ExpectedOffsetSign {
        field: u8,
    },
    /// The `OO` offset notation is missing its required `:`.
    ExpectedOffsetColon,
    /// An offset consumed a `:` that was not followed by a digit.
    ExpectedDigitAfterColon,
    /// The format or order string used a field letter this crate does not
    /// recognize.
    UnknownField {
        field: u8,
    },
    /// Both cursors must be exhausted simultaneously; the input was not.
    UnconsumedInput {
        #[cfg(feature = "alloc")]
        remaining: alloc::boxed::Box<[u8]>,
    },
}

impl ScanError {
    pub(crate) fn range(
        what: &'static str,
        given: i64,
        min: i64,
        max: i64,
    ) -> ScanError {
        ScanError::Range { what, given, min, max }
    }

    pub(crate) fn unconsumed(_remaining: &[u8]) -> ScanError {
        ScanError::UnconsumedInput {
            #[cfg(feature = "alloc")]
            remaining: _remaining.into(),
        }
    }
}

impl From<ScanError> for Error {
    #[cold]
    #[inline(never)]
    fn from(err: ScanError) -> Error {
        Error { kind: ErrorKind::Scan(err) }
    }
}

impl core::fmt::Display for ScanError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ScanError::*;

        match *self {
            LiteralMismatch { expected, got } => write!(
                f,
                "expected to match literal `{expected}` from format string, \
                 but found `{got}` in input",
                expected = escape::Byte(expected),
                got = escape::Byte(got),
            ),
            LiteralEndOfInput { expected } => write!(
                f,
                "expected to match literal `{expected}` from format string, \
                 but found end of input",
                expected = escape::Byte(expected),
            ),
            EndOfFormat => f.write_str(
                "expected a field letter, but found end of format string",
            ),
            ExpectedDigit { field } => write!(
                f,
                "expected a digit for field `{field}`, but found none",
                field = escape::Byte(field),
            ),
            EndOfInput { field } => write!(
                f,
                "input ended before field `{field}` could start",
                field = escape::Byte(field),
            ),
            Range { what, given, min, max } => write!(
                f,
                "{what} {given} is not in the required range of \
                 {min}..={max}",
            ),
            DayOfMonth { year, month, day } => write!(
                f,
                "day {day} is not valid for month {month} in year {year}",
            ),
            ExpectedUtcMarker => {
                f.write_str("expected to find UTC marker `Z` or `z`")
            }
            ExpectedOffsetSign { field } => write!(
                f,
                "expected `+` or `-` sign for offset field `{field}`",
                field = escape::Byte(field),
            ),
            ExpectedOffsetColon => {
                f.write_str("expected `:` between offset hours and minutes")
            }
            ExpectedDigitAfterColon => {
                f.write_str("expected a digit after `:` in offset")
            }
            UnknownField { field } => write!(
                f,
                "found unrecognized field letter `{field}`",
                field = escape::Byte(field),
            ),
            #[cfg(feature = "alloc")]
            UnconsumedInput { ref remaining } => write!(
                f,
                "expected to consume the entire input, but \
                 `{remaining}` remains unparsed",
                remaining = escape::Bytes(remaining),
            ),
            #[cfg(not(feature = "alloc"))]
            UnconsumedInput {} => f.write_str(
                "expected to consume the entire input, but \
                 unparsed input remains",
            ),
        }
    }
}

/// A failure while scanning one time-of-day entry, or an invalid
/// time-of-day order string.
#[derive(Clone, Debug)]
pub(crate) enum HmsError {
    /// The order string contained a letter other than `H`, `M` or `S`.
    /// This is caller misuse and fails the whole call, not one entry.
    UnknownOrderLetter {
        letter: u8,
    },
    /// The entry left content in the input or order cursor after scanning.
    Unfinished {
        #[cfg(feature = "alloc")]
        input: alloc::boxed::Box<[u8]>,
        #[cfg(feature = "alloc")]
        order: alloc::boxed::Box<[u8]>,
    },
}

impl HmsError {
    pub(crate) fn unfinished(_input: &[u8], _order: &[u8]) -> HmsError {
        HmsError::Unfinished {
            #[cfg(feature = "alloc")]
            input: _input.into(),
            #[cfg(feature = "alloc")]
            order: _order.into(),
        }
    }
}

impl From<HmsError> for Error {
    #[cold]
    #[inline(never)]
    fn from(err: HmsError) -> Error {
        Error { kind: ErrorKind::Hms(err) }
    }
}

impl core::fmt::Display for HmsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::HmsError::*;

        match *self {
            UnknownOrderLetter { letter } => write!(
                f,
                "time-of-day order strings may only contain \
                 `H`, `M` and `S`, but found `{letter}`",
                letter = escape::Byte(letter),
            ),
            #[cfg(feature = "alloc")]
            Unfinished { ref input, ref order } => write!(
                f,
                "time-of-day scan finished with `{input}` of the input and \
                 `{order}` of the order string unconsumed",
                input = escape::Bytes(input),
                order = escape::Bytes(order),
            ),
            #[cfg(not(feature = "alloc"))]
            Unfinished {} => f.write_str(
                "time-of-day scan finished with part of the input or \
                 order string unconsumed",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_spells_out_bytes() {
        let err = Error::from(ScanError::LiteralMismatch {
            expected: b'-',
            got: b'/',
        });
        assert_eq!(
            err.to_string(),
            "expected to match literal `-` from format string, \
             but found `/` in input",
        );

        let err = Error::from(ScanError::range("hour", 27, 0, 24));
        assert_eq!(
            err.to_string(),
            "hour 27 is not in the required range of 0..=24",
        );
    }
}
