/*!
Scanning of a single date-time entry into seconds since the Unix epoch.

The scanner walks a format (or field order) string and the input in
lockstep, accumulating seconds as each field is recognized. Calendar
arithmetic relative to `2000-01-01` happens in a finish step once all
fields are in.
*/

use crate::{
    calendar,
    error::{Error, ScanError},
    util::parse,
};

/// How the format string drives a scan.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// The format string is a bare sequence of field letters, like
    /// `"ymdHMS"`. Non-digit separators in the input are skipped
    /// heuristically, so the same order matches `2013-04-16`,
    /// `2013/04/16` and `2013 04 16` alike.
    Order,
    /// The format string is a literal template with `%`-escaped fields,
    /// like `"%Y-%m-%d"`. Every non-field character must match the input
    /// byte exactly.
    Format,
}

/// Scan one date-time entry into seconds since `1970-01-01T00:00:00`.
///
/// The `fmt` string is interpreted according to `mode`. Fields that the
/// format leaves out default to the start of their range, so `"ymd"`
/// resolves to midnight and a bare `"y"` to January 1st. Timezone offsets
/// shift the result *to* UTC, so `+01:00` yields a smaller value than
/// `+00:00`.
///
/// # Errors
///
/// This returns an error when the entry does not match the format, when a
/// field value is out of range, when the parsed day does not exist in the
/// parsed month, or when either the input or the format string is left
/// partially unconsumed.
///
/// # Example
///
/// ```
/// use datescan::{scan, Mode};
///
/// let secs = scan::seconds("%Y-%m-%d %H:%M:%S", "2013-04-16 04:59:59", Mode::Format)?;
/// assert_eq!(secs, 1366088399.0);
/// # Ok::<(), datescan::Error>(())
/// ```
pub fn seconds(fmt: &str, input: &str, mode: Mode) -> Result<f64, Error> {
    let mut scanner = Scanner::new(fmt.as_bytes(), input.as_bytes(), mode);
    scanner.scan()?;
    Ok(scanner.finish()?)
}

/// Which shape of extended offset notation to accept.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum OffsetStyle {
    /// `-0800`, hours directly followed by optional minutes.
    Bare,
    /// `-08:00`, the colon is required (the minute digits are not).
    Colon,
    /// `-08`, hours only.
    HourOnly,
}

/// The state of a scan over one entry.
///
/// Both `fmt` and `inp` advance left-to-right and never backtrack. The
/// year, month and day are kept around (and not only folded into `secs`)
/// because validating the day against its month needs the whole date.
#[derive(Debug)]
struct Scanner<'f, 'i> {
    /// The format (or field order) string.
    fmt: &'f [u8],
    /// The input entry.
    inp: &'i [u8],
    mode: Mode,
    year: i64,
    month: i64,
    day: i64,
    /// Running total of seconds contributed by scanned fields, relative
    /// to the start of the (not yet applied) year.
    secs: f64,
}

impl<'f, 'i> Scanner<'f, 'i> {
    fn new(fmt: &'f [u8], inp: &'i [u8], mode: Mode) -> Scanner<'f, 'i> {
        Scanner { fmt, inp, mode, year: 0, month: 0, day: 0, secs: 0.0 }
    }

    /// Consume the entire format string against the input.
    fn scan(&mut self) -> Result<(), ScanError> {
        while let Some(&byte) = self.fmt.first() {
            if self.mode == Mode::Format && byte != b'%' {
                self.literal(byte)?;
                continue;
            }
            if self.mode == Mode::Format {
                // Skip the `%` escape.
                self.bump_fmt();
            } else if byte != b'O' && byte != b'z' {
                // Offset fields do their own separator skipping, since
                // their lead-in is a sign rather than a digit.
                self.inp = parse::skip_non_digits(self.inp);
            }
            let extended = self.fmt.first() == Some(&b'O');
            if extended {
                self.bump_fmt();
            }
            let field = match self.fmt.first() {
                Some(&field) => field,
                None => return Err(ScanError::EndOfFormat),
            };
            let has_digit =
                self.inp.first().map_or(false, u8::is_ascii_digit);
            if !(has_digit || extended || field == b'z') {
                return Err(ScanError::ExpectedDigit { field });
            }
            match (field, extended) {
                (b'Y', _) => self.parse_year4(),
                (b'y', _) => self.parse_year2(),
                (b'm', _) => self.parse_month()?,
                (b'd', _) => self.parse_day()?,
                (b'H', _) => self.parse_hour()?,
                (b'M', _) => self.parse_minute()?,
                (b'S', _) => self.parse_second(extended)?,
                (b'u', true) => self.parse_utc_marker()?,
                (b'z', false) => self.parse_plain_offset()?,
                (b'z', true) => {
                    self.parse_extended_offset(field, OffsetStyle::Bare)?
                }
                (b'O', true) => {
                    self.parse_extended_offset(field, OffsetStyle::Colon)?
                }
                (b'o', true) => {
                    self.parse_extended_offset(field, OffsetStyle::HourOnly)?
                }
                _ => return Err(ScanError::UnknownField { field }),
            }
            self.bump_fmt();
        }
        if self.mode == Mode::Order {
            self.inp = parse::skip_non_digits(self.inp);
        }
        // Both cursors must finish together. A scan that matched every
        // field but left input behind is a failure, never a truncation.
        if !self.inp.is_empty() {
            return Err(ScanError::unconsumed(self.inp));
        }
        Ok(())
    }

    /// Resolve the accumulated fields to seconds since the Unix epoch.
    fn finish(&self) -> Result<f64, ScanError> {
        if !calendar::day_in_range(self.year, self.month, self.day) {
            return Err(ScanError::DayOfMonth {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        let year = calendar::year_seconds(self.year, self.month) as f64;
        Ok(self.secs + year + calendar::EPOCH_2000 as f64)
    }

    /// Match one literal (non-field) format byte exactly.
    fn literal(&mut self, expected: u8) -> Result<(), ScanError> {
        match self.inp.first() {
            Some(&got) if got == expected => {
                self.bump_fmt();
                self.bump_inp();
                Ok(())
            }
            Some(&got) => Err(ScanError::LiteralMismatch { expected, got }),
            None => Err(ScanError::LiteralEndOfInput { expected }),
        }
    }

    fn parse_year4(&mut self) {
        let (year, _, rest) = parse::digits(self.inp, 4);
        self.inp = rest;
        self.year = year;
    }

    /// Two digit years pivot at 68, the convention POSIX `strptime`
    /// settled on: `00-68` are this century, `69-99` the previous one.
    /// Longer runs are taken as full years, so the common `ymd` order
    /// accepts both `13-04-16` and `2013-04-16`.
    fn parse_year2(&mut self) {
        let (year, count, rest) = parse::digits(self.inp, 4);
        self.inp = rest;
        self.year = if count > 2 {
            year
        } else if year <= 68 {
            year + 2000
        } else {
            year + 1900
        };
    }

    fn parse_month(&mut self) -> Result<(), ScanError> {
        let (month, _, rest) = parse::digits(self.inp, 2);
        self.inp = rest;
        if !(1 <= month && month <= 12) {
            return Err(ScanError::range("month", month, 1, 12));
        }
        self.month = month;
        self.secs += calendar::MONTH_START_SECONDS[month as usize] as f64;
        Ok(())
    }

    fn parse_day(&mut self) -> Result<(), ScanError> {
        let (day, _, rest) = parse::digits(self.inp, 2);
        self.inp = rest;
        if !(1 <= day && day <= 31) {
            return Err(ScanError::range("day", day, 1, 31));
        }
        self.day = day;
        self.secs += ((day - 1) * calendar::SECS_PER_DAY) as f64;
        Ok(())
    }

    fn parse_hour(&mut self) -> Result<(), ScanError> {
        let (hour, _, rest) = parse::digits(self.inp, 2);
        self.inp = rest;
        if hour > 24 {
            return Err(ScanError::range("hour", hour, 0, 24));
        }
        self.secs += (hour * 3600) as f64;
        Ok(())
    }

    fn parse_minute(&mut self) -> Result<(), ScanError> {
        let (minute, _, rest) = parse::digits(self.inp, 2);
        self.inp = rest;
        if minute > 60 {
            return Err(ScanError::range("minute", minute, 0, 60));
        }
        self.secs += (minute * 60) as f64;
        Ok(())
    }

    /// Seconds, with leap second tolerance. The extended form also
    /// accepts a fractional part with either `.` or `,` as the decimal
    /// separator.
    fn parse_second(&mut self, extended: bool) -> Result<(), ScanError> {
        if extended && self.mode == Mode::Order {
            // The generic separator skip was suppressed by the `O`
            // marker, so catch up here, but treat running off the end of
            // the input as a missing field rather than zero seconds.
            self.inp = parse::skip_non_digits(self.inp);
            if self.inp.is_empty() {
                return Err(ScanError::EndOfInput { field: b'S' });
            }
        }
        let (second, _, rest) = parse::digits(self.inp, 2);
        self.inp = rest;
        if second > 61 {
            return Err(ScanError::range("second", second, 0, 61));
        }
        self.secs += second as f64;
        if extended {
            if matches!(self.inp.first(), Some(b'.') | Some(b',')) {
                self.bump_inp();
                let (frac, rest) = parse::fraction(self.inp);
                self.inp = rest;
                self.secs += frac;
            }
        }
        Ok(())
    }

    fn parse_utc_marker(&mut self) -> Result<(), ScanError> {
        match self.inp.first() {
            Some(b'Z') | Some(b'z') => {
                self.bump_inp();
                Ok(())
            }
            _ => Err(ScanError::ExpectedUtcMarker),
        }
    }

    /// The plain `z` field: a literal `Z`, or a signed offset whose
    /// minutes may be separated by a colon (`+0100`, `+01`, `+01:00`).
    fn parse_plain_offset(&mut self) -> Result<(), ScanError> {
        if self.mode == Mode::Order {
            while let Some(&byte) = self.inp.first() {
                if byte == b'+' || byte == b'-' || byte == b'Z' {
                    break;
                }
                self.bump_inp();
            }
            if self.inp.is_empty() {
                return Err(ScanError::EndOfInput { field: b'z' });
            }
        }
        if self.inp.first() == Some(&b'Z') {
            self.bump_inp();
            return Ok(());
        }
        let sign = self.offset_sign(b'z')?;
        let (hours, _, rest) = parse::digits(self.inp, 2);
        self.inp = rest;
        self.secs += sign * (hours * 3600) as f64;
        if self.inp.first() == Some(&b':') {
            self.bump_inp();
            if !self.inp.first().map_or(false, u8::is_ascii_digit) {
                return Err(ScanError::ExpectedDigitAfterColon);
            }
        }
        if self.inp.first().map_or(false, u8::is_ascii_digit) {
            let (minutes, _, rest) = parse::digits(self.inp, 2);
            self.inp = rest;
            self.secs += sign * (minutes * 60) as f64;
        }
        Ok(())
    }

    /// The extended offset family `Oz`/`OO`/`Oo`. Unlike the plain `z`
    /// field these never accept a bare `Z` and always skip ahead to the
    /// sign, in both modes.
    fn parse_extended_offset(
        &mut self,
        field: u8,
        style: OffsetStyle,
    ) -> Result<(), ScanError> {
        while let Some(&byte) = self.inp.first() {
            if byte == b'+' || byte == b'-' {
                break;
            }
            self.bump_inp();
        }
        let sign = self.offset_sign(field)?;
        let (hours, _, rest) = parse::digits(self.inp, 2);
        self.inp = rest;
        self.secs += sign * (hours * 3600) as f64;
        if style == OffsetStyle::Colon {
            if self.inp.first() == Some(&b':') {
                self.bump_inp();
            } else {
                return Err(ScanError::ExpectedOffsetColon);
            }
        }
        if style != OffsetStyle::HourOnly {
            let (minutes, _, rest) = parse::digits(self.inp, 2);
            self.inp = rest;
            self.secs += sign * (minutes * 60) as f64;
        }
        Ok(())
    }

    /// Consume a `+` or `-` and return the multiplier that converts the
    /// offset to UTC. The sign is inverted on purpose: an input east of
    /// Greenwich names an instant that happened *earlier* in UTC.
    fn offset_sign(&mut self, field: u8) -> Result<f64, ScanError> {
        let sign = match self.inp.first() {
            Some(&b'+') => -1.0,
            Some(&b'-') => 1.0,
            _ => return Err(ScanError::ExpectedOffsetSign { field }),
        };
        self.bump_inp();
        Ok(sign)
    }

    fn bump_fmt(&mut self) {
        self.fmt = &self.fmt[1..];
    }

    fn bump_inp(&mut self) {
        self.inp = &self.inp[1..];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(fmt: &str, input: &str) -> Result<f64, Error> {
        seconds(fmt, input, Mode::Order)
    }

    fn format(fmt: &str, input: &str) -> Result<f64, Error> {
        seconds(fmt, input, Mode::Format)
    }

    #[test]
    fn strict_format_reference() {
        let got = format("%Y-%m-%d %H:%M:%S", "2013-04-16 04:59:59");
        assert_eq!(got.unwrap(), 1366088399.0);

        let got = format("%Y-%m-%dT%H:%M:%S%Ou", "2013-04-16T04:59:59Z");
        assert_eq!(got.unwrap(), 1366088399.0);
    }

    #[test]
    fn order_ignores_separators() {
        for input in
            ["2013-04-16", "2013/04/16", "2013 04 16", "2013.x.04!16"]
        {
            let got = order("ymd", input).unwrap();
            assert_eq!(got, 1366070400.0, "for input {input:?}");
        }
    }

    #[test]
    fn order_single_digit_fields() {
        assert_eq!(order("ymd", "2013-4-16").unwrap(), 1366070400.0);
        assert_eq!(order("ymdHMS", "2013-4-16 4:9:9").unwrap(), 1366085349.0);
    }

    #[test]
    fn missing_trailing_fields_default() {
        // No day, no clock: resolves to the start of the month.
        assert_eq!(order("ym", "2013-04").unwrap(), 1364774400.0);
        assert_eq!(order("y", "2013").unwrap(), 1356998400.0);
    }

    #[test]
    fn two_digit_year_pivot() {
        assert_eq!(order("y", "69").unwrap(), order("Y", "1969").unwrap());
        assert_eq!(order("y", "68").unwrap(), order("Y", "2068").unwrap());
        assert_eq!(order("y", "00").unwrap(), order("Y", "2000").unwrap());
        // Four digit years pass through the pivot untouched.
        assert_eq!(
            order("ymd", "13-04-16").unwrap(),
            order("ymd", "2013-04-16").unwrap(),
        );
    }

    #[test]
    fn utc_marker_matches_zero_offset() {
        let marker = order("ymdHMSOu", "2013-04-16T04:59:59Z").unwrap();
        let zero = order("ymdHMSz", "2013-04-16 04:59:59 +0000").unwrap();
        assert_eq!(marker, zero);
    }

    #[test]
    fn offset_sign_converts_to_utc() {
        let east = order("ymdHMSz", "2013-04-16 04:59:59+01:00").unwrap();
        let utc = order("ymdHMSz", "2013-04-16 04:59:59+00:00").unwrap();
        let west = order("ymdHMSz", "2013-04-16 04:59:59-01:00").unwrap();
        assert_eq!(east, utc - 3600.0);
        assert_eq!(west, utc + 3600.0);
    }

    #[test]
    fn offset_notations() {
        let utc = format("%Y-%m-%d %H:%M:%S", "2013-04-16 04:59:59").unwrap();
        let expect = utc - 3600.0;
        assert_eq!(
            format("%Y-%m-%d %H:%M:%S%Oz", "2013-04-16 04:59:59+0100")
                .unwrap(),
            expect,
        );
        assert_eq!(
            format("%Y-%m-%d %H:%M:%S%OO", "2013-04-16 04:59:59+01:00")
                .unwrap(),
            expect,
        );
        assert_eq!(
            format("%Y-%m-%d %H:%M:%S%Oo", "2013-04-16 04:59:59+01")
                .unwrap(),
            expect,
        );
        // A bare Z only belongs to the plain field.
        assert_eq!(
            format("%Y-%m-%d %H:%M:%S%z", "2013-04-16 04:59:59Z").unwrap(),
            utc,
        );
    }

    #[test]
    fn offset_colon_rules() {
        // The plain field's optional colon must be followed by a digit.
        insta::assert_snapshot!(
            order("ymdHMSz", "2013-04-16 04:59:59+01:").unwrap_err(),
            @"expected a digit after `:` in offset"
        );
        // The OO notation requires its colon, but not the minute digits.
        let got =
            format("%H:%M%OO", "04:59+01:").unwrap();
        let utc = format("%H:%M", "04:59").unwrap();
        assert_eq!(got, utc - 3600.0);
        insta::assert_snapshot!(
            format("%H:%M%OO", "04:59+0100").unwrap_err(),
            @"expected `:` between offset hours and minutes"
        );
    }

    #[test]
    fn fractional_seconds() {
        let whole = order("ymdHMOS", "2013-04-16 04:59:10").unwrap();
        let dot = order("ymdHMOS", "2013-04-16 04:59:10.5").unwrap();
        let comma = order("ymdHMOS", "2013-04-16 04:59:10,5").unwrap();
        assert_eq!(dot, whole + 0.5);
        assert_eq!(comma, whole + 0.5);
    }

    #[test]
    fn leap_years() {
        assert!(format("%Y-%m-%d", "2000-02-29").is_ok());
        assert!(format("%Y-%m-%d", "2096-02-29").is_ok());
        insta::assert_snapshot!(
            format("%Y-%m-%d", "1900-02-29").unwrap_err(),
            @"day 29 is not valid for month 2 in year 1900"
        );
        insta::assert_snapshot!(
            format("%Y-%m-%d", "2100-02-29").unwrap_err(),
            @"day 29 is not valid for month 2 in year 2100"
        );
        assert_eq!(format("%Y-%m-%d", "2000-02-29").unwrap(), 951782400.0);
    }

    #[test]
    fn pre_epoch_dates() {
        assert_eq!(format("%Y-%m-%d", "1969-01-01").unwrap(), -31536000.0);
        assert_eq!(format("%Y-%m-%d", "1970-01-01").unwrap(), 0.0);
        assert_eq!(format("%Y-%m-%d", "1969-12-31").unwrap(), -86400.0);
    }

    #[test]
    fn field_ranges() {
        insta::assert_snapshot!(
            order("ymd", "2013-13-01").unwrap_err(),
            @"month 13 is not in the required range of 1..=12"
        );
        insta::assert_snapshot!(
            order("ymdH", "2013-04-16 25").unwrap_err(),
            @"hour 25 is not in the required range of 0..=24"
        );
        // Leap seconds are tolerated at face value.
        assert!(order("ymdHMS", "2013-04-16 04:59:61").is_ok());
        insta::assert_snapshot!(
            order("ymdHMS", "2013-04-16 04:59:62").unwrap_err(),
            @"second 62 is not in the required range of 0..=61"
        );
    }

    #[test]
    fn day_needs_month() {
        // A day with no month to live in cannot validate.
        insta::assert_snapshot!(
            order("yd", "2013-16").unwrap_err(),
            @"day 16 is not valid for month 0 in year 2013"
        );
    }

    #[test]
    fn literal_mismatch() {
        insta::assert_snapshot!(
            format("%Y-%m-%d", "2013/04/16").unwrap_err(),
            @"expected to match literal `-` from format string, but found `/` in input"
        );
        insta::assert_snapshot!(
            format("%Y-%m-%d", "2013-04").unwrap_err(),
            @"expected a digit for field `d`, but found none"
        );
        insta::assert_snapshot!(
            format("%Y-%m-", "2013-04").unwrap_err(),
            @"expected to match literal `-` from format string, but found end of input"
        );
    }

    #[test]
    fn unconsumed_input() {
        insta::assert_snapshot!(
            format("%Y-%m-%d", "2013-04-16T04:59:59").unwrap_err(),
            @"expected to consume the entire input, but `T04:59:59` remains unparsed"
        );
        // Trailing separators are fine in order mode, trailing digits
        // are not.
        assert!(order("ymd", "2013-04-16  ").is_ok());
        assert!(order("ymd", "2013-04-16 04").is_err());
    }

    #[test]
    fn unknown_field_letter() {
        insta::assert_snapshot!(
            order("ymq", "2013-04-16").unwrap_err(),
            @"found unrecognized field letter `q`"
        );
        // A plain `u` is only meaningful in its extended form.
        insta::assert_snapshot!(
            order("ymdu", "2013-04-16 5").unwrap_err(),
            @"found unrecognized field letter `u`"
        );
    }

    #[test]
    fn dangling_escape() {
        insta::assert_snapshot!(
            format("%Y-%", "2013-4").unwrap_err(),
            @"expected a field letter, but found end of format string"
        );
        insta::assert_snapshot!(
            format("%Y-%O", "2013-4").unwrap_err(),
            @"expected a field letter, but found end of format string"
        );
    }

    #[test]
    fn extended_seconds_need_input() {
        // In order mode, extended seconds refuse to default to zero when
        // the input runs dry.
        insta::assert_snapshot!(
            order("ymdHMOS", "2013-04-16 04:59:").unwrap_err(),
            @"input ended before field `S` could start"
        );
    }

    #[test]
    fn plain_offset_needs_input() {
        insta::assert_snapshot!(
            order("ymdHMSz", "2013-04-16 04:59:59 ").unwrap_err(),
            @"input ended before field `z` could start"
        );
    }
}
