/*!
Calendar arithmetic for the proleptic Gregorian calendar.

The scanner accumulates seconds against an internal reference point of
`2000-01-01T00:00:00` and only shifts to the conventional 1970 epoch at the
very end. Keeping the reference at a century boundary divisible by 400 makes
the leap-day corrections below symmetric around it.
*/

/// Seconds in one day.
pub(crate) const SECS_PER_DAY: i64 = 86_400;

/// Seconds in a common (non-leap) year.
pub(crate) const SECS_PER_YEAR: i64 = 365 * SECS_PER_DAY;

/// Seconds between `1970-01-01T00:00:00` and `2000-01-01T00:00:00`.
pub(crate) const EPOCH_2000: i64 = 946_684_800;

/// Seconds elapsed before the start of each month in a common year.
///
/// 1-indexed by month number; index 0 is unused. The month handler adds the
/// table value directly to the seconds accumulator, and the year handler
/// compensates for leap years afterwards.
pub(crate) const MONTH_START_SECONDS: [i64; 13] = [
    0, 0, 2_678_400, 5_097_600, 7_776_000, 10_368_000, 13_046_400,
    15_638_400, 18_316_800, 20_995_200, 23_587_200, 26_265_600, 28_857_600,
];

/// Days in each month of a common year, 1-indexed by month number.
///
/// Index 0 is the "no month parsed" slot: its zero bound means a day number
/// without a month only validates when the day is also unparsed.
pub(crate) const DAYS_IN_MONTH: [i64; 13] =
    [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if `year` is a leap year in the proleptic Gregorian
/// calendar: divisible by 4, except centuries not divisible by 400.
pub(crate) fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the seconds contributed by `year`, relative to the 2000-01-01
/// reference point.
///
/// The caller has already added `MONTH_START_SECONDS[month]`, which assumes
/// a common-year layout. `month` is needed here to correct that assumption
/// when `year` itself is a leap year: before March the leap day has not
/// happened yet, on or after March it has.
pub(crate) fn year_seconds(year: i64, month: i64) -> i64 {
    let leap = is_leap_year(year);
    let y = year - 2000;
    let mut secs = y * SECS_PER_YEAR;
    if y >= 0 {
        // One leap day per 4 years, plus one for the reference year 2000
        // itself, minus the skipped century leap days.
        secs += (y / 4) * SECS_PER_DAY + SECS_PER_DAY;
        if y > 99 {
            secs += (y / 400 - y / 100) * SECS_PER_DAY;
        }
        if leap && month < 3 {
            secs -= SECS_PER_DAY;
        }
    } else {
        // Mirrored for years before 2000. `/` truncates toward zero, so
        // these terms are the exact negatives of the formulas above.
        secs += (y / 4) * SECS_PER_DAY;
        if y < -99 {
            secs += (y / 400 - y / 100) * SECS_PER_DAY;
        }
        if leap && month > 2 {
            secs += SECS_PER_DAY;
        }
    }
    secs
}

/// Post-scan day-of-month validation.
///
/// A `day` of 0 means the day was never parsed, which is allowed. February
/// is bounded by the leap-year rule; every other month by `DAYS_IN_MONTH`.
/// A `month` of 0 (never parsed) only validates with an unparsed day.
///
/// The scanner guarantees `0 <= month <= 12` and `0 <= day <= 31`.
pub(crate) fn day_in_range(year: i64, month: i64, day: i64) -> bool {
    if month == 2 {
        if is_leap_year(year) {
            day < 30
        } else {
            day < 29
        }
    } else {
        day <= DAYS_IN_MONTH[month as usize]
    }
}
