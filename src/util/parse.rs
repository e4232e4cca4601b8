/*!
Primitive digit scanning over byte-slice cursors.

Every field handler in this crate consumes digits through [`digits`] and
decides pass/fail from the count it reports. Cursors are plain `&[u8]`
sub-slices; consuming means returning the remainder.
*/

/// Consumes up to `max` ASCII digits from the beginning of `inp`.
///
/// Returns the accumulated value, the number of digits actually consumed
/// (possibly zero) and the unconsumed remainder. Callers decide whether a
/// zero count is a failure.
///
/// `max` must be small enough that the accumulated value cannot overflow an
/// `i64`. Callers in this crate never pass more than `4`.
pub(crate) fn digits(inp: &[u8], max: usize) -> (i64, usize, &[u8]) {
    let mut n: i64 = 0;
    let mut count = 0;
    while count < max && count < inp.len() && inp[count].is_ascii_digit() {
        n = n * 10 + i64::from(inp[count] - b'0');
        count += 1;
    }
    (n, count, &inp[count..])
}

/// Consumes the digits of a fractional part, after its decimal point.
///
/// Each digit is weighted by successive powers of one tenth. Zero digits
/// yield a zero fraction; the caller has already committed to the decimal
/// point itself.
pub(crate) fn fraction(mut inp: &[u8]) -> (f64, &[u8]) {
    let mut frac = 0.0;
    let mut weight = 0.1;
    while let Some(&b) = inp.first() {
        if !b.is_ascii_digit() {
            break;
        }
        frac += f64::from(b - b'0') * weight;
        weight *= 0.1;
        inp = &inp[1..];
    }
    (frac, inp)
}

/// Skips over leading bytes that are not ASCII digits.
pub(crate) fn skip_non_digits(mut inp: &[u8]) -> &[u8] {
    while let Some(&b) = inp.first() {
        if b.is_ascii_digit() {
            break;
        }
        inp = &inp[1..];
    }
    inp
}
