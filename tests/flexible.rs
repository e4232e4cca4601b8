use datescan::{batch, hms, scan, Mode};

#[test]
fn strict_format_reference_values() {
    let table = [
        ("%Y-%m-%d %H:%M:%S", "1970-01-01 00:00:00", 0.0),
        ("%Y-%m-%d %H:%M:%S", "2013-04-16 04:59:59", 1366088399.0),
        ("%Y-%m-%d %H:%M:%S", "2020-12-31 23:59:59", 1609459199.0),
        ("%Y-%m-%d", "2000-02-29", 951782400.0),
        ("%Y-%m-%d", "1969-01-01", -31536000.0),
    ];
    for (fmt, input, want) in table {
        let got = scan::seconds(fmt, input, Mode::Format).unwrap();
        assert_eq!(got, want, "for {input:?} with {fmt:?}");
    }
}

#[test]
fn leap_year_rules() {
    let ok = |input| scan::seconds("%Y-%m-%d", input, Mode::Format).is_ok();
    assert!(ok("2000-02-29"));
    assert!(!ok("1900-02-29"));
    assert!(ok("2096-02-29"));
    assert!(!ok("2100-02-29"));
}

#[test]
fn two_digit_year_pivot() {
    let year = |two, four| {
        let got = scan::seconds("y", two, Mode::Order).unwrap();
        let want = scan::seconds("Y", four, Mode::Order).unwrap();
        assert_eq!(got, want, "expected {two:?} to resolve to {four:?}");
    };
    year("69", "1969");
    year("68", "2068");
    year("00", "2000");
}

#[test]
fn utc_marker_equals_zero_offset() {
    let marker = scan::seconds(
        "%Y-%m-%dT%H:%M:%S%Ou",
        "2013-04-16T04:59:59Z",
        Mode::Format,
    )
    .unwrap();
    let zero = scan::seconds(
        "ymdHMSz",
        "2013-04-16 04:59:59 +0000",
        Mode::Order,
    )
    .unwrap();
    assert_eq!(marker, zero);
}

#[test]
fn offset_shifts_toward_utc() {
    let at = |offset| {
        let input = std::format!("2013-04-16 12:00:00{offset}");
        scan::seconds("ymdHMSz", &input, Mode::Order).unwrap()
    };
    assert_eq!(at("+01:00"), at("+00:00") - 3600.0);
    assert_eq!(at("-01:00"), at("+00:00") + 3600.0);
}

#[test]
fn decimal_separator_indifference() {
    let dot = scan::seconds("ymdHMOS", "2013-04-16 04:59:10.5", Mode::Order);
    let comma =
        scan::seconds("ymdHMOS", "2013-04-16 04:59:10,5", Mode::Order);
    let whole = scan::seconds("ymdHMS", "2013-04-16 04:59:10", Mode::Order);
    assert_eq!(dot.unwrap(), whole.clone().unwrap() + 0.5);
    assert_eq!(comma.unwrap(), whole.unwrap() + 0.5);
}

#[test]
fn trailing_content_is_missing_not_truncated() {
    let got = batch::seconds(
        &["2013-04-16", "2013-04-16 04", "2013-04-1604"],
        "ymd",
        Mode::Order,
    );
    assert_eq!(got[0], 1366070400.0);
    assert!(got[1].is_nan());
    assert!(got[2].is_nan());
}

#[test]
fn batch_isolates_failures() {
    let got = batch::seconds(
        &["2013-02-30", "2013-04-16", "totally not a date"],
        "ymd",
        Mode::Order,
    );
    assert!(got[0].is_nan());
    assert_eq!(got[1], 1366070400.0);
    assert!(got[2].is_nan());
}

#[test]
fn hms_doubled_separator() {
    // The skip after the hour runs past both colons, so the minute
    // field takes 45 and the second stays missing.
    let got = batch::hms(&["12::45"], "HMS").unwrap();
    assert_eq!(got[0].hour, 12.0);
    assert_eq!(got[0].minute, 45.0);
    assert!(got[0].second.is_nan());
}

#[test]
fn hms_batch_and_entry_agree() {
    let entries = ["5:30:12.3", "5h30", "nope"];
    let batched = batch::hms(&entries, "HMS").unwrap();
    for (entry, got) in entries.iter().zip(&batched) {
        match hms::scan("HMS", entry) {
            Ok(parts) => {
                assert_eq!(parts.hour.to_bits(), got.hour.to_bits());
                assert_eq!(parts.minute.to_bits(), got.minute.to_bits());
                assert_eq!(parts.second.to_bits(), got.second.to_bits());
            }
            Err(_) => {
                assert!(got.hour.is_nan());
                assert!(got.minute.is_nan());
                assert!(got.second.is_nan());
            }
        }
    }
}

quickcheck::quickcheck! {
    // Order mode must not care what the separators are, only where the
    // digits fall.
    fn prop_separators_are_interchangeable(seps: Vec<char>) -> bool {
        let sep: String =
            seps.into_iter().filter(|c| !c.is_ascii_digit()).collect();
        let input = std::format!("2013{sep}04{sep}16");
        let got = scan::seconds("ymd", &input, Mode::Order);
        got.map(f64::to_bits).ok() == Some(1366070400f64.to_bits())
    }
}
