use super::*;
use chrono::NaiveDate;

// -------------------- Byte field fitting --------------------

#[test]
fn fit_pads_short_input_with_zeros() {
    assert_eq!(fit(b"ab", 4), vec![b'a', b'b', 0, 0]);
}

#[test]
fn fit_keeps_exact_width_untouched() {
    assert_eq!(fit(b"abcd", 4), b"abcd".to_vec());
}

#[test]
fn fit_truncates_and_forces_trailing_null() {
    let field = fit(b"abcdefgh", 5);
    assert_eq!(field, vec![b'a', b'b', b'c', b'd', 0]);
}

#[test]
fn fit_empty_input_is_all_zeros() {
    assert_eq!(fit(b"", 9), vec![0u8; 9]);
}

#[test]
fn fit_zero_width_is_empty() {
    assert!(fit(b"anything", 0).is_empty());
}

#[test]
fn fit_ascii_round_trips_after_null_stripping() {
    for text in ["", "a", "Raman", "123456789"] {
        let field = fit(text.as_bytes(), 9);
        assert_eq!(field.len(), 9);
        let stripped: Vec<u8> = field.into_iter().filter(|b| *b != 0).collect();
        assert_eq!(stripped, text.as_bytes(), "text {:?} should survive", text);
    }
}

// -------------------- Date packing --------------------

#[test]
fn no_timestamp_packs_to_zero() {
    let date = CompressedDate::pack(None);
    let mut buf = Vec::new();
    date.write_to(&mut buf).unwrap();
    assert_eq!(buf, vec![0, 0, 0, 0]);
    assert!(date.is_none());
    assert_eq!(date.unpack(), None);
}

#[test]
fn known_timestamp_packs_to_expected_bits() {
    let stamp = DateStamp::new(2024, 3, 15, 9, 30);
    let date = CompressedDate::pack(Some(&stamp));
    let expected: u32 = 30 | (9 << 6) | (15 << 11) | (3 << 16) | (2024 << 20);
    assert_eq!(date.raw(), expected);
    assert_eq!(date.unpack(), Some(stamp));
}

#[test]
fn write_to_emits_little_endian() {
    let date = CompressedDate::pack(Some(&DateStamp::new(2024, 3, 15, 9, 30)));
    let mut buf = Vec::new();
    date.write_to(&mut buf).unwrap();
    assert_eq!(buf, date.raw().to_le_bytes().to_vec());
}

#[test]
fn oversized_fields_wrap_to_their_bit_width() {
    // minute 64 wraps to 0 instead of bleeding into the hour bits
    let date = CompressedDate::pack(Some(&DateStamp::new(1, 1, 1, 1, 64)));
    let parts = date.unpack().unwrap();
    assert_eq!(parts.minute, 0);
    assert_eq!(parts.hour, 1);

    // year 4096 does not fit in 12 bits
    let date = CompressedDate::pack(Some(&DateStamp::new(4096 + 7, 1, 1, 0, 0)));
    assert_eq!(date.unpack().unwrap().year, 7);
}

#[test]
fn year_zero_with_other_fields_is_not_the_sentinel() {
    let date = CompressedDate::pack(Some(&DateStamp::new(0, 1, 2, 0, 0)));
    assert!(!date.is_none());
    assert_eq!(date.unpack().unwrap().year, 0);
}

#[test]
fn chrono_datetime_converts_to_stamp() {
    let dt = NaiveDate::from_ymd_opt(2023, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 58)
        .unwrap();
    let stamp = DateStamp::from(&dt);
    assert_eq!(stamp, DateStamp::new(2023, 12, 31, 23, 59));
}
