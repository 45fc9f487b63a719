use crate::codes::{modifications, process, technique, x_units, y_units};
use crate::*;
use byteorder::{LittleEndian, ReadBytesExt};
use fields::{CompressedDate, DateStamp};
use std::io::Cursor;

fn text_at(buf: &[u8], start: usize, width: usize) -> String {
    let raw: Vec<u8> = buf[start..start + width]
        .iter()
        .copied()
        .take_while(|b| *b != 0)
        .collect();
    String::from_utf8(raw).unwrap()
}

// -------------------- Size and defaults --------------------

#[test]
fn default_header_is_512_bytes() {
    let buf = FileHeaderRecord::default().encode().unwrap();
    assert_eq!(buf.len(), FILE_HEADER_BYTES);
}

#[test]
fn default_header_leading_bytes() {
    let buf = FileHeaderRecord::default().encode().unwrap();
    assert_eq!(buf[0], 0, "flags");
    assert_eq!(buf[1], FILE_VERSION);
    assert_eq!(buf[2], technique::GENERAL);
    assert_eq!(buf[3] as i8, FLOAT_EXPONENT);
    // process code sits after the modification flags
    assert_eq!(buf[256], process::COMPUTE);
}

#[test]
fn oversized_text_still_encodes_to_512() {
    let header = FileHeaderRecord {
        resolution: "x".repeat(100),
        source_instrument: "y".repeat(100),
        memo: "z".repeat(1000),
        method_file: "m".repeat(1000),
        axis_labels: vec!["a".repeat(40), "b".repeat(40)],
        ..FileHeaderRecord::default()
    };
    let buf = header.encode().unwrap();
    assert_eq!(buf.len(), FILE_HEADER_BYTES);
    // truncated fields keep a trailing null
    assert_eq!(buf[36 + RESOLUTION_WIDTH - 1], 0);
    assert_eq!(text_at(&buf, 36, RESOLUTION_WIDTH), "x".repeat(8));
}

// -------------------- Field positions --------------------

#[test]
fn numeric_fields_land_at_legacy_offsets() -> std::io::Result<()> {
    let stamp = DateStamp::new(2024, 3, 15, 9, 30);
    let header = FileHeaderRecord {
        flags: FormatFlags::MULTI | FormatFlags::X_VALUES,
        technique: technique::RAMAN,
        num_points: 1024,
        first_x: 100.5,
        last_x: 3200.25,
        subfile_count: 7,
        x_units: x_units::RAMAN_SHIFT,
        y_units: y_units::COUNTS,
        z_units: x_units::SECONDS,
        date: CompressedDate::pack(Some(&stamp)),
        peak_point: 12,
        modifications: modifications::AVERAGED | modifications::BASELINE,
        z_increment: 2.5,
        w_planes: 3,
        w_increment: 0.75,
        w_units: x_units::CELSIUS,
        ..FileHeaderRecord::default()
    };
    let buf = header.encode().unwrap();

    assert_eq!(buf[0], 0x84);
    assert_eq!(buf[2], technique::RAMAN);
    let mut c = Cursor::new(&buf[4..]);
    assert_eq!(c.read_u32::<LittleEndian>()?, 1024);
    assert_eq!(c.read_f64::<LittleEndian>()?, 100.5);
    assert_eq!(c.read_f64::<LittleEndian>()?, 3200.25);
    assert_eq!(c.read_i32::<LittleEndian>()?, 7);
    assert_eq!(&buf[28..32], &[x_units::RAMAN_SHIFT, y_units::COUNTS, x_units::SECONDS, 0]);

    let date = Cursor::new(&buf[32..36]).read_u32::<LittleEndian>()?;
    assert_eq!(date, CompressedDate::pack(Some(&stamp)).raw());

    assert_eq!(Cursor::new(&buf[54..56]).read_u16::<LittleEndian>()?, 12);

    let mut c = Cursor::new(&buf[248..]);
    assert_eq!(c.read_i32::<LittleEndian>()?, 0, "log offset is never persisted");
    assert_eq!(c.read_i32::<LittleEndian>()?, 6);

    let mut c = Cursor::new(&buf[312..]);
    assert_eq!(c.read_f32::<LittleEndian>()?, 2.5);
    assert_eq!(c.read_i32::<LittleEndian>()?, 3);
    assert_eq!(c.read_f32::<LittleEndian>()?, 0.75);
    assert_eq!(buf[324], x_units::CELSIUS);
    assert!(buf[325..].iter().all(|b| *b == 0), "reserved tail must be zero");
    Ok(())
}

#[test]
fn text_fields_land_at_legacy_offsets() {
    let header = FileHeaderRecord {
        resolution: "4 cm-1".to_string(),
        source_instrument: "WP-785".to_string(),
        memo: "calibration run".to_string(),
        axis_labels: vec!["Shift".to_string(), "Counts".to_string(), "Time".to_string()],
        method_file: "raman.mth".to_string(),
        ..FileHeaderRecord::default()
    };
    let buf = header.encode().unwrap();
    assert_eq!(text_at(&buf, 36, RESOLUTION_WIDTH), "4 cm-1");
    assert_eq!(text_at(&buf, 45, SOURCE_WIDTH), "WP-785");
    assert_eq!(text_at(&buf, 88, MEMO_WIDTH), "calibration run");
    assert_eq!(&buf[218..234], b"Shift\0Counts\0Tim");
    assert_eq!(text_at(&buf, 264, METHOD_FILE_WIDTH), "raman.mth");
}

#[test]
fn log_offset_field_is_zero_even_when_computed() {
    let header = FileHeaderRecord {
        log_offset: 9999,
        ..FileHeaderRecord::default()
    };
    let buf = header.encode().unwrap();
    assert_eq!(&buf[248..252], &[0, 0, 0, 0]);
}
