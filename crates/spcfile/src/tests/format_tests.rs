use crate::*;
use traces::Axis;

// -------------------- Flags --------------------

#[test]
fn flags_contain_and_union() {
    let flags = FormatFlags::MULTI | FormatFlags::XYXY | FormatFlags::X_VALUES;
    assert_eq!(flags.bits(), 0xC4);
    assert!(flags.contains(FormatFlags::MULTI));
    assert!(flags.contains(FormatFlags::XYXY | FormatFlags::X_VALUES));
    assert!(!flags.contains(FormatFlags::RANDOM_Z));
    assert!(flags.contains(FormatFlags::DEFAULT));
    assert_eq!(FormatFlags::from_bits(0xC4), flags);
}

// -------------------- Layout selection --------------------

#[test]
fn layout_from_flags() {
    assert_eq!(LayoutKind::from_flags(FormatFlags::DEFAULT), LayoutKind::EvenY);
    assert_eq!(LayoutKind::from_flags(FormatFlags::MULTI), LayoutKind::EvenY);
    assert_eq!(LayoutKind::from_flags(FormatFlags::X_VALUES), LayoutKind::SharedX);
    assert_eq!(
        LayoutKind::from_flags(FormatFlags::MULTI | FormatFlags::X_VALUES),
        LayoutKind::SharedX
    );
    assert_eq!(
        LayoutKind::from_flags(FormatFlags::MULTI | FormatFlags::X_VALUES | FormatFlags::XYXY),
        LayoutKind::IndependentXY
    );
}

#[test]
fn directory_only_for_multi_trace_xyxy() {
    let xyxy = FormatFlags::MULTI | FormatFlags::X_VALUES | FormatFlags::XYXY;
    assert!(LayoutKind::IndependentXY.emits_directory(xyxy));
    assert!(!LayoutKind::IndependentXY.emits_directory(FormatFlags::XYXY));
    assert!(!LayoutKind::SharedX.emits_directory(xyxy));
    assert!(!LayoutKind::EvenY.emits_directory(FormatFlags::MULTI));
}

// -------------------- Offsets --------------------

#[test]
fn even_y_log_offset() {
    let y = [1.0, 2.0, 3.0];
    let offsets =
        SectionOffsets::compute(LayoutKind::EvenY, false, 1, &Axis::empty(), &Axis::Flat(&y))
            .unwrap();
    assert_eq!(offsets.directory, None);
    assert_eq!(offsets.log, 512 + 32 + 12);
}

#[test]
fn shared_x_log_offset_counts_x_once() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = vec![vec![0.0; 4]; 3];
    let offsets =
        SectionOffsets::compute(LayoutKind::SharedX, false, 3, &Axis::Flat(&x), &Axis::Rows(&y))
            .unwrap();
    assert_eq!(offsets.log, 512 + 16 + 3 * (32 + 16));
}

#[test]
fn xyxy_offsets_place_directory_before_log() {
    let x = vec![vec![0.0; 2], vec![0.0; 5]];
    let y = vec![vec![0.0; 2], vec![0.0; 5]];
    let offsets = SectionOffsets::compute(
        LayoutKind::IndependentXY,
        true,
        2,
        &Axis::Rows(&x),
        &Axis::Rows(&y),
    )
    .unwrap();
    let data_end = 512 + 2 * 32 + 4 * (7 + 7);
    assert_eq!(offsets.directory, Some(data_end));
    assert_eq!(offsets.log, data_end + 2 * 12);
}
