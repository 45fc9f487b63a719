use byteorder::{LittleEndian, WriteBytesExt};
use chrono::{Datelike, Local, Timelike};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

const MINUTE_BITS: u32 = 6;
const HOUR_BITS: u32 = 5;
const DAY_BITS: u32 = 5;
const MONTH_BITS: u32 = 4;
const YEAR_BITS: u32 = 12;

const HOUR_SHIFT: u32 = MINUTE_BITS;
const DAY_SHIFT: u32 = HOUR_SHIFT + HOUR_BITS;
const MONTH_SHIFT: u32 = DAY_SHIFT + DAY_BITS;
const YEAR_SHIFT: u32 = MONTH_SHIFT + MONTH_BITS;

/// A minute-resolution timestamp as the SPC header understands it.
///
/// Unlike calendar types this accepts year `0` and any out-of-range
/// component; packing simply keeps the low bits of each field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateStamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl DateStamp {
    #[must_use]
    pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// The current local time, truncated to the minute.
    #[must_use]
    pub fn now() -> Self {
        Self::from(&Local::now())
    }
}

impl<T: Datelike + Timelike> From<&T> for DateStamp {
    fn from(t: &T) -> Self {
        Self {
            // Years outside u16 wrap, same as any other oversized component.
            year: t.year() as u16,
            month: t.month() as u8,
            day: t.day() as u8,
            hour: t.hour() as u8,
            minute: t.minute() as u8,
        }
    }
}

/// The packed 32-bit date stored in the file header (`fdate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompressedDate(u32);

impl CompressedDate {
    /// The "no timestamp" sentinel (all bits zero).
    pub const NONE: CompressedDate = CompressedDate(0);

    /// Packs an optional timestamp. `None` yields [`CompressedDate::NONE`].
    #[must_use]
    pub fn pack(stamp: Option<&DateStamp>) -> Self {
        let Some(s) = stamp else {
            return Self::NONE;
        };
        let minute = u32::from(s.minute) & mask(MINUTE_BITS);
        let hour = u32::from(s.hour) & mask(HOUR_BITS);
        let day = u32::from(s.day) & mask(DAY_BITS);
        let month = u32::from(s.month) & mask(MONTH_BITS);
        let year = u32::from(s.year) & mask(YEAR_BITS);
        Self(
            minute
                | (hour << HOUR_SHIFT)
                | (day << DAY_SHIFT)
                | (month << MONTH_SHIFT)
                | (year << YEAR_SHIFT),
        )
    }

    #[must_use]
    pub fn raw(&self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0 == 0
    }

    /// Splits the packed value back into its fields, `None` for the sentinel.
    #[must_use]
    pub fn unpack(&self) -> Option<DateStamp> {
        if self.is_none() {
            return None;
        }
        let v = self.0;
        Some(DateStamp {
            year: ((v >> YEAR_SHIFT) & mask(YEAR_BITS)) as u16,
            month: ((v >> MONTH_SHIFT) & mask(MONTH_BITS)) as u8,
            day: ((v >> DAY_SHIFT) & mask(DAY_BITS)) as u8,
            hour: ((v >> HOUR_SHIFT) & mask(HOUR_BITS)) as u8,
            minute: (v & mask(MINUTE_BITS)) as u8,
        })
    }

    /// Writes the 4 little-endian bytes to `w`.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_u32::<LittleEndian>(self.0)
    }
}

const fn mask(bits: u32) -> u32 {
    (1 << bits) - 1
}
