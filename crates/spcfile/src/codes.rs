//! Stable integer codes of the legacy format (from `SPC.H` / `GRAMSDDE.H`).
//!
//! The writer passes these through opaquely; they are collected here so
//! callers do not have to hard-code magic numbers.

/// Instrument technique (`fexper`).
pub mod technique {
    pub const GENERAL: u8 = 0;
    pub const GAS_CHROMATOGRAM: u8 = 1;
    pub const CHROMATOGRAM: u8 = 2;
    pub const HPLC: u8 = 3;
    pub const FTIR: u8 = 4;
    pub const NIR: u8 = 5;
    pub const UV_VIS: u8 = 7;
    pub const XRAY: u8 = 8;
    pub const MASS_SPEC: u8 = 9;
    pub const NMR: u8 = 10;
    pub const RAMAN: u8 = 11;
    pub const FLUORESCENCE: u8 = 12;
    pub const ATOMIC: u8 = 13;
    pub const DIODE_ARRAY: u8 = 14;
    pub const THERMAL: u8 = 15;
    pub const CIRCULAR_DICHROISM: u8 = 16;
    pub const CARBON_NMR: u8 = 20;
    pub const PROTON_NMR: u8 = 21;
    pub const DEUTERIUM_NMR: u8 = 22;
    pub const ANY_NMR: u8 = 23;
}

/// X, Z and W axis units (`fxtype`, `fztype`, `fwtype`).
pub mod x_units {
    pub const ARBITRARY: u8 = 0;
    pub const WAVENUMBER: u8 = 1;
    pub const MICROMETERS: u8 = 2;
    pub const NANOMETERS: u8 = 3;
    pub const SECONDS: u8 = 4;
    pub const MINUTES: u8 = 5;
    pub const HERTZ: u8 = 6;
    pub const KILOHERTZ: u8 = 7;
    pub const MEGAHERTZ: u8 = 8;
    pub const MASS_UNITS: u8 = 9;
    pub const PPM: u8 = 10;
    pub const DAYS: u8 = 11;
    pub const YEARS: u8 = 12;
    pub const RAMAN_SHIFT: u8 = 13;
    pub const ELECTRON_VOLTS: u8 = 14;
    pub const TEXT_LABEL: u8 = 15;
    pub const DIODE: u8 = 16;
    pub const CHANNEL: u8 = 17;
    pub const DEGREES: u8 = 18;
    pub const FAHRENHEIT: u8 = 19;
    pub const CELSIUS: u8 = 20;
    pub const KELVIN: u8 = 21;
    pub const DATA_POINTS: u8 = 22;
    pub const MILLISECONDS: u8 = 23;
    pub const MICROSECONDS: u8 = 24;
    pub const NANOSECONDS: u8 = 25;
    pub const GIGAHERTZ: u8 = 26;
    pub const CENTIMETERS: u8 = 27;
    pub const METERS: u8 = 28;
    pub const MILLIMETERS: u8 = 29;
    pub const HOURS: u8 = 30;
    pub const ANGSTROMS: u8 = 31;
    pub const DOUBLE_INTERFEROGRAM: u8 = 255;
}

/// Y axis units (`fytype`).
pub mod y_units {
    pub const ARBITRARY: u8 = 0;
    pub const INTERFEROGRAM: u8 = 1;
    pub const ABSORBANCE: u8 = 2;
    pub const KUBELKA_MUNK: u8 = 3;
    pub const COUNTS: u8 = 4;
    pub const VOLTS: u8 = 5;
    pub const DEGREES: u8 = 6;
    pub const MILLIAMPS: u8 = 7;
    pub const MILLIMETERS: u8 = 8;
    pub const MILLIVOLTS: u8 = 9;
    pub const LOG_REFLECTANCE: u8 = 10;
    pub const PERCENT: u8 = 11;
    pub const INTENSITY: u8 = 12;
    pub const RELATIVE_INTENSITY: u8 = 13;
    pub const ENERGY: u8 = 14;
    pub const DECIBEL: u8 = 16;
    pub const ABUNDANCE: u8 = 17;
    pub const RELATIVE_ABUNDANCE: u8 = 18;
    pub const FAHRENHEIT: u8 = 19;
    pub const CELSIUS: u8 = 20;
    pub const KELVIN: u8 = 21;
    pub const REFRACTIVE_INDEX: u8 = 22;
    pub const EXTINCTION_COEFF: u8 = 23;
    pub const REAL: u8 = 24;
    pub const IMAGINARY: u8 = 25;
    pub const COMPLEX: u8 = 26;
    pub const MILLIGRAMS: u8 = 27;
    pub const GRAMS: u8 = 28;
    pub const KILOGRAMS: u8 = 29;
    pub const SPECIFIC_ROTATION: u8 = 30;
    pub const TRANSMITTANCE: u8 = 128;
    pub const REFLECTANCE: u8 = 129;
    pub const VALLEY_PEAKS: u8 = 130;
    pub const EMISSION: u8 = 131;
}

/// Spectral modification bits (`fmods`), one per letter code.
pub mod modifications {
    pub const UNMODIFIED: i32 = 0;
    pub const AVERAGED: i32 = 1 << 1;
    pub const BASELINE: i32 = 1 << 2;
    pub const COMPUTED: i32 = 1 << 3;
    pub const DERIVATIVE: i32 = 1 << 4;
    pub const ENHANCED: i32 = 1 << 6;
    pub const INTERPOLATED: i32 = 1 << 9;
    pub const SMOOTHED: i32 = 1 << 14;
    pub const OTHER: i32 = 1 << 15;
    pub const SUBTRACTED: i32 = 1 << 19;
    pub const TRUNCATED: i32 = 1 << 20;
    pub const WHEN_MODIFIED: i32 = 1 << 23;
    pub const X_CONVERTED: i32 = 1 << 24;
    pub const Y_CONVERTED: i32 = 1 << 25;
    pub const ZAPPED: i32 = 1 << 26;
}

/// Post-processing codes (`fprocs`). Only [`COMPUTE`](process::COMPUTE) is written.
pub mod process {
    pub const NONE: u8 = 0;
    pub const COMPUTE: u8 = 1;
    pub const COMPUTE_DLL: u8 = 2;
    pub const TRANSMISSION: u8 = 4;
    pub const ABSORBANCE: u8 = 8;
    pub const KUBELKA_MUNK: u8 = 12;
    pub const PEAK_PICK: u8 = 32;
    pub const LIBRARY_SEARCH: u8 = 64;
    pub const USER: u8 = 128;
}

/// Post-disposition codes (`fpost`).
pub mod disposition {
    pub const DEFAULT: u8 = 0;
    pub const SAVE: u8 = 1;
    pub const APPEND: u8 = 2;
    pub const MERGE: u8 = 3;
    pub const BACKGROUND: u8 = 4;
    pub const DISCARD: u8 = 5;
    pub const KEEP: u8 = 6;
    pub const BOTH: u8 = 7;
    pub const ASK: u8 = 8;
}

/// Subfile header flag bits (`subflgs`).
pub mod subfile {
    pub const NONE: u8 = 0;
    pub const CHANGED: u8 = 1;
    pub const NO_PEAK_TABLE: u8 = 8;
    pub const MODIFIED: u8 = 128;
}
