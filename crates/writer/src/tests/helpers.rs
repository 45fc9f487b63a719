use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

/// A minimal reader for the files this crate writes.
#[derive(Debug)]
pub struct Decoded {
    pub flags: u8,
    pub version: u8,
    pub exponent: i8,
    pub num_points: u32,
    pub first_x: f64,
    pub last_x: f64,
    pub subfile_count: i32,
    pub date: u32,
    pub log_offset_field: u32,
    pub shared_x: Vec<f32>,
    pub subfiles: Vec<Subfile>,
    pub directory: Vec<(u32, u32, f32)>,
    /// Everything after the trace data and directory.
    pub tail: Vec<u8>,
}

#[derive(Debug)]
pub struct Subfile {
    pub offset: usize,
    pub exponent: i8,
    pub index: u16,
    pub start_z: f32,
    pub end_z: f32,
    pub num_points: u32,
    pub w: f32,
    pub x: Vec<f32>,
    pub y: Vec<f32>,
}

const XYXY: u8 = 0x40;
const X_VALUES: u8 = 0x80;
const MULTI: u8 = 0x04;

fn floats(r: &mut Cursor<&[u8]>, n: usize) -> Vec<f32> {
    (0..n).map(|_| r.read_f32::<LittleEndian>().unwrap()).collect()
}

pub fn decode(bytes: &[u8]) -> Decoded {
    assert!(bytes.len() >= 512, "file shorter than a header");
    let mut r = Cursor::new(bytes);

    let flags = r.read_u8().unwrap();
    let version = r.read_u8().unwrap();
    let _technique = r.read_u8().unwrap();
    let exponent = r.read_i8().unwrap();
    let num_points = r.read_u32::<LittleEndian>().unwrap();
    let first_x = r.read_f64::<LittleEndian>().unwrap();
    let last_x = r.read_f64::<LittleEndian>().unwrap();
    let subfile_count = r.read_i32::<LittleEndian>().unwrap();
    r.set_position(32);
    let date = r.read_u32::<LittleEndian>().unwrap();
    r.set_position(248);
    let log_offset_field = r.read_u32::<LittleEndian>().unwrap();
    r.set_position(512);

    let shared_x = if flags & X_VALUES != 0 && flags & XYXY == 0 {
        floats(&mut r, num_points as usize)
    } else {
        Vec::new()
    };

    let mut subfiles = Vec::new();
    for _ in 0..subfile_count {
        let offset = r.position() as usize;
        let _flags = r.read_u8().unwrap();
        let exponent = r.read_i8().unwrap();
        let index = r.read_u16::<LittleEndian>().unwrap();
        let start_z = r.read_f32::<LittleEndian>().unwrap();
        let end_z = r.read_f32::<LittleEndian>().unwrap();
        let _noise = r.read_f32::<LittleEndian>().unwrap();
        let sub_points = r.read_u32::<LittleEndian>().unwrap();
        let _coadded = r.read_u32::<LittleEndian>().unwrap();
        let w = r.read_f32::<LittleEndian>().unwrap();
        let _reserved = r.read_u32::<LittleEndian>().unwrap();

        let (x, y) = if flags & XYXY != 0 {
            let n = sub_points as usize;
            (floats(&mut r, n), floats(&mut r, n))
        } else {
            (Vec::new(), floats(&mut r, num_points as usize))
        };
        subfiles.push(Subfile {
            offset,
            exponent,
            index,
            start_z,
            end_z,
            num_points: sub_points,
            w,
            x,
            y,
        });
    }

    let mut directory = Vec::new();
    if flags & XYXY != 0 && flags & MULTI != 0 {
        assert_eq!(r.position() as u32, num_points, "directory offset");
        for _ in 0..subfile_count {
            directory.push((
                r.read_u32::<LittleEndian>().unwrap(),
                r.read_u32::<LittleEndian>().unwrap(),
                r.read_f32::<LittleEndian>().unwrap(),
            ));
        }
    }

    let mut tail = Vec::new();
    r.read_to_end(&mut tail).unwrap();

    Decoded {
        flags,
        version,
        exponent,
        num_points,
        first_x,
        last_x,
        subfile_count,
        date,
        log_offset_field,
        shared_x,
        subfiles,
        directory,
        tail,
    }
}

/// Narrows like the writer does so comparisons are exact.
pub fn as_f32(values: &[f64]) -> Vec<f32> {
    values.iter().map(|&v| v as f32).collect()
}
