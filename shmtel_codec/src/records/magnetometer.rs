//! Compass module (accelerometer, magnetometer, heading).

use crate::error::CodecResult;
use crate::layout::{FieldReader, FieldWriter};
use crate::record::{Record, RecordKind};
use serde::Serialize;

pub const SIZE: usize = 44;

/// All fields are unsigned raw sensor words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Magnetometer {
    pub link_status: u32,
    pub accel: [u32; 3],
    pub mag: [u32; 3],
    pub heading: u32,
    pub pitch: u32,
    pub roll: u32,
    pub temperature: u32,
}

impl Record for Magnetometer {
    const KIND: RecordKind = RecordKind::Magnetometer;

    fn decode(bytes: &[u8]) -> CodecResult<Self> {
        let r = FieldReader::new(Self::KIND, bytes)?;
        Ok(Self {
            link_status: r.u32(0),
            accel: [r.u32(4), r.u32(8), r.u32(12)],
            mag: [r.u32(16), r.u32(20), r.u32(24)],
            heading: r.u32(28),
            pitch: r.u32(32),
            roll: r.u32(36),
            temperature: r.u32(40),
        })
    }

    fn encode_into(&self, buf: &mut [u8]) -> CodecResult<()> {
        let mut w = FieldWriter::new(Self::KIND, buf)?;
        w.put_u32(0, self.link_status);
        for (i, v) in self.accel.iter().enumerate() {
            w.put_u32(4 + i * 4, *v);
        }
        for (i, v) in self.mag.iter().enumerate() {
            w.put_u32(16 + i * 4, *v);
        }
        w.put_u32(28, self.heading);
        w.put_u32(32, self.pitch);
        w.put_u32(36, self.roll);
        w.put_u32(40, self.temperature);
        Ok(())
    }
}
