//! INS/IMU sample.

use crate::error::CodecResult;
use crate::layout::{FieldReader, FieldWriter};
use crate::record::{Record, RecordKind};
use serde::Serialize;
use static_assertions::const_assert_eq;

const LINK: usize = 0;
const SENSOR_STATUS: usize = 4;
const ROLL: usize = 8;
const PITCH: usize = 12;
const YAW: usize = 16;
const ACCEL_X: usize = 20;
const ACCEL_Y: usize = 24;
const ACCEL_Z: usize = 28;
const ANGLE_X: usize = 32;
const ANGLE_Y: usize = 36;
const ANGLE_Z: usize = 40;

pub const SIZE: usize = 44;

const_assert_eq!(ANGLE_Z + 4, SIZE);

/// Attitude, acceleration and angular rate as raw sensor integers.
///
/// Each field is read from its own offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct InertialSample {
    pub link_status: u32,
    pub sensor_status: i32,
    pub roll: i32,
    pub pitch: i32,
    pub yaw: i32,
    pub accel_x: i32,
    pub accel_y: i32,
    pub accel_z: i32,
    pub angle_x: i32,
    pub angle_y: i32,
    pub angle_z: i32,
}

impl Record for InertialSample {
    const KIND: RecordKind = RecordKind::InertialSample;

    fn decode(bytes: &[u8]) -> CodecResult<Self> {
        let r = FieldReader::new(Self::KIND, bytes)?;
        Ok(Self {
            link_status: r.u32(LINK),
            sensor_status: r.i32(SENSOR_STATUS),
            roll: r.i32(ROLL),
            pitch: r.i32(PITCH),
            yaw: r.i32(YAW),
            accel_x: r.i32(ACCEL_X),
            accel_y: r.i32(ACCEL_Y),
            accel_z: r.i32(ACCEL_Z),
            angle_x: r.i32(ANGLE_X),
            angle_y: r.i32(ANGLE_Y),
            angle_z: r.i32(ANGLE_Z),
        })
    }

    fn encode_into(&self, buf: &mut [u8]) -> CodecResult<()> {
        let mut w = FieldWriter::new(Self::KIND, buf)?;
        w.put_u32(LINK, self.link_status);
        w.put_i32(SENSOR_STATUS, self.sensor_status);
        w.put_i32(ROLL, self.roll);
        w.put_i32(PITCH, self.pitch);
        w.put_i32(YAW, self.yaw);
        w.put_i32(ACCEL_X, self.accel_x);
        w.put_i32(ACCEL_Y, self.accel_y);
        w.put_i32(ACCEL_Z, self.accel_z);
        w.put_i32(ANGLE_X, self.angle_x);
        w.put_i32(ANGLE_Y, self.angle_y);
        w.put_i32(ANGLE_Z, self.angle_z);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_has_its_own_offset() {
        let mut buf = vec![0u8; SIZE];
        for i in 0..11 {
            buf[i * 4..i * 4 + 4].copy_from_slice(&(i as i32 + 100).to_le_bytes());
        }
        let s = InertialSample::decode(&buf).unwrap();
        assert_eq!(s.link_status, 100);
        assert_eq!(s.sensor_status, 101);
        assert_eq!((s.roll, s.pitch, s.yaw), (102, 103, 104));
        assert_eq!((s.accel_x, s.accel_y, s.accel_z), (105, 106, 107));
        assert_eq!((s.angle_x, s.angle_y, s.angle_z), (108, 109, 110));
    }

    #[test]
    fn negative_values_survive() {
        let s = InertialSample {
            roll: -1800,
            accel_z: -981,
            ..Default::default()
        };
        assert_eq!(InertialSample::decode(&s.encode().unwrap()).unwrap(), s);
    }
}
