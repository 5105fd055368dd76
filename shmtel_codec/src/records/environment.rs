//! Environmental sensor sample.

use crate::error::CodecResult;
use crate::layout::{FieldReader, FieldWriter};
use crate::record::{Record, RecordKind};
use serde::Serialize;

pub const SIZE: usize = 20;

/// Pressure, temperature, humidity and gas resistance.
///
/// Temperature is the only signed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EnvironmentSample {
    pub link_status: u32,
    pub pressure: u32,
    pub temperature: i32,
    pub humidity: u32,
    pub gas_resistance: u32,
}

impl Record for EnvironmentSample {
    const KIND: RecordKind = RecordKind::EnvironmentSample;

    fn decode(bytes: &[u8]) -> CodecResult<Self> {
        let r = FieldReader::new(Self::KIND, bytes)?;
        Ok(Self {
            link_status: r.u32(0),
            pressure: r.u32(4),
            temperature: r.i32(8),
            humidity: r.u32(12),
            gas_resistance: r.u32(16),
        })
    }

    fn encode_into(&self, buf: &mut [u8]) -> CodecResult<()> {
        let mut w = FieldWriter::new(Self::KIND, buf)?;
        w.put_u32(0, self.link_status);
        w.put_u32(4, self.pressure);
        w.put_i32(8, self.temperature);
        w.put_u32(12, self.humidity);
        w.put_u32(16, self.gas_resistance);
        Ok(())
    }
}
