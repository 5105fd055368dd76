//! Altimeter reading.

use crate::error::CodecResult;
use crate::layout::{FieldReader, FieldWriter};
use crate::record::{Record, RecordKind};
use serde::Serialize;

pub const SIZE: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RangeFinder {
    pub link_status: u32,
    pub distance: i32,
    pub ratio: i32,
    pub status: i32,
}

impl Record for RangeFinder {
    const KIND: RecordKind = RecordKind::RangeFinder;

    fn decode(bytes: &[u8]) -> CodecResult<Self> {
        let r = FieldReader::new(Self::KIND, bytes)?;
        Ok(Self {
            link_status: r.u32(0),
            distance: r.i32(4),
            ratio: r.i32(8),
            status: r.i32(12),
        })
    }

    fn encode_into(&self, buf: &mut [u8]) -> CodecResult<()> {
        let mut w = FieldWriter::new(Self::KIND, buf)?;
        w.put_u32(0, self.link_status);
        w.put_i32(4, self.distance);
        w.put_i32(8, self.ratio);
        w.put_i32(12, self.status);
        Ok(())
    }
}
