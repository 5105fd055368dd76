//! Link heartbeat: a single status word.

use crate::error::CodecResult;
use crate::layout::{FieldReader, FieldWriter};
use crate::record::{Record, RecordKind};
use serde::Serialize;

pub const SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct HeartbeatPing {
    pub link_status: u32,
}

impl Record for HeartbeatPing {
    const KIND: RecordKind = RecordKind::HeartbeatPing;

    fn decode(bytes: &[u8]) -> CodecResult<Self> {
        let r = FieldReader::new(Self::KIND, bytes)?;
        Ok(Self {
            link_status: r.u32(0),
        })
    }

    fn encode_into(&self, buf: &mut [u8]) -> CodecResult<()> {
        FieldWriter::new(Self::KIND, buf)?.put_u32(0, self.link_status);
        Ok(())
    }
}
