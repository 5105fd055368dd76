//! Host resource load.

use crate::error::CodecResult;
use crate::layout::{FieldReader, FieldWriter};
use crate::record::{Record, RecordKind};
use serde::Serialize;
use static_assertions::const_assert_eq;

/// Aggregate CPU slot plus twelve per-core slots.
pub const CPU_SLOTS: usize = 13;

const CPU_OFFSET: usize = 0;
const MEM_OFFSET: usize = CPU_OFFSET + 4 * CPU_SLOTS;
const DISK_OFFSET: usize = MEM_OFFSET + 4;
const THERM_OFFSET: usize = DISK_OFFSET + 4;

pub const SIZE: usize = 64;

const_assert_eq!(MEM_OFFSET, 52);
const_assert_eq!(THERM_OFFSET + 4, SIZE);

/// CPU, memory, disk and thermal load, all as published integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ResourceStat {
    /// `[0]` is the aggregate, `[1..=12]` are per core
    pub cpu_load: [i32; CPU_SLOTS],
    pub mem_load: i32,
    pub disk_load: i32,
    pub thermal: i32,
}

impl ResourceStat {
    pub fn cpu_total(&self) -> i32 {
        self.cpu_load[0]
    }

    /// Per-core load, 1-based core numbering.
    pub fn core(&self, n: usize) -> Option<i32> {
        if n == 0 {
            return None;
        }
        self.cpu_load.get(n).copied()
    }
}

impl Record for ResourceStat {
    const KIND: RecordKind = RecordKind::ResourceStat;

    fn decode(bytes: &[u8]) -> CodecResult<Self> {
        let r = FieldReader::new(Self::KIND, bytes)?;
        Ok(Self {
            cpu_load: r.i32_block(CPU_OFFSET),
            mem_load: r.i32(MEM_OFFSET),
            disk_load: r.i32(DISK_OFFSET),
            thermal: r.i32(THERM_OFFSET),
        })
    }

    fn encode_into(&self, buf: &mut [u8]) -> CodecResult<()> {
        let mut w = FieldWriter::new(Self::KIND, buf)?;
        w.put_i32_block(CPU_OFFSET, &self.cpu_load);
        w.put_i32(MEM_OFFSET, self.mem_load);
        w.put_i32(DISK_OFFSET, self.disk_load);
        w.put_i32(THERM_OFFSET, self.thermal);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_known_offsets() {
        let mut buf = vec![0u8; SIZE];
        for i in 0..CPU_SLOTS {
            buf[i * 4..i * 4 + 4].copy_from_slice(&(i as i32 * 10).to_le_bytes());
        }
        buf[52..56].copy_from_slice(&55i32.to_le_bytes());
        buf[56..60].copy_from_slice(&70i32.to_le_bytes());
        buf[60..64].copy_from_slice(&48i32.to_le_bytes());

        let stat = ResourceStat::decode(&buf).unwrap();
        assert_eq!(stat.cpu_total(), 0);
        assert_eq!(stat.core(12), Some(120));
        assert_eq!(stat.core(13), None);
        assert_eq!(stat.core(0), None);
        assert_eq!(stat.mem_load, 55);
        assert_eq!(stat.disk_load, 70);
        assert_eq!(stat.thermal, 48);
        assert_eq!(stat.encode().unwrap(), buf);
    }

    #[test]
    fn trailing_bytes_ignored() {
        let stat = ResourceStat { mem_load: -1, ..Default::default() };
        let mut bytes = stat.encode().unwrap();
        bytes.extend_from_slice(&[9; 8]);
        assert_eq!(ResourceStat::decode(&bytes).unwrap(), stat);
    }
}
