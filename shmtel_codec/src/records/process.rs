//! Per-process liveness, CPU and memory table.
//!
//! Layout (1540 bytes):
//!
//! | Offset | Field | Type |
//! |--------|-------|------|
//! | 0 | count | u32 |
//! | 4 | liveness | i32 x 128 |
//! | 516 | cpu % | f32 x 128 |
//! | 1028 | mem % | f32 x 128 |
//!
//! Only the first `count` slots carry meaning. The remainder is whatever the
//! publisher left there.

use crate::error::{CodecError, CodecResult};
use crate::layout::{FieldReader, FieldWriter};
use crate::record::{Record, RecordKind};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use static_assertions::const_assert_eq;

/// Fixed slot capacity.
pub const PROC_MAX: usize = 128;

/// Liveness value of a running process.
pub const PROC_ALIVE: i32 = 1;

const COUNT_OFFSET: usize = 0;
const LIVENESS_OFFSET: usize = 4;
const CPU_OFFSET: usize = LIVENESS_OFFSET + 4 * PROC_MAX;
const MEM_OFFSET: usize = CPU_OFFSET + 4 * PROC_MAX;

pub const SIZE: usize = 1540;

const_assert_eq!(CPU_OFFSET, 516);
const_assert_eq!(MEM_OFFSET, 1028);
const_assert_eq!(MEM_OFFSET + 4 * PROC_MAX, SIZE);

/// One meaningful slot of a [`ProcessStat`].
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ProcessEntry {
    /// Liveness flag as published (`1` = alive)
    pub liveness: i32,
    /// CPU usage in percent
    pub cpu: f32,
    /// Memory usage in percent
    pub mem: f32,
}

impl ProcessEntry {
    pub fn is_alive(&self) -> bool {
        self.liveness == PROC_ALIVE
    }
}

/// Process statistics table.
///
/// Slots past `count` are kept verbatim so a decoded record re-encodes to
/// the same bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessStat {
    count: u32,
    liveness: [i32; PROC_MAX],
    cpu: [f32; PROC_MAX],
    mem: [f32; PROC_MAX],
}

impl ProcessStat {
    /// Build a table from its meaningful entries. Unused slots are zero.
    pub fn new(entries: &[ProcessEntry]) -> CodecResult<Self> {
        let count = check_count(entries.len())?;
        let mut stat = Self {
            count,
            liveness: [0; PROC_MAX],
            cpu: [0.0; PROC_MAX],
            mem: [0.0; PROC_MAX],
        };
        for (i, e) in entries.iter().enumerate() {
            stat.liveness[i] = e.liveness;
            stat.cpu[i] = e.cpu;
            stat.mem[i] = e.mem;
        }
        Ok(stat)
    }

    /// Number of meaningful slots.
    pub fn count(&self) -> usize {
        self.count as usize
    }

    pub fn liveness(&self) -> &[i32] {
        &self.liveness[..self.count()]
    }

    pub fn cpu(&self) -> &[f32] {
        &self.cpu[..self.count()]
    }

    pub fn mem(&self) -> &[f32] {
        &self.mem[..self.count()]
    }

    /// Iterate the meaningful slots in order.
    pub fn processes(&self) -> impl Iterator<Item = ProcessEntry> + '_ {
        (0..self.count()).map(|i| ProcessEntry {
            liveness: self.liveness[i],
            cpu: self.cpu[i],
            mem: self.mem[i],
        })
    }

    pub fn alive_count(&self) -> usize {
        self.liveness().iter().filter(|l| **l == PROC_ALIVE).count()
    }
}

fn check_count(requested: usize) -> CodecResult<u32> {
    if requested > PROC_MAX {
        return Err(CodecError::CapacityExceeded {
            kind: RecordKind::ProcessStat,
            field: "count",
            capacity: PROC_MAX,
            requested,
        });
    }
    // Bounded by PROC_MAX above.
    Ok(requested as u32)
}

impl Record for ProcessStat {
    const KIND: RecordKind = RecordKind::ProcessStat;

    fn decode(bytes: &[u8]) -> CodecResult<Self> {
        let r = FieldReader::new(Self::KIND, bytes)?;
        let count = check_count(r.u32(COUNT_OFFSET) as usize)?;
        Ok(Self {
            count,
            liveness: r.i32_block(LIVENESS_OFFSET),
            cpu: r.f32_block(CPU_OFFSET),
            mem: r.f32_block(MEM_OFFSET),
        })
    }

    fn encode_into(&self, buf: &mut [u8]) -> CodecResult<()> {
        let mut w = FieldWriter::new(Self::KIND, buf)?;
        w.put_u32(COUNT_OFFSET, self.count);
        w.put_i32_block(LIVENESS_OFFSET, &self.liveness);
        w.put_f32_block(CPU_OFFSET, &self.cpu);
        w.put_f32_block(MEM_OFFSET, &self.mem);
        Ok(())
    }
}

// Only the meaningful slots are worth showing.
impl Serialize for ProcessStat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ProcessStat", 4)?;
        s.serialize_field("count", &self.count)?;
        s.serialize_field("liveness", self.liveness())?;
        s.serialize_field("cpu", self.cpu())?;
        s.serialize_field("mem", self.mem())?;
        s.end()
    }
}
