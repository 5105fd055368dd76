//! Per-item failsafe levels.
//!
//! A flat array of 34 `i32` levels. Slot order is fixed by the publisher and
//! mirrored by [`FailsafeItem`]. Error codes reported to operators are the
//! 1-based slot numbers.

use crate::error::{CodecError, CodecResult};
use crate::layout::{FieldReader, FieldWriter};
use crate::record::{Record, RecordKind};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use static_assertions::const_assert_eq;

/// Number of failsafe slots.
pub const FAILSAFE_SLOTS: usize = 34;

pub const SIZE: usize = 136;

const_assert_eq!(FAILSAFE_SLOTS * 4, SIZE);

/// Monitored item, in slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FailsafeItem {
    Process = 0,
    CpuTotal,
    Cpu1,
    Cpu2,
    Cpu3,
    Cpu4,
    Cpu5,
    Cpu6,
    Cpu7,
    Cpu8,
    Cpu9,
    Cpu10,
    Cpu11,
    Cpu12,
    Memory,
    Disk,
    Thermal,
    Camera1,
    Camera2,
    Camera3,
    Camera4,
    Camera5,
    Camera6,
    Altimeter,
    Gnss,
    Ins,
    Imu,
    Wifi,
    AtmPressure,
    EcuCompanion1,
    EcuCompanion2,
    EcuCompanion3,
    Compass,
    Autopilot,
}

impl FailsafeItem {
    pub const ALL: [FailsafeItem; FAILSAFE_SLOTS] = [
        FailsafeItem::Process,
        FailsafeItem::CpuTotal,
        FailsafeItem::Cpu1,
        FailsafeItem::Cpu2,
        FailsafeItem::Cpu3,
        FailsafeItem::Cpu4,
        FailsafeItem::Cpu5,
        FailsafeItem::Cpu6,
        FailsafeItem::Cpu7,
        FailsafeItem::Cpu8,
        FailsafeItem::Cpu9,
        FailsafeItem::Cpu10,
        FailsafeItem::Cpu11,
        FailsafeItem::Cpu12,
        FailsafeItem::Memory,
        FailsafeItem::Disk,
        FailsafeItem::Thermal,
        FailsafeItem::Camera1,
        FailsafeItem::Camera2,
        FailsafeItem::Camera3,
        FailsafeItem::Camera4,
        FailsafeItem::Camera5,
        FailsafeItem::Camera6,
        FailsafeItem::Altimeter,
        FailsafeItem::Gnss,
        FailsafeItem::Ins,
        FailsafeItem::Imu,
        FailsafeItem::Wifi,
        FailsafeItem::AtmPressure,
        FailsafeItem::EcuCompanion1,
        FailsafeItem::EcuCompanion2,
        FailsafeItem::EcuCompanion3,
        FailsafeItem::Compass,
        FailsafeItem::Autopilot,
    ];

    /// Zero-based slot index.
    pub const fn slot(self) -> usize {
        self as usize
    }

    /// Operator-facing error code (1-based slot number).
    pub const fn error_code(self) -> u32 {
        self as u32 + 1
    }

    pub fn from_error_code(code: u32) -> Option<Self> {
        let slot = (code as usize).checked_sub(1)?;
        Self::ALL.get(slot).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            FailsafeItem::Process => "process",
            FailsafeItem::CpuTotal => "cpu",
            FailsafeItem::Cpu1 => "cpu1",
            FailsafeItem::Cpu2 => "cpu2",
            FailsafeItem::Cpu3 => "cpu3",
            FailsafeItem::Cpu4 => "cpu4",
            FailsafeItem::Cpu5 => "cpu5",
            FailsafeItem::Cpu6 => "cpu6",
            FailsafeItem::Cpu7 => "cpu7",
            FailsafeItem::Cpu8 => "cpu8",
            FailsafeItem::Cpu9 => "cpu9",
            FailsafeItem::Cpu10 => "cpu10",
            FailsafeItem::Cpu11 => "cpu11",
            FailsafeItem::Cpu12 => "cpu12",
            FailsafeItem::Memory => "mem",
            FailsafeItem::Disk => "disk",
            FailsafeItem::Thermal => "therm",
            FailsafeItem::Camera1 => "camera1",
            FailsafeItem::Camera2 => "camera2",
            FailsafeItem::Camera3 => "camera3",
            FailsafeItem::Camera4 => "camera4",
            FailsafeItem::Camera5 => "camera5",
            FailsafeItem::Camera6 => "camera6",
            FailsafeItem::Altimeter => "altitude",
            FailsafeItem::Gnss => "gnss",
            FailsafeItem::Ins => "ins",
            FailsafeItem::Imu => "imu",
            FailsafeItem::Wifi => "wifi",
            FailsafeItem::AtmPressure => "atm_pressure",
            FailsafeItem::EcuCompanion1 => "ecu_jetson1",
            FailsafeItem::EcuCompanion2 => "ecu_jetson2",
            FailsafeItem::EcuCompanion3 => "ecu_jetson3",
            FailsafeItem::Compass => "mag",
            FailsafeItem::Autopilot => "ecu",
        }
    }
}

/// Failsafe levels, one per [`FailsafeItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailsafeInfo {
    pub levels: [i32; FAILSAFE_SLOTS],
}

impl Default for FailsafeInfo {
    fn default() -> Self {
        Self {
            levels: [0; FAILSAFE_SLOTS],
        }
    }
}

impl FailsafeInfo {
    /// Build from leading slot values; missing slots are zero.
    pub fn from_levels(values: &[i32]) -> CodecResult<Self> {
        if values.len() > FAILSAFE_SLOTS {
            return Err(CodecError::CapacityExceeded {
                kind: RecordKind::FailsafeInfo,
                field: "levels",
                capacity: FAILSAFE_SLOTS,
                requested: values.len(),
            });
        }
        let mut info = Self::default();
        info.levels[..values.len()].copy_from_slice(values);
        Ok(info)
    }

    pub fn level(&self, item: FailsafeItem) -> i32 {
        self.levels[item.slot()]
    }

    pub fn set_level(&mut self, item: FailsafeItem, level: i32) {
        self.levels[item.slot()] = level;
    }

    /// Items whose level is non-zero.
    pub fn raised(&self) -> impl Iterator<Item = (FailsafeItem, i32)> + '_ {
        FailsafeItem::ALL
            .into_iter()
            .map(|item| (item, self.level(item)))
            .filter(|(_, level)| *level != 0)
    }

    /// Highest level across all items.
    pub fn worst(&self) -> i32 {
        self.levels.iter().copied().max().unwrap_or(0)
    }
}

impl Record for FailsafeInfo {
    const KIND: RecordKind = RecordKind::FailsafeInfo;

    fn decode(bytes: &[u8]) -> CodecResult<Self> {
        let r = FieldReader::new(Self::KIND, bytes)?;
        Ok(Self {
            levels: r.i32_block(0),
        })
    }

    fn encode_into(&self, buf: &mut [u8]) -> CodecResult<()> {
        let mut w = FieldWriter::new(Self::KIND, buf)?;
        w.put_i32_block(0, &self.levels);
        Ok(())
    }
}

impl Serialize for FailsafeInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("FailsafeInfo", 1)?;
        s.serialize_field("levels", &self.levels[..])?;
        s.end()
    }
}
