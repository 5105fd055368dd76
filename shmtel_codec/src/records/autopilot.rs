//! Autopilot link records: the attitude/time report it publishes and the
//! velocity command it consumes.

use crate::error::CodecResult;
use crate::layout::{FieldReader, FieldWriter};
use crate::record::{Record, RecordKind};
use serde::Serialize;

/// `u32` status, 4 bytes padding, `u64` epoch microseconds, `u32` boot ms,
/// 4 bytes tail padding.
pub const ATTITUDE_SIZE: usize = 24;

/// Five consecutive `f32` values.
pub const COMMAND_SIZE: usize = 20;

/// Time report received from the autopilot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AutopilotAttitude {
    pub status: u32,
    pub time_unix_usec: u64,
    pub time_boot_ms: u32,
}

impl Record for AutopilotAttitude {
    const KIND: RecordKind = RecordKind::AutopilotAttitude;

    fn decode(bytes: &[u8]) -> CodecResult<Self> {
        let r = FieldReader::new(Self::KIND, bytes)?;
        Ok(Self {
            status: r.u32(0),
            time_unix_usec: r.u64(8),
            time_boot_ms: r.u32(16),
        })
    }

    fn encode_into(&self, buf: &mut [u8]) -> CodecResult<()> {
        let mut w = FieldWriter::new(Self::KIND, buf)?;
        w.put_u32(0, self.status);
        w.put_u64(8, self.time_unix_usec);
        w.put_u32(16, self.time_boot_ms);
        Ok(())
    }
}

/// Body-frame velocity command sent to the autopilot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AutopilotCommand {
    pub timestamp: f32,
    /// m/s, forward
    pub vx: f32,
    /// m/s, right
    pub vy: f32,
    /// m/s, down
    pub vz: f32,
    /// rad/s
    pub yaw_rate: f32,
}

impl Record for AutopilotCommand {
    const KIND: RecordKind = RecordKind::AutopilotCommand;

    fn decode(bytes: &[u8]) -> CodecResult<Self> {
        let r = FieldReader::new(Self::KIND, bytes)?;
        Ok(Self {
            timestamp: r.f32(0),
            vx: r.f32(4),
            vy: r.f32(8),
            vz: r.f32(12),
            yaw_rate: r.f32(16),
        })
    }

    fn encode_into(&self, buf: &mut [u8]) -> CodecResult<()> {
        let mut w = FieldWriter::new(Self::KIND, buf)?;
        w.put_f32(0, self.timestamp);
        w.put_f32(4, self.vx);
        w.put_f32(8, self.vy);
        w.put_f32(12, self.vz);
        w.put_f32(16, self.yaw_rate);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attitude_has_padding_gaps() {
        let a = AutopilotAttitude {
            status: 1,
            time_unix_usec: 1_700_000_000_000_000,
            time_boot_ms: 65_000,
        };
        let bytes = a.encode().unwrap();
        assert_eq!(bytes.len(), ATTITUDE_SIZE);
        assert_eq!(&bytes[4..8], &[0; 4]);
        assert_eq!(&bytes[8..16], &1_700_000_000_000_000u64.to_le_bytes());
        assert_eq!(&bytes[16..20], &65_000u32.to_le_bytes());
        assert_eq!(&bytes[20..24], &[0; 4]);

        // Garbage in the gaps does not leak into the record.
        let mut noisy = bytes.clone();
        noisy[4..8].copy_from_slice(&[0xEE; 4]);
        noisy[20..24].copy_from_slice(&[0xEE; 4]);
        assert_eq!(AutopilotAttitude::decode(&noisy).unwrap(), a);
    }

    #[test]
    fn command_layout() {
        let c = AutopilotCommand {
            timestamp: 0.0,
            vx: 1.5,
            vy: -0.25,
            vz: 0.0,
            yaw_rate: 0.1,
        };
        let bytes = c.encode().unwrap();
        assert_eq!(bytes.len(), COMMAND_SIZE);
        assert_eq!(&bytes[4..8], &1.5f32.to_le_bytes());
        assert_eq!(&bytes[8..12], &(-0.25f32).to_le_bytes());
        assert_eq!(AutopilotCommand::decode(&bytes).unwrap(), c);
    }
}
