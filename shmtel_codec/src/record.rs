//! The `Record` contract, the closed set of record kinds, and the tagged
//! `Telemetry` union over all of them.

use crate::channels;
use crate::error::CodecResult;
use crate::records::{
    AutopilotAttitude, AutopilotCommand, CameraFrame, EnvironmentSample, FailsafeInfo, GnssFix,
    HeartbeatPing, InertialSample, Magnetometer, ProcessStat, RangeFinder, ResourceStat,
    autopilot, camera, environment, failsafe, gnss, heartbeat, inertial, magnetometer, process,
    range, resource,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fixed-layout record exchanged through a shared-memory channel.
///
/// `decode` reads `SIZE` bytes from the front of its input and ignores
/// anything beyond. `encode_into` writes exactly `SIZE` bytes and zeroes any
/// gaps between fields.
pub trait Record: Sized {
    /// Which of the fixed layouts this type implements.
    const KIND: RecordKind;
    /// Byte length of the layout.
    const SIZE: usize = Self::KIND.required_size();

    /// Decode from the first `SIZE` bytes of `bytes`.
    fn decode(bytes: &[u8]) -> CodecResult<Self>;

    /// Encode into the first `SIZE` bytes of `buf`.
    fn encode_into(&self, buf: &mut [u8]) -> CodecResult<()>;

    /// Encode into a fresh `SIZE`-byte buffer.
    fn encode(&self) -> CodecResult<Vec<u8>> {
        let mut buf = vec![0u8; Self::SIZE];
        self.encode_into(&mut buf)?;
        Ok(buf)
    }
}

/// Identifies one of the record layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Per-process liveness/CPU/memory table
    ProcessStat,
    /// Host CPU, memory, disk, temperature load
    ResourceStat,
    /// Per-item failsafe levels
    FailsafeInfo,
    /// GNSS GGA/RMC/GSA summary
    GnssFix,
    /// INS/IMU attitude, acceleration and angular rate
    InertialSample,
    /// Altimeter distance
    RangeFinder,
    /// Compass accelerometer/magnetometer/heading
    Magnetometer,
    /// Pressure, temperature, humidity, gas
    EnvironmentSample,
    /// Link heartbeat
    HeartbeatPing,
    /// Raw UYVY camera frame
    CameraFrame,
    /// Autopilot attitude/time report
    AutopilotAttitude,
    /// Velocity command to the autopilot
    AutopilotCommand,
}

impl RecordKind {
    /// Every kind, in declaration order.
    pub const ALL: [RecordKind; 12] = [
        RecordKind::ProcessStat,
        RecordKind::ResourceStat,
        RecordKind::FailsafeInfo,
        RecordKind::GnssFix,
        RecordKind::InertialSample,
        RecordKind::RangeFinder,
        RecordKind::Magnetometer,
        RecordKind::EnvironmentSample,
        RecordKind::HeartbeatPing,
        RecordKind::CameraFrame,
        RecordKind::AutopilotAttitude,
        RecordKind::AutopilotCommand,
    ];

    /// Minimum byte length a buffer must have to decode this kind.
    pub const fn required_size(self) -> usize {
        match self {
            RecordKind::ProcessStat => process::SIZE,
            RecordKind::ResourceStat => resource::SIZE,
            RecordKind::FailsafeInfo => failsafe::SIZE,
            RecordKind::GnssFix => gnss::SIZE,
            RecordKind::InertialSample => inertial::SIZE,
            RecordKind::RangeFinder => range::SIZE,
            RecordKind::Magnetometer => magnetometer::SIZE,
            RecordKind::EnvironmentSample => environment::SIZE,
            RecordKind::HeartbeatPing => heartbeat::SIZE,
            RecordKind::CameraFrame => camera::SIZE,
            RecordKind::AutopilotAttitude => autopilot::ATTITUDE_SIZE,
            RecordKind::AutopilotCommand => autopilot::COMMAND_SIZE,
        }
    }

    /// Short name used on the command line and in logs.
    pub const fn short_name(self) -> &'static str {
        match self {
            RecordKind::ProcessStat => "procstat",
            RecordKind::ResourceStat => "resstat",
            RecordKind::FailsafeInfo => "failsafe",
            RecordKind::GnssFix => "gnss",
            RecordKind::InertialSample => "inertial",
            RecordKind::RangeFinder => "range",
            RecordKind::Magnetometer => "magnetometer",
            RecordKind::EnvironmentSample => "environment",
            RecordKind::HeartbeatPing => "ping",
            RecordKind::CameraFrame => "camera",
            RecordKind::AutopilotAttitude => "attitude",
            RecordKind::AutopilotCommand => "command",
        }
    }

    /// Conventional channel name carrying this kind.
    pub const fn default_channel(self) -> &'static str {
        match self {
            RecordKind::ProcessStat => channels::PROCSTAT,
            RecordKind::ResourceStat => channels::RESSTAT,
            RecordKind::FailsafeInfo => channels::FAILSAFE,
            RecordKind::GnssFix => channels::GNSS,
            RecordKind::InertialSample => channels::INS,
            RecordKind::RangeFinder => channels::ALTIMETER,
            RecordKind::Magnetometer => channels::COMPASS,
            RecordKind::EnvironmentSample => channels::ENVIRONMENT,
            RecordKind::HeartbeatPing => channels::WIFI,
            RecordKind::CameraFrame => channels::CAMERA0,
            RecordKind::AutopilotAttitude => channels::AUTOPILOT_RECV,
            RecordKind::AutopilotCommand => channels::AUTOPILOT_SEND,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Unrecognized record kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown record kind '{0}'")]
pub struct UnknownRecordKind(pub String);

impl FromStr for RecordKind {
    type Err = UnknownRecordKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        RecordKind::ALL
            .into_iter()
            .find(|k| k.short_name() == wanted)
            .ok_or_else(|| UnknownRecordKind(s.to_string()))
    }
}

/// Any decoded record, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum Telemetry {
    ProcessStat(ProcessStat),
    ResourceStat(ResourceStat),
    FailsafeInfo(FailsafeInfo),
    GnssFix(GnssFix),
    InertialSample(InertialSample),
    RangeFinder(RangeFinder),
    Magnetometer(Magnetometer),
    EnvironmentSample(EnvironmentSample),
    HeartbeatPing(HeartbeatPing),
    CameraFrame(CameraFrame),
    AutopilotAttitude(AutopilotAttitude),
    AutopilotCommand(AutopilotCommand),
}

impl Telemetry {
    /// Decode `bytes` as the layout named by `kind`.
    pub fn decode(kind: RecordKind, bytes: &[u8]) -> CodecResult<Self> {
        Ok(match kind {
            RecordKind::ProcessStat => Telemetry::ProcessStat(ProcessStat::decode(bytes)?),
            RecordKind::ResourceStat => Telemetry::ResourceStat(ResourceStat::decode(bytes)?),
            RecordKind::FailsafeInfo => Telemetry::FailsafeInfo(FailsafeInfo::decode(bytes)?),
            RecordKind::GnssFix => Telemetry::GnssFix(GnssFix::decode(bytes)?),
            RecordKind::InertialSample => {
                Telemetry::InertialSample(InertialSample::decode(bytes)?)
            }
            RecordKind::RangeFinder => Telemetry::RangeFinder(RangeFinder::decode(bytes)?),
            RecordKind::Magnetometer => Telemetry::Magnetometer(Magnetometer::decode(bytes)?),
            RecordKind::EnvironmentSample => {
                Telemetry::EnvironmentSample(EnvironmentSample::decode(bytes)?)
            }
            RecordKind::HeartbeatPing => Telemetry::HeartbeatPing(HeartbeatPing::decode(bytes)?),
            RecordKind::CameraFrame => Telemetry::CameraFrame(CameraFrame::decode(bytes)?),
            RecordKind::AutopilotAttitude => {
                Telemetry::AutopilotAttitude(AutopilotAttitude::decode(bytes)?)
            }
            RecordKind::AutopilotCommand => {
                Telemetry::AutopilotCommand(AutopilotCommand::decode(bytes)?)
            }
        })
    }

    /// Encode the wrapped record.
    pub fn encode(&self) -> CodecResult<Vec<u8>> {
        match self {
            Telemetry::ProcessStat(r) => r.encode(),
            Telemetry::ResourceStat(r) => r.encode(),
            Telemetry::FailsafeInfo(r) => r.encode(),
            Telemetry::GnssFix(r) => r.encode(),
            Telemetry::InertialSample(r) => r.encode(),
            Telemetry::RangeFinder(r) => r.encode(),
            Telemetry::Magnetometer(r) => r.encode(),
            Telemetry::EnvironmentSample(r) => r.encode(),
            Telemetry::HeartbeatPing(r) => r.encode(),
            Telemetry::CameraFrame(r) => r.encode(),
            Telemetry::AutopilotAttitude(r) => r.encode(),
            Telemetry::AutopilotCommand(r) => r.encode(),
        }
    }

    /// Kind of the wrapped record.
    pub fn kind(&self) -> RecordKind {
        match self {
            Telemetry::ProcessStat(_) => RecordKind::ProcessStat,
            Telemetry::ResourceStat(_) => RecordKind::ResourceStat,
            Telemetry::FailsafeInfo(_) => RecordKind::FailsafeInfo,
            Telemetry::GnssFix(_) => RecordKind::GnssFix,
            Telemetry::InertialSample(_) => RecordKind::InertialSample,
            Telemetry::RangeFinder(_) => RecordKind::RangeFinder,
            Telemetry::Magnetometer(_) => RecordKind::Magnetometer,
            Telemetry::EnvironmentSample(_) => RecordKind::EnvironmentSample,
            Telemetry::HeartbeatPing(_) => RecordKind::HeartbeatPing,
            Telemetry::CameraFrame(_) => RecordKind::CameraFrame,
            Telemetry::AutopilotAttitude(_) => RecordKind::AutopilotAttitude,
            Telemetry::AutopilotCommand(_) => RecordKind::AutopilotCommand,
        }
    }
}
