//! # Shmtel Codec
//!
//! Fixed-layout binary records exchanged over shared-memory telemetry
//! channels. Each record type maps a byte buffer of known length to typed
//! fields at fixed little-endian offsets and back.
//!
//! ## Records
//!
//! | Kind | Size | Default channel |
//! |------|------|-----------------|
//! | [`ProcessStat`] | 1540 | `/procstat` |
//! | [`ResourceStat`] | 64 | `/resstat` |
//! | [`FailsafeInfo`] | 136 | `/failsafeinfo` |
//! | [`GnssFix`] | 152 | `/gnss` |
//! | [`InertialSample`] | 44 | `/ins`, `/imu` |
//! | [`RangeFinder`] | 16 | `/altmt` |
//! | [`Magnetometer`] | 44 | `/hmc6343` |
//! | [`EnvironmentSample`] | 20 | `/bme680` |
//! | [`HeartbeatPing`] | 4 | `/wifi`, `/ecu0`..`/ecu2` |
//! | [`CameraFrame`] | 16 588 816 | `/readcam0`..`/readcam5` |
//! | [`AutopilotAttitude`] | 24 | `/mavlink_recv` |
//! | [`AutopilotCommand`] | 20 | `/mavlink_send` |
//!
//! ## Example
//!
//! ```rust
//! use shmtel_codec::{Record, ProcessStat, ProcessEntry};
//!
//! let stat = ProcessStat::new(&[ProcessEntry { liveness: 1, cpu: 12.5, mem: 3.0 }])?;
//! let bytes = stat.encode()?;
//! assert_eq!(bytes.len(), ProcessStat::SIZE);
//! assert_eq!(ProcessStat::decode(&bytes)?, stat);
//! # Ok::<(), shmtel_codec::CodecError>(())
//! ```

pub mod channels;
pub mod error;
mod layout;
pub mod record;
pub mod records;

pub use error::{CodecError, CodecResult};
pub use record::{Record, RecordKind, Telemetry, UnknownRecordKind};
pub use records::{
    AutopilotAttitude, AutopilotCommand, CameraFrame, EnvironmentSample, FailsafeInfo,
    FailsafeItem, GgaFix, GnssFix, GsaDop, HeartbeatPing, InertialSample, Magnetometer,
    ProcessEntry, ProcessStat, RangeFinder, ResourceStat, RmcFix,
};
