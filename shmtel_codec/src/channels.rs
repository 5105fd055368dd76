//! Conventional shared-memory channel names.
//!
//! These are the names the platform publishes under. Deployments may add or
//! rename channels in their configuration file; nothing here is enforced.

use crate::record::RecordKind;

pub const PROCSTAT: &str = "/procstat";
pub const RESSTAT: &str = "/resstat";
pub const FAILSAFE: &str = "/failsafeinfo";
pub const GNSS: &str = "/gnss";
pub const INS: &str = "/ins";
pub const IMU: &str = "/imu";
pub const ALTIMETER: &str = "/altmt";
pub const COMPASS: &str = "/hmc6343";
pub const ENVIRONMENT: &str = "/bme680";
pub const WIFI: &str = "/wifi";
pub const CAMERA0: &str = CAMERAS[0];
pub const AUTOPILOT_RECV: &str = "/mavlink_recv";
pub const AUTOPILOT_SEND: &str = "/mavlink_send";

/// Heartbeat channels of the companion compute units (`/ecu0`..`/ecu2`).
pub const ECU_HEARTBEATS: [&str; 3] = ["/ecu0", "/ecu1", "/ecu2"];

/// Scratch region used for bring-up; carries no fixed record.
pub const SAMPLE: &str = "/sample";

/// Number of camera channels (`/readcam0`..`/readcam5`).
pub const CAMERA_COUNT: usize = 6;

/// Camera channels, indexed by camera number.
pub const CAMERAS: [&str; CAMERA_COUNT] = [
    "/readcam0",
    "/readcam1",
    "/readcam2",
    "/readcam3",
    "/readcam4",
    "/readcam5",
];

/// Guess the record kind carried by a channel from its conventional name.
///
/// Returns `None` for names outside the conventional set.
pub fn kind_for_channel(name: &str) -> Option<RecordKind> {
    let kind = match name {
        PROCSTAT => RecordKind::ProcessStat,
        RESSTAT => RecordKind::ResourceStat,
        FAILSAFE => RecordKind::FailsafeInfo,
        GNSS => RecordKind::GnssFix,
        INS | IMU => RecordKind::InertialSample,
        ALTIMETER => RecordKind::RangeFinder,
        COMPASS => RecordKind::Magnetometer,
        ENVIRONMENT => RecordKind::EnvironmentSample,
        WIFI => RecordKind::HeartbeatPing,
        AUTOPILOT_RECV => RecordKind::AutopilotAttitude,
        AUTOPILOT_SEND => RecordKind::AutopilotCommand,
        n if ECU_HEARTBEATS.contains(&n) => RecordKind::HeartbeatPing,
        n if CAMERAS.contains(&n) => RecordKind::CameraFrame,
        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_channels_map_back_to_their_kind() {
        for kind in RecordKind::ALL {
            assert_eq!(kind_for_channel(kind.default_channel()), Some(kind));
        }
    }

    #[test]
    fn aliases() {
        assert_eq!(kind_for_channel("/imu"), Some(RecordKind::InertialSample));
        assert_eq!(kind_for_channel("/ecu2"), Some(RecordKind::HeartbeatPing));
        assert_eq!(kind_for_channel("/readcam5"), Some(RecordKind::CameraFrame));
    }

    #[test]
    fn unknown_names() {
        assert_eq!(kind_for_channel("/readcam6"), None);
        assert_eq!(kind_for_channel("/readcamX"), None);
        assert_eq!(kind_for_channel("/readcam+1"), None);
        assert_eq!(kind_for_channel("/readcam01"), None);
        assert_eq!(kind_for_channel("/readcam"), None);
        assert_eq!(kind_for_channel("procstat"), None);
        assert_eq!(kind_for_channel(SAMPLE), None);
        assert_eq!(kind_for_channel("/ecu3"), None);
    }
}
