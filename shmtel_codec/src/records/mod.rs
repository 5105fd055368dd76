//! One module per record layout.

pub mod autopilot;
pub mod camera;
pub mod environment;
pub mod failsafe;
pub mod gnss;
pub mod heartbeat;
pub mod inertial;
pub mod magnetometer;
pub mod process;
pub mod range;
pub mod resource;

pub use autopilot::{AutopilotAttitude, AutopilotCommand};
pub use camera::CameraFrame;
pub use environment::EnvironmentSample;
pub use failsafe::{FailsafeInfo, FailsafeItem};
pub use gnss::{GgaFix, GnssFix, GsaDop, RmcFix};
pub use heartbeat::HeartbeatPing;
pub use inertial::InertialSample;
pub use magnetometer::Magnetometer;
pub use process::{ProcessEntry, ProcessStat};
pub use range::RangeFinder;
pub use resource::ResourceStat;
