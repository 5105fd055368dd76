//! Property tests for the fixed-layout codec
//!
//! Round-trips use in-range values only. Floats are drawn finite so that
//! record equality is meaningful.

use proptest::prelude::*;
use shmtel_codec::records::process::PROC_MAX;
use shmtel_codec::{
    AutopilotAttitude, AutopilotCommand, CodecError, EnvironmentSample, FailsafeInfo, GgaFix,
    GnssFix, GsaDop, HeartbeatPing, InertialSample, Magnetometer, ProcessEntry, ProcessStat,
    RangeFinder, Record, RecordKind, ResourceStat, RmcFix, Telemetry,
};

fn finite_f32() -> impl Strategy<Value = f32> {
    -1.0e6f32..1.0e6f32
}

fn finite_f64() -> impl Strategy<Value = f64> {
    -1.0e9f64..1.0e9f64
}

fn process_entry() -> impl Strategy<Value = ProcessEntry> {
    (any::<i32>(), finite_f32(), finite_f32()).prop_map(|(liveness, cpu, mem)| ProcessEntry {
        liveness,
        cpu,
        mem,
    })
}

fn gnss_fix() -> impl Strategy<Value = GnssFix> {
    let gga = (
        (finite_f64(), finite_f64(), any::<u32>(), finite_f64(), any::<u32>()),
        (any::<u32>(), any::<u32>(), finite_f64(), finite_f64(), finite_f64()),
    )
        .prop_map(
            |(
                (time, latitude, lat_dir, longitude, lon_dir),
                (fix_mode, satellites, hdop, height_sea, geoid_height),
            )| GgaFix {
                time,
                latitude,
                lat_dir,
                longitude,
                lon_dir,
                fix_mode,
                satellites,
                hdop,
                height_sea,
                geoid_height,
            },
        );
    let rmc = (
        (finite_f64(), finite_f64(), any::<u32>(), finite_f64(), any::<u32>()),
        (
            finite_f64(),
            any::<u32>(),
            finite_f64(),
            finite_f64(),
            any::<u32>(),
            any::<[u8; 4]>(),
        ),
    )
        .prop_map(
            |(
                (time, latitude, lat_dir, longitude, lon_dir),
                (
                    speed_knots,
                    date,
                    track_true,
                    mag_variation,
                    mag_variation_dir,
                    mode_status,
                ),
            )| RmcFix {
                time,
                latitude,
                lat_dir,
                longitude,
                lon_dir,
                speed_knots,
                date,
                track_true,
                mag_variation,
                mag_variation_dir,
                mode_status,
            },
        );
    (any::<u32>(), gga, rmc, finite_f64(), finite_f64()).prop_map(
        |(link_status, gga, rmc, pdop, hdop)| GnssFix {
            link_status,
            gga,
            rmc,
            gsa: GsaDop { pdop, hdop },
        },
    )
}

proptest! {
    #[test]
    fn process_stat_round_trips(entries in prop::collection::vec(process_entry(), 0..=PROC_MAX)) {
        let stat = ProcessStat::new(&entries).unwrap();
        let decoded = ProcessStat::decode(&stat.encode().unwrap()).unwrap();
        prop_assert_eq!(decoded.processes().collect::<Vec<_>>(), entries);
        prop_assert_eq!(decoded, stat);
    }

    #[test]
    fn process_stat_count_over_capacity(count in (PROC_MAX as u32 + 1)..u32::MAX) {
        let mut buf = vec![0u8; ProcessStat::SIZE];
        buf[0..4].copy_from_slice(&count.to_le_bytes());
        let is_capacity_error = matches!(
            ProcessStat::decode(&buf),
            Err(CodecError::CapacityExceeded { .. })
        );
        prop_assert!(is_capacity_error);
    }

    #[test]
    fn resource_stat_round_trips(
        cpu in any::<[i32; 13]>(),
        mem in any::<i32>(),
        disk in any::<i32>(),
        therm in any::<i32>(),
    ) {
        let stat = ResourceStat {
            cpu_load: cpu,
            mem_load: mem,
            disk_load: disk,
            thermal: therm,
        };
        prop_assert_eq!(ResourceStat::decode(&stat.encode().unwrap()).unwrap(), stat);
    }

    #[test]
    fn failsafe_round_trips(levels in prop::collection::vec(any::<i32>(), 34)) {
        let info = FailsafeInfo::from_levels(&levels).unwrap();
        prop_assert_eq!(FailsafeInfo::decode(&info.encode().unwrap()).unwrap(), info);
    }

    #[test]
    fn gnss_round_trips(fix in gnss_fix()) {
        prop_assert_eq!(GnssFix::decode(&fix.encode().unwrap()).unwrap(), fix);
    }

    #[test]
    fn inertial_round_trips(link in any::<u32>(), v in any::<[i32; 10]>()) {
        let s = InertialSample {
            link_status: link,
            sensor_status: v[0],
            roll: v[1],
            pitch: v[2],
            yaw: v[3],
            accel_x: v[4],
            accel_y: v[5],
            accel_z: v[6],
            angle_x: v[7],
            angle_y: v[8],
            angle_z: v[9],
        };
        prop_assert_eq!(InertialSample::decode(&s.encode().unwrap()).unwrap(), s);
    }

    #[test]
    fn small_records_round_trip(w in any::<[u32; 11]>(), signed in any::<i32>()) {
        let range = RangeFinder {
            link_status: w[0],
            distance: signed,
            ratio: w[1] as i32,
            status: w[2] as i32,
        };
        prop_assert_eq!(RangeFinder::decode(&range.encode().unwrap()).unwrap(), range);

        let mag = Magnetometer {
            link_status: w[0],
            accel: [w[1], w[2], w[3]],
            mag: [w[4], w[5], w[6]],
            heading: w[7],
            pitch: w[8],
            roll: w[9],
            temperature: w[10],
        };
        prop_assert_eq!(Magnetometer::decode(&mag.encode().unwrap()).unwrap(), mag);

        let env = EnvironmentSample {
            link_status: w[0],
            pressure: w[1],
            temperature: signed,
            humidity: w[2],
            gas_resistance: w[3],
        };
        prop_assert_eq!(EnvironmentSample::decode(&env.encode().unwrap()).unwrap(), env);

        let ping = HeartbeatPing { link_status: w[0] };
        prop_assert_eq!(HeartbeatPing::decode(&ping.encode().unwrap()).unwrap(), ping);
    }

    #[test]
    fn autopilot_round_trips(
        status in any::<u32>(),
        usec in any::<u64>(),
        boot in any::<u32>(),
        f in prop::array::uniform5(finite_f32()),
    ) {
        let att = AutopilotAttitude {
            status,
            time_unix_usec: usec,
            time_boot_ms: boot,
        };
        prop_assert_eq!(AutopilotAttitude::decode(&att.encode().unwrap()).unwrap(), att);

        let cmd = AutopilotCommand {
            timestamp: f[0],
            vx: f[1],
            vy: f[2],
            vz: f[3],
            yaw_rate: f[4],
        };
        prop_assert_eq!(AutopilotCommand::decode(&cmd.encode().unwrap()).unwrap(), cmd);
    }

    #[test]
    fn extra_trailing_bytes_do_not_change_result(
        tail in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let cmd = AutopilotCommand {
            timestamp: 1.0,
            vx: 2.0,
            vy: 3.0,
            vz: 4.0,
            yaw_rate: 5.0,
        };
        let mut bytes = cmd.encode().unwrap();
        bytes.extend_from_slice(&tail);
        prop_assert_eq!(AutopilotCommand::decode(&bytes).unwrap(), cmd);
    }
}

#[test]
fn every_shorter_length_fails_for_small_kinds() {
    for kind in RecordKind::ALL
        .into_iter()
        .filter(|k| *k != RecordKind::CameraFrame)
    {
        let size = kind.required_size();
        for len in 0..size {
            match Telemetry::decode(kind, &vec![0u8; len]) {
                Err(CodecError::BufferTooShort {
                    kind: k,
                    required,
                    actual,
                }) => {
                    assert_eq!(k, kind);
                    assert_eq!(required, size);
                    assert_eq!(actual, len);
                }
                other => panic!("{kind} with {len} bytes: {other:?}"),
            }
        }
        assert!(Telemetry::decode(kind, &vec![0u8; size]).is_ok(), "{kind}");
    }
}

#[test]
fn zero_buffer_decodes_to_default_records() {
    let zero = vec![0u8; 256];
    assert_eq!(
        ResourceStat::decode(&zero).unwrap(),
        ResourceStat::default()
    );
    assert_eq!(GnssFix::decode(&zero).unwrap(), GnssFix::default());
    assert_eq!(
        AutopilotCommand::decode(&zero).unwrap(),
        AutopilotCommand::default()
    );
}

#[test]
fn process_stat_three_entries_over_garbage() {
    let mut buf = vec![0x5Au8; ProcessStat::SIZE];
    buf[0..4].copy_from_slice(&3u32.to_le_bytes());
    let liveness = [1i32, 0, 1];
    let cpu = [12.5f32, 0.0, 87.25];
    let mem = [1.0f32, 2.0, 3.0];
    for i in 0..3 {
        buf[4 + i * 4..8 + i * 4].copy_from_slice(&liveness[i].to_le_bytes());
        buf[516 + i * 4..520 + i * 4].copy_from_slice(&cpu[i].to_le_bytes());
        buf[1028 + i * 4..1032 + i * 4].copy_from_slice(&mem[i].to_le_bytes());
    }

    let stat = ProcessStat::decode(&buf).unwrap();
    assert_eq!(stat.liveness(), &liveness);
    assert_eq!(stat.cpu(), &cpu);
    assert_eq!(stat.mem(), &mem);
}

#[test]
fn resource_stat_known_values() {
    let mut buf = Vec::with_capacity(ResourceStat::SIZE);
    for v in (1..=13).map(|i| i * 10) {
        buf.extend_from_slice(&(v as i32).to_le_bytes());
    }
    for v in [55i32, 40, 42] {
        buf.extend_from_slice(&v.to_le_bytes());
    }
    assert_eq!(buf.len(), ResourceStat::SIZE);

    let stat = ResourceStat::decode(&buf).unwrap();
    assert_eq!(
        stat.cpu_load,
        [10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120, 130]
    );
    assert_eq!(
        (stat.mem_load, stat.disk_load, stat.thermal),
        (55, 40, 42)
    );
    assert_eq!(stat.encode().unwrap(), buf);
}

#[test]
fn environment_temperature_is_signed() {
    let mut buf = vec![0u8; EnvironmentSample::SIZE];
    buf[8..12].copy_from_slice(&(-5i32).to_le_bytes());
    let s = EnvironmentSample::decode(&buf).unwrap();
    assert_eq!(s.temperature, -5);
    assert_ne!(s.temperature as i64, 4_294_967_291);
}
