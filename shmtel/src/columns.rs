//! Flat `(column, value)` view of a record. The CSV logger uses
//! [`columns`]; the text printer uses [`detail_columns`], which adds fields
//! the log layout leaves out.

use shmtel_codec::Telemetry;
use shmtel_codec::records::failsafe::FailsafeItem;
use shmtel_codec::records::gnss::hemisphere;

/// One named column.
pub type Column = (String, String);

fn col(name: impl Into<String>, value: impl ToString) -> Column {
    (name.into(), value.to_string())
}

/// Flatten `t` into named columns, in a stable order.
///
/// The process table is the only record whose width varies: it yields two
/// columns per counted process.
pub fn columns(t: &Telemetry) -> Vec<Column> {
    match t {
        Telemetry::ProcessStat(r) => r
            .processes()
            .enumerate()
            .flat_map(|(i, p)| {
                [
                    col(format!("PROC{i}CPU"), p.cpu),
                    col(format!("PROC{i}MEM"), p.mem),
                ]
            })
            .collect(),
        Telemetry::ResourceStat(r) => {
            let mut out = vec![col("CPU", r.cpu_total())];
            out.extend((1..r.cpu_load.len()).map(|n| col(format!("CPU{n}"), r.cpu_load[n])));
            out.push(col("MEM", r.mem_load));
            out.push(col("DISK", r.disk_load));
            out.push(col("THERM", r.thermal));
            out
        }
        Telemetry::FailsafeInfo(r) => FailsafeItem::ALL
            .into_iter()
            .map(|item| col(item.name().to_ascii_uppercase(), r.level(item)))
            .collect(),
        Telemetry::GnssFix(r) => vec![
            col("LINK", r.link_status),
            col("GGA_TIME", r.gga.time),
            col("GGA_LAT", r.gga.latitude),
            col("GGA_LAT_DIR", hemisphere(r.gga.lat_dir)),
            col("GGA_LON", r.gga.longitude),
            col("GGA_LON_DIR", hemisphere(r.gga.lon_dir)),
            col("GGA_FIX", r.gga.fix_mode),
            col("GGA_SATS", r.gga.satellites),
            col("GGA_HDOP", r.gga.hdop),
            col("GGA_HEIGHT", r.gga.height_sea),
            col("GGA_GEOID", r.gga.geoid_height),
            col("RMC_TIME", r.rmc.time),
            col("RMC_LAT", r.rmc.latitude),
            col("RMC_LAT_DIR", hemisphere(r.rmc.lat_dir)),
            col("RMC_LON", r.rmc.longitude),
            col("RMC_LON_DIR", hemisphere(r.rmc.lon_dir)),
            col("RMC_KNOTS", r.rmc.speed_knots),
            col("RMC_DATE", r.rmc.date),
            col("RMC_TRACK", r.rmc.track_true),
            col("RMC_MAGVAR", r.rmc.mag_variation),
            col("RMC_MAGVAR_DIR", hemisphere(r.rmc.mag_variation_dir)),
            col("RMC_MODE", r.rmc.mode_status_str()),
            col("GSA_PDOP", r.gsa.pdop),
            col("GSA_HDOP", r.gsa.hdop),
        ],
        Telemetry::InertialSample(r) => vec![
            col("LINK", r.link_status),
            col("STATUS", r.sensor_status),
            col("ROLL", r.roll),
            col("PITCH", r.pitch),
            col("YAW", r.yaw),
            col("ACCX", r.accel_x),
            col("ACCY", r.accel_y),
            col("ACCZ", r.accel_z),
            col("ANGX", r.angle_x),
            col("ANGY", r.angle_y),
            col("ANGZ", r.angle_z),
        ],
        Telemetry::RangeFinder(r) => vec![
            col("LINK", r.link_status),
            col("DISTANCE", r.distance),
            col("RATIO", r.ratio),
            col("STATUS", r.status),
        ],
        Telemetry::Magnetometer(r) => vec![
            col("LINK", r.link_status),
            col("ACCX", r.accel[0]),
            col("ACCY", r.accel[1]),
            col("ACCZ", r.accel[2]),
            col("MAGX", r.mag[0]),
            col("MAGY", r.mag[1]),
            col("MAGZ", r.mag[2]),
            col("HEADING", r.heading),
            col("PITCH", r.pitch),
            col("ROLL", r.roll),
            col("TEMP", r.temperature),
        ],
        Telemetry::EnvironmentSample(r) => vec![
            col("LINK", r.link_status),
            col("PRESSURE", r.pressure),
            col("TEMP", r.temperature),
            col("HUMIDITY", r.humidity),
            col("GAS", r.gas_resistance),
        ],
        Telemetry::HeartbeatPing(r) => vec![col("LINK", r.link_status)],
        Telemetry::CameraFrame(r) => vec![
            col("STATUS", r.status),
            col("TIMESTAMP", r.timestamp_ms),
            col("IMAGE_BYTES", r.image().len()),
        ],
        Telemetry::AutopilotAttitude(r) => vec![
            col("STATUS", r.status),
            col("TIME_UNIX_USEC", r.time_unix_usec),
            col("TIME_BOOT_MS", r.time_boot_ms),
        ],
        Telemetry::AutopilotCommand(r) => vec![
            col("TIMESTAMP", r.timestamp),
            col("VX", r.vx),
            col("VY", r.vy),
            col("VZ", r.vz),
            col("YAW_RATE", r.yaw_rate),
        ],
    }
}

/// [`columns`] plus each process's liveness flag (`PROC{i}STAT`) ahead of
/// its CPU and memory columns.
pub fn detail_columns(t: &Telemetry) -> Vec<Column> {
    match t {
        Telemetry::ProcessStat(r) => r
            .processes()
            .enumerate()
            .flat_map(|(i, p)| {
                [
                    col(format!("PROC{i}STAT"), p.liveness),
                    col(format!("PROC{i}CPU"), p.cpu),
                    col(format!("PROC{i}MEM"), p.mem),
                ]
            })
            .collect(),
        other => columns(other),
    }
}
