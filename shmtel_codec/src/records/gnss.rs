//! GNSS receiver summary, split into its NMEA sentence groups.
//!
//! The publisher writes a packed struct: one `u32` link status followed by
//! the GGA, RMC and GSA fields back to back with no alignment padding.

use crate::error::CodecResult;
use crate::layout::{FieldReader, FieldWriter};
use crate::record::{Record, RecordKind};
use serde::Serialize;
use static_assertions::const_assert_eq;

const LINK: usize = 0;

const GGA_TIME: usize = 4;
const GGA_LAT: usize = 12;
const GGA_LAT_DIR: usize = 20;
const GGA_LON: usize = 24;
const GGA_LON_DIR: usize = 32;
const GGA_FIX_MODE: usize = 36;
const GGA_SATS: usize = 40;
const GGA_HDOP: usize = 44;
const GGA_HEIGHT_SEA: usize = 52;
const GGA_GEOID: usize = 60;

const RMC_TIME: usize = 68;
const RMC_LAT: usize = 76;
const RMC_LAT_DIR: usize = 84;
const RMC_LON: usize = 88;
const RMC_LON_DIR: usize = 96;
const RMC_KNOTS: usize = 100;
const RMC_DATE: usize = 108;
const RMC_TRACK: usize = 112;
const RMC_MAG_VAR: usize = 120;
const RMC_MAG_VAR_DIR: usize = 128;
const RMC_MODE_STATUS: usize = 132;

const GSA_PDOP: usize = 136;
const GSA_HDOP: usize = 144;

pub const SIZE: usize = 152;

const_assert_eq!(GSA_HDOP + 8, SIZE);

/// GGA sentence fields.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GgaFix {
    /// UTC time as `hhmmss.ss`
    pub time: f64,
    pub latitude: f64,
    /// Hemisphere as an ASCII code (`'N'` / `'S'`)
    pub lat_dir: u32,
    pub longitude: f64,
    /// Hemisphere as an ASCII code (`'E'` / `'W'`)
    pub lon_dir: u32,
    pub fix_mode: u32,
    pub satellites: u32,
    pub hdop: f64,
    pub height_sea: f64,
    pub geoid_height: f64,
}

/// RMC sentence fields.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RmcFix {
    pub time: f64,
    pub latitude: f64,
    pub lat_dir: u32,
    pub longitude: f64,
    pub lon_dir: u32,
    /// Speed over ground in knots
    pub speed_knots: f64,
    /// Date as `ddmmyy`
    pub date: u32,
    pub track_true: f64,
    pub mag_variation: f64,
    pub mag_variation_dir: u32,
    /// Raw mode/status bytes
    pub mode_status: [u8; 4],
}

impl RmcFix {
    /// Mode/status as text, stopping at the first NUL.
    pub fn mode_status_str(&self) -> String {
        let end = self
            .mode_status
            .iter()
            .position(|b| *b == 0)
            .unwrap_or(self.mode_status.len());
        String::from_utf8_lossy(&self.mode_status[..end]).into_owned()
    }
}

/// GSA sentence dilution-of-precision fields.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GsaDop {
    pub pdop: f64,
    pub hdop: f64,
}

/// Full GNSS record.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GnssFix {
    pub link_status: u32,
    pub gga: GgaFix,
    pub rmc: RmcFix,
    pub gsa: GsaDop,
}

/// Render an ASCII hemisphere code, `'?'` for anything unprintable.
pub fn hemisphere(code: u32) -> char {
    char::from_u32(code)
        .filter(|c| c.is_ascii_graphic())
        .unwrap_or('?')
}

impl Record for GnssFix {
    const KIND: RecordKind = RecordKind::GnssFix;

    fn decode(bytes: &[u8]) -> CodecResult<Self> {
        let r = FieldReader::new(Self::KIND, bytes)?;
        Ok(Self {
            link_status: r.u32(LINK),
            gga: GgaFix {
                time: r.f64(GGA_TIME),
                latitude: r.f64(GGA_LAT),
                lat_dir: r.u32(GGA_LAT_DIR),
                longitude: r.f64(GGA_LON),
                lon_dir: r.u32(GGA_LON_DIR),
                fix_mode: r.u32(GGA_FIX_MODE),
                satellites: r.u32(GGA_SATS),
                hdop: r.f64(GGA_HDOP),
                height_sea: r.f64(GGA_HEIGHT_SEA),
                geoid_height: r.f64(GGA_GEOID),
            },
            rmc: RmcFix {
                time: r.f64(RMC_TIME),
                latitude: r.f64(RMC_LAT),
                lat_dir: r.u32(RMC_LAT_DIR),
                longitude: r.f64(RMC_LON),
                lon_dir: r.u32(RMC_LON_DIR),
                speed_knots: r.f64(RMC_KNOTS),
                date: r.u32(RMC_DATE),
                track_true: r.f64(RMC_TRACK),
                mag_variation: r.f64(RMC_MAG_VAR),
                mag_variation_dir: r.u32(RMC_MAG_VAR_DIR),
                mode_status: r.bytes(RMC_MODE_STATUS),
            },
            gsa: GsaDop {
                pdop: r.f64(GSA_PDOP),
                hdop: r.f64(GSA_HDOP),
            },
        })
    }

    fn encode_into(&self, buf: &mut [u8]) -> CodecResult<()> {
        let mut w = FieldWriter::new(Self::KIND, buf)?;
        w.put_u32(LINK, self.link_status);

        let gga = &self.gga;
        w.put_f64(GGA_TIME, gga.time);
        w.put_f64(GGA_LAT, gga.latitude);
        w.put_u32(GGA_LAT_DIR, gga.lat_dir);
        w.put_f64(GGA_LON, gga.longitude);
        w.put_u32(GGA_LON_DIR, gga.lon_dir);
        w.put_u32(GGA_FIX_MODE, gga.fix_mode);
        w.put_u32(GGA_SATS, gga.satellites);
        w.put_f64(GGA_HDOP, gga.hdop);
        w.put_f64(GGA_HEIGHT_SEA, gga.height_sea);
        w.put_f64(GGA_GEOID, gga.geoid_height);

        let rmc = &self.rmc;
        w.put_f64(RMC_TIME, rmc.time);
        w.put_f64(RMC_LAT, rmc.latitude);
        w.put_u32(RMC_LAT_DIR, rmc.lat_dir);
        w.put_f64(RMC_LON, rmc.longitude);
        w.put_u32(RMC_LON_DIR, rmc.lon_dir);
        w.put_f64(RMC_KNOTS, rmc.speed_knots);
        w.put_u32(RMC_DATE, rmc.date);
        w.put_f64(RMC_TRACK, rmc.track_true);
        w.put_f64(RMC_MAG_VAR, rmc.mag_variation);
        w.put_u32(RMC_MAG_VAR_DIR, rmc.mag_variation_dir);
        w.put_bytes(RMC_MODE_STATUS, &rmc.mode_status);

        w.put_f64(GSA_PDOP, self.gsa.pdop);
        w.put_f64(GSA_HDOP, self.gsa.hdop);
        Ok(())
    }
}
