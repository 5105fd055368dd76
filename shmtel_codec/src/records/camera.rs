//! Raw camera frame.
//!
//! Layout: `u32` status at 0, 4 bytes of padding, `u64` millisecond
//! timestamp at 8, then a 4K UYVY image (2 bytes per pixel) at 16.

use crate::error::{CodecError, CodecResult};
use crate::layout::{FieldReader, FieldWriter};
use crate::record::{Record, RecordKind};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use static_assertions::const_assert_eq;

pub const FRAME_WIDTH: usize = 3840;
pub const FRAME_HEIGHT: usize = 2160;
/// UYVY packs two bytes per pixel.
pub const BYTES_PER_PIXEL: usize = 2;
pub const IMAGE_SIZE: usize = FRAME_WIDTH * FRAME_HEIGHT * BYTES_PER_PIXEL;

const STATUS: usize = 0;
const TIMESTAMP: usize = 8;
const IMAGE: usize = 16;

pub const SIZE: usize = 16_588_816;

const_assert_eq!(IMAGE_SIZE, 16_588_800);
const_assert_eq!(IMAGE + IMAGE_SIZE, SIZE);

/// One captured frame. The image is always exactly [`IMAGE_SIZE`] bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct CameraFrame {
    pub status: u32,
    pub timestamp_ms: u64,
    image: Vec<u8>,
}

impl CameraFrame {
    /// Build a frame, zero-padding a short image.
    pub fn new(status: u32, timestamp_ms: u64, image: &[u8]) -> CodecResult<Self> {
        if image.len() > IMAGE_SIZE {
            return Err(CodecError::CapacityExceeded {
                kind: RecordKind::CameraFrame,
                field: "image",
                capacity: IMAGE_SIZE,
                requested: image.len(),
            });
        }
        let mut full = vec![0u8; IMAGE_SIZE];
        full[..image.len()].copy_from_slice(image);
        Ok(Self {
            status,
            timestamp_ms,
            image: full,
        })
    }

    pub fn image(&self) -> &[u8] {
        &self.image
    }

    pub fn into_image(self) -> Vec<u8> {
        self.image
    }
}

impl std::fmt::Debug for CameraFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraFrame")
            .field("status", &self.status)
            .field("timestamp_ms", &self.timestamp_ms)
            .field("image_len", &self.image.len())
            .finish()
    }
}

impl Record for CameraFrame {
    const KIND: RecordKind = RecordKind::CameraFrame;

    fn decode(bytes: &[u8]) -> CodecResult<Self> {
        let r = FieldReader::new(Self::KIND, bytes)?;
        Ok(Self {
            status: r.u32(STATUS),
            timestamp_ms: r.u64(TIMESTAMP),
            image: r.slice(IMAGE, IMAGE_SIZE).to_vec(),
        })
    }

    fn encode_into(&self, buf: &mut [u8]) -> CodecResult<()> {
        let mut w = FieldWriter::new(Self::KIND, buf)?;
        w.put_u32(STATUS, self.status);
        w.put_u64(TIMESTAMP, self.timestamp_ms);
        w.put_bytes(IMAGE, &self.image);
        Ok(())
    }
}

// A 16 MB byte array is useless in a report; show its length instead.
impl Serialize for CameraFrame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("CameraFrame", 3)?;
        s.serialize_field("status", &self.status)?;
        s.serialize_field("timestamp_ms", &self.timestamp_ms)?;
        s.serialize_field("image_len", &self.image.len())?;
        s.end()
    }
}
