//! Fixed-offset little-endian field access.
//!
//! Records never scan their input. Every field lives at a constant absolute
//! offset, so decoding is a series of `offset -> value` lookups against a
//! buffer whose length was checked once up front, and encoding is the mirror
//! image against a zeroed output window. Gaps between fields stay zero on
//! encode and are skipped on decode.

use crate::error::{CodecError, CodecResult};
use crate::record::RecordKind;

/// Read-only view over exactly `kind.required_size()` bytes.
pub(crate) struct FieldReader<'a> {
    buf: &'a [u8],
}

impl<'a> FieldReader<'a> {
    /// Check the length once; trailing bytes past the layout are ignored.
    pub(crate) fn new(kind: RecordKind, buf: &'a [u8]) -> CodecResult<Self> {
        let required = kind.required_size();
        if buf.len() < required {
            return Err(CodecError::BufferTooShort {
                kind,
                required,
                actual: buf.len(),
            });
        }
        Ok(Self {
            buf: &buf[..required],
        })
    }

    #[inline]
    fn array<const N: usize>(&self, offset: usize) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.buf[offset..offset + N]);
        out
    }

    #[inline]
    pub(crate) fn u32(&self, offset: usize) -> u32 {
        u32::from_le_bytes(self.array(offset))
    }

    #[inline]
    pub(crate) fn i32(&self, offset: usize) -> i32 {
        i32::from_le_bytes(self.array(offset))
    }

    #[inline]
    pub(crate) fn u64(&self, offset: usize) -> u64 {
        u64::from_le_bytes(self.array(offset))
    }

    #[inline]
    pub(crate) fn f32(&self, offset: usize) -> f32 {
        f32::from_le_bytes(self.array(offset))
    }

    #[inline]
    pub(crate) fn f64(&self, offset: usize) -> f64 {
        f64::from_le_bytes(self.array(offset))
    }

    #[inline]
    pub(crate) fn bytes<const N: usize>(&self, offset: usize) -> [u8; N] {
        self.array(offset)
    }

    pub(crate) fn slice(&self, offset: usize, len: usize) -> &'a [u8] {
        &self.buf[offset..offset + len]
    }

    /// `N` consecutive `i32` values starting at `offset`.
    pub(crate) fn i32_block<const N: usize>(&self, offset: usize) -> [i32; N] {
        std::array::from_fn(|i| self.i32(offset + i * 4))
    }

    /// `N` consecutive `f32` values starting at `offset`.
    pub(crate) fn f32_block<const N: usize>(&self, offset: usize) -> [f32; N] {
        std::array::from_fn(|i| self.f32(offset + i * 4))
    }
}

/// Mutable view over the first `kind.required_size()` bytes of an output buffer.
pub(crate) struct FieldWriter<'a> {
    buf: &'a mut [u8],
}

impl<'a> FieldWriter<'a> {
    /// Check the length and zero the layout window so gaps encode as zero.
    pub(crate) fn new(kind: RecordKind, buf: &'a mut [u8]) -> CodecResult<Self> {
        let required = kind.required_size();
        if buf.len() < required {
            return Err(CodecError::BufferTooShort {
                kind,
                required,
                actual: buf.len(),
            });
        }
        let window = &mut buf[..required];
        window.fill(0);
        Ok(Self { buf: window })
    }

    #[inline]
    pub(crate) fn put_u32(&mut self, offset: usize, value: u32) {
        self.put_bytes(offset, &value.to_le_bytes());
    }

    #[inline]
    pub(crate) fn put_i32(&mut self, offset: usize, value: i32) {
        self.put_bytes(offset, &value.to_le_bytes());
    }

    #[inline]
    pub(crate) fn put_u64(&mut self, offset: usize, value: u64) {
        self.put_bytes(offset, &value.to_le_bytes());
    }

    #[inline]
    pub(crate) fn put_f32(&mut self, offset: usize, value: f32) {
        self.put_bytes(offset, &value.to_le_bytes());
    }

    #[inline]
    pub(crate) fn put_f64(&mut self, offset: usize, value: f64) {
        self.put_bytes(offset, &value.to_le_bytes());
    }

    #[inline]
    pub(crate) fn put_bytes(&mut self, offset: usize, bytes: &[u8]) {
        self.buf[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    pub(crate) fn put_i32_block(&mut self, offset: usize, values: &[i32]) {
        for (i, v) in values.iter().enumerate() {
            self.put_i32(offset + i * 4, *v);
        }
    }

    pub(crate) fn put_f32_block(&mut self, offset: usize, values: &[f32]) {
        for (i, v) in values.iter().enumerate() {
            self.put_f32(offset + i * 4, *v);
        }
    }
}
