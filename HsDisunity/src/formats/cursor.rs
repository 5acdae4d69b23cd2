//! Seekable binary reader with a switchable byte order
//!
//! Every container structure is read through a [`ByteCursor`]. The byte
//! order can change mid-stream: bundle headers are big-endian, while the
//! asset file flips to whatever its endianness flag selects.

use crate::error::{Error, Result};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

/// Upper bound for NUL-terminated strings in headers and type trees.
pub const MAX_CSTRING_LEN: usize = 256;

/// Byte order applied to multi-byte reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

impl ByteOrder {
    /// Interpret an asset header endianness flag (0 = little, 1 = big).
    pub fn from_flag(flag: u8) -> Result<Self> {
        match flag {
            0 => Ok(ByteOrder::Little),
            1 => Ok(ByteOrder::Big),
            _ => Err(Error::InvalidEndianness { flag }),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ByteOrder::Little => "little-endian",
            ByteOrder::Big => "big-endian",
        }
    }
}

/// Read a fixed-width value in the cursor's current byte order.
macro_rules! read_ordered {
    ($self:ident, $method:ident, $width:expr) => {{
        $self.ensure_available($width)?;
        let value = match $self.order {
            ByteOrder::Little => $self.reader.$method::<LittleEndian>()?,
            ByteOrder::Big => $self.reader.$method::<BigEndian>()?,
        };
        $self.position += $width;
        Ok(value)
    }};
}

/// Binary reader over a fixed-size source.
///
/// Seeks and reads beyond the end of the source fail with
/// [`Error::OutOfRange`] instead of returning short data.
pub struct ByteCursor<R: Read + Seek> {
    reader: R,
    order: ByteOrder,
    position: u64,
    len: u64,
}

impl ByteCursor<BufReader<File>> {
    /// Open a file for reading. The handle is closed when the cursor drops.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<'a> ByteCursor<Cursor<&'a [u8]>> {
    /// Wrap an in-memory buffer.
    #[must_use]
    pub fn from_bytes(data: &'a [u8]) -> Self {
        Self {
            reader: Cursor::new(data),
            order: ByteOrder::default(),
            position: 0,
            len: data.len() as u64,
        }
    }
}

impl<R: Read + Seek> ByteCursor<R> {
    /// Wrap any seekable source, measuring its length up front.
    pub fn new(mut reader: R) -> Result<Self> {
        let len = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(0))?;
        Ok(Self {
            reader,
            order: ByteOrder::default(),
            position: 0,
            len,
        })
    }

    /// Builder-style byte order selection.
    #[must_use]
    pub fn with_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn set_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn remaining(&self) -> u64 {
        self.len.saturating_sub(self.position)
    }

    /// Seek to an absolute offset. Seeking exactly to the end is allowed.
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        if offset > self.len {
            return Err(Error::OutOfRange {
                offset,
                len: 0,
                size: self.len,
            });
        }
        self.reader.seek(SeekFrom::Start(offset))?;
        self.position = offset;
        Ok(())
    }

    /// Skip `count` bytes forward.
    pub fn skip(&mut self, count: u64) -> Result<()> {
        let target = self.position.checked_add(count).ok_or(Error::OutOfRange {
            offset: self.position,
            len: count,
            size: self.len,
        })?;
        self.seek(target)
    }

    /// Advance to the next multiple of `alignment`, measured from offset 0.
    pub fn align(&mut self, alignment: u64) -> Result<()> {
        let rem = self.position % alignment;
        if rem != 0 {
            self.skip(alignment - rem)?;
        }
        Ok(())
    }

    fn ensure_available(&self, count: u64) -> Result<()> {
        if count > self.remaining() {
            return Err(Error::OutOfRange {
                offset: self.position,
                len: count,
                size: self.len,
            });
        }
        Ok(())
    }

    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        self.ensure_available(buf.len() as u64)?;
        self.reader.read_exact(buf)?;
        self.position += buf.len() as u64;
        Ok(())
    }

    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        self.ensure_available(count as u64)?;
        let mut buf = vec![0u8; count];
        self.reader.read_exact(&mut buf)?;
        self.position += count as u64;
        Ok(buf)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure_available(1)?;
        let value = self.reader.read_u8()?;
        self.position += 1;
        Ok(value)
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        read_ordered!(self, read_i16, 2)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        read_ordered!(self, read_u16, 2)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        read_ordered!(self, read_i32, 4)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        read_ordered!(self, read_u32, 4)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        read_ordered!(self, read_i64, 8)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        read_ordered!(self, read_f32, 4)
    }

    /// Read a non-negative i32 count, rejecting negative values.
    pub fn read_count(&mut self, what: &'static str) -> Result<usize> {
        let raw = self.read_i32()?;
        usize::try_from(raw).map_err(|_| Error::InvalidLength {
            what,
            value: i64::from(raw),
        })
    }

    /// Read a NUL-terminated string of at most [`MAX_CSTRING_LEN`] bytes.
    pub fn read_cstring(&mut self) -> Result<String> {
        let start = self.position;
        let mut bytes = Vec::new();
        loop {
            if bytes.len() >= MAX_CSTRING_LEN || self.remaining() == 0 {
                return Err(Error::InvalidString { offset: start });
            }
            match self.read_u8()? {
                0 => break,
                b => bytes.push(b),
            }
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Read an i32 length-prefixed string padded to a 4-byte boundary.
    pub fn read_aligned_string(&mut self) -> Result<String> {
        let len = self.read_count("string length")?;
        let bytes = self.read_bytes(len)?;
        self.align(4)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
