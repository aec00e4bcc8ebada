use crate::codec::{Endianness, NisinError, Result};

/// Simple bounded cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at an absolute byte offset.
	pub fn at(bytes: &'a [u8], pos: usize) -> Self {
		Self { bytes, pos }
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(NisinError::TruncatedBuffer {
				offset: self.pos,
				need: n,
				have: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Skip `n` bytes.
	pub fn skip(&mut self, n: usize) -> Result<()> {
		let _ = self.read_exact(n)?;
		Ok(())
	}

	/// Read one byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_exact(1)?[0])
	}

	/// Read a `u16` using the selected endianness.
	pub fn read_u16(&mut self, endianness: Endianness) -> Result<u16> {
		let raw = self.read_exact(2)?;
		let mut buf = [0_u8; 2];
		buf.copy_from_slice(raw);
		Ok(match endianness {
			Endianness::Little => u16::from_le_bytes(buf),
			Endianness::Big => u16::from_be_bytes(buf),
		})
	}

	/// Read a `u32` using the selected endianness.
	pub fn read_u32(&mut self, endianness: Endianness) -> Result<u32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(match endianness {
			Endianness::Little => u32::from_le_bytes(buf),
			Endianness::Big => u32::from_be_bytes(buf),
		})
	}

	/// Read a `u64` using the selected endianness.
	pub fn read_u64(&mut self, endianness: Endianness) -> Result<u64> {
		let raw = self.read_exact(8)?;
		let mut buf = [0_u8; 8];
		buf.copy_from_slice(raw);
		Ok(match endianness {
			Endianness::Little => u64::from_le_bytes(buf),
			Endianness::Big => u64::from_be_bytes(buf),
		})
	}

	/// Read an IEEE 754 `f32` using the selected endianness.
	pub fn read_f32(&mut self, endianness: Endianness) -> Result<f32> {
		Ok(f32::from_bits(self.read_u32(endianness)?))
	}

	/// Read an IEEE 754 `f64` using the selected endianness.
	pub fn read_f64(&mut self, endianness: Endianness) -> Result<f64> {
		Ok(f64::from_bits(self.read_u64(endianness)?))
	}
}

#[cfg(test)]
mod tests;
