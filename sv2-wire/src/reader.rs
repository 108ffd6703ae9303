use crate::Error;

/// Cursor over a borrowed byte slice.
///
/// All reads are bounds checked; reading past the end is [`Error::OutOfBound`]
/// rather than a panic, as malformed input is a runtime condition here.
#[derive(Debug)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    #[inline]
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], Error> {
        if self.remaining() < len {
            return Err(Error::OutOfBound);
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.read_bytes(1)?[0])
    }

    #[inline]
    pub fn read_u16(&mut self) -> Result<u16, Error> {
        let b = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    #[inline]
    pub fn read_u32(&mut self) -> Result<u32, Error> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    #[inline]
    pub fn read_u64(&mut self) -> Result<u64, Error> {
        let b = self.read_bytes(8)?;
        Ok(u64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    /// Succeeds only if every input byte was consumed.
    pub fn finish(self) -> Result<(), Error> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(Error::LeftoverBytes(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_are_little_endian() {
        let mut reader = Reader::new(&[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(reader.read_u32().unwrap(), 0x0403_0201);
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn read_past_end_is_out_of_bound() {
        let mut reader = Reader::new(&[0x01]);
        assert_eq!(reader.read_u16(), Err(Error::OutOfBound));
        // The failed read consumed nothing.
        assert_eq!(reader.remaining(), 1);
    }
}
