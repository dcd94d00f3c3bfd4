//! Bounded cursor over a record payload.
//!
//! Every read is bounds checked; running past the end of the payload yields
//! a structured [`WMBusError::PrematureEnd`] carrying the cursor position.

use crate::error::WMBusError;

/// Read-only cursor over a payload buffer.
#[derive(Debug)]
pub struct PayloadReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> PayloadReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Look at the next byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Consume one byte.
    pub fn read_u8(&mut self) -> Result<u8, WMBusError> {
        let byte = *self
            .buf
            .get(self.pos)
            .ok_or(WMBusError::PrematureEnd(self.pos))?;
        self.pos += 1;
        Ok(byte)
    }

    /// Consume `len` bytes.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], WMBusError> {
        let end = self
            .pos
            .checked_add(len)
            .ok_or(WMBusError::PrematureEnd(self.pos))?;
        if end > self.buf.len() {
            return Err(WMBusError::PrematureEnd(self.pos));
        }
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Consume everything up to the end of the payload.
    pub fn take_rest(&mut self) -> &'a [u8] {
        let slice = &self.buf[self.pos..];
        self.pos = self.buf.len();
        slice
    }

    /// Skip consecutive occurrences of `byte`, returning how many were skipped.
    pub fn skip_while_eq(&mut self, byte: u8) -> usize {
        let start = self.pos;
        while self.peek() == Some(byte) {
            self.pos += 1;
        }
        self.pos - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_and_position() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = PayloadReader::new(&data);

        assert_eq!(reader.read_u8().unwrap(), 0x01);
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.take(2).unwrap(), &[0x02, 0x03]);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_overread_reports_position() {
        let data = [0x01];
        let mut reader = PayloadReader::new(&data);
        reader.read_u8().unwrap();

        assert!(matches!(
            reader.read_u8(),
            Err(WMBusError::PrematureEnd(1))
        ));
        assert!(matches!(reader.take(1), Err(WMBusError::PrematureEnd(1))));
    }

    #[test]
    fn test_skip_while_eq() {
        let data = [0x2F, 0x2F, 0x02, 0x2F];
        let mut reader = PayloadReader::new(&data);

        assert_eq!(reader.skip_while_eq(0x2F), 2);
        assert_eq!(reader.peek(), Some(0x02));
    }

    #[test]
    fn test_take_rest() {
        let data = [0x0F, 0xAA, 0xBB];
        let mut reader = PayloadReader::new(&data);
        reader.read_u8().unwrap();

        assert_eq!(reader.take_rest(), &[0xAA, 0xBB]);
        assert_eq!(reader.remaining(), 0);
    }
}
