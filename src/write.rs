// Joseph Prichard
// 10/16/2026
// Writer implementing a bit layer, used to pack symbol codes into the payload

use std::io::{self, Write};
use crate::bitwise::set_bit;
use crate::codes::{CodeTable, SymbolCode};
use crate::error::{CodecError, Result};

const BUFFER_LEN: usize = 4096;
const BUFFER_BIT_LEN: u64 = (BUFFER_LEN * 8) as u64;

pub struct BitWriter<W: Write> {
    // the stream to write to
    inner: W,
    // a buffer storing a block to be written to the stream
    buffer: [u8; BUFFER_LEN],
    // the bit position of the last write in the buffer
    bit_position: u64,
}

impl<W: Write> BitWriter<W> {
    pub fn new(inner: W) -> BitWriter<W> {
        BitWriter {
            inner,
            buffer: [0u8; BUFFER_LEN],
            bit_position: 0,
        }
    }

    fn persist_buffer(&mut self) -> io::Result<()> {
        // a partial last byte is written with its unused low bits left as zero
        let byte_len = ((self.bit_position + 7) / 8) as usize;
        self.inner.write_all(&self.buffer[0..byte_len])
    }

    fn update_buffer(&mut self) -> io::Result<()> {
        // check if at end of buffer: persist current buffer and start writing on a new one
        if self.bit_position >= BUFFER_BIT_LEN {
            self.persist_buffer()?;
            self.bit_position = 0;
            self.buffer = [0u8; BUFFER_LEN];
        }
        Ok(())
    }

    pub fn write_bit(&mut self, bit: u8) -> io::Result<()> {
        self.update_buffer()?;

        if bit > 0 {
            let i = (self.bit_position / 8) as usize;
            self.buffer[i] = set_bit(self.buffer[i], (self.bit_position % 8) as u32);
        }

        self.bit_position += 1;
        Ok(())
    }

    pub fn write_symbol(&mut self, code: &SymbolCode) -> io::Result<()> {
        for bit in code.bits() {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    // pads the final byte with zero bits, flushes and hands back the stream
    pub fn finish(mut self) -> io::Result<W> {
        self.persist_buffer()?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}

// Packs the code of every input byte into a zero-padded byte stream, most significant bit first.
pub fn pack(codes: &CodeTable, bytes: &[u8]) -> Result<Vec<u8>> {
    let mut writer = BitWriter::new(Vec::new());
    for &byte in bytes {
        let code = codes.get(byte)
            .ok_or_else(|| CodecError::malformed_input(format!("no code for symbol {:#04x}", byte)))?;
        writer.write_symbol(code)?;
    }
    Ok(writer.finish()?)
}
