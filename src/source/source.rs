use std::{
    io::{self, BufRead},
    str::Chars,
};

use crate::errors::errors::ErrorImpl;

/// An ordered stream of code points.
///
/// `Ok(None)` is a clean end of input. Any `Err` is a genuine source fault;
/// the scanner attaches the position it had reached.
pub trait CharSource {
    fn read_char(&mut self) -> Result<Option<char>, ErrorImpl>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn read_char(&mut self) -> Result<Option<char>, ErrorImpl> {
        (**self).read_char()
    }
}

/// Source over an in-memory string.
pub struct StrSource<'a> {
    chars: Chars<'a>,
}

impl<'a> StrSource<'a> {
    pub fn new(source: &'a str) -> Self {
        StrSource {
            chars: source.chars(),
        }
    }
}

impl CharSource for StrSource<'_> {
    fn read_char(&mut self) -> Result<Option<char>, ErrorImpl> {
        Ok(self.chars.next())
    }
}

/// Source decoding UTF-8 incrementally from a buffered reader.
///
/// Bytes are pulled one at a time, so reading stops exactly where the
/// scanner stops asking.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource { reader }
    }

    /// Gives the reader back. Bytes past the last code point handed to the
    /// scanner are still unread, so the caller can keep consuming the
    /// stream after a scan stops.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn next_byte(&mut self) -> Result<Option<u8>, ErrorImpl> {
        loop {
            let byte = match self.reader.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(ErrorImpl::Io {
                        message: e.to_string(),
                    })
                }
            };

            if byte.is_some() {
                self.reader.consume(1);
            }
            return Ok(byte);
        }
    }
}

impl<R: BufRead> CharSource for ReaderSource<R> {
    fn read_char(&mut self) -> Result<Option<char>, ErrorImpl> {
        let Some(lead) = self.next_byte()? else {
            return Ok(None);
        };

        let width = match lead {
            0x00..=0x7f => return Ok(Some(char::from(lead))),
            0xc2..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf4 => 4,
            _ => return Err(ErrorImpl::InvalidUtf8 { byte: lead }),
        };

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            match self.next_byte()? {
                Some(byte) if byte & 0xc0 == 0x80 => *slot = byte,
                Some(byte) => return Err(ErrorImpl::InvalidUtf8 { byte }),
                None => return Err(ErrorImpl::InvalidUtf8 { byte: lead }),
            }
        }

        // Rejects overlong encodings and surrogates the lead byte ranges let through.
        std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|decoded| decoded.chars().next())
            .map(Some)
            .ok_or(ErrorImpl::InvalidUtf8 { byte: lead })
    }
}
