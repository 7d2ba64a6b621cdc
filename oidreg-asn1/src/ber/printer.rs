//! Dotted-decimal rendering of encoded OIDs
//!
//! [`sprint_oid`] follows the bounded-format convention: the rendering is
//! written as ASCII followed by a NUL byte, and the returned count excludes
//! the NUL. A rendering of `L` bytes needs a buffer of `L + 1` bytes.
//!
//! ```rust
//! use oidreg_asn1::ber::sprint_oid;
//!
//! let mut buf = [0u8; 32];
//! let len = sprint_oid(&[0x2B, 0x06, 0x01, 0x04, 0x01], &mut buf).unwrap();
//! assert_eq!(&buf[..len], b"1.3.6.1.4.1");
//! ```

use std::fmt::{self, Write};

use crate::ber::decoder::{ArcDecoder, ArcValue};
use oidreg_core::{OidError, OidResult};

/// Placeholder written in place of an undecodable OID
pub const BAD_OID_TEXT: &str = "(bad)";

/// `fmt::Write` over a caller buffer that always keeps room for the NUL
struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> BoundedWriter<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn terminate(&mut self) {
        if let Some(slot) = self.buf.get_mut(self.pos) {
            *slot = 0;
        }
    }

    /// Write one formatted piece, keeping whatever prefix fits on overflow
    fn emit(&mut self, args: fmt::Arguments<'_>) -> OidResult<()> {
        let result = self.write_fmt(args);
        self.terminate();
        result.map_err(|_| OidError::BufferTooSmall)
    }
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.buf.len().saturating_sub(self.pos + 1);
        let n = s.len().min(room);
        self.buf[self.pos..self.pos + n].copy_from_slice(&s.as_bytes()[..n]);
        self.pos += n;
        if n < s.len() { Err(fmt::Error) } else { Ok(()) }
    }
}

/// Render an encoded OID into `buffer` in `a.b.c.d` form
///
/// Returns the number of bytes written, excluding the NUL terminator.
///
/// # Errors
/// - [`OidError::Malformed`] if `data` is empty or ends inside a multi-byte
///   arc. The buffer then holds `(bad)` instead of a partial rendering.
///   Arcs of any width are rendered in full, so a long but terminated arc is
///   never an error.
/// - [`OidError::BufferTooSmall`] as soon as a piece does not fit. The prefix
///   written so far stays in the buffer; the length the full rendering would
///   have needed is not computed.
pub fn sprint_oid(data: &[u8], buffer: &mut [u8]) -> OidResult<usize> {
    let result = render(data, &mut BoundedWriter::new(buffer));
    if result == Err(OidError::Malformed) {
        // Truncation of the placeholder is not reported separately
        let _ = BoundedWriter::new(buffer).emit(format_args!("{}", BAD_OID_TEXT));
    }
    result
}

fn render(data: &[u8], out: &mut BoundedWriter<'_>) -> OidResult<usize> {
    let mut decoder = ArcDecoder::new(data);

    let (arc1, arc2) = decoder.read_root()?;
    out.emit(format_args!("{}.{}", arc1, arc2))?;

    while decoder.has_remaining() {
        let arc = decoder.read_arc_value()?;
        out.emit(format_args!(".{}", arc))?;
    }

    Ok(out.pos)
}

/// `Display` adapter for encoded OID content octets
///
/// Renders dotted decimal, or `(bad)` if the bytes do not decode.
#[derive(Debug, Clone, Copy)]
pub struct OidDisplay<'a>(pub &'a [u8]);

impl fmt::Display for OidDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut decoder = ArcDecoder::new(self.0);
        let Ok((arc1, arc2)) = decoder.read_root() else {
            return f.write_str(BAD_OID_TEXT);
        };

        // Decode everything first so a bad tail never leaves a partial rendering
        let mut arcs: Vec<ArcValue<'_>> = Vec::new();
        while decoder.has_remaining() {
            match decoder.read_arc_value() {
                Ok(arc) => arcs.push(arc),
                Err(_) => return f.write_str(BAD_OID_TEXT),
            }
        }

        write!(f, "{}.{}", arc1, arc2)?;
        for arc in arcs {
            write!(f, ".{}", arc)?;
        }
        Ok(())
    }
}
