//! BER decoding of OBJECT IDENTIFIER values
//!
//! # Usage Example
//!
//! ```rust
//! use oidreg_asn1::ber::{decode_arcs, BerDecoder};
//!
//! let tlv = [0x06, 0x03, 0x2B, 0x06, 0x01];
//! let mut decoder = BerDecoder::new(&tlv);
//! let content = decoder.decode_object_identifier().unwrap();
//! assert_eq!(decode_arcs(content).unwrap(), vec![1, 3, 6, 1]);
//! ```

use std::fmt;

use crate::ber::types::{BerLength, BerTag};
use oidreg_core::{OidError, OidResult};

/// TLV decoder for OBJECT IDENTIFIER values
///
/// Only the framing is checked here: the identifier octet must be the
/// universal primitive tag 6 and the length must fit in the buffer. The
/// content octets are handed back untouched for the registry to classify.
pub struct BerDecoder<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> BerDecoder<'a> {
    /// Create a new BER decoder
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Get current position in buffer
    pub fn position(&self) -> usize {
        self.position
    }

    /// Check if there is more data to decode
    pub fn has_remaining(&self) -> bool {
        self.position < self.buffer.len()
    }

    fn read_bytes(&mut self, count: usize) -> OidResult<&'a [u8]> {
        let available = self.buffer.len() - self.position;
        if count > available {
            return Err(OidError::InvalidData(format!(
                "Buffer exhausted: need {} bytes, have {}",
                count, available
            )));
        }
        let start = self.position;
        self.position += count;
        Ok(&self.buffer[start..start + count])
    }

    /// Decode a TLV (Tag-Length-Value) triplet
    ///
    /// Returns the tag and the value bytes.
    pub fn decode_tlv(&mut self) -> OidResult<(BerTag, &'a [u8])> {
        let (tag, tag_bytes) = BerTag::decode(&self.buffer[self.position..])?;
        self.position += tag_bytes;

        let (length, length_bytes) = BerLength::decode(&self.buffer[self.position..])?;
        self.position += length_bytes;

        let value = self.read_bytes(length.value())?;
        Ok((tag, value))
    }

    /// Decode an OBJECT IDENTIFIER and return its content octets
    pub fn decode_object_identifier(&mut self) -> OidResult<&'a [u8]> {
        let (tag, value) = self.decode_tlv()?;

        if tag != BerTag::object_identifier() {
            return Err(OidError::InvalidData(format!(
                "Expected OBJECT IDENTIFIER tag, got {:?}",
                tag
            )));
        }

        Ok(value)
    }
}

/// The base-128 groups of one arc, continuation bits included
///
/// An arc has no size limit in BER. [`to_u64`](Self::to_u64) and
/// [`to_u128`](Self::to_u128) give the value when it fits; `Display` renders
/// the decimal value whatever its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcValue<'a>(&'a [u8]);

impl<'a> ArcValue<'a> {
    /// The encoded groups of this arc
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// The arc as a `u64`, `None` if it needs more than 64 bits
    pub fn to_u64(&self) -> Option<u64> {
        self.0
            .iter()
            .try_fold(0u64, |n, &b| (n >> 57 == 0).then(|| (n << 7) | u64::from(b & 0x7F)))
    }

    /// The arc as a `u128`, `None` if it needs more than 128 bits
    pub fn to_u128(&self) -> Option<u128> {
        self.0
            .iter()
            .try_fold(0u128, |n, &b| (n >> 121 == 0).then(|| (n << 7) | u128::from(b & 0x7F)))
    }
}

impl fmt::Display for ArcValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.to_u128() {
            return write!(f, "{}", n);
        }

        // Base 10^9 limbs, least significant first
        const LIMB: u64 = 1_000_000_000;
        let mut limbs: Vec<u32> = vec![0];
        for &b in self.0 {
            let mut carry = u64::from(b & 0x7F);
            for limb in limbs.iter_mut() {
                let v = u64::from(*limb) * 128 + carry;
                *limb = (v % LIMB) as u32;
                carry = v / LIMB;
            }
            if carry > 0 {
                limbs.push(carry as u32);
            }
        }

        let mut limbs = limbs.iter().rev();
        if let Some(top) = limbs.next() {
            write!(f, "{}", top)?;
        }
        for limb in limbs {
            write!(f, "{:09}", limb)?;
        }
        Ok(())
    }
}

/// Cursor over the content octets of an OBJECT IDENTIFIER
///
/// The first byte is read with [`read_root`](Self::read_root), every later
/// arc with [`read_arc_value`](Self::read_arc_value) or
/// [`read_arc`](Self::read_arc). Running out of input in the middle of an arc
/// is [`OidError::Malformed`].
pub struct ArcDecoder<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ArcDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Check if there are arcs left to read
    pub fn has_remaining(&self) -> bool {
        self.position < self.data.len()
    }

    fn read_byte(&mut self) -> OidResult<u8> {
        let byte = *self.data.get(self.position).ok_or(OidError::Malformed)?;
        self.position += 1;
        Ok(byte)
    }

    /// Read the first byte and split it into the first two arcs
    ///
    /// The split is a plain `n / 40`, `n % 40`, so a first byte above 119
    /// yields a first arc above 2. That is what the byte says; no attempt is
    /// made to reinterpret it.
    pub fn read_root(&mut self) -> OidResult<(u8, u8)> {
        let n = self.read_byte()?;
        Ok((n / 40, n % 40))
    }

    /// Read the groups of one base-128 arc, up to and including the last one
    pub fn read_arc_value(&mut self) -> OidResult<ArcValue<'a>> {
        let start = self.position;
        while self.read_byte()? & 0x80 != 0 {}
        Ok(ArcValue(&self.data[start..self.position]))
    }

    /// Read one base-128 arc as a `u64`
    ///
    /// A complete arc wider than 64 bits is [`OidError::InvalidData`]; use
    /// [`read_arc_value`](Self::read_arc_value) to take arcs of any size.
    pub fn read_arc(&mut self) -> OidResult<u64> {
        let arc = self.read_arc_value()?;
        arc.to_u64().ok_or_else(|| {
            OidError::InvalidData(format!(
                "Arc of {} groups does not fit in 64 bits",
                arc.as_bytes().len()
            ))
        })
    }
}

/// Decode OBJECT IDENTIFIER content octets into their arcs
pub fn decode_arcs(data: &[u8]) -> OidResult<Vec<u64>> {
    let mut decoder = ArcDecoder::new(data);
    let (arc1, arc2) = decoder.read_root()?;

    let mut arcs = vec![u64::from(arc1), u64::from(arc2)];
    while decoder.has_remaining() {
        arcs.push(decoder.read_arc()?);
    }
    Ok(arcs)
}
