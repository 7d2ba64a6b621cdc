//! BER encoding of OBJECT IDENTIFIER values
//!
//! The arc encoder is what the registry's build script uses to turn the
//! dotted entries of its OID list into the content octets stored in the
//! generated table.

use crate::ber::types::{BerLength, BerTag};
use oidreg_core::{OidError, OidResult};

/// TLV encoder for OBJECT IDENTIFIER values
pub struct BerEncoder {
    buffer: Vec<u8>,
}

impl BerEncoder {
    /// Create a new BER encoder
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Encode a TLV (Tag-Length-Value) triplet
    pub fn encode_tlv(&mut self, tag: &BerTag, value: &[u8]) {
        self.buffer.extend_from_slice(&tag.encode());
        self.buffer
            .extend_from_slice(&BerLength::new(value.len()).encode());
        self.buffer.extend_from_slice(value);
    }

    /// Wrap OBJECT IDENTIFIER content octets in a universal tag 6 TLV
    pub fn encode_object_identifier(&mut self, content: &[u8]) {
        self.encode_tlv(&BerTag::object_identifier(), content);
    }

    /// Get encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the encoder and return the encoded bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

impl Default for BerEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode arcs into OBJECT IDENTIFIER content octets
///
/// The first two arcs are packed into a single byte as `40 * arc1 + arc2`.
/// The second arc must be below 40 even under arc 2: the first byte is read
/// back as a plain `n / 40`, `n % 40` split, so `2.40` and up would print as
/// something else.
pub fn encode_arcs(arcs: &[u64]) -> OidResult<Vec<u8>> {
    if arcs.len() < 2 {
        return Err(OidError::InvalidData(
            "Object identifier must have at least 2 arcs".to_string(),
        ));
    }

    let (arc1, arc2) = (arcs[0], arcs[1]);
    if arc1 > 2 {
        return Err(OidError::InvalidData(format!(
            "First arc must be 0, 1 or 2, got {}",
            arc1
        )));
    }
    if arc2 >= 40 {
        return Err(OidError::InvalidData(format!(
            "Second arc must be below 40, got {}.{}",
            arc1, arc2
        )));
    }

    let mut bytes = vec![(40 * arc1 + arc2) as u8];
    for &arc in &arcs[2..] {
        push_arc(&mut bytes, arc);
    }
    Ok(bytes)
}

fn push_arc(bytes: &mut Vec<u8>, arc: u64) {
    // Number of 7-bit groups, at least one for zero
    let bits = 64 - arc.leading_zeros() as usize;
    let groups = bits.div_ceil(7).max(1);

    for i in (0..groups).rev() {
        let group = ((arc >> (7 * i)) & 0x7F) as u8;
        bytes.push(if i > 0 { group | 0x80 } else { group });
    }
}
