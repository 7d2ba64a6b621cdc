//! Classification of encoded OIDs
//!
//! # Lookup
//!
//! The input is hashed with [`oid_hash`] and binary-searched in the search
//! table using [`search_order`], the comparator the build script sorted the
//! table with. Hash collisions are settled by length, then by comparing bytes
//! from the tail. Only an exact match of hash, length and every byte counts.
//!
//! O(log N) comparisons, each at most O(L) in the encoded length.

use log::trace;
use oidreg_asn1::ber::{BerDecoder, OidDisplay};
use oidreg_core::{oid_hash, search_order, OidResult};

use crate::table::{Oid, OID_SEARCH_TABLE};

/// Find the registered OID for some encoded content octets
///
/// Never fails: empty, malformed or unregistered input returns
/// [`Oid::NotFound`].
pub fn look_up_oid(data: &[u8]) -> Oid {
    let hash = oid_hash(data);

    let found = OID_SEARCH_TABLE.binary_search_by(|entry| {
        // Every entry in the search table is registered, so it has an encoding
        let candidate = entry.oid.encoding().unwrap_or_default();
        search_order((entry.hash, candidate), (hash, data))
    });

    match found {
        Ok(i) => OID_SEARCH_TABLE[i].oid,
        Err(_) => {
            trace!("No registered OID for {} (hash 0x{:02x})", OidDisplay(data), hash);
            Oid::NotFound
        }
    }
}

/// Find the registered OID for a complete OBJECT IDENTIFIER TLV
///
/// Framing errors (wrong tag, bad length) are returned; a well-framed but
/// unregistered OID is [`Oid::NotFound`].
pub fn look_up_oid_tlv(tlv: &[u8]) -> OidResult<Oid> {
    let mut decoder = BerDecoder::new(tlv);
    let content = decoder.decode_object_identifier()?;
    Ok(look_up_oid(content))
}

impl Oid {
    /// Classify encoded content octets, `None` when unregistered
    pub fn from_der(data: &[u8]) -> Option<Oid> {
        Some(look_up_oid(data)).filter(|oid| oid.is_known())
    }
}
