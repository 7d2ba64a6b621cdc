//! The generated OID table
//!
//! Everything in here comes from `oid_registry.list` through the build
//! script: the [`Oid`] enum, the flat encoding blob with its index, and the
//! search table. The blob is laid out so that entry `i` occupies
//! `OID_DATA[OID_INDEX[i]..OID_INDEX[i + 1]]`.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use oidreg_asn1::ber::{decode_arcs, BerEncoder, OidDisplay};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// One row of the search table
///
/// The table is sorted by `hash`, then by the length of `oid`'s encoding,
/// then by that encoding compared from its last byte backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OidSearchEntry {
    pub hash: u8,
    pub oid: Oid,
}

include!(concat!(env!("OUT_DIR"), "/oid_registry_data.rs"));

/// Name to OID index, built on first use
static OID_BY_NAME: Lazy<HashMap<&'static str, Oid>> = Lazy::new(|| {
    OID_ALL
        .iter()
        .zip(OID_NAMES.iter())
        .map(|(&oid, &name)| (name, oid))
        .collect()
});

/// Text used for the sentinel wherever a name or rendering is expected
const UNKNOWN_TEXT: &str = "(unknown)";

impl Oid {
    /// Position of this OID in the registry, `OID_COUNT` for the sentinel
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a registered OID by its position
    pub fn from_index(index: usize) -> Option<Oid> {
        OID_ALL.get(index).copied()
    }

    /// Every registered OID in registry order, without the sentinel
    pub fn all() -> &'static [Oid] {
        &OID_ALL
    }

    /// Check if this is a registered OID rather than the sentinel
    pub fn is_known(self) -> bool {
        self.index() < OID_COUNT
    }

    /// The content octets of this OID, `None` for the sentinel
    pub fn encoding(self) -> Option<&'static [u8]> {
        let i = self.index();
        if i >= OID_COUNT {
            return None;
        }
        let start = OID_INDEX[i] as usize;
        let end = OID_INDEX[i + 1] as usize;
        Some(&OID_DATA[start..end])
    }

    /// The ASN.1 name this OID is registered under
    pub fn name(self) -> &'static str {
        OID_NAMES.get(self.index()).copied().unwrap_or(UNKNOWN_TEXT)
    }

    /// Look up a registered OID by its ASN.1 name
    pub fn from_name(name: &str) -> Option<Oid> {
        OID_BY_NAME.get(name).copied()
    }

    /// The arcs of this OID, `None` for the sentinel
    pub fn arcs(self) -> Option<Vec<u64>> {
        self.encoding().and_then(|data| decode_arcs(data).ok())
    }

    /// Encode this OID as a complete universal tag 6 TLV
    pub fn to_der_tlv(self) -> Option<Vec<u8>> {
        let content = self.encoding()?;
        let mut encoder = BerEncoder::new();
        encoder.encode_object_identifier(content);
        Some(encoder.into_bytes())
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encoding() {
            Some(data) => fmt::Display::fmt(&OidDisplay(data), f),
            None => f.write_str(UNKNOWN_TEXT),
        }
    }
}

impl Serialize for Oid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

struct OidNameVisitor;

impl<'de> Visitor<'de> for OidNameVisitor {
    type Value = Oid;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("the ASN.1 name of a registered OID")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Oid, E> {
        Oid::from_name(value)
            .ok_or_else(|| E::custom(format!("unregistered OID name: {}", value)))
    }
}

impl<'de> Deserialize<'de> for Oid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(OidNameVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oidreg_core::{oid_hash, search_order};
    use std::cmp::Ordering;

    #[test]
    fn test_sentinel_equals_count() {
        assert_eq!(Oid::NotFound.index(), OID_COUNT);
        assert!(!Oid::NotFound.is_known());
        assert_eq!(Oid::NotFound.encoding(), None);
        assert_eq!(Oid::from_index(OID_COUNT), None);
    }

    #[test]
    fn test_registry_order_matches_discriminants() {
        for (i, &oid) in Oid::all().iter().enumerate() {
            assert_eq!(oid.index(), i);
            assert_eq!(Oid::from_index(i), Some(oid));
        }
    }

    #[test]
    fn test_index_ranges_tile_the_blob() {
        assert_eq!(OID_INDEX[0], 0);
        assert_eq!(OID_INDEX[OID_COUNT] as usize, OID_DATA.len());
        for window in OID_INDEX.windows(2) {
            assert!(window[0] < window[1], "empty or overlapping range");
        }
    }

    #[test]
    fn test_search_table_is_sorted() {
        let keys: Vec<(u8, &[u8])> = OID_SEARCH_TABLE
            .iter()
            .map(|e| (e.hash, e.oid.encoding().unwrap()))
            .collect();

        for pair in keys.windows(2) {
            let ((h0, d0), (h1, d1)) = (pair[0], pair[1]);
            assert!(h0 <= h1);
            if h0 == h1 {
                assert!(d0.len() <= d1.len());
            }
            assert_eq!(search_order(pair[0], pair[1]), Ordering::Less);
        }
    }

    #[test]
    fn test_search_table_hashes_match_encodings() {
        for entry in OID_SEARCH_TABLE.iter() {
            assert_eq!(entry.hash, oid_hash(entry.oid.encoding().unwrap()));
        }
    }

    #[test]
    fn test_search_table_covers_every_oid_once() {
        let mut seen = vec![false; OID_COUNT];
        for entry in OID_SEARCH_TABLE.iter() {
            assert!(!seen[entry.oid.index()]);
            seen[entry.oid.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_encoding_of_sha256_with_rsa() {
        assert_eq!(
            Oid::Sha256WithRsaEncryption.encoding(),
            Some(&[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x0B][..])
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(Oid::Sha256WithRsaEncryption.name(), "sha256WithRSAEncryption");
        assert_eq!(Oid::IdEcdsaWithSha384.name(), "ecdsaWithSHA384");
        assert_eq!(Oid::NotFound.name(), "(unknown)");
        assert_eq!(Oid::from_name("commonName"), Some(Oid::CommonName));
        assert_eq!(Oid::from_name("noSuchThing"), None);
        for &oid in Oid::all() {
            assert_eq!(Oid::from_name(oid.name()), Some(oid));
        }
    }

    #[test]
    fn test_arcs_and_display() {
        assert_eq!(Oid::CommonName.arcs(), Some(vec![2, 5, 4, 3]));
        assert_eq!(Oid::Sha1.to_string(), "1.3.14.3.2.26");
        assert_eq!(Oid::NotFound.arcs(), None);
        assert_eq!(Oid::NotFound.to_string(), "(unknown)");
    }

    #[test]
    fn test_to_der_tlv() {
        assert_eq!(
            Oid::BasicConstraints.to_der_tlv(),
            Some(vec![0x06, 0x03, 0x55, 0x1D, 0x13])
        );
        assert_eq!(Oid::NotFound.to_der_tlv(), None);
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&Oid::IdEd25519).unwrap();
        assert_eq!(json, "\"id-Ed25519\"");
        let back: Oid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Oid::IdEd25519);
        assert!(serde_json::from_str::<Oid>("\"bogus\"").is_err());
    }
}
