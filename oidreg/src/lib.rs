//! oidreg - ASN.1 object identifier registry
//!
//! Classifies BER-encoded OIDs against a fixed registry, resolves the digest
//! algorithm behind a signature algorithm OID, and renders OIDs as dotted
//! decimal.
//!
//! # Architecture
//!
//! - `oidreg-core`: error type, hash and search order
//! - `oidreg-asn1`: BER arc codec, TLV framing, bounded printer
//! - `oidreg-registry`: generated table, classifier, digest lookup
//!
//! # Usage
//!
//! ```rust
//! use oidreg::{look_up_oid, lookup_oid_digest_info, sprint_oid, Oid};
//!
//! let data = [0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x0B];
//! let oid = look_up_oid(&data);
//! assert_eq!(oid, Oid::Sha256WithRsaEncryption);
//!
//! let digest = lookup_oid_digest_info(oid).unwrap();
//! assert_eq!((digest.algorithm, digest.length), ("sha256", 32));
//!
//! let mut buf = [0u8; 32];
//! let len = sprint_oid(&data, &mut buf).unwrap();
//! assert_eq!(&buf[..len], b"1.2.840.113549.1.1.11");
//! ```

pub use oidreg_asn1 as asn1;
pub use oidreg_registry as registry;

pub use oidreg_core::{OidError, OidResult};
pub use oidreg_asn1::ber::{decode_arcs, encode_arcs, sprint_oid, OidDisplay};
pub use oidreg_registry::{
    look_up_oid, look_up_oid_tlv, lookup_oid_digest_info, sprint_registered_oid, DigestInfo, Oid,
    OID_COUNT,
};
