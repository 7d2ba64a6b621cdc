//! Digest algorithm lookup for signature algorithm OIDs

use log::{debug, trace};
use oidreg_core::{OidError, OidResult};
use serde::Serialize;

use crate::table::Oid;

/// Digest algorithm used by a signature algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DigestInfo {
    /// Algorithm name, e.g. `"sha256"`
    pub algorithm: &'static str,
    /// Digest output length in bytes
    pub length: usize,
    /// OID of the digest algorithm itself
    pub oid: Oid,
}

impl DigestInfo {
    const fn new(algorithm: &'static str, length: usize, oid: Oid) -> Self {
        Self {
            algorithm,
            length,
            oid,
        }
    }
}

const MD4: DigestInfo = DigestInfo::new("md4", 16, Oid::Md4);
const SHA1: DigestInfo = DigestInfo::new("sha1", 20, Oid::Sha1);
const SHA224: DigestInfo = DigestInfo::new("sha224", 28, Oid::Sha224);
const SHA256: DigestInfo = DigestInfo::new("sha256", 32, Oid::Sha256);
const SHA384: DigestInfo = DigestInfo::new("sha384", 48, Oid::Sha384);
const SHA512: DigestInfo = DigestInfo::new("sha512", 64, Oid::Sha512);

fn digest_for(oid: Oid) -> Option<DigestInfo> {
    match oid {
        Oid::Md4WithRsaEncryption => Some(MD4),
        Oid::Sha1WithRsaEncryption | Oid::IdEcdsaWithSha1 => Some(SHA1),
        Oid::Sha224WithRsaEncryption => Some(SHA224),
        Oid::Sha256WithRsaEncryption | Oid::IdEcdsaWithSha256 => Some(SHA256),
        Oid::Sha384WithRsaEncryption | Oid::IdEcdsaWithSha384 => Some(SHA384),
        Oid::Sha512WithRsaEncryption | Oid::IdEcdsaWithSha512 => Some(SHA512),
        _ => None,
    }
}

/// Resolve the digest algorithm a signature algorithm OID hashes with
///
/// # Errors
/// [`OidError::NotSupported`] for any OID that is not one of the RSA or
/// ECDSA signature algorithms above, including [`Oid::NotFound`].
pub fn lookup_oid_digest_info(oid: Oid) -> OidResult<DigestInfo> {
    match digest_for(oid) {
        Some(info) => {
            trace!("{} hashes with {}", oid.name(), info.algorithm);
            Ok(info)
        }
        None => {
            debug!("No digest algorithm known for {}", oid.name());
            Err(OidError::NotSupported(format!(
                "no digest algorithm for {}",
                oid.name()
            )))
        }
    }
}

impl Oid {
    /// Check if a digest algorithm is known for this OID
    pub fn is_signature_algorithm(self) -> bool {
        digest_for(self).is_some()
    }
}
