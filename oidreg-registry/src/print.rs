//! Printing registered OIDs

use oidreg_asn1::ber::sprint_oid;
use oidreg_core::{OidError, OidResult};

use crate::table::Oid;

/// Render a registered OID into `buffer` in `a.b.c.d` form
///
/// Same buffer contract as [`sprint_oid`]: the rendering is NUL-terminated
/// and the returned count excludes the NUL.
///
/// # Panics
/// If `oid` is [`Oid::NotFound`], or if the stored encoding does not decode.
/// Both mean the caller or the generated table is broken.
///
/// # Errors
/// [`OidError::BufferTooSmall`] if the rendering does not fit.
pub fn sprint_registered_oid(oid: Oid, buffer: &mut [u8]) -> OidResult<usize> {
    let Some(data) = oid.encoding() else {
        panic!("sprint_registered_oid called with the unregistered sentinel");
    };

    let result = sprint_oid(data, buffer);
    assert!(
        result != Err(OidError::Malformed),
        "registered OID {} has a malformed encoding",
        oid.name()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::look_up_oid;
    use oidreg_asn1::ber::encode_arcs;

    #[test]
    fn test_sprint_registered_oid() {
        let mut buf = [0u8; 64];
        let len = sprint_registered_oid(Oid::Sha256WithRsaEncryption, &mut buf).unwrap();
        assert_eq!(&buf[..len], b"1.2.840.113549.1.1.11");
        assert_eq!(buf[len], 0);
    }

    #[test]
    fn test_sprint_registered_oid_buffer_too_small() {
        let mut buf = [0u8; 8];
        assert_eq!(
            sprint_registered_oid(Oid::SmimeAuthenticatedAttrs, &mut buf),
            Err(OidError::BufferTooSmall)
        );
    }

    #[test]
    #[should_panic(expected = "unregistered sentinel")]
    fn test_sprint_registered_oid_sentinel_panics() {
        let mut buf = [0u8; 64];
        let _ = sprint_registered_oid(Oid::NotFound, &mut buf);
    }

    #[test]
    fn test_rendering_reencodes_to_same_oid() {
        let mut buf = [0u8; 128];
        for &oid in Oid::all() {
            let len = sprint_registered_oid(oid, &mut buf).unwrap();
            let text = std::str::from_utf8(&buf[..len]).unwrap();
            let arcs: Vec<u64> = text.split('.').map(|a| a.parse().unwrap()).collect();
            let encoded = encode_arcs(&arcs).unwrap();
            assert_eq!(look_up_oid(&encoded), oid, "{}", text);
            assert_eq!(text, oid.to_string());
        }
    }
}
