//! Property-based tests for the OID registry.
//!
//! These tests use proptest to check that classification, printing and the
//! arc codec agree with each other over arbitrary inputs.

use std::collections::HashSet;

use oidreg::{
    decode_arcs, encode_arcs, look_up_oid, sprint_oid, sprint_registered_oid, Oid, OidDisplay,
    OidError, OID_COUNT,
};
use proptest::prelude::*;

fn registered_encodings() -> HashSet<Vec<u8>> {
    Oid::all()
        .iter()
        .filter_map(|oid| oid.encoding())
        .map(|data| data.to_vec())
        .collect()
}

// Strategy for picking a registered OID
fn arb_registered_oid() -> impl Strategy<Value = Oid> {
    (0..OID_COUNT).prop_map(|i| Oid::from_index(i).unwrap())
}

// Strategy for arcs that `encode_arcs` accepts
fn arb_arcs() -> impl Strategy<Value = Vec<u64>> {
    (
        (0u64..3, 0u64..40),
        prop::collection::vec(any::<u64>(), 0..8),
    )
        .prop_map(|((arc1, arc2), rest)| {
            let mut arcs = vec![arc1, arc2];
            arcs.extend(rest);
            arcs
        })
}

// Strategy for byte strings that look like OID encodings: a root byte and
// a few arcs, some of them multi-byte
fn arb_oid_like_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..12),
        arb_arcs().prop_map(|arcs| encode_arcs(&arcs).unwrap()),
        arb_registered_oid().prop_flat_map(|oid| {
            let data = oid.encoding().unwrap().to_vec();
            let len = data.len();
            (Just(data), 0..len, any::<u8>()).prop_map(|(mut data, i, b)| {
                data[i] = b;
                data
            })
        }),
    ]
}

proptest! {
    #[test]
    fn registered_oids_round_trip(oid in arb_registered_oid()) {
        prop_assert_eq!(look_up_oid(oid.encoding().unwrap()), oid);
    }

    #[test]
    fn non_members_are_never_misclassified(data in arb_oid_like_bytes()) {
        let found = look_up_oid(&data);
        if registered_encodings().contains(&data) {
            prop_assert_eq!(found.encoding(), Some(data.as_slice()));
        } else {
            prop_assert_eq!(found, Oid::NotFound);
        }
    }

    #[test]
    fn printed_registered_oid_reencodes_to_itself(oid in arb_registered_oid()) {
        let mut buf = [0u8; 128];
        let len = sprint_registered_oid(oid, &mut buf).unwrap();
        let text = std::str::from_utf8(&buf[..len]).unwrap();
        let arcs: Vec<u64> = text.split('.').map(|a| a.parse().unwrap()).collect();
        prop_assert_eq!(look_up_oid(&encode_arcs(&arcs).unwrap()), oid);
    }

    #[test]
    fn arcs_survive_encode_decode_and_print(arcs in arb_arcs()) {
        let data = encode_arcs(&arcs).unwrap();
        prop_assert_eq!(decode_arcs(&data).unwrap(), arcs.clone());

        let expected = arcs.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(".");
        let mut buf = vec![0u8; expected.len() + 1];
        prop_assert_eq!(sprint_oid(&data, &mut buf), Ok(expected.len()));
        prop_assert_eq!(&buf[..expected.len()], expected.as_bytes());
        prop_assert_eq!(OidDisplay(&data).to_string(), expected);
    }

    #[test]
    fn short_buffers_never_succeed(arcs in arb_arcs(), cut in 1usize..8) {
        let data = encode_arcs(&arcs).unwrap();
        let mut full = [0u8; 256];
        let len = sprint_oid(&data, &mut full).unwrap();

        let capacity = (len + 1).saturating_sub(cut);
        let mut buf = vec![0xAAu8; capacity];
        prop_assert_eq!(sprint_oid(&data, &mut buf), Err(OidError::BufferTooSmall));
        // Whatever was written is a terminated prefix of the full rendering
        if let Some(end) = buf.iter().position(|&b| b == 0) {
            prop_assert_eq!(&buf[..end], &full[..end]);
        }
    }

    #[test]
    fn printer_never_panics(data in prop::collection::vec(any::<u8>(), 0..24), cap in 0usize..64) {
        let mut buf = vec![0u8; cap];
        match sprint_oid(&data, &mut buf) {
            Ok(len) => prop_assert!(len < cap),
            Err(OidError::Malformed) | Err(OidError::BufferTooSmall) => {}
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }
}
