//! ASN.1 processing module for the OID registry
//!
//! This crate provides the BER pieces the registry needs: the base-128 arc
//! codec for OBJECT IDENTIFIER content octets, a bounded dotted-decimal
//! printer, and just enough TLV handling to wrap and unwrap a universal
//! OBJECT IDENTIFIER value.

pub mod ber;

pub use oidreg_core::{OidError, OidResult};
pub use ber::{
    decode_arcs, encode_arcs, sprint_oid, ArcDecoder, ArcValue, BerDecoder, BerEncoder, BerLength,
    BerTag, BerTagClass, OidDisplay,
};
