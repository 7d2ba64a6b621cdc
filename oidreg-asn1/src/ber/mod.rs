//! BER (Basic Encoding Rules) handling for OBJECT IDENTIFIER values
//!
//! # OBJECT IDENTIFIER content octets
//!
//! The content octets of an OID are a sequence of subidentifiers:
//!
//! ```text
//! [40 * arc1 + arc2] [arc3] [arc4] ...
//! ```
//!
//! The first byte packs the first two arcs. Every later arc is written in
//! base-128, most significant group first, with bit 8 set on every byte of
//! the arc except its last:
//!
//! ```text
//! 840    = 0b110_1001000  -> 0x86 0x48
//! 113549 = 0b110_1110111_0001101 -> 0x86 0xF7 0x0D
//! ```
//!
//! # TLV wrapping
//!
//! On the wire the content octets are preceded by the universal tag 6 and a
//! definite length. [`BerEncoder`] and [`BerDecoder`] add and strip that
//! framing; the registry itself always works on the bare content octets.

pub mod decoder;
pub mod encoder;
pub mod printer;
pub mod types;

pub use decoder::{decode_arcs, ArcDecoder, ArcValue, BerDecoder};
pub use encoder::{encode_arcs, BerEncoder};
pub use printer::{sprint_oid, OidDisplay};
pub use types::{BerLength, BerTag, BerTagClass};

/// Universal tag number of OBJECT IDENTIFIER
pub const OBJECT_IDENTIFIER_TAG: u32 = 6;
