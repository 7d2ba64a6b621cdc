//! Static OID registry
//!
//! Maps the BER content octets of well-known object identifiers to the
//! [`Oid`] enum and back. The table is generated at build time from
//! `oid_registry.list` and never changes at runtime; every function here is
//! a pure lookup over `'static` data and safe to call from any thread.
//!
//! - [`look_up_oid`]: encoded bytes to [`Oid`]
//! - [`lookup_oid_digest_info`]: signature algorithm to its digest
//! - [`sprint_registered_oid`]: [`Oid`] to dotted decimal

pub mod classify;
pub mod digest;
pub mod print;
pub mod table;

pub use classify::{look_up_oid, look_up_oid_tlv};
pub use digest::{lookup_oid_digest_info, DigestInfo};
pub use print::sprint_registered_oid;
pub use table::{Oid, OidSearchEntry, OID_COUNT};
