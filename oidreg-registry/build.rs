//! Build script generating the OID registry tables
//!
//! Reads `oid_registry.list` and writes `oid_registry_data.rs` into
//! `OUT_DIR` with:
//! - the `Oid` enum, one variant per list entry plus the `NotFound` sentinel
//! - the ASN.1 names of every entry
//! - a flat blob holding every encoding back to back, and the index of each
//!   entry's start in it (with a closing end-of-blob index)
//! - the search table, sorted with `oidreg_core::search_order`
//!
//! The encoder and the comparator are the same code the library runs, so the
//! generated order is exactly the order the classifier searches in.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use oidreg_asn1::ber::encode_arcs;
use oidreg_core::{oid_hash, search_order};
use regex::Regex;

const LIST_FILE: &str = "oid_registry.list";
const SENTINEL: &str = "NotFound";

struct Entry {
    variant: String,
    name: String,
    dotted: String,
    encoding: Vec<u8>,
}

fn main() -> Result<()> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").context("CARGO_MANIFEST_DIR not set")?;
    let list_path = Path::new(&manifest_dir).join(LIST_FILE);
    println!("cargo:rerun-if-changed={}", LIST_FILE);

    let source = fs::read_to_string(&list_path)
        .with_context(|| format!("reading {}", list_path.display()))?;
    let entries = parse_list(&source)?;
    let code = generate(&entries)?;

    let out_dir = env::var("OUT_DIR").context("OUT_DIR not set")?;
    let dest_path = Path::new(&out_dir).join("oid_registry_data.rs");
    fs::write(&dest_path, code).with_context(|| format!("writing {}", dest_path.display()))?;
    Ok(())
}

fn parse_list(source: &str) -> Result<Vec<Entry>> {
    let line_re = Regex::new(r"^([A-Z][A-Za-z0-9_]*)\s+(\S+)\s+(\d+(?:\.\d+)+)$")?;

    let mut entries = Vec::new();
    let mut variants = HashSet::new();
    let mut names = HashSet::new();
    let mut encodings = HashSet::new();

    for (lineno, raw) in source.lines().enumerate() {
        let lineno = lineno + 1;
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let Some(caps) = line_re.captures(line) else {
            bail!("{}:{}: cannot parse entry {:?}", LIST_FILE, lineno, line);
        };
        let variant = caps[1].to_string();
        let name = caps[2].to_string();
        let dotted = caps[3].to_string();

        let arcs = dotted
            .split('.')
            .map(|arc| arc.parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("{}:{}: arc out of range in {}", LIST_FILE, lineno, dotted))?;
        let encoding = encode_arcs(&arcs)
            .with_context(|| format!("{}:{}: cannot encode {}", LIST_FILE, lineno, dotted))?;

        if variant == SENTINEL {
            bail!("{}:{}: {} is reserved for the sentinel", LIST_FILE, lineno, SENTINEL);
        }
        if !variants.insert(variant.clone()) {
            bail!("{}:{}: duplicate variant {}", LIST_FILE, lineno, variant);
        }
        if !names.insert(name.clone()) {
            bail!("{}:{}: duplicate name {}", LIST_FILE, lineno, name);
        }
        if !encodings.insert(encoding.clone()) {
            bail!("{}:{}: {} is already registered", LIST_FILE, lineno, dotted);
        }

        entries.push(Entry {
            variant,
            name,
            dotted,
            encoding,
        });
    }

    if entries.is_empty() {
        bail!("{} has no entries", LIST_FILE);
    }
    Ok(entries)
}

fn generate(entries: &[Entry]) -> Result<String> {
    let count = entries.len();
    let blob_len: usize = entries.iter().map(|e| e.encoding.len()).sum();
    if blob_len > u16::MAX as usize || count >= u16::MAX as usize {
        bail!("registry too large for 16-bit indices: {} entries, {} bytes", count, blob_len);
    }

    let hashes: Vec<u8> = entries.iter().map(|e| oid_hash(&e.encoding)).collect();
    let mut order: Vec<usize> = (0..count).collect();
    order.sort_by(|&a, &b| {
        search_order(
            (hashes[a], &entries[a].encoding),
            (hashes[b], &entries[b].encoding),
        )
    });

    let mut out = String::new();
    writeln!(out, "// @generated by build.rs from {}. Do not edit.", LIST_FILE)?;
    writeln!(out)?;

    writeln!(out, "/// Registered object identifiers")?;
    writeln!(out, "///")?;
    writeln!(out, "/// `NotFound` is returned by the classifier on a miss; its")?;
    writeln!(out, "/// discriminant equals [`OID_COUNT`].")?;
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]")?;
    writeln!(out, "#[repr(u16)]")?;
    writeln!(out, "pub enum Oid {{")?;
    for (i, e) in entries.iter().enumerate() {
        writeln!(out, "    /// `{}` ({})", e.name, e.dotted)?;
        writeln!(out, "    {} = {},", e.variant, i)?;
    }
    writeln!(out, "    /// Not a registered OID")?;
    writeln!(out, "    {} = {},", SENTINEL, count)?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "/// Number of registered OIDs, excluding the sentinel")?;
    writeln!(out, "pub const OID_COUNT: usize = {};", count)?;
    writeln!(out)?;

    writeln!(out, "pub(crate) static OID_ALL: [Oid; OID_COUNT] = [")?;
    for e in entries {
        writeln!(out, "    Oid::{},", e.variant)?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    writeln!(out, "pub(crate) static OID_NAMES: [&str; OID_COUNT] = [")?;
    for e in entries {
        writeln!(out, "    {:?},", e.name)?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    writeln!(out, "pub(crate) static OID_DATA: [u8; {}] = [", blob_len)?;
    for e in entries {
        let bytes: Vec<String> = e.encoding.iter().map(|b| format!("0x{:02x}", b)).collect();
        writeln!(out, "    {}, // {}", bytes.join(", "), e.name)?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    writeln!(out, "pub(crate) static OID_INDEX: [u16; OID_COUNT + 1] = [")?;
    let mut offset = 0usize;
    for e in entries {
        writeln!(out, "    {},", offset)?;
        offset += e.encoding.len();
    }
    writeln!(out, "    {},", offset)?;
    writeln!(out, "];")?;
    writeln!(out)?;

    writeln!(out, "pub(crate) static OID_SEARCH_TABLE: [OidSearchEntry; OID_COUNT] = [")?;
    for &i in &order {
        writeln!(
            out,
            "    OidSearchEntry {{ hash: 0x{:02x}, oid: Oid::{} }},",
            hashes[i], entries[i].variant
        )?;
    }
    writeln!(out, "];")?;

    Ok(out)
}
