// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ESNIKeys record parsing (draft-ietf-tls-esni-01 wire format).
//
// Wire format (all integers big-endian, lengths in bytes):
//   [2 bytes: version]
//   [4 bytes: checksum]
//   [2 bytes: keys length] [keys: sequence of
//       [2 bytes: group] [2 bytes: key_exchange length] [key_exchange]]
//   [2 bytes: cipher_suites length] [cipher_suites: 2-byte codes]
//   [2 bytes: padded_length]
//   [8 bytes: not_before] [8 bytes: not_after]
//   [2 bytes: extensions length] [extensions]
//   -- no trailing bytes permitted --

use crate::checksum;
use crate::wire::{take_fixed, take_u16_chunk};

/// The single ESNIKeys version this tool knows.
pub const KNOWN_VERSION: [u8; 2] = [0xFF, 0x01];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("truncated input while parsing {field}")]
    Truncated { field: &'static str },

    #[error("keys chunk does not decompose into (group, key_exchange) pairs")]
    MalformedKeys,

    #[error("cipher_suites length must be an even number")]
    OddCipherSuiteLength,

    #[error("extra data at end of record")]
    TrailingData,
}

/// One advertised key-exchange option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyShareEntry {
    /// Named group code (RFC 8446 NamedGroup).
    pub group: [u8; 2],
    /// Opaque public key material for that group.
    pub key_exchange: Vec<u8>,
}

/// A decoded ESNIKeys record.
///
/// A pure parse result: constructed once by [`EsniKeys::parse`], immutable
/// afterward. `checksum_valid` is derived at parse time, not transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EsniKeys {
    pub version: [u8; 2],
    pub checksum: [u8; 4],
    pub checksum_valid: bool,
    pub keys: Vec<KeyShareEntry>,
    pub cipher_suites: Vec<[u8; 2]>,
    pub padded_length: u16,
    pub not_before: u64,
    pub not_after: u64,
    pub extensions: Vec<u8>,
}

impl EsniKeys {
    /// Decode one ESNIKeys record from a byte buffer.
    ///
    /// Single left-to-right pass; any extraction failure aborts the parse
    /// and no partial record is returned. A checksum mismatch is not a
    /// failure: it is recorded in `checksum_valid`. The input buffer is
    /// never mutated.
    pub fn parse(data: &[u8]) -> Result<Self, ParseError> {
        let (version, rest) = take_fixed(2, data).ok_or(truncated("version"))?;
        let version = [version[0], version[1]];

        let (sum, rest) = take_fixed(4, rest).ok_or(truncated("checksum"))?;
        let sum = [sum[0], sum[1], sum[2], sum[3]];

        // Verified over the whole original record with the checksum field
        // zeroed in a local copy.
        let checksum_valid = checksum::verify(data, sum);

        let (keys_chunk, rest) = take_u16_chunk(rest).ok_or(truncated("keys"))?;
        let keys = parse_key_shares(keys_chunk)?;

        let (suites_chunk, rest) = take_u16_chunk(rest).ok_or(truncated("cipher_suites"))?;
        if suites_chunk.len() % 2 != 0 {
            return Err(ParseError::OddCipherSuiteLength);
        }
        let cipher_suites = suites_chunk.chunks_exact(2).map(|c| [c[0], c[1]]).collect();

        let (pl, rest) = take_fixed(2, rest).ok_or(truncated("padded_length"))?;
        let padded_length = u16::from_be_bytes([pl[0], pl[1]]);

        let (nb, rest) = take_fixed(8, rest).ok_or(truncated("not_before"))?;
        let not_before = be_u64(nb);

        let (na, rest) = take_fixed(8, rest).ok_or(truncated("not_after"))?;
        let not_after = be_u64(na);

        let (extensions, rest) = take_u16_chunk(rest).ok_or(truncated("extensions"))?;
        if !rest.is_empty() {
            return Err(ParseError::TrailingData);
        }

        Ok(EsniKeys {
            version,
            checksum: sum,
            checksum_valid,
            keys,
            cipher_suites,
            padded_length,
            not_before,
            not_after,
            extensions: extensions.to_vec(),
        })
    }

    /// Whether this record's version is the one this tool knows.
    pub fn is_known_version(&self) -> bool {
        self.version == KNOWN_VERSION
    }
}

/// Drain a keys chunk into KeyShareEntry values.
///
/// One loop, one cursor: `remaining` is reassigned on every iteration, never
/// re-declared, so the loop condition sees the advanced slice and the chunk
/// is consumed exactly. Duplicate groups across entries are not rejected;
/// the wire format does not forbid them.
fn parse_key_shares(chunk: &[u8]) -> Result<Vec<KeyShareEntry>, ParseError> {
    let mut keys = Vec::new();
    let mut remaining = chunk;
    while !remaining.is_empty() {
        let (group, after_group) = take_fixed(2, remaining).ok_or(ParseError::MalformedKeys)?;
        let (key_exchange, after_key) =
            take_u16_chunk(after_group).ok_or(ParseError::MalformedKeys)?;
        keys.push(KeyShareEntry {
            group: [group[0], group[1]],
            key_exchange: key_exchange.to_vec(),
        });
        remaining = after_key;
    }
    if keys.is_empty() {
        return Err(ParseError::MalformedKeys);
    }
    Ok(keys)
}

fn truncated(field: &'static str) -> ParseError {
    ParseError::Truncated { field }
}

fn be_u64(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    u64::from_be_bytes(buf)
}
