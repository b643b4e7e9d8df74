// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Truncated-digest checksum over an ESNIKeys record.
//
// Checksum domain: the entire record, version field through extensions, with
// the 4 checksum bytes themselves zeroed; the embedded value is the first 4
// bytes of SHA-256 over that domain. This is a self-consistency check against
// transport corruption, not an authenticity guarantee.

use sha2::{Digest, Sha256};

/// Byte range of the checksum field within an ESNIKeys record.
pub const CHECKSUM_RANGE: std::ops::Range<usize> = 2..6;

/// Compute the 4-byte checksum a publisher embeds: the first 4 bytes of
/// SHA-256 over the record with the checksum field zeroed.
pub fn embedded_checksum(record: &[u8]) -> [u8; 4] {
    // Digest a local copy; the caller's buffer is never mutated.
    let mut copy = record.to_vec();
    if copy.len() >= CHECKSUM_RANGE.end {
        copy[CHECKSUM_RANGE].fill(0);
    }
    let digest = Sha256::digest(&copy);
    [digest[0], digest[1], digest[2], digest[3]]
}

/// Check a record's embedded checksum against the recomputed digest.
pub fn verify(record: &[u8], checksum: [u8; 4]) -> bool {
    embedded_checksum(record) == checksum
}
