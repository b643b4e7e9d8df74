// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bounds-checked slice extraction for the ESNIKeys wire format: fixed-size
// ranges and 2-byte big-endian length-prefixed chunks. Each call returns the
// extracted bytes plus the remainder, so callers thread the remainder through
// a sequence of extractions.

/// Split off the first `n` bytes.
///
/// Returns `(chunk, remainder)`, or `None` if fewer than `n` bytes are left.
pub fn take_fixed(n: usize, data: &[u8]) -> Option<(&[u8], &[u8])> {
    if n > data.len() {
        return None;
    }
    Some(data.split_at(n))
}

/// Split off one length-prefixed chunk.
///
/// Format: `[2 bytes: big-endian length L] [L bytes: chunk]`. Returns the
/// chunk and everything after it, or `None` if fewer than `2 + L` bytes are
/// available (including fewer than 2 bytes for the prefix itself).
pub fn take_u16_chunk(data: &[u8]) -> Option<(&[u8], &[u8])> {
    let (len_bytes, rest) = take_fixed(2, data)?;
    let len = u16::from_be_bytes([len_bytes[0], len_bytes[1]]) as usize;
    take_fixed(len, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_fixed_splits() {
        let data = [1u8, 2, 3, 4];
        let (chunk, rest) = take_fixed(3, &data).unwrap();
        assert_eq!(chunk, &[1, 2, 3]);
        assert_eq!(rest, &[4]);
    }

    #[test]
    fn take_fixed_whole_buffer() {
        let data = [9u8; 4];
        let (chunk, rest) = take_fixed(4, &data).unwrap();
        assert_eq!(chunk.len(), 4);
        assert!(rest.is_empty());
    }

    #[test]
    fn take_fixed_rejects_overrun() {
        assert!(take_fixed(5, &[0u8; 4]).is_none());
    }

    #[test]
    fn take_u16_chunk_splits() {
        let data = [0u8, 3, 0xAA, 0xBB, 0xCC, 0xDD];
        let (chunk, rest) = take_u16_chunk(&data).unwrap();
        assert_eq!(chunk, &[0xAA, 0xBB, 0xCC]);
        assert_eq!(rest, &[0xDD]);
    }

    #[test]
    fn take_u16_chunk_allows_empty_chunk() {
        let data = [0u8, 0, 0x42];
        let (chunk, rest) = take_u16_chunk(&data).unwrap();
        assert!(chunk.is_empty());
        assert_eq!(rest, &[0x42]);
    }

    #[test]
    fn take_u16_chunk_rejects_short_prefix() {
        assert!(take_u16_chunk(&[0u8]).is_none());
        assert!(take_u16_chunk(&[]).is_none());
    }

    #[test]
    fn take_u16_chunk_rejects_declared_length_overrun() {
        // Declares 4 bytes but only 2 follow.
        assert!(take_u16_chunk(&[0u8, 4, 1, 2]).is_none());
    }
}
