// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Display names for the 2-byte protocol codes an ESNIKeys record carries:
// named key-exchange groups (RFC 8446 Section 4.2.7) and TLS 1.3 cipher
// suites. Codes absent from the tables never fail to resolve; they render as
// "unknown (XX XX)" so records newer than these tables still display.

const NAMED_GROUPS: &[([u8; 2], &str)] = &[
    // Elliptic curve groups (ECDHE)
    ([0x00, 0x17], "secp256r1"),
    ([0x00, 0x18], "secp384r1"),
    ([0x00, 0x19], "secp521r1"),
    ([0x00, 0x1D], "x25519"),
    ([0x00, 0x1E], "x448"),
    // Finite field groups (DHE)
    ([0x01, 0x00], "ffdhe2048"),
    ([0x01, 0x01], "ffdhe3072"),
    ([0x01, 0x02], "ffdhe4096"),
    ([0x01, 0x03], "ffdhe6144"),
    ([0x01, 0x04], "ffdhe8192"),
];

const CIPHER_SUITES: &[([u8; 2], &str)] = &[
    ([0x13, 0x01], "TLS_AES_128_GCM_SHA256"),
    ([0x13, 0x02], "TLS_AES_256_GCM_SHA384"),
    ([0x13, 0x03], "TLS_CHACHA20_POLY1305_SHA256"),
    ([0x13, 0x04], "TLS_AES_128_CCM_SHA256"),
    ([0x13, 0x05], "TLS_AES_128_CCM_8_SHA256"),
];

/// Display name for a named key-exchange group code.
pub fn named_group_name(code: [u8; 2]) -> String {
    lookup(NAMED_GROUPS, code)
}

/// Display name for a TLS 1.3 cipher suite code.
pub fn cipher_suite_name(code: [u8; 2]) -> String {
    lookup(CIPHER_SUITES, code)
}

fn lookup(table: &[([u8; 2], &str)], code: [u8; 2]) -> String {
    table
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| format!("unknown ({})", hex_bytes(&code)))
}

/// Uppercase space-separated hex, e.g. `[0x13, 0x01]` -> `"13 01"`.
pub fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
