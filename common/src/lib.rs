// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ESNI Common — decoding of ESNI key-configuration records
//
// An ESNI-capable server publishes its key configuration as a base64-encoded
// binary blob in a DNS TXT record at _esni.<domain>. This crate turns that
// blob into a typed record: nested 16-bit length-prefixed fields, a
// self-referential truncated SHA-256 checksum, and enumeration tables for
// named groups and TLS 1.3 cipher suites.
//
// The crate is purely synchronous and does no I/O; DNS resolution and base64
// transport decoding belong to the caller.

pub mod checksum;
pub mod names;
pub mod record;
pub mod render;
pub mod wire;

pub use record::{EsniKeys, KeyShareEntry, ParseError, KNOWN_VERSION};
