// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable report for a decoded ESNIKeys record. Pure formatting:
// field coverage and ordering are stable, the exact wording is not a
// compatibility surface.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::names::{cipher_suite_name, hex_bytes, named_group_name};
use crate::record::EsniKeys;

/// Key material shown in the report is capped at this many bytes.
const KEY_PREVIEW_LEN: usize = 20;

impl fmt::Display for EsniKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_flag = if self.is_known_version() {
            "known"
        } else {
            "unknown"
        };
        writeln!(f, "version : {} ({})", hex_bytes(&self.version), version_flag)?;

        let checksum_flag = if self.checksum_valid { "valid" } else { "invalid" };
        writeln!(
            f,
            "checksum: {} ({})",
            hex_bytes(&self.checksum),
            checksum_flag
        )?;

        writeln!(f, "keys ({}):", self.keys.len())?;
        for (i, key) in self.keys.iter().enumerate() {
            // Shorter keys display in full rather than erroring.
            let preview_len = key.key_exchange.len().min(KEY_PREVIEW_LEN);
            writeln!(
                f,
                "  {}: {} [{}...]",
                i,
                named_group_name(key.group),
                hex_bytes(&key.key_exchange[..preview_len])
            )?;
        }

        writeln!(f, "cipher_suites ({}):", self.cipher_suites.len())?;
        for (i, suite) in self.cipher_suites.iter().enumerate() {
            writeln!(f, "  {}: {}", i, cipher_suite_name(*suite))?;
        }

        writeln!(f, "padded_length: {}", self.padded_length)?;
        writeln!(f, "not_before: {}", format_timestamp(self.not_before))?;
        writeln!(f, "not_after: {}", format_timestamp(self.not_after))?;

        if self.extensions.is_empty() {
            writeln!(f, "extensions: none")
        } else {
            writeln!(f, "extensions: {}", hex_bytes(&self.extensions))
        }
    }
}

/// Seconds since the Unix epoch as a UTC calendar timestamp. Values outside
/// chrono's representable range fall back to the raw seconds count.
fn format_timestamp(secs: u64) -> String {
    i64::try_from(secs)
        .ok()
        .and_then(|s| DateTime::<Utc>::from_timestamp(s, 0))
        .map(|dt| dt.to_string())
        .unwrap_or_else(|| format!("{secs} (seconds since epoch)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{KeyShareEntry, KNOWN_VERSION};

    fn sample_keys() -> EsniKeys {
        EsniKeys {
            version: KNOWN_VERSION,
            checksum: [0xAB, 0xCD, 0xEF, 0x01],
            checksum_valid: true,
            keys: vec![KeyShareEntry {
                group: [0x00, 0x1D],
                key_exchange: vec![0x11; 32],
            }],
            cipher_suites: vec![[0x13, 0x01]],
            padded_length: 260,
            not_before: 0,
            not_after: 2_000_000_000,
            extensions: Vec::new(),
        }
    }

    #[test]
    fn report_covers_all_fields() {
        let report = sample_keys().to_string();
        assert!(report.contains("version : FF 01 (known)"));
        assert!(report.contains("checksum: AB CD EF 01 (valid)"));
        assert!(report.contains("x25519"));
        assert!(report.contains("TLS_AES_128_GCM_SHA256"));
        assert!(report.contains("padded_length: 260"));
        assert!(report.contains("not_before: 1970-01-01 00:00:00 UTC"));
        assert!(report.contains("not_after: 2033-05-18 03:33:20 UTC"));
        assert!(report.contains("extensions: none"));
    }

    #[test]
    fn key_preview_is_capped_at_twenty_bytes() {
        let report = sample_keys().to_string();
        let key_line = report
            .lines()
            .find(|l| l.contains("x25519"))
            .unwrap()
            .to_string();
        // 20 bytes as space-separated pairs.
        assert_eq!(key_line.matches("11").count(), 20);
    }

    #[test]
    fn short_key_renders_in_full() {
        let mut keys = sample_keys();
        keys.keys[0].key_exchange = vec![0x22; 3];
        let report = keys.to_string();
        assert!(report.contains("x25519 [22 22 22...]"));
    }

    #[test]
    fn invalid_checksum_and_unknown_version_flags() {
        let mut keys = sample_keys();
        keys.version = [0x00, 0x00];
        keys.checksum_valid = false;
        let report = keys.to_string();
        assert!(report.contains("version : 00 00 (unknown)"));
        assert!(report.contains("(invalid)"));
    }

    #[test]
    fn nonempty_extensions_render_as_hex() {
        let mut keys = sample_keys();
        keys.extensions = vec![0xCA, 0xFE];
        assert!(keys.to_string().contains("extensions: CA FE"));
    }

    #[test]
    fn out_of_range_timestamp_falls_back_to_seconds() {
        assert_eq!(
            format_timestamp(u64::MAX),
            format!("{} (seconds since epoch)", u64::MAX)
        );
    }
}
