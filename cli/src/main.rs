// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// esni-inspect — decode the ESNI key configuration a domain publishes.
//
// Resolves the _esni.<domain> TXT record(s), base64-decodes each value,
// parses the ESNIKeys record, and prints a human-readable report: key
// shares, cipher suites, padding policy, and validity window. The wire
// decoding itself lives in esni-common; this binary is only the DNS and
// transport-decoding boundary.

use anyhow::Context;
use base64::Engine;
use clap::Parser;
use esni_common::EsniKeys;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "esni-inspect",
    about = "Inspect the ESNI key configuration published for a domain"
)]
struct Args {
    /// Domain to inspect (the _esni. label is prepended if missing)
    #[arg(required_unless_present = "record", conflicts_with = "record")]
    domain: Option<String>,

    /// Inspect one base64-encoded record directly, skipping DNS
    #[arg(long)]
    record: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let values = match (args.domain, args.record) {
        (_, Some(record)) => vec![record],
        (Some(domain), None) => {
            let name = esni_name(&domain);
            info!(name = %name, "resolving TXT records");
            lookup_txt(&name).await?
        }
        (None, None) => anyhow::bail!("provide a domain or --record"),
    };

    // Each TXT value is an independent record; one bad value must not stop
    // the others from being inspected.
    let mut inspected = 0usize;
    let b64 = base64::engine::general_purpose::STANDARD;
    for (i, value) in values.iter().enumerate() {
        let data = match b64.decode(value) {
            Ok(data) => data,
            Err(e) => {
                warn!(record = i, error = %e, "TXT value is not valid base64");
                continue;
            }
        };
        match EsniKeys::parse(&data) {
            Ok(keys) => {
                print!("{keys}");
                inspected += 1;
            }
            Err(e) => warn!(record = i, error = %e, "failed to parse ESNIKeys record"),
        }
    }

    if inspected == 0 {
        anyhow::bail!("no ESNIKeys record could be inspected");
    }
    Ok(())
}

/// Prepend the _esni. label unless the domain already carries it.
fn esni_name(domain: &str) -> String {
    if domain.starts_with("_esni.") {
        domain.to_string()
    } else {
        format!("_esni.{domain}")
    }
}

/// Resolve a name's TXT records, each record's character-strings
/// concatenated into one value.
async fn lookup_txt(name: &str) -> anyhow::Result<Vec<String>> {
    let resolver = match TokioAsyncResolver::tokio_from_system_conf() {
        Ok(resolver) => resolver,
        Err(e) => {
            warn!(error = %e, "no usable system resolver config, using defaults");
            TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
        }
    };

    let lookup = resolver
        .txt_lookup(name)
        .await
        .with_context(|| format!("TXT lookup for {name} failed"))?;

    let values = lookup
        .iter()
        .map(|txt| {
            txt.txt_data()
                .iter()
                .map(|part| String::from_utf8_lossy(part).into_owned())
                .collect::<String>()
        })
        .collect();

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::esni_name;

    #[test]
    fn prepends_esni_label() {
        assert_eq!(esni_name("example.com"), "_esni.example.com");
        assert_eq!(esni_name("_esni.example.com"), "_esni.example.com");
        // Shorter than the label itself must not panic.
        assert_eq!(esni_name("io"), "_esni.io");
    }
}
