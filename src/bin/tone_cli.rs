//! tone-cli: analyze one email from a file or stdin and print the result.
//!
//! Usage:
//!   tone-cli path/to/email.txt
//!   cat email.txt | tone-cli

use std::io::{self, Read};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use email_tone_analyzer::{ToneConfig, ToneService};

fn read_input() -> anyhow::Result<String> {
    match std::env::args().nth(1) {
        Some(path) if path != "-" => {
            std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    // Logs go to stderr so stdout stays clean JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tone=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cfg = ToneConfig::load_default()?;
    let service = ToneService::new(&cfg);

    let text = read_input()?;
    let resp = service.analyze(&text);
    println!(
        "{}",
        serde_json::to_string_pretty(&resp).context("serializing result")?
    );

    if !resp.success {
        std::process::exit(1);
    }
    Ok(())
}
