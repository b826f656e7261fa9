//! scrambler main.rs
//! Scrambles its single argument with a hard-coded key and prints the result.

use clap::Parser;
use scrambler::CipherText;
use tracing_subscriber::EnvFilter;

/// Fixed key, upper-cased before use.
const KEY: &str = "cdm89";

#[derive(Parser, Debug)]
#[command(name = "scrambler")]
#[command(about = "Scramble an alphanumeric string with a fixed key", long_about = None)]
struct Args {
    /// Text to scramble (letters and digits; case is ignored)
    plaintext: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let key = CipherText::from_string(&KEY.to_uppercase())?;
    let plaintext = CipherText::from_string(&args.plaintext.to_uppercase())
        .map_err(|_| anyhow::anyhow!("Invalid plaintext - must be alphanumeric"))?;
    if plaintext.len() > key.len() {
        tracing::debug!(
            dropped = plaintext.len() - key.len(),
            "plaintext longer than key, truncating"
        );
    }

    println!("{}", key.encrypt(&plaintext));
    Ok(())
}
