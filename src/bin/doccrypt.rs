// src/bin/doccrypt.rs
//! doccrypt: encrypt and decrypt strings from the command line

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use doccrypt::consts::DEFAULT_SALT_LENGTH;
use doccrypt::input::read_all;
use doccrypt::{
    load_config, CipherAlgorithm, CipherConfig, DecryptionRequest, DocCrypt, Encoding,
    EncryptionResult,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "doccrypt", version, about = "Password-based string encryption")]
struct Cli {
    /// Password; prompted for (without echo) when absent
    #[arg(long, global = true, env = "DOCCRYPT_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Cipher identifier; overrides the config file
    #[arg(short, long, global = true)]
    algorithm: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List supported cipher identifiers
    Ciphers,
    /// Print a random hex salt
    Salt {
        #[arg(short, long, default_value_t = DEFAULT_SALT_LENGTH)]
        length: usize,
    },
    /// Encrypt TEXT (or stdin) and print the result as JSON
    Encrypt {
        #[arg(short, long)]
        salt: String,
        #[arg(short, long, default_value = "hex")]
        encoding: String,
        text: Option<String>,
    },
    /// Decrypt a JSON result read from --input or stdin
    Decrypt {
        #[arg(short, long)]
        salt: String,
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Ciphers => {
            for id in DocCrypt::list_ciphers() {
                println!("{id}");
            }
        }
        Command::Salt { length } => {
            println!("{}", DocCrypt::salt(length).context("Failed to generate salt")?);
        }
        Command::Encrypt {
            ref salt,
            ref encoding,
            ref text,
        } => {
            let facade = build_facade(cli.algorithm.as_deref())?;
            let encoding: Encoding = encoding.parse()?;
            let plaintext = match text {
                Some(text) => text.clone(),
                None => read_stdin()?,
            };
            let password = password(cli.password.as_deref())?;

            info!(algorithm = %facade.algorithm(), %encoding, "encrypting");
            let result = facade
                .encrypt_string(&password, salt, &plaintext, encoding)
                .await
                .context("Encryption failed")?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Decrypt {
            ref salt,
            ref input,
        } => {
            let facade = build_facade(cli.algorithm.as_deref())?;
            let raw = match input {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => read_stdin()?,
            };
            let result: EncryptionResult =
                serde_json::from_str(&raw).context("Input is not an encryption result")?;
            let password = password(cli.password.as_deref())?;

            info!(algorithm = %facade.algorithm(), encoding = %result.encoding, "decrypting");
            let plaintext = facade
                .decrypt_string(DecryptionRequest::with_password(result, password, salt.as_str()))
                .await
                .context("Decryption failed (wrong password, salt or cipher?)")?;
            println!("{plaintext}");
        }
    }

    Ok(())
}

fn build_facade(algorithm: Option<&str>) -> Result<DocCrypt> {
    let loaded = load_config().context("Failed to load doccrypt config")?;
    let config = match algorithm {
        Some(id) => {
            let algorithm: CipherAlgorithm = id.parse()?;
            CipherConfig {
                scrypt: loaded.scrypt,
                ..CipherConfig::for_algorithm(algorithm)
            }
        }
        None => loaded.clone(),
    };
    Ok(DocCrypt::new(config)?)
}

fn password(given: Option<&str>) -> Result<String> {
    match given {
        Some(password) => Ok(password.to_owned()),
        None => rpassword::prompt_password("Password: ").context("Failed to read password"),
    }
}

fn read_stdin() -> Result<String> {
    read_all(std::io::stdin().lock()).context("Failed to read stdin")
}
