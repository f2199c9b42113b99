//! A command-line interface for the classical cipher tool.

use std::path::{Path, PathBuf};

use cipher_core::{Cipher, CipherError};
use clap::{Args, Parser, Subcommand};
use log::{error, info, warn};

use crate::error::AppError;
use crate::metadata::CiphertextMetadata;

mod error;
mod metadata;
mod streams;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "METHODS:\n  caesar     key is a single letter A-Z\n  vigenere   key is a word of letters A-Z\n  railfence  key is the number of rails, 1-9\n  scytale    key is the row width, 1-9\n  columnar   key is any word; its letters order the columns\n\nEXAMPLES:\n  \n# Encrypt from standard input to standard output\necho HELLOWORLD | cipher encrypt -m caesar -p B\n\n# Encrypt a file and keep the padding count for later\ncipher encrypt -m columnar -p ZEBRAS message.txt message.enc --metadata message.enc.json\n\n# Decrypt using the metadata file\ncipher decrypt -m columnar -p ZEBRAS message.enc message.txt --metadata message.enc.json\n\n# Decrypt manually, dropping 5 padding letters\ncipher decrypt -m columnar -p ZEBRAS message.enc --padding 5"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a classical cipher
    Encrypt {
        #[command(flatten)]
        cipher: CipherArgs,

        /// Write the method, length, padding and ciphertext hash to this JSON file.
        #[arg(long, value_name = "METADATA_FILE")]
        metadata: Option<PathBuf>,
    },
    /// Decrypt text with a classical cipher
    Decrypt {
        #[command(flatten)]
        cipher: CipherArgs,

        /// Read the padding count from this JSON file and check the ciphertext hash.
        #[arg(long, value_name = "METADATA_FILE", conflicts_with = "padding")]
        metadata: Option<PathBuf>,

        /// Number of padding letters to drop from the end of the plaintext.
        #[arg(long, value_name = "COUNT")]
        padding: Option<usize>,
    },
}

#[derive(Args)]
struct CipherArgs {
    /// Cipher method: caesar, vigenere, railfence, scytale or columnar.
    #[arg(short, long)]
    method: String,

    /// The cipher key. Use the same key to decrypt.
    #[arg(short, long)]
    password: String,

    /// Input file, or "-" for standard input.
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output file, or "-" for standard output.
    #[arg(default_value = "-")]
    output: PathBuf,
}

impl CipherArgs {
    fn cipher(&self) -> Result<Cipher, CipherError> {
        Cipher::parse(&self.method, &self.password)
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Commands::Encrypt { cipher, metadata } => encrypt(cipher, metadata.as_deref()),
        Commands::Decrypt {
            cipher,
            metadata,
            padding,
        } => decrypt(cipher, metadata.as_deref(), *padding),
    }
}

fn encrypt(args: &CipherArgs, metadata: Option<&Path>) -> Result<(), AppError> {
    let cipher = args.cipher()?;
    let plaintext = streams::read_input(&args.input)?;
    info!(
        "Encrypting {} symbol(s) with {}.",
        plaintext.len(),
        cipher.method()
    );

    let ciphertext = cipher.encrypt(&plaintext, &mut rand::rng())?;
    if ciphertext.padding > 0 {
        info!("Appended {} padding letter(s).", ciphertext.padding);
    }
    streams::write_output(&args.output, &ciphertext.text)?;

    if let Some(path) = metadata {
        CiphertextMetadata::new(cipher.method(), plaintext.len(), &ciphertext).save(path)?;
        info!("Decryption metadata saved to '{}'", path.display());
    }
    Ok(())
}

fn decrypt(
    args: &CipherArgs,
    metadata: Option<&Path>,
    padding: Option<usize>,
) -> Result<(), AppError> {
    let cipher = args.cipher()?;
    let ciphertext = streams::read_input(&args.input)?;

    let (padding, expected_length) = match metadata {
        Some(path) => {
            let meta = CiphertextMetadata::load(path)?;
            meta.verify(cipher.method(), &ciphertext)?;
            info!("Using padding count {} from '{}'", meta.padding, path.display());
            (meta.padding, Some(meta.length))
        }
        None => (padding.unwrap_or(0), None),
    };

    let plaintext = cipher.decrypt_unpadded(&ciphertext, padding)?;
    if let Some(length) = expected_length.filter(|&length| length != plaintext.len()) {
        warn!(
            "Decrypted {} symbol(s) but the metadata recorded {length}.",
            plaintext.len()
        );
    }
    streams::write_output(&args.output, &plaintext)
}
