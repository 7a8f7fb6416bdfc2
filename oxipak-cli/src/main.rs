//! OxiPak CLI - asset-bundle unpacker
//!
//! Extracts the LZMA-compressed entry from a ZIP asset bundle, or prints
//! the bundle's header information without decoding.

use clap::{Parser, Subcommand};
use oxipak_bundle::{ASSET_PAK_ENTRY, entry_info, unpack};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "oxipak")]
#[command(author, version, about = "Unpack LZMA-compressed ZIP asset bundles")]
#[command(long_about = "
OxiPak unpacks game asset bundles: ZIP files carrying a single
LZMA-compressed entry (compression method 14).

Examples:
  oxipak extract bundle.zip
  oxipak extract bundle.zip -o assets.bin
  oxipak extract bundle.zip --entry data.pak
  oxipak info bundle.zip
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the entry from a bundle
    #[command(alias = "x")]
    Extract {
        /// Bundle file to extract
        bundle: PathBuf,

        /// Output file (defaults to the entry name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Entry name expected in the bundle
        #[arg(long, default_value = ASSET_PAK_ENTRY)]
        entry: String,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show information about a bundle
    #[command(alias = "i")]
    Info {
        /// Bundle file to inspect
        bundle: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            bundle,
            output,
            entry,
            verbose,
        } => cmd_extract(&bundle, output.as_deref(), &entry, verbose),
        Commands::Info { bundle } => cmd_info(&bundle),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_extract(
    bundle: &Path,
    output: Option<&Path>,
    entry: &str,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(bundle)?;
    let unpacked = unpack(&data, entry)?;

    let output = output.map_or_else(|| PathBuf::from(entry), Path::to_path_buf);
    fs::write(&output, &unpacked)?;

    if verbose {
        println!(
            "Extracted {} ({} bytes) -> {}",
            entry,
            unpacked.len(),
            output.display()
        );
    }

    Ok(())
}

fn cmd_info(bundle: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(bundle)?;
    let info = entry_info(&data)?;

    println!("Bundle Information");
    println!("==================");
    println!("File: {}", bundle.display());
    println!("Entry: {}", info.name);
    println!("Method: {}", info.method.describe());
    println!("Compressed size: {} bytes", info.compressed_size);
    println!("Uncompressed size: {} bytes", info.uncompressed_size);
    println!("Dictionary size: {} bytes", info.dict_size);
    println!(
        "Properties: lc={} lp={} pb={}",
        info.properties.lc, info.properties.lp, info.properties.pb
    );
    if info.uncompressed_size > 0 {
        println!(
            "Compression ratio: {:.1}%",
            (1.0 - f64::from(info.compressed_size) / f64::from(info.uncompressed_size)) * 100.0
        );
    }

    Ok(())
}
