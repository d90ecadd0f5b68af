// src/main.rs
mod logger;

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use huffpress::archive::{self, Archive};
use huffpress::{codec, key};

#[derive(Parser)]
#[command(name = "huffpress", version = "0.1")]
#[command(about = "Huffman text compression with portable frequency keys.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a UTF-8 text file into a .hpz archive
    Compress {
        file: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Restore the original text from a .hpz archive
    Decompress {
        file: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show an archive's key and size statistics without decoding
    Info { file: PathBuf },
}

fn main() -> huffpress::Result<()> {
    logger::init();

    let cli = Cli::parse();
    let span = tracing::info_span!("command_execution", command = ?std::env::args().collect::<Vec<_>>());
    let _enter = span.enter();

    match cli.command {
        Commands::Compress { file, output } => run_compress(&file, output),
        Commands::Decompress { file, output } => run_decompress(&file, output),
        Commands::Info { file } => run_info(&file),
    }
}

fn run_compress(file: &Path, output: Option<PathBuf>) -> huffpress::Result<()> {
    let text = fs::read_to_string(file)?;
    let compressed = codec::compress(&text)?;
    let archive = Archive::from_compressed(&compressed, text.chars().count() as u64)?;

    let out = output.unwrap_or_else(|| file.with_extension("hpz"));
    archive::save(&out, &archive)?;

    tracing::info!(
        input = %file.display(),
        output = %out.display(),
        original_bytes = text.len(),
        packed_bytes = archive.data.len(),
        ratio = compressed.ratio,
        "compressed"
    );
    Ok(())
}

fn run_decompress(file: &Path, output: Option<PathBuf>) -> huffpress::Result<()> {
    let archive = archive::load(file)?;
    let text = codec::decompress(&archive.bits(), &archive.key)?;

    let out = output.unwrap_or_else(|| file.with_extension("txt"));
    fs::write(&out, &text)?;

    tracing::info!(
        input = %file.display(),
        output = %out.display(),
        characters = text.chars().count(),
        "decompressed"
    );
    Ok(())
}

fn run_info(file: &Path) -> huffpress::Result<()> {
    let archive = archive::load(file)?;
    let symbols = if archive.key.is_empty() {
        0
    } else {
        key::deserialize(&archive.key)?.len()
    };
    let ratio = if archive.bit_len == 0 {
        0.0
    } else {
        (archive.original_len * 8) as f64 / archive.bit_len as f64
    };

    println!("archive:        {}", file.display());
    println!("symbols:        {symbols}");
    println!("characters:     {}", archive.original_len);
    println!("encoded bits:   {}", archive.bit_len);
    println!("packed bytes:   {}", archive.data.len());
    println!("ratio:          {ratio:.2}");
    println!("key:            {}", archive.key);
    Ok(())
}
