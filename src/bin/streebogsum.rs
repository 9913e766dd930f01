use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use streebog::streebog::hash_reader;
use streebog::DigestSize;

// Prints GOST R 34.11-2012 digests of files, in the format of sha256sum.
//
// Usage:
//   streebogsum file.bin               # 512-bit digest
//   streebogsum -s 256 a.txt b.txt     # 256-bit digests
//   cat file.bin | streebogsum         # digest of stdin
//   streebogsum --prefix upload.bin    # prepend the storage shard directory

#[derive(Parser, Debug)]
#[command(name = "streebogsum", about = "Compute GOST R 34.11-2012 (Streebog) digests")]
struct Args {
    /// Digest size in bits: 256 or 512
    #[arg(short, long, default_value_t = DigestSize::Bits512)]
    size: DigestSize,

    /// Print the two-character shard the digest is stored under before it
    #[arg(long)]
    prefix: bool,

    /// Files to hash; no file or "-" reads standard input
    files: Vec<PathBuf>,
}

fn digest_file(path: &PathBuf, size: DigestSize) -> Result<String> {
    if path.as_os_str() == "-" {
        return hash_reader(io::stdin().lock(), size).context("reading standard input");
    }
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    hash_reader(BufReader::new(file), size).with_context(|| format!("reading {}", path.display()))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let files = if args.files.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        args.files
    };

    info!("hashing {} input(s) with {}-bit digests", files.len(), args.size);

    let mut failed = 0;
    for path in &files {
        match digest_file(path, args.size) {
            Ok(digest) if args.prefix => println!("{}/{}  {}", &digest[..2], digest, path.display()),
            Ok(digest) => println!("{}  {}", digest, path.display()),
            Err(e) => {
                error!("{:#}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        error!("{} of {} input(s) could not be hashed", failed, files.len());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_args() {
        let args = Args::parse_from(["streebogsum", "-s", "256", "a.bin", "b.bin"]);
        assert_eq!(args.size, DigestSize::Bits256);
        assert_eq!(args.files.len(), 2);
        assert!(!args.prefix);

        let args = Args::parse_from(["streebogsum", "--prefix"]);
        assert_eq!(args.size, DigestSize::Bits512);
        assert!(args.prefix);
        assert!(args.files.is_empty());

        assert!(Args::try_parse_from(["streebogsum", "--size", "384"]).is_err());
    }

    #[test]
    fn missing_file() {
        let path = PathBuf::from("/nonexistent/streebogsum/input.bin");
        let err = digest_file(&path, DigestSize::Bits512).unwrap_err();
        assert!(format!("{:#}", err).contains("opening"));
    }
}
