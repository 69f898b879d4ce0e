// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `mdhash`: print SHA-256 / SHA-512 digests of files.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mdhash::{BlockReader, IoSource, Sha256, Sha512, Variant, Word, extract_words, hash_reader};

/// Path argument that selects standard input
const STDIN_PATH: &str = "-";

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Algorithm {
    Sha256,
    Sha512,
}

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(
    name = "mdhash",
    version,
    about = "Print SHA-256 or SHA-512 digests of files"
)]
struct Args {
    /// Files to hash (`-` reads standard input)
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Hash algorithm
    #[arg(short, long, value_enum, default_value_t = Algorithm::Sha256)]
    algorithm: Algorithm,

    /// Print hex digits in upper case
    #[arg(short = 'U', long)]
    uppercase: bool,

    /// Print the padded message blocks as words instead of the digest
    #[arg(long)]
    blocks: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    run(&args, &mut out)?;
    out.flush().context("write output")
}

/// Hash (or dump) every requested input in order; stop at the first failure.
fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    for path in &args.files {
        let input = open_input(path)?;
        let name = path.display();

        let result = match (args.algorithm, args.blocks) {
            (Algorithm::Sha256, false) => print_digest::<Sha256>(input, &name, args.uppercase, out),
            (Algorithm::Sha512, false) => print_digest::<Sha512>(input, &name, args.uppercase, out),
            (Algorithm::Sha256, true) => print_blocks::<Sha256>(input, args.uppercase, out),
            (Algorithm::Sha512, true) => print_blocks::<Sha512>(input, args.uppercase, out),
        };
        result.with_context(|| format!("hash {name}"))?;
    }

    Ok(())
}

fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path.as_os_str() == STDIN_PATH {
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

fn print_digest<V: Variant>(
    input: impl Read,
    name: &impl std::fmt::Display,
    uppercase: bool,
    out: &mut impl Write,
) -> Result<()> {
    let digest = hash_reader::<V, _>(input)?;

    if uppercase {
        writeln!(out, "{digest:X}  {name}")?;
    } else {
        writeln!(out, "{digest:x}  {name}")?;
    }
    Ok(())
}

/// One line per padded block: 16 space-separated, zero-padded words
fn print_blocks<V: Variant>(input: impl Read, uppercase: bool, out: &mut impl Write) -> Result<()> {
    let width = (<V::Word as Word>::BITS / 4) as usize;
    let mut reader = BlockReader::<V, _>::new(IoSource::new(input));

    while let Some(block) = reader.next_block()? {
        let words = extract_words::<V::Word>(block);
        for (i, word) in words.iter().enumerate() {
            let sep = if i == 0 { "" } else { " " };
            if uppercase {
                write!(out, "{sep}{word:0width$X}")?;
            } else {
                write!(out, "{sep}{word:0width$x}")?;
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "{} bits in {}", reader.bit_len(), V::NAME)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents).expect("Failed to write temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn run_to_string(argv: &[&str]) -> Result<String> {
        let args = Args::try_parse_from(argv).expect("Failed to parse args");
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out).expect("output is utf-8"))
    }

    #[test]
    fn test_default_is_sha256() {
        let file = temp_file(b"abc");
        let path = file.path().to_str().expect("utf-8 path");

        let output = run_to_string(&["mdhash", path]).expect("run failed");

        assert_eq!(
            output,
            format!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad  {path}\n")
        );
    }

    #[test]
    fn test_sha512_uppercase() {
        let file = temp_file(b"");
        let path = file.path().to_str().expect("utf-8 path");

        let output = run_to_string(&["mdhash", "-a", "sha512", "-U", path]).expect("run failed");

        assert!(output.starts_with("CF83E1357EEFB8BDF1542850D66D8007"));
        assert!(output.ends_with(&format!("  {path}\n")));
    }

    #[test]
    fn test_multiple_files_in_order() {
        let a = temp_file(b"abc");
        let b = temp_file(b"");
        let pa = a.path().to_str().expect("utf-8 path");
        let pb = b.path().to_str().expect("utf-8 path");

        let output = run_to_string(&["mdhash", pa, pb]).expect("run failed");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ba7816bf"));
        assert!(lines[1].starts_with("e3b0c442"));
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("missing.txt");
        let missing = missing.to_str().expect("utf-8 path");

        let err = run_to_string(&["mdhash", missing]).expect_err("missing file must fail");

        assert!(format!("{err:#}").contains("missing.txt"));
    }

    #[test]
    fn test_blocks_dump_sha256_abc() {
        let file = temp_file(b"abc");
        let path = file.path().to_str().expect("utf-8 path");

        let output = run_to_string(&["mdhash", "--blocks", path]).expect("run failed");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        let words: Vec<&str> = lines[0].split(' ').collect();
        assert_eq!(words.len(), 16);
        assert_eq!(words[0], "61626380");
        assert_eq!(words[15], "00000018");
        assert_eq!(lines[1], "24 bits in SHA-256");
    }

    #[test]
    fn test_blocks_dump_sha512_two_blocks() {
        let file = temp_file(&[0x61; 112]);
        let path = file.path().to_str().expect("utf-8 path");

        let output = run_to_string(&["mdhash", "--blocks", "-a", "sha512", path]).expect("run failed");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines.iter().take(2).all(|l| l.split(' ').count() == 16));
        assert!(lines[1].ends_with("0000000000000380"));
        assert_eq!(lines[2], "896 bits in SHA-512");
    }

    #[test]
    fn test_requires_a_file() {
        assert!(Args::try_parse_from(["mdhash"]).is_err());
    }
}
