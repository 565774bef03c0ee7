// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

mod input;
mod logger;

use std::{
    fmt::Display,
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use input::Input;
use sufsort::SuffixArray;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Read input files as native-endian u32 symbol codes instead of bytes
    #[arg(long = "u32", global = true)]
    codes: bool,

    /// Log more detail; may be repeated
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the suffix array, one position per line
    Sa {
        file: PathBuf,
        /// Write the suffix array to this file as native-endian u32s instead
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the LCP array, one length per line
    Lcp { file: PathBuf },
    /// Print the offset of the lexicographically first suffix starting with a pattern
    Search {
        file: PathBuf,
        /// With --u32, a comma-separated list of codes
        pattern: String,
    },
    /// Print the longest substrings that occur at least twice
    Repeated { file: PathBuf },
    /// Print the longest substrings that occur in at least K files
    Common {
        #[arg(required = true, num_args = 2..)]
        files: Vec<PathBuf>,
        #[arg(short)]
        k: usize,
    },
    /// Print the number of distinct non-empty substrings
    Count { file: PathBuf },
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    logger::init(args.verbose)?;

    if args.codes {
        run::<u32>(args.command)
    } else {
        run::<u8>(args.command)
    }
}

fn run<S: Input>(command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Sa { file, out } => {
            let text = input::read::<S>(&file)?;
            let sa = index(&text, &file)?;

            match out {
                Some(out) => fs::write(&out, bytemuck::cast_slice::<u32, u8>(sa.suffix_array()))
                    .with_context(|| format!("Failed to write out file '{}'", out.display()))?,
                None => print_lines(sa.suffix_array())?,
            }
        }
        Command::Lcp { file } => {
            let text = input::read::<S>(&file)?;
            print_lines(index(&text, &file)?.lcp())?;
        }
        Command::Search { file, pattern } => {
            let text = input::read::<S>(&file)?;
            let pattern = S::parse(&pattern)?;

            match index(&text, &file)?.find(&pattern).context("Invalid pattern")? {
                Some(offset) => println!("{offset}"),
                None => {
                    println!("not found");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Repeated { file } => {
            let text = input::read::<S>(&file)?;
            let repeats = index(&text, &file)?.longest_repeated_substrings();
            print_lines(repeats.iter().map(|s| S::render(s)))?;
        }
        Command::Common { files, k } => {
            let texts = files
                .iter()
                .map(|file| input::read::<S>(file))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let slices: Vec<&[S]> = texts.iter().map(Vec::as_slice).collect();

            let common = sufsort::longest_common_substrings(&slices, k)
                .context("Failed to search for common substrings")?;
            print_lines(common.iter().map(|s| S::render(s)))?;
        }
        Command::Count { file } => {
            let text = input::read::<S>(&file)?;
            println!("{}", index(&text, &file)?.unique_substring_count());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn index<'a, S: Input>(text: &'a [S], file: &Path) -> anyhow::Result<SuffixArray<'a, S>> {
    SuffixArray::new(text)
        .with_context(|| format!("Failed to build suffix array of '{}'", file.display()))
}

fn print_lines<T: Display>(lines: impl IntoIterator<Item = T>) -> anyhow::Result<()> {
    let mut stdout = BufWriter::new(io::stdout().lock());
    for line in lines {
        writeln!(stdout, "{line}").context("Failed to write to stdout")?;
    }
    stdout.flush().context("Failed to write to stdout")?;

    Ok(())
}
