// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{fs, mem, path::Path};

use anyhow::{Context, bail};
use log::info;
use sufsort::Symbol;

/// A symbol type that can be read from input files and patterns and printed back.
pub trait Input: Symbol {
    /// Decodes the contents of an input file.
    fn decode(data: Vec<u8>, path: &Path) -> anyhow::Result<Vec<Self>>;

    /// Parses a pattern given on the command line.
    fn parse(pattern: &str) -> anyhow::Result<Vec<Self>>;

    /// Formats a substring for output.
    fn render(symbols: &[Self]) -> String;
}

impl Input for u8 {
    fn decode(data: Vec<u8>, _path: &Path) -> anyhow::Result<Vec<Self>> {
        Ok(data)
    }

    fn parse(pattern: &str) -> anyhow::Result<Vec<Self>> {
        Ok(pattern.as_bytes().to_vec())
    }

    fn render(symbols: &[Self]) -> String {
        String::from_utf8_lossy(symbols).into_owned()
    }
}

/// Native-endian symbol codes, e.g., token IDs
impl Input for u32 {
    fn decode(data: Vec<u8>, path: &Path) -> anyhow::Result<Vec<Self>> {
        if data.len() % mem::size_of::<u32>() != 0 {
            bail!(
                "Input file '{}' has {} bytes, which is not a whole number of u32 codes",
                path.display(),
                data.len(),
            );
        }

        Ok(bytemuck::pod_collect_to_vec::<u8, u32>(&data))
    }

    fn parse(pattern: &str) -> anyhow::Result<Vec<Self>> {
        pattern
            .split(',')
            .map(|code| {
                code.trim()
                    .parse()
                    .with_context(|| format!("Invalid symbol code '{code}' in pattern"))
            })
            .collect()
    }

    fn render(symbols: &[Self]) -> String {
        symbols
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Reads the text stored at `path`.
pub fn read<S: Input>(path: &Path) -> anyhow::Result<Vec<S>> {
    let data =
        fs::read(path).with_context(|| format!("Failed to read input file '{}'", path.display()))?;
    let text = S::decode(data, path)?;
    info!("read {} symbols from '{}'", text.len(), path.display());

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_codes() {
        assert_eq!(<u32 as Input>::parse("1, 2,300").unwrap(), [1, 2, 300]);
        assert!(<u32 as Input>::parse("1,x").is_err());
    }

    #[test]
    fn decode_codes() {
        let data = bytemuck::cast_slice::<u32, u8>(&[7, 1 << 20]).to_vec();

        assert_eq!(
            <u32 as Input>::decode(data, Path::new("codes")).unwrap(),
            [7, 1 << 20],
        );
        assert!(<u32 as Input>::decode(vec![1, 2, 3], Path::new("codes")).is_err());
    }

    #[test]
    fn render() {
        assert_eq!(<u8 as Input>::render(b"abc"), "abc");
        assert_eq!(<u32 as Input>::render(&[4, 5]), "4,5");
    }
}
