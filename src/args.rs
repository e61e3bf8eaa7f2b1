use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Contract source unit to include (e.g. `FeeCollector.sol`; the `.sol`
    /// suffix is optional). Can be provided multiple times; merge order
    /// follows argument order and the first occurrence of a fragment wins.
    #[arg(long = "unit", value_name = "NAME")]
    pub units: Vec<String>,

    /// Read additional unit names from a file (1 name per line; '#' comments
    /// allowed). File entries are appended after --unit entries, in file
    /// order.
    #[arg(long, value_name = "PATH")]
    pub units_file: Option<PathBuf>,

    /// Directory holding compiled artifacts (`<NAME>.sol/<NAME>.json` layout).
    #[arg(long, value_name = "DIR", default_value = "out")]
    pub artifacts_dir: PathBuf,

    /// Where to write the merged ABI (use '-' for stdout).
    #[arg(long, value_name = "PATH", default_value = "diamondABI/diamond.json")]
    pub out: PathBuf,

    /// Pretty-print the merged ABI instead of compact JSON.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Verbose logging (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The ordered unit list: --unit flags first, then --units-file entries.
    /// Duplicates are kept; the deduplicator resolves them first-wins.
    pub fn resolve_units(&self) -> Result<Vec<String>> {
        let mut units: Vec<String> = Vec::new();

        for unit in &self.units {
            let trimmed = unit.trim();
            if !trimmed.is_empty() {
                units.push(trimmed.to_string());
            }
        }

        if let Some(path) = self.units_file.as_ref() {
            let text =
                fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
            for line in text.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                units.push(line.to_string());
            }
        }

        Ok(units)
    }
}
