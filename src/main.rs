//! diamond-abi: merge compiled facet ABIs into one diamond ABI artifact.
//!
//! Reads the compiler artifact of each requested contract source unit,
//! concatenates their ABI fragments in order, drops duplicate declarations
//! (first occurrence wins, keyed on name + type), and writes the merged ABI
//! to a single JSON file for downstream tooling.
//!
//! ```bash
//! # Merge two facets into the default diamondABI/diamond.json
//! diamond-abi --unit FeeCollector.sol --unit OwnershipFacet.sol
//!
//! # Units from a file, custom locations, pretty output
//! diamond-abi --units-file facets.txt --artifacts-dir out --out abi/diamond.json --pretty
//! ```

use anyhow::Result;
use clap::Parser;

use diamond_abi::args::Args;
use diamond_abi::artifact::ArtifactStore;
use diamond_abi::merge::merge;
use diamond_abi::output::write_merged;

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match verbose {
        0 => "diamond_abi=info",
        1 => "diamond_abi=debug",
        _ => "diamond_abi=trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let units = args.resolve_units()?;
    let store = ArtifactStore::new(&args.artifacts_dir);

    let merged = merge(&store, &units)?;
    write_merged(&args.out, &merged, args.pretty)?;

    if args.out.as_os_str() != "-" {
        println!(
            "ABI written to {} ({} fragments)",
            args.out.display(),
            merged.len()
        );
    }
    Ok(())
}
