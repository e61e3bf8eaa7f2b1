use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::MergeError;
use crate::fragment::AbiFragment;

/// Serialize the merged fragment sequence as a JSON array and persist it at
/// `path`, overwriting any prior content. Compact output by default,
/// pretty-printed when `pretty` is set; a trailing newline either way.
///
/// `-` as the path streams to stdout instead of a file.
pub fn write_merged(
    path: &Path,
    fragments: &[AbiFragment],
    pretty: bool,
) -> Result<(), MergeError> {
    if path.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        if let Err(e) = serialize(&mut writer, fragments, pretty) {
            if e.is_io() && e.io_error_kind() == Some(io::ErrorKind::BrokenPipe) {
                return Ok(());
            }
            return Err(write_failure(path, e.to_string()));
        }
        writer.write_all(b"\n").ok();
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| write_failure(path, format!("create {}: {e}", parent.display())))?;
    }

    let file = File::create(path).map_err(|e| write_failure(path, e.to_string()))?;
    let mut writer = BufWriter::new(file);
    serialize(&mut writer, fragments, pretty).map_err(|e| write_failure(path, e.to_string()))?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| write_failure(path, e.to_string()))?;
    Ok(())
}

fn serialize<W: Write>(
    writer: W,
    fragments: &[AbiFragment],
    pretty: bool,
) -> serde_json::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, fragments)
    } else {
        serde_json::to_writer(writer, fragments)
    }
}

fn write_failure(path: &Path, reason: String) -> MergeError {
    MergeError::WriteFailure {
        path: path.to_path_buf(),
        reason,
    }
}
