//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod info;
pub mod skills;

/// Read an input file, validate its size, and require extractable text.
///
/// An input file with no text at all is terminal for the whole request:
/// upstream document extraction legitimately produces empty output only when
/// the source had none, and matching against nothing is meaningless.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    if content.trim().is_empty() {
        anyhow::bail!("no extractable text in {path}");
    }
    Ok(content)
}
