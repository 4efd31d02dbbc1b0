use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum size for an export file: 1GiB
const MAX_EXPORT_SIZE_BYTES: u64 = 1024 * 1024 * 1024;

/// Read an export file into memory after checking its size on the open handle
pub fn read_export_file(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open export file: {}", path.display()))?;
    let size = validate_file_size(&file, path)?;

    let mut bytes = Vec::with_capacity(size as usize);
    file.read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read export file: {}", path.display()))?;
    Ok(bytes)
}

/// Validates that a file's size is within acceptable limits (1GiB) and returns it
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be replaced between the size check
/// and the read.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The path is not a regular file
/// - The file is larger than 1GiB
pub fn validate_file_size(file: &File, path: &Path) -> Result<u64> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    if !metadata.is_file() {
        bail!("Not a regular file: {}", path.display());
    }

    let file_size = metadata.len();
    if file_size > MAX_EXPORT_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_EXPORT_SIZE_BYTES
        );
    }

    Ok(file_size)
}
