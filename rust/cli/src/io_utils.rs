//! Filesystem helpers for hand-history inputs and report outputs.
//!
//! Errors are flattened to `String` and wrapped into a `CliError` by the
//! calling command.

use std::path::{Path, PathBuf};

/// Reads a whole archive into memory.
///
/// Paths ending in `.zst` are Zstandard-decoded first, and a leading UTF-8
/// BOM is removed.
///
/// # Example
///
/// ```rust,no_run
/// # use chipledger_cli::io_utils::read_text_auto;
///
/// let content = read_text_auto("logs/session.txt").unwrap();
/// let compressed = read_text_auto("logs/session.txt.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::stream::decode_all(comp.as_slice()).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Lists the files to read for `input`.
///
/// A file is returned as-is. A directory is walked recursively and every
/// regular file found is returned, sorted by path so archives are always
/// consumed in the same order.
pub fn collect_input_files(input: &Path) -> Result<Vec<PathBuf>, String> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        return Err(format!("Input not found: {}", input.display()));
    }

    let mut files = Vec::new();
    let mut stack = vec![input.to_path_buf()];
    while let Some(d) = stack.pop() {
        let rd = std::fs::read_dir(&d)
            .map_err(|e| format!("Failed to read directory {}: {}", d.display(), e))?;
        for e in rd.filter_map(Result::ok) {
            let p = e.path();
            if p.is_dir() {
                stack.push(p);
            } else if p.is_file() {
                files.push(p);
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Creates the directory that will hold `path`, if any.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// # use chipledger_cli::io_utils::ensure_parent_dir;
///
/// let path = Path::new("out/reports/hands.csv");
/// ensure_parent_dir(path).unwrap();
/// ```
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
