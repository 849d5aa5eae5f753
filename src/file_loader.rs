//! File loading and validation utilities for maze files.

use std::{fs, path::Path};

use color_eyre::eyre::{bail, OptionExt as _, Result, WrapErr as _};

use crate::map::Map;

/// Reads a maze file into a [`Map`] named after the file stem.
///
/// Trailing newlines are trimmed before the rows are checked by [`parse_file_contents`]. Symbol
/// and marker validation is left to [`Map::maze`].
///
/// # Errors
///
/// This function may return errors if:
/// - The file cannot be read
/// - The file name has no UTF-8 stem
/// - The contents are empty or the rows differ in length
pub(crate) fn load_map(path: &Path) -> Result<Map> {
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read maze file {}", path.display()))?;
    let contents = contents.trim_end_matches(['\n', '\r']);

    parse_file_contents(contents)
        .wrap_err_with(|| format!("invalid maze file {}", path.display()))?;

    let key = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_eyre("failed to convert maze file name to string slice")?;

    log::info!("loaded maze {key} from {}", path.display());

    Ok(Map::new(key, contents))
}

/// Checks that file contents describe a rectangular grid.
///
/// This function validates only the shape of the input: it must hold at least one row and every
/// row must have as many characters as the first.
///
/// # Errors
///
/// Returns an error naming the first offending line.
pub(crate) fn parse_file_contents(input: &str) -> Result<()> {
    let mut lines = input.lines();
    let expected_width = lines
        .next()
        .ok_or_eyre("maze file is empty")?
        .chars()
        .count();

    for (idx, line) in lines.enumerate() {
        let width = line.chars().count();
        if width != expected_width {
            bail!(
                "line {} has {width} characters but line 1 has {expected_width}",
                idx + 2
            );
        }
    }

    Ok(())
}
