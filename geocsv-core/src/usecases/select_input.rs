use super::prelude::*;
use std::path::PathBuf;

pub fn require_input_file(selection: Option<PathBuf>) -> Result<PathBuf> {
    match selection {
        Some(path) if !path.as_os_str().is_empty() => {
            log::debug!("Selected input file {}", path.display());
            Ok(path)
        }
        _ => Err(Error::MissingFile),
    }
}
