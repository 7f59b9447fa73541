//! Command-line parsing. There is exactly one positional argument, so no parser library is needed.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::{error::IconError, plan::IconPlan};

pub fn usage(bin_name: &str) -> String {
    format!(
        "Usage: {bin_name} <path-to-icon>\n   Example: {bin_name} ~/Downloads/extension-icon.png"
    )
}

/// Expects the program name followed by a single input path.
/// Relative paths are resolved against the working directory.
pub fn parse_args(args: Vec<OsString>) -> Result<IconPlan, IconError> {
    let bin_name = args
        .first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned());

    let [_, input] =
        <[OsString; 2]>::try_from(args).map_err(|_| IconError::Usage(usage(&bin_name)))?;
    let input = PathBuf::from(input);
    let absolute = std::path::absolute(&input).map_err(|_| IconError::NotFound(input))?;
    Ok(IconPlan::new(absolute))
}
