use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

/// `icon16.png`, `icon32.png` and so on
pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// Leftover marker files from older icon tooling, e.g. `icon16.png.placeholder`
pub fn placeholder_file_name(size: u32) -> OsString {
    append_extension(OsStr::new(&icon_file_name(size)), OsStr::new("placeholder"))
}

pub fn icon_path(dir: &Path, size: u32) -> PathBuf {
    dir.join(icon_file_name(size))
}

/// Unlike `Path::with_extension` this keeps the existing extension:
/// `icon16.png` + `placeholder` is `icon16.png.placeholder`.
fn append_extension(file_name: &OsStr, extension: &OsStr) -> OsString {
    let mut result = file_name.to_owned();
    result.push(".");
    result.push(extension);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_names() {
        let names: Vec<String> = [16, 32, 48, 128].into_iter().map(icon_file_name).collect();
        assert_eq!(
            names,
            ["icon16.png", "icon32.png", "icon48.png", "icon128.png"]
        );
    }

    #[test]
    fn placeholder_names_keep_png_extension() {
        assert_eq!(
            placeholder_file_name(48),
            OsString::from("icon48.png.placeholder")
        );
    }

    #[cfg(target_family = "unix")]
    #[test]
    fn icon_path_joins_directory() {
        assert_eq!(
            icon_path(Path::new("dist/assets/icons"), 128),
            PathBuf::from("dist/assets/icons/icon128.png")
        );
    }
}
