use std::ffi::OsStr;

use current_platform::CURRENT_PLATFORM;

use crate::config::{ICON_SIZES, OUTPUT_DIRS};

pub fn maybe_print_help_and_exit(bin_name: &str) {
    if let Some(arg) = std::env::args_os().nth(1) {
        if is_help_flag(&arg) {
            print_help(bin_name);
            std::process::exit(0);
        }
    }
}

fn is_help_flag(arg: &OsStr) -> bool {
    ["--help", "-help", "-h"]
        .iter()
        .any(|flag| arg == OsStr::new(flag))
}

fn print_help(bin_name: &str) {
    println!("Version: {}", version_string());
    println!("License: {}", env!("CARGO_PKG_LICENSE"));
    println!("Usage: {bin_name} <path-to-icon>");
    println!();
    println!("Writes these files, replacing any that already exist:");
    for dir in OUTPUT_DIRS {
        for size in ICON_SIZES {
            println!("  {dir}/icon{size}.png");
        }
    }
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    format!("{} {} {cpu}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
