use std::path::Path;

use iconsizer::{debug_icons::write_debug_icons, error::IconError, init};

fn main() {
    if let Err(e) = real_main() {
        eprintln!("iconsizer-debug: {}", e);
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), IconError> {
    init::init();
    write_debug_icons(Path::new(""))?;
    Ok(())
}
