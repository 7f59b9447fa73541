use std::ffi::OsString;

use iconsizer::{args, error::IconError, help, init};

fn main() {
    help::maybe_print_help_and_exit("iconsizer");
    let arguments: Vec<_> = std::env::args_os().collect();

    if let Err(e) = real_main(arguments) {
        eprintln!("iconsizer: {}", e);
        std::process::exit(1);
    }
}

fn real_main(args: Vec<OsString>) -> Result<(), IconError> {
    init::init();
    let plan = args::parse_args(args)?;
    plan.execute()?;
    Ok(())
}
