use std::process::exit;

use anyhow::Result;
use human_panic::setup_panic;
use log::error;

use frame_pad::prelude::*;

fn run() -> Result<()> {
    let matches = get_matches();
    init_logger(get_verbosity(&matches))?;

    let config = get_run_config(&matches)?;
    process_sequence(config)?;

    Ok(())
}

fn main() {
    setup_panic!();

    if let Err(e) = run() {
        error!("{e:#}");
        exit(1);
    }
}
