//! Regenerates `include/sighandler_list.h` from `include/signal_handlers.h`.

use anyhow::Result;
use tablegen_core::SIGHANDLERS;

fn main() -> Result<()> {
    tablegen::init_logging();
    tablegen::run(&SIGHANDLERS)?;
    Ok(())
}
