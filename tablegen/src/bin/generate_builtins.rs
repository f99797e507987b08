//! Regenerates `include/builtin_list.h` from `include/builtin.h`.

use anyhow::Result;
use tablegen_core::BUILTINS;

fn main() -> Result<()> {
    tablegen::init_logging();
    tablegen::run(&BUILTINS)?;
    Ok(())
}
