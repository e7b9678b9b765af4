use std::path::Path;

use anyhow::Result;

use peerwire_diagrams::{OUTPUT_DIR, SUCCESS_MESSAGE};

fn main() -> Result<()> {
    // Initialize stderr logging before any rendering starts.
    // Level comes from PEERWIRE_DIAGRAMS_LOG; rendering output is unaffected.
    peerwire_diagrams::logging::init();

    log::info!("generating documentation diagrams into {OUTPUT_DIR}");

    // The output directory must already exist; a missing directory surfaces
    // as the write error of the first diagram and aborts the run.
    peerwire_diagrams::generate_all(Path::new(OUTPUT_DIR))?;

    println!("{SUCCESS_MESSAGE}");
    Ok(())
}
