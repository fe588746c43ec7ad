use std::path::Path;

use dbwire_capabilities::{scaffold, TARGET_DIR};

pub fn run() -> anyhow::Result<()> {
    let outcome = scaffold(Path::new("."))?;

    if outcome.dir_created {
        println!("Created {}/", TARGET_DIR);
    }

    println!("✓ Database helper written to {}", outcome.file.display());
    println!("The helper works with both local MySQL and TiDB Cloud.");

    Ok(())
}
