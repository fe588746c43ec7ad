use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::os;
use crate::template;

/// What a successful run produced, for the caller to report.
#[derive(Debug)]
pub struct ScaffoldOutcome {
    /// Absolute path of the written helper.
    pub file: PathBuf,
    /// Whether the target directory had to be created.
    pub dir_created: bool,
}

/// Materialize the database helper under `base`: ensure `<base>/lib` exists,
/// then write `db.ts` into it, replacing any previous copy.
pub fn scaffold(base: &Path) -> Result<ScaffoldOutcome, ScaffoldError> {
    let target_dir = base.join(template::TARGET_DIR);
    let dir_created = os::ensure_directory(&target_dir)?;

    let target_file = target_dir.join(template::TARGET_FILE);
    os::write_file(&target_file, template::DB_HELPER)?;

    // path::absolute only fails when the working directory itself is gone.
    let file = std::path::absolute(&target_file).unwrap_or(target_file);

    Ok(ScaffoldOutcome { file, dir_created })
}
