mod error;
mod os;
mod scaffold;
mod template;

pub use error::ScaffoldError;
pub use os::{ensure_directory, write_file};
pub use scaffold::{scaffold, ScaffoldOutcome};
pub use template::{DB_HELPER, TARGET_DIR, TARGET_FILE};
