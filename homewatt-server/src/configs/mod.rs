mod schema;
mod settings;
mod storage;

use std::io;
use std::path::{Path, PathBuf};

pub use schema::SchemaManager;
pub use settings::{Database, Logger, Metering, Server, Settings};
pub use storage::Storage;

pub(crate) fn normalize_path(path: &str) -> io::Result<PathBuf> {
    Path::new(path).canonicalize()
}
