mod ignore;
mod walk;

pub use ignore::{IGNORE_FILE_NAME, IgnoreList};
pub use walk::{DiscoveredFile, discover_files, slash_path};
