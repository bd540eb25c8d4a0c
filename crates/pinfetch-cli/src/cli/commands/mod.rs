//! CLI command handlers. Each command is in its own file.

mod checksum;
mod install;
mod url;
mod verify;

pub use checksum::run_checksum;
pub use install::run_install;
pub use url::run_url;
pub use verify::run_verify;
