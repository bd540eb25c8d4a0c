pub mod config;
pub mod logging;

// Pipeline modules, in execution order.
pub mod checksum;
pub mod extract;
pub mod fetch;
pub mod install;
pub mod release;
