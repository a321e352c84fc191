//! CLI command implementations

pub mod init;
pub mod run;

pub use init::run_init;
pub use run::run_session;
