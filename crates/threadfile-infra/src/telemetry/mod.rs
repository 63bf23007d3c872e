//! Tracing initialisation

mod init;

pub use init::init_telemetry;
pub use threadfile_core::LogFormat;
