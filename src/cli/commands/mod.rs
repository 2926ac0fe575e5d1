pub mod check;
pub mod config;
pub mod init;
pub mod report;
pub mod snapshot;
mod source;

pub(crate) use source::DataSource;
