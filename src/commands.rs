pub mod build;
pub mod clean;
pub mod convert;
pub mod init;
