pub mod config;
pub mod dump;
pub mod init;
pub mod sample;
pub mod show;
pub mod timesheet;
