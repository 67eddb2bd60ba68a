pub mod add;
pub mod ask;
pub mod config;
pub mod export;
pub mod forecast;
pub mod init;
pub mod list;
pub mod shell;
pub mod status;
