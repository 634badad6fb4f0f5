pub mod check;
pub mod generate;
pub mod init;
pub mod show;
pub mod take;
