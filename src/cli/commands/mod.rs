mod command_result;
pub mod convert;
pub mod init;

pub use command_result::*;
