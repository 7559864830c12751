pub mod evaluate;
pub mod grade;
pub mod init;
pub mod validate;
