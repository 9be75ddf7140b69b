pub mod generate;
pub mod grade;
pub mod init;
pub mod inspect;
