pub mod chapters;
pub mod complete;
pub mod init;
pub mod join;
pub mod load;
pub mod progress;
pub mod quiz;
pub mod read;
pub mod reset;
pub mod status;
pub mod submit;
