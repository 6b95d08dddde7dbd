pub mod config;
pub mod constants;
pub mod image_file;
pub mod user_id;
