pub mod file_row;
pub mod primary_button;
pub mod result_banner;
pub mod secondary_button;
