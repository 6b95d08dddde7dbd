pub mod backend;
pub mod masking;
pub mod registration;
pub mod screen;
pub mod shared;
pub mod verification;
