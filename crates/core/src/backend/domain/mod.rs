pub mod backend_error;
pub mod face_backend;
