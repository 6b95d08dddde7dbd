pub mod domain;
pub mod infrastructure;

#[cfg(test)]
pub mod stub_face_backend;
