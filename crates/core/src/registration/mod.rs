pub mod receipt;
pub mod register_face_use_case;
pub mod registration_form;
