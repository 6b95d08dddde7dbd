pub mod verdict;
pub mod verification_form;
pub mod verify_face_use_case;
