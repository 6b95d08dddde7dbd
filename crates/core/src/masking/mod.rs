pub mod mask_face_use_case;
pub mod mask_type;
pub mod masked_image;
pub mod masking_form;
