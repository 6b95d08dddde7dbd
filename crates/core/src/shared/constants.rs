pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Environment variable consulted when no explicit backend URL is given.
pub const BACKEND_URL_ENV: &str = "FACEGATE_BACKEND_URL";

pub const REGISTER_PATH: &str = "/detection/face-register/realtime/";
pub const VERIFY_PATH: &str = "/detection/face-verify/";
pub const MASKING_PATH: &str = "/detection/face-masking/";

/// The backend averages embeddings from at most this many registration images.
pub const MAX_REGISTRATION_IMAGES: usize = 5;

pub const MASKED_IMAGE_FILENAME: &str = "masked_image.png";

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
