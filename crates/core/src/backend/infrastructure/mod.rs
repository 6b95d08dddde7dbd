pub mod http_face_backend;
