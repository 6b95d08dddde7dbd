pub mod submit_worker;
