pub mod log_sanitizer;
