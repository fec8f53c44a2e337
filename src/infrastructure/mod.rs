pub mod axum_http;
pub mod cloudinary;
pub mod postgres;
