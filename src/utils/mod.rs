//! Encoding utilities shared by the pipeline and tests

pub mod base64url;
pub mod der;
pub mod pem;
