//! # Quill Shared
//!
//! Request/response types for the HTTP surface, kept free of domain and
//! infrastructure dependencies so a browser client could compile them too.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
