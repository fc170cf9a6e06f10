//! Request/Response DTOs

pub mod submit;
