//! Request handlers

pub mod health;
pub mod static_files;
pub mod submit;
