//! Request/response models and session types.

pub mod session;
