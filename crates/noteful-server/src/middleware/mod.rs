//! Request middleware.

pub mod existence;
pub mod request_id;
