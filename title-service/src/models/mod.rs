pub mod error;
pub mod responses;
