pub mod error;
pub mod forest;
pub mod policy;
