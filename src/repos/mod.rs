pub mod client_repo;
pub mod error;
pub mod staff_repo;
