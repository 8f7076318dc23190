pub mod clients;
pub mod staffs;
