pub mod companies;
pub mod home;
pub mod not_found;
