pub mod register;
pub mod status;
