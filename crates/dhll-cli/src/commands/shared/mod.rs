pub mod limit;
pub mod request;
