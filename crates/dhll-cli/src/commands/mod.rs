pub mod api_base;
pub mod audit;
pub mod catalog;
pub mod curl;
pub mod dispatch;
pub mod enhance;
pub mod policy;
pub mod rating;
pub mod shared;
pub mod version;
