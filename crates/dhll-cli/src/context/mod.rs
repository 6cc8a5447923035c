mod app_context;
mod warnings;

pub use app_context::AppContext;
pub use warnings::{warn_unconfigured, warn_unknown_options};
