pub mod client;
mod date_plans;
pub mod endpoints;
mod places;
mod session;
pub mod types;
mod users;

pub use client::*;
pub use endpoints::{kencan_api, CallArgs, Endpoint, HttpMethod};
pub use types::*;
