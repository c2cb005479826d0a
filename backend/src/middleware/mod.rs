pub mod logging;
pub mod request_id;
pub mod route_guard;

pub use logging::*;
pub use request_id::*;
pub use route_guard::*;
