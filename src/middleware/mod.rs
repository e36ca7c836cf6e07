mod request;

pub use request::{access_log, get_only};
