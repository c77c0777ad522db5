pub mod readiness;
pub mod source;
pub mod util;
