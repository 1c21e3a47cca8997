pub mod errors;
pub mod loadable;

pub use errors::{ApiError, AuthFailure};
pub use loadable::{ListView, Loadable};
