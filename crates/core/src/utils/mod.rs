pub mod debounce;
pub mod time_utils;

pub use debounce::Debouncer;
