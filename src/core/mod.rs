pub mod buffer;
pub mod debounce;
pub mod types;
