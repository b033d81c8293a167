pub mod buffer;
pub mod peak;
pub mod window;
