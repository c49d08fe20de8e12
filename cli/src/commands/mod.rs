pub mod admin;
pub mod misc;
pub mod pool;
pub mod vault;
