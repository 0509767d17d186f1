pub mod colors;
pub mod log;
pub mod task;
