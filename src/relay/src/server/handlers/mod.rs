pub mod health;
pub mod index;
pub mod log;
mod relay;
pub mod submit;
pub mod test_log;
