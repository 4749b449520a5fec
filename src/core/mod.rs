pub mod input;
pub mod services;
pub mod utils;
