pub mod constants;
pub mod cost;
