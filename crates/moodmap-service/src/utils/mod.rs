pub mod errors;
pub mod geo;
pub mod redis_keys;
pub mod text;
pub mod time;
