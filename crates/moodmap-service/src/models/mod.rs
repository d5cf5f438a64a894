pub mod favorites;
pub mod mood;
pub mod places;
pub mod users;
