pub mod favorite_repository;
pub mod user_repository;
