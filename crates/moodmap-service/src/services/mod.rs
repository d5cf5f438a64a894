pub mod cache_service;
pub mod favorite_service;
pub mod place_service;
pub mod recommendation_service;
pub mod redis_service;
pub mod user_service;
