pub mod auth;
pub mod course;
pub mod health;
pub mod order;
