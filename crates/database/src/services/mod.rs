pub mod course;
pub mod order;
pub mod user;
