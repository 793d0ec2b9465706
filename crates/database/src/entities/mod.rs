pub mod courses;
pub mod orders;
pub mod sessions;
pub mod users;
