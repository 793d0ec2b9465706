pub mod course;
pub mod credentials;
pub mod order;
pub mod text;
pub mod validation;
