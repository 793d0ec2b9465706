pub mod db;
pub mod entities;
pub mod services;
pub mod session_store;
