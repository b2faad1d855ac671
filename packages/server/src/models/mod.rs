pub mod blessing;
pub mod health;
pub mod image;
