pub mod health;
pub mod property;
