pub mod health;
pub mod parts;
