pub mod health;
pub mod indicators;
pub mod price;
