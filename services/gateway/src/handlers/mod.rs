pub mod health;
pub mod reference;
pub mod risk;
