pub mod cycles;
pub mod distribution;
pub mod forecast;
pub mod health;
pub mod reload;
