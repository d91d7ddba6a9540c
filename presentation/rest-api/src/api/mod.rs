pub mod account;
pub mod auth;
pub mod error;
pub mod goal;
pub mod health;
pub mod tag;
pub mod tags;
pub mod transaction;
pub mod user;
