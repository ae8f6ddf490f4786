pub mod budget;
pub mod expense;
pub mod income;
pub mod user;
