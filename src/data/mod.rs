pub mod bundle;
pub mod models;
