pub mod beer;
pub mod date;
