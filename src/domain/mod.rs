pub mod datatype;
pub mod entity;
pub mod repository;
mod transform;
