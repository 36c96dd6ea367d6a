pub mod dtos;
pub mod lenient;
