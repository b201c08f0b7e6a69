pub mod catalog;
pub mod fs;
pub mod random;
