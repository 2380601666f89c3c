pub mod hash;
pub mod probe;
