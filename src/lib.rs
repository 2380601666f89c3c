pub mod components;
pub mod error;
pub mod hashing;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
