use error::SkiffError;

pub mod error;
pub mod http;
pub mod masterlist;
pub mod registry;
pub mod repo;

pub type SkiffResult<T> = std::result::Result<T, SkiffError>;
