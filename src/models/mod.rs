pub mod repository;
pub mod readme;

pub use repository::*;
pub use readme::*;
