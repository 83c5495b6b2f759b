pub mod client;
pub mod paginator;
pub mod readme;

pub use client::GitHubClient;
pub use paginator::Paginator;
pub use readme::ReadmeSource;
