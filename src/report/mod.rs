pub mod markdown;

pub use markdown::{render, render_grouped, write_report};
