#![forbid(unsafe_code)]

//! HTML output for `signpost`.
//!
//! - [`render_result`] builds the fragment shown in the results container
//! - [`apply_view`] rewrites a whole page so it reflects a controller snapshot

pub mod page;
pub mod result;

pub use page::{NavHighlight, PageView, PillarState, ToastView, apply_view};
pub use result::render_result;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("page rewrite failed: {message}")]
    Rewrite { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
