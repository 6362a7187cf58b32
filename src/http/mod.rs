//! HTTP helpers module
//!
//! Response builders, MIME type detection, and cache validators.

pub mod cache;
pub mod mime;
pub mod response;

pub use response::{
    build_304_response, build_404_response, build_405_response, build_cached_response,
    build_html_response,
};
