//! CV builder backend: derives a renderable CV view from form input,
//! serves it over HTTP and renders template thumbnails.

pub mod config;
pub mod core;
pub mod logging;
pub mod thumbnail;
pub mod types;
pub mod utils;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::core::{derive_cv_view, CvDeriver};
pub use crate::types::{CvSnapshot, CvView};
pub use crate::web::start_web_server;
