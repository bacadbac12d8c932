//! Request fulfillment
//!
//! This module decides what a parsed request maps to on disk and produces
//! the response: a static file copy or a CGI subprocess exchange.

pub mod cgi;
pub mod resolver;
pub mod static_files;

pub use resolver::{Routing, resolve};
