//! HTTP/1.0 protocol implementation.
//!
//! One request per connection, close-delimited bodies, no keep-alive. The
//! layer is organized into:
//!
//! - **`reader`**: byte-at-a-time line framing with CR/LF normalization
//! - **`parser`**: request-line split plus header drain/scan helpers
//! - **`request`**: method and request-line types
//! - **`response`**: the five fixed-shape responses the server emits
//! - **`writer`**: response serialization with partial-write handling
//! - **`connection`**: the per-connection handler tying it all together
//!
//! # Per-connection flow
//!
//! ```text
//!   request line ── unsupported method ──► 501, close
//!        │
//!        ▼
//!   resolve target ── missing ──► drain headers, 404, close
//!        │
//!        ├─ static ──► drain headers, 200 + file bytes, close
//!        └─ CGI ─────► drain/scan headers, spawn child,
//!                      relay body in, drain output back, close
//! ```
//!
//! Ordering within a connection is strict: request line, header drain, body
//! relay, response. There is no ordering across connections.

pub mod connection;
pub mod parser;
pub mod reader;
pub mod request;
pub mod response;
pub mod writer;
