//! Wire protocol implementation.
//!
//! One request per connection, no keep-alive, no request bodies.
//!
//! # Architecture
//!
//! - **`reader`**: pulls the raw bytes of one request off the connection
//! - **`parser`**: decodes method, path and header mapping from those bytes
//! - **`request`**: the parsed request
//! - **`response`**: status, ordered headers and body, with a builder
//! - **`writer`**: serializes a response into wire bytes and writes it back
//! - **`connection`**: drives one connection through the steps above
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Read and parse the request
//!        └──────┬──────┘
//!               │ Request parsed (or a 400 prepared)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route to a handler
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │
//!               ▼
//!             Closed
//! ```

pub mod connection;
pub mod parser;
pub mod reader;
pub mod request;
pub mod response;
pub mod writer;

/// Protocol version written on every status line.
pub const HTTP_VERSION: &str = "HTTP/1.1";
