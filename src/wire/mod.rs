//! p0f API wire protocol primitives.
//!
//! This module provides low-level utilities to build p0f daemon
//! queries and decode the daemon's fixed-size binary responses.
//!
//! It implements:
//! - Construction of the 21-byte API query
//! - Decoding of the 232-byte API response record
//! - Query writing and response reading over any byte stream
//!
//! Refinement of a raw record into caller-facing data is handled by
//! [`HostInfo`], which applies the status rules and converts the
//! fixed-width text fields.
//!
//! Protocol reference (section "API access"):
//! https://lcamtuf.coredump.cx/p0f3/README
pub mod codec;

pub mod decode;
pub mod message;
pub mod payload;

pub mod constants;

pub use codec::{read_response, send_query};
pub use message::{HostInfo, MatchQuality, RawResponse, Status};
pub use payload::build_query;
