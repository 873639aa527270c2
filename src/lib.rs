//! Client for the p0f v3 passive-fingerprinting daemon.
//!
//! p0f watches traffic passively and caches a fingerprint per
//! observed host; run with `-s <path>` it exposes that cache on a
//! Unix domain socket speaking a fixed-size binary protocol. This
//! crate builds the 21-byte query, reads the 232-byte response and
//! refines it into typed host information.
//!
//! Protocol reference (section "API access"):
//! https://lcamtuf.coredump.cx/p0f3/README
//!
//! # Example
//!
//! ```no_run
//! use p0f_client::Client;
//!
//! fn main() -> p0f_client::Result<()> {
//!     let mut client = Client::connect("/var/run/p0f.sock")?;
//!
//!     let info = client.query(&[192, 0, 2, 7])?;
//!     println!("os: {} {}", info.os_name, info.os_flavor);
//!
//!     Ok(())
//! }
//! ```
pub mod client;
pub mod error;
pub mod wire;

pub use client::Client;
pub use error::{Error, Result};
pub use wire::{HostInfo, MatchQuality, Status};
