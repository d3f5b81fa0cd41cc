//! Library half of the `catalog` binary: logging setup and output
//! formatting.

#![deny(unsafe_code)]

pub mod logging;
pub mod outline;
pub mod tables;
