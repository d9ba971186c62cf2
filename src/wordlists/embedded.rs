//! Embedded round data
//!
//! Records compiled into the binary at build time.

// Include generated record list from build script
include!(concat!(env!("OUT_DIR"), "/records.rs"));
