//! File I/O for document streams.
//!
//! This module reads YAML/JSON input from disk or stdin, with transparent
//! gzip decompression. Documents are never written back; rendered output
//! goes to stdout.

pub mod loader;
