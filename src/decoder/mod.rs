//! # Decoder
//!
//! Resolves raw file bytes into text. The backing document is written
//! as UTF-8, but documents produced by other tooling have shown up in
//! legacy encodings, so reading is a two-stage strategy:
//!
//! 1. Interpret the bytes as strict UTF-8.
//! 2. On failure, run a statistical detector over the bytes and decode
//!    with the best-guess encoding.
//!
//! A fallback that still yields malformed sequences is a hard
//! [`DecodeError`], never a silently empty result. This module performs
//! no JSON parsing; bytes to text only.

mod errors;
mod reader;

pub use errors::{DecodeError, DecodeResult};
pub use reader::decode_file;
