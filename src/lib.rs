//! # text-cleanup
//!
//! Replaces typographic characters (curly quotes, en/em dashes, the ellipsis
//! glyph, bullets, word-joiner runs) with plain ASCII.
//!
//! The library exposes the pure [`core::normalize`] function plus the file and
//! directory walker that applies it in place. The `text-cleanup` binary wraps
//! both in a batch CLI and an interactive terminal UI.

pub mod core;
