//! # Stocklens Analytics Engine
//!
//! The pure computational core of the system: Pearson correlation over two
//! price series.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems and performs no I/O.
//! - **Stateless Calculation:** `pearson` is a deterministic function of its
//!   inputs. This makes it highly reliable and easy to test.

pub mod engine;

pub use engine::pearson;
