//! The runner is responsible for streaming a request batch from CSV,
//! applying each request to a [`Teller`](crate::Teller), and writing the
//! final account summary to a writer.
//!
//! This module provides both a synchronous and an asynchronous runner
//! implementation.

mod async_runner;
mod sync_runner;

pub use async_runner::run as run_async;
pub use sync_runner::run;
