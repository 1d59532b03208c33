//! External lip-sync inference invocation.

mod runner;

pub use runner::InferenceRunner;
