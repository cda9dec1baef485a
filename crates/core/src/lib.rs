//! Toolforge core library.
//!
//! Domain types shared by the server and the built-in tool handlers:
//! the tool catalog, the [`ToolHandler`] contract and its registry, job
//! input payloads, output artifacts, and the progress-reporting seam that
//! running handlers publish through.

pub mod catalog;
pub mod handler;
pub mod input;
pub mod progress;
pub mod registry;
pub mod tools;

pub use catalog::{catalog, estimated_secs, ToolCategory, ToolSpec};
pub use handler::{HandlerError, JobContext, ToolHandler};
pub use input::{Artifact, InputFile, JobInput};
pub use progress::{NullReporter, ProgressError, ProgressReporter};
pub use registry::HandlerRegistry;
