//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the explorer.
//! Runtime internals stay behind `App` and `FrameCtx`.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
