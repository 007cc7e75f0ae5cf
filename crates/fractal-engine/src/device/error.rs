/// What the frame loop should do after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the next frame can render normally.
    Reconfigured,
    /// Transient error; drop this frame.
    SkipFrame,
    /// Unrecoverable (commonly OOM); close the explorer.
    Fatal,
}
