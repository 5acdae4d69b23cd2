//! Progress reporting shared by the decode and export passes

/// Progress callback type for long-running operations
pub type ProgressCallback<'a> = &'a dyn Fn(&Progress);

/// Progress information during decoding and export
#[derive(Debug, Clone)]
pub struct Progress {
    /// Current operation phase
    pub phase: Phase,
    /// Current item number (1-indexed)
    pub current: usize,
    /// Total number of items
    pub total: usize,
    /// Item being processed (if applicable)
    pub current_item: Option<String>,
}

impl Progress {
    #[must_use]
    pub fn new(phase: Phase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_item: None,
        }
    }

    #[must_use]
    pub fn with_item(phase: Phase, current: usize, total: usize, item: impl Into<String>) -> Self {
        Self {
            phase,
            current,
            total,
            current_item: Some(item.into()),
        }
    }

    /// Get the progress percentage (0.0 - 1.0)
    #[must_use]
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.current as f32 / self.total as f32
        }
    }
}

/// Phase of a decode or export run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Decoding objects from the object info table
    DecodingObjects,
    /// Resolving game objects into card art records
    ResolvingCards,
    /// Writing output files
    WritingFiles,
    /// Operation complete
    Complete,
}

impl Phase {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::DecodingObjects => "Decoding objects",
            Phase::ResolvingCards => "Resolving card art",
            Phase::WritingFiles => "Writing files",
            Phase::Complete => "Complete",
        }
    }
}

/// Callback that ignores every update.
pub fn no_progress(_: &Progress) {}
