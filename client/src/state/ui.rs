//! Local UI chrome state (active tab, toast, view reset requests).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of `params` so the scene snapshot only
//! changes when the motion or appearance actually changes.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// How long a toast stays on screen.
pub const TOAST_MS: u32 = 1800;

/// Settings tabs under the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    General,
    Left,
    Right,
    Examples,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::General, Tab::Left, Tab::Right, Tab::Examples];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Examples => "Examples",
        }
    }
}

/// Transient notification. `seq` identifies which message a pending hide
/// timer belongs to, so an older timer never hides a newer message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub message: Option<String>,
    pub seq: u64,
}

impl ToastState {
    /// Show `message`, replacing any current one. Returns the sequence to hide it with.
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.message = Some(message.into());
        self.seq
    }

    /// Hide the toast if it is still the one shown at `seq`.
    pub fn hide(&mut self, seq: u64) {
        if self.seq == seq {
            self.message = None;
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub tab: Tab,
    /// Bumped on Reset / Reset View; the canvas host resets its camera on change.
    pub view_reset_seq: u64,
    pub toast: ToastState,
}

impl UiState {
    pub fn request_view_reset(&mut self) {
        self.view_reset_seq += 1;
    }
}
