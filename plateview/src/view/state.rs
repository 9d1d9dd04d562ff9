//! View state and its gate.

use serde::{Deserialize, Serialize};

/// Zoom and camera target of the viewer.
///
/// Serialized as `{"zoom": number, "target": [x, y, z]}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub zoom: f64,
    pub target: [f64; 3],
}

impl ViewState {
    pub fn new(zoom: f64, target: [f64; 3]) -> Self {
        Self { zoom, target }
    }
}

/// Whether a concrete view state exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewGate {
    #[default]
    Uninitialized,
    Initialized,
}

/// Holds the current view state.
///
/// The only transition is `Uninitialized -> Initialized`, taken on the first
/// [`set`](Self::set).
#[derive(Debug, Clone, Default)]
pub struct ViewStateStore {
    gate: ViewGate,
    current: Option<ViewState>,
}

impl ViewStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate(&self) -> ViewGate {
        self.gate
    }

    pub fn is_initialized(&self) -> bool {
        self.gate == ViewGate::Initialized
    }

    pub fn current(&self) -> Option<ViewState> {
        self.current
    }

    /// Replace the view state and open the gate.
    pub fn set(&mut self, view: ViewState) {
        self.current = Some(view);
        self.gate = ViewGate::Initialized;
    }
}
