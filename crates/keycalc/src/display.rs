//! Display rendering and sessions
//!
//! A [`Session`] pairs an engine with a renderer handed in by the caller
//! and re-renders after every applied action, the same loop a button or
//! keyboard front end runs.

use tracing::debug;

use crate::adapter::InputAction;
use crate::core::{CalculatorEngine, DisplayPair, FormatConfig};

/// Receives the formatted display after every action
pub trait DisplayRenderer {
    /// Renders the current display lines
    fn render(&mut self, display: &DisplayPair);
}

impl<R: DisplayRenderer + ?Sized> DisplayRenderer for &mut R {
    fn render(&mut self, display: &DisplayPair) {
        (**self).render(display);
    }
}

/// In-memory renderer keeping every rendered frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDisplay {
    frames: Vec<DisplayPair>,
}

impl MemoryDisplay {
    /// Creates an empty display
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rendered frame, empty before the first render
    #[must_use]
    pub fn last(&self) -> DisplayPair {
        self.frames.last().cloned().unwrap_or_default()
    }

    /// All rendered frames, oldest first
    #[must_use]
    pub fn frames(&self) -> &[DisplayPair] {
        &self.frames
    }

    /// Forgets all frames
    pub fn reset(&mut self) {
        self.frames.clear();
    }
}

impl DisplayRenderer for MemoryDisplay {
    fn render(&mut self, display: &DisplayPair) {
        self.frames.push(display.clone());
    }
}

/// An engine bound to a renderer
#[derive(Debug)]
pub struct Session<R> {
    engine: CalculatorEngine,
    renderer: R,
}

impl<R: DisplayRenderer> Session<R> {
    /// Creates a session with a fresh engine
    pub fn new(renderer: R) -> Self {
        Self::with_engine(CalculatorEngine::new(), renderer)
    }

    /// Creates a session with the given formatting configuration
    pub fn with_format(format: FormatConfig, renderer: R) -> Self {
        Self::with_engine(CalculatorEngine::with_format(format), renderer)
    }

    /// Creates a session around an existing engine and renders it once
    pub fn with_engine(engine: CalculatorEngine, mut renderer: R) -> Self {
        renderer.render(&engine.display());
        Self { engine, renderer }
    }

    /// Applies an action and re-renders
    pub fn apply(&mut self, action: InputAction) {
        action.apply(&mut self.engine);
        self.renderer.render(&self.engine.display());
    }

    /// Maps a key name and applies it.
    ///
    /// Returns false, without rendering, when the key maps to no action.
    pub fn press_key(&mut self, key: &str) -> bool {
        match InputAction::from_key(key) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => {
                debug!(key, "unmapped key");
                false
            }
        }
    }

    /// Returns the engine
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the renderer mutably
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consumes the session, returning engine and renderer
    pub fn into_parts(self) -> (CalculatorEngine, R) {
        (self.engine, self.renderer)
    }
}
