//! Headless renderer
//!
//! Keeps quads in memory and logs what a real backend would draw. Used by
//! the native binary and by tests that inspect quad placement.

use glam::Vec3;

use super::{Quad, Renderer};

/// In-memory renderer that logs every quad operation
#[derive(Debug, Default)]
pub struct LogRenderer {
    quads: Vec<Option<Quad>>,
    moves: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of a quad, None once destroyed or for unknown handles
    pub fn quad(&self, handle: usize) -> Option<&Quad> {
        self.quads.get(handle).and_then(|q| q.as_ref())
    }

    /// Number of quads created and not yet destroyed
    pub fn live_quads(&self) -> usize {
        self.quads.iter().filter(|q| q.is_some()).count()
    }

    /// Total position updates received
    pub fn moves(&self) -> u64 {
        self.moves
    }
}

impl Renderer for LogRenderer {
    type Handle = usize;

    fn create_quad(&mut self, quad: &Quad) -> usize {
        let handle = self.quads.len();
        log::debug!(
            "Created quad {} '{}' at {:?}, size {:?}",
            handle,
            quad.name,
            quad.position,
            quad.scale
        );
        self.quads.push(Some(quad.clone()));
        handle
    }

    fn set_position(&mut self, handle: usize, position: Vec3) {
        match self.quads.get_mut(handle) {
            Some(Some(quad)) => {
                log::trace!("{} -> ({:.3}, {:.3})", quad.name, position.x, position.y);
                quad.position = position;
                self.moves += 1;
            }
            _ => log::warn!("Position update for missing quad {}", handle),
        }
    }

    fn destroy_quad(&mut self, handle: usize) {
        match self.quads.get_mut(handle).and_then(|q| q.take()) {
            Some(quad) => log::debug!("Destroyed quad {} '{}'", handle, quad.name),
            None => log::warn!("Destroy for missing quad {}", handle),
        }
    }
}
