use std::collections::HashMap;

/// Document-like environment that owns surfaces by element id.
///
/// A game claims its surface with [`Document::take`]; each surface can be
/// claimed once.
#[derive(Debug)]
pub struct Document<S> {
    surfaces: HashMap<String, S>,
}

impl<S> Document<S> {
    pub fn new() -> Self {
        Self { surfaces: HashMap::new() }
    }

    /// Registers `surface` under `id`, returning any surface it replaced.
    pub fn insert(&mut self, id: impl Into<String>, surface: S) -> Option<S> {
        self.surfaces.insert(id.into(), surface)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.surfaces.contains_key(id)
    }

    /// Removes and returns the surface registered under `id`.
    pub fn take(&mut self, id: &str) -> Option<S> {
        self.surfaces.remove(id)
    }
}

impl<S> Default for Document<S> {
    fn default() -> Self {
        Self::new()
    }
}
