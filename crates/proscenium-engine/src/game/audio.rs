use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Directory every audio asset path is resolved under.
pub const ASSETS_DIR: &str = "assets";

/// Logical audio name → asset path table.
///
/// Pure bookkeeping: nothing is opened or checked on disk.
#[derive(Debug, Clone, Default)]
pub struct AudioAssets(HashMap<String, PathBuf>);

impl AudioAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name` as `assets/<relative_path>`, replacing any earlier entry.
    pub fn insert(&mut self, name: impl Into<String>, relative_path: impl AsRef<Path>) {
        let path = Path::new(ASSETS_DIR).join(relative_path);
        self.0.insert(name.into(), path);
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.0.get(name).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_prefixes_assets_dir() {
        let mut audio = AudioAssets::new();
        audio.insert("jump", "jump.wav");
        assert_eq!(audio.get("jump"), Some(Path::new("assets/jump.wav")));
        assert_eq!(audio.len(), 1);
    }

    #[test]
    fn nested_paths_and_replacement() {
        let mut audio = AudioAssets::new();
        audio.insert("theme", "music/a.ogg");
        audio.insert("theme", "music/b.ogg");
        assert_eq!(audio.get("theme"), Some(Path::new("assets/music/b.ogg")));
        assert_eq!(audio.iter().count(), 1);
        assert!(audio.get("missing").is_none());
    }
}
