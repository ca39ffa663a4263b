use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::scene::{Scene, SceneLoad};

/// Writes the scene to `path` in the textual record format.
pub fn save_scene(scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, scene.write_all())
        .with_context(|| format!("failed to write scene to {}", path.display()))?;
    log::info!("saved {} shape(s) to {}", scene.len(), path.display());
    Ok(())
}

/// Reads a scene from `path`.
///
/// An unreadable file is an error, and the caller's in-memory scene is
/// unaffected — a new scene is only handed back on success. A malformed
/// record inside a readable file is reported through [`SceneLoad::error`]
/// with the valid prefix intact.
pub fn load_scene(path: impl AsRef<Path>) -> Result<SceneLoad> {
    let path = path.as_ref();
    let src = fs::read_to_string(path)
        .with_context(|| format!("failed to read scene from {}", path.display()))?;
    let load = Scene::read_all(&src);
    log::info!("loaded {} shape(s) from {}", load.scene.len(), path.display());
    Ok(load)
}

#[cfg(test)]
mod persist_tests {
    use super::*;
    use crate::shapes::{Circle, Rect};

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.txt");

        let mut scene = Scene::new();
        scene.push(Circle::new(0, 0, "red", 5).into());
        scene.push(Rect::new(10, 10, "blue", 4, 6).into());
        scene.group_top(2);

        save_scene(&scene, &path).unwrap();
        let load = load_scene(&path).unwrap();
        assert!(load.error.is_none());
        assert_eq!(load.scene, scene);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_scene(dir.path().join("absent.txt")).unwrap_err();
        assert!(err.to_string().contains("absent.txt"));
    }
}
