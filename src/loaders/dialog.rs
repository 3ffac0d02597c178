use std::path::PathBuf;

use crate::scene::ModelSource;

/// Blocks on a native file-open dialog restricted to STL files
pub fn pick_model_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select STL file")
        .add_filter("STL files", &["stl"])
        .pick_file()
}

/// Turns the dialog result into the source the viewer will render
///
/// A cancelled dialog or a path that does not exist falls back to the room.
pub fn resolve_model_source(selection: Option<PathBuf>) -> ModelSource {
    match selection {
        Some(path) if path.exists() => {
            log::info!("Selected model: {:?}", path);
            ModelSource::Mesh(path)
        }
        Some(path) => {
            log::warn!("Selected path {:?} does not exist", path);
            log::info!("No STL selected. Using fallback cube room.");
            ModelSource::FallbackRoom
        }
        None => {
            log::info!("No STL selected. Using fallback cube room.");
            ModelSource::FallbackRoom
        }
    }
}

/// Prompt the user and resolve the selection in one step
pub fn choose_model_source() -> ModelSource {
    resolve_model_source(pick_model_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_dialog_uses_fallback() {
        assert_eq!(resolve_model_source(None), ModelSource::FallbackRoom);
    }

    #[test]
    fn test_missing_path_uses_fallback() {
        let path = PathBuf::from("/nonexistent/definitely/missing.stl");
        assert_eq!(resolve_model_source(Some(path)), ModelSource::FallbackRoom);
    }

    #[test]
    fn test_existing_path_is_kept() {
        let path = std::env::temp_dir().join("stl_viewer_dialog_test.stl");
        std::fs::write(&path, b"solid\nendsolid\n").unwrap();

        assert_eq!(
            resolve_model_source(Some(path.clone())),
            ModelSource::Mesh(path.clone())
        );

        std::fs::remove_file(path).ok();
    }
}
