use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::app::{App, Model};
use crate::editor::{EditorState, LineBuffer};

/// Build the initial editor state for `path`.
///
/// No path, or a path that does not exist yet, gives an empty buffer.
pub(super) fn load_editor_state(path: Option<&Path>) -> Result<EditorState> {
    let Some(path) = path else {
        return Ok(EditorState::new());
    };
    if path.is_dir() {
        bail!("{} is a directory", path.display());
    }
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "new file");
            return Ok(EditorState::new());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to open {}", path.display()));
        }
    };
    let buffer = LineBuffer::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = buffer.len(), "loaded");
    Ok(EditorState::from_buffer(buffer))
}

/// Write `buffer` to `path`, rows joined with line feeds.
pub(super) fn write_buffer(path: &Path, buffer: &LineBuffer) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    buffer
        .write_to(&mut writer)
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = buffer.len(), "saved");
    Ok(())
}

impl App {
    /// Side effects run once the loop has ended and the terminal is back.
    pub(super) fn finish(&self, model: &Model) -> Result<()> {
        if !self.write_on_quit {
            return Ok(());
        }
        match &model.file_path {
            Some(path) if model.modified => write_buffer(path, model.editor.buffer()),
            Some(_) => {
                tracing::debug!("buffer unchanged, nothing to write");
                Ok(())
            }
            None => {
                tracing::warn!("no file name, buffer discarded");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Message, update};
    use crate::editor::Cursor;
    use crate::input::Command;
    use tempfile::tempdir;

    #[test]
    fn test_load_without_path_is_empty() {
        let state = load_editor_state(None).unwrap();
        assert_eq!(state, EditorState::new());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let state = load_editor_state(Some(dir.path().join("new.txt").as_path())).unwrap();
        assert_eq!(state, EditorState::new());
    }

    #[test]
    fn test_load_directory_fails() {
        let dir = tempdir().unwrap();
        let err = load_editor_state(Some(dir.path())).unwrap_err();
        assert!(err.to_string().contains("is a directory"));
    }

    #[test]
    fn test_load_splits_rows_and_starts_at_origin() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "one\n\ttwo\n").unwrap();

        let state = load_editor_state(Some(path.as_path())).unwrap();
        assert_eq!(state.buffer().len(), 3);
        assert_eq!(state.buffer().row(1), Some(&b"\ttwo"[..]));
        assert_eq!(state.cursor(), Cursor::new());
    }

    #[test]
    fn test_write_round_trips_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let original = b"a\r\nb\x00c\n\n".to_vec();
        write_buffer(&path, &LineBuffer::from_bytes(&original)).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), original);
    }

    fn edited_model(path: &Path) -> Model {
        let editor = load_editor_state(Some(path)).unwrap();
        let model = Model::new(editor, Some(path.to_path_buf()), (80, 24));
        update(model, Message::Edit(Command::Write(b'!')))
    }

    #[test]
    fn test_finish_writes_modified_buffer_when_enabled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "abc").unwrap();

        let model = edited_model(&path);
        App::new(Some(path.clone()))
            .with_write_on_quit(true)
            .finish(&model)
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "!abc");
    }

    #[test]
    fn test_finish_leaves_file_alone_by_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "abc").unwrap();

        let model = edited_model(&path);
        App::new(Some(path.clone())).finish(&model).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "abc");
    }

    #[test]
    fn test_finish_skips_unmodified_buffer() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let model = Model::new(EditorState::new(), Some(path.clone()), (80, 24));
        App::new(Some(path.clone()))
            .with_write_on_quit(true)
            .finish(&model)
            .unwrap();
        assert!(!path.exists());
    }
}
