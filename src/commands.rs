//! The keybinding command layer: conditional export-on-save and
//! comment-the-selection.
//!
//! Both commands run synchronously inside a host key-chord callback and
//! read all editor state through the [`HostEditor`] capability trait. The
//! only state the layer itself owns is the snapshot digest of the last
//! exported buffer, used to suppress duplicate downloads on repeated save.

use parking_lot::Mutex;
use tracing::debug;

use crate::host::{HostEditor, HostError, Selection};

/// What a save invocation did, so the dedup is directly observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Buffer content changed since the last export; a download was emitted.
    Downloaded,
    /// Content digest matched the snapshot (or there was no buffer); no-op.
    Unchanged,
}

/// Command layer for one editor session.
#[derive(Debug)]
pub struct CommandLayer {
    download_file_name: String,
    comment_prefix: String,
    /// Digest of the last-downloaded buffer. Updated only when a download
    /// is actually triggered, never on mere keystrokes.
    snapshot: Mutex<Option<blake3::Hash>>,
}

impl CommandLayer {
    pub fn new(download_file_name: impl Into<String>, comment_prefix: impl Into<String>) -> Self {
        Self {
            download_file_name: download_file_name.into(),
            comment_prefix: comment_prefix.into(),
            snapshot: Mutex::new(None),
        }
    }

    /// Export the buffer as a downloadable file unless its content digest
    /// matches the last export. A host without a buffer is a no-op, not an
    /// error.
    pub fn save(&self, host: &mut dyn HostEditor) -> Result<SaveOutcome, HostError> {
        let Some(content) = host.buffer() else {
            debug!("save requested with no active buffer");
            return Ok(SaveOutcome::Unchanged);
        };

        let digest = blake3::hash(content.as_bytes());
        let mut snapshot = self.snapshot.lock();
        if *snapshot == Some(digest) {
            debug!("buffer unchanged since last export, skipping download");
            return Ok(SaveOutcome::Unchanged);
        }

        host.save_artifact(&self.download_file_name, &content);
        *snapshot = Some(digest);
        debug!(file = %self.download_file_name, "buffer exported");
        Ok(SaveOutcome::Downloaded)
    }

    /// Prefix every line of the current selection with the comment marker
    /// and replace the selection in one atomic edit.
    ///
    /// An empty selection (caret only) widens to the caret's whole line.
    /// Existing markers are not detected: each invocation adds one more
    /// prefix layer.
    pub fn toggle_comment(&self, host: &mut dyn HostEditor) -> Result<(), HostError> {
        let Some(selection) = host.selection() else {
            debug!("comment requested with no active buffer");
            return Ok(());
        };

        let range = if selection.is_empty() {
            let line = selection.start_line;
            Selection::new(line, 1, line, host.line_max_column(line)?)
        } else {
            selection
        };

        let text = host.read_range(&range)?;
        // split('\n'), not lines(): a selection ending in a newline carries
        // an empty final segment which also receives a marker, matching the
        // host's own range arithmetic.
        let commented = text
            .split('\n')
            .map(|line| format!("{}{}", self.comment_prefix, line))
            .collect::<Vec<_>>()
            .join("\n");

        debug!(
            start = range.start_line,
            end = range.end_line,
            "commenting selection"
        );
        host.replace_range(&range, &commented)
    }
}
