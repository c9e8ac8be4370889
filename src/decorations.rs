//! Single-active-error decoration management.
//!
//! The simulator reports at most one error site at a time, and the editor
//! mirrors that: before a new error line is highlighted, every decoration
//! carrying the reserved error class is removed from the host, whoever put
//! it there. The manager therefore never accumulates markers, and a stale
//! tracked state cannot leak extra highlights.

use tracing::debug;

use crate::host::{Decoration, HostEditor, HostError};

/// Owns the single active error marker for one editor session.
#[derive(Debug)]
pub struct ErrorDecorationManager {
    class_name: String,
    glyph_class_name: String,
    active_line: Option<u32>,
}

impl ErrorDecorationManager {
    pub fn new(class_name: impl Into<String>, glyph_class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            glyph_class_name: glyph_class_name.into(),
            active_line: None,
        }
    }

    /// Highlight `line` as the error site, replacing any previous marker.
    ///
    /// The reported `column` is accepted for parity with the simulator's
    /// error shape but the decoration always spans the whole line.
    pub fn show_error(
        &mut self,
        host: &mut dyn HostEditor,
        line: u32,
        column: u32,
    ) -> Result<(), HostError> {
        debug!(line, column, "highlighting error line");
        self.clear_error(host)?;
        host.add_decoration(Decoration {
            line,
            whole_line: true,
            class_name: self.class_name.clone(),
            glyph_class_name: Some(self.glyph_class_name.clone()),
        })?;
        self.active_line = Some(line);
        Ok(())
    }

    /// Remove every error-class decoration. Idempotent when none exist.
    pub fn clear_error(&mut self, host: &mut dyn HostEditor) -> Result<(), HostError> {
        let stale = host.decorations_with_class(&self.class_name)?;
        if !stale.is_empty() {
            debug!(count = stale.len(), "removing stale error decorations");
        }
        host.remove_decorations(&stale)?;
        self.active_line = None;
        Ok(())
    }

    /// Line of the currently shown error, if any.
    pub fn active_line(&self) -> Option<u32> {
        self.active_line
    }
}
