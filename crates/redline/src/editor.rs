//! Editor buffer seam.

/// The message editor's text buffer, as exposed by the host.
///
/// Both operations act on the whole buffer: [`EditorBuffer::text`] returns
/// the full contents and [`EditorBuffer::set_text`] replaces them outright.
/// There is no diffing, no partial replacement, and no undo integration;
/// whatever the host's own undo stack does with a full overwrite is the
/// host's business.
pub trait EditorBuffer {
    /// Returns the full contents of the buffer.
    fn text(&self) -> String;

    /// Replaces the full contents of the buffer.
    fn set_text(&mut self, text: &str);
}
