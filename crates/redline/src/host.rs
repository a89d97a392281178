//! Host window seam.
//!
//! The composition window, its toolbar, and its editor belong to the host
//! application. The plugin only needs three capabilities from it: insert a
//! toolbar button, remove it again, and reach the active editor buffer. Each
//! capability is allowed to be absent - a window without a toolbar simply
//! never grows a button, and a window whose editor is not a plain text
//! widget is left alone.

use crate::editor::EditorBuffer;

/// Opaque handle to a toolbar control the plugin added.
///
/// The host assigns the value; the plugin only stores it between
/// [`HostWindow::insert_toolbar_button`] and
/// [`HostWindow::remove_toolbar_button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonHandle(u64);

impl ButtonHandle {
    /// Creates a handle from a host-assigned value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the host-assigned value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A host-provided composition window.
pub trait HostWindow {
    /// Appends one actionable control to the window's toolbar.
    ///
    /// Returns `None` when the window exposes no toolbar; the caller treats
    /// that as a silent no-op.
    fn insert_toolbar_button(&mut self, label: &str) -> Option<ButtonHandle>;

    /// Removes a previously inserted control.
    ///
    /// Handles the host does not recognize are ignored.
    fn remove_toolbar_button(&mut self, handle: ButtonHandle);

    /// Returns the active message editor's buffer.
    ///
    /// Returns `None` when the active editor is not of the expected widget
    /// kind; reads and writes both degrade to no-ops in that case.
    fn editor(&mut self) -> Option<&mut dyn EditorBuffer>;
}
