//! Plugin activation and the proofread click handlers.
//!
//! Control flow is strictly linear and only ever triggered by a click the
//! host dispatches. One click means at most one credential lookup, one HTTP
//! request, and one buffer overwrite; there is no background work, no queue,
//! and no retry. The handlers are `async fn`s so hosts with asynchronous
//! event dispatch are not forced to block their main loop, but nothing here
//! spawns tasks - a synchronous host can simply block on the returned
//! future.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use log::{debug, warn};
use secrecy::SecretString;

use redline_client::{OpenAIProofreader, Proofreader, authinfo};
use redline_common::{ProofreadConfig, PromptLibrary, paths};

use crate::host::{ButtonHandle, HostWindow};

/// Label of the injected toolbar button.
pub const BUTTON_LABEL: &str = "AI Proofread";

/// The proofreading plugin.
///
/// Holds the proofreading service, the authinfo lookup parameters, and the
/// optional prompt library. The only state that changes after construction
/// is the attached/detached toolbar handle; in particular the API key is
/// never stored here - it is re-read from the credentials file on every
/// click and dropped as soon as the request completes.
pub struct ProofreadPlugin {
    proofreader: Arc<dyn Proofreader>,
    machine: String,
    authinfo_path: Option<PathBuf>,
    prompts: PromptLibrary,
    button: Option<ButtonHandle>,
}

impl std::fmt::Debug for ProofreadPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProofreadPlugin")
            .field("machine", &self.machine)
            .field("authinfo_path", &self.authinfo_path)
            .field("prompts", &self.prompts)
            .field("button", &self.button)
            .finish_non_exhaustive()
    }
}

impl ProofreadPlugin {
    /// Creates a plugin backed by an [`OpenAIProofreader`] for the given
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be constructed (e.g. an invalid
    /// base URL).
    pub fn from_config(config: ProofreadConfig) -> Result<Self> {
        let machine = config.machine.clone();
        let proofreader = Arc::new(OpenAIProofreader::new(config)?);
        Ok(Self::with_proofreader(proofreader, machine))
    }

    /// Creates a plugin with a caller-supplied proofreading service.
    pub fn with_proofreader(
        proofreader: Arc<dyn Proofreader>,
        machine: impl Into<String>,
    ) -> Self {
        Self {
            proofreader,
            machine: machine.into(),
            authinfo_path: paths::authinfo_path(),
            prompts: PromptLibrary::default(),
            button: None,
        }
    }

    /// Overrides the credentials file location (`~/.authinfo` by default).
    #[must_use]
    pub fn with_authinfo_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.authinfo_path = Some(path.into());
        self
    }

    /// Configures a named prompt library for [`Self::on_prompt_clicked`].
    #[must_use]
    pub fn with_prompts(mut self, prompts: PromptLibrary) -> Self {
        self.prompts = prompts;
        self
    }

    /// Returns whether the toolbar button is currently attached.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.button.is_some()
    }

    /// Returns the configured prompt names, in library order.
    pub fn prompt_names(&self) -> impl Iterator<Item = &str> {
        self.prompts.names()
    }

    /// Activation hook: appends the proofread button to the window toolbar.
    ///
    /// If the host exposes no toolbar, or the plugin is already attached,
    /// this is a no-op.
    pub fn attach(&mut self, window: &mut dyn HostWindow) {
        if self.button.is_some() {
            debug!("Proofread button already attached");
            return;
        }
        self.button = window.insert_toolbar_button(BUTTON_LABEL);
        if self.button.is_none() {
            debug!("Host window exposes no toolbar, skipping button");
        }
    }

    /// Deactivation hook: removes the button if it was added.
    pub fn detach(&mut self, window: &mut dyn HostWindow) {
        if let Some(handle) = self.button.take() {
            window.remove_toolbar_button(handle);
        }
    }

    /// Click handler for the default proofread action.
    ///
    /// Reads the buffer, loads the key, sends the request, writes the
    /// revision back. Every failure degrades to "no change"; the buffer is
    /// only touched on success.
    pub async fn on_proofread_clicked(&self, window: &mut dyn HostWindow) {
        let Some(text) = Self::read_buffer(window) else {
            return;
        };
        let Some(api_key) = self.load_api_key() else {
            return;
        };

        match self.proofreader.proofread(&api_key, &text).await {
            Ok(revised) => Self::write_buffer(window, &revised),
            Err(e) => warn!("Proofreading failed, leaving message unchanged: {e:#}"),
        }
    }

    /// Click handler for a named prompt from the library.
    ///
    /// The prompt text is sent as a system message ahead of the unmodified
    /// buffer text. An unknown prompt name is a logged no-op.
    pub async fn on_prompt_clicked(&self, window: &mut dyn HostWindow, prompt_name: &str) {
        let Some(system_prompt) = self.prompts.find(prompt_name) else {
            warn!("No prompt named {prompt_name:?} configured");
            return;
        };

        let Some(text) = Self::read_buffer(window) else {
            return;
        };
        let Some(api_key) = self.load_api_key() else {
            return;
        };

        match self
            .proofreader
            .proofread_with_prompt(&api_key, system_prompt, &text)
            .await
        {
            Ok(revised) => Self::write_buffer(window, &revised),
            Err(e) => warn!("Proofreading failed, leaving message unchanged: {e:#}"),
        }
    }

    fn read_buffer(window: &mut dyn HostWindow) -> Option<String> {
        let Some(editor) = window.editor() else {
            debug!("Active editor is not a text editor, ignoring click");
            return None;
        };
        let text = editor.text();
        if text.is_empty() {
            debug!("Message buffer is empty, nothing to proofread");
            return None;
        }
        Some(text)
    }

    fn write_buffer(window: &mut dyn HostWindow, revised: &str) {
        if let Some(editor) = window.editor() {
            editor.set_text(revised);
        } else {
            debug!("Editor disappeared before write-back, dropping revision");
        }
    }

    fn load_api_key(&self) -> Option<SecretString> {
        let Some(path) = self.authinfo_path.as_deref() else {
            debug!("No home directory, cannot locate authinfo file");
            return None;
        };
        let key = authinfo::lookup_api_key(path, &self.machine);
        if key.is_none() {
            debug!("No API key for {} in {}", self.machine, path.display());
        }
        key
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::editor::EditorBuffer;

    use super::*;

    #[derive(Default)]
    struct FakeEditor {
        buffer: String,
    }

    impl EditorBuffer for FakeEditor {
        fn text(&self) -> String {
            self.buffer.clone()
        }

        fn set_text(&mut self, text: &str) {
            self.buffer = text.to_string();
        }
    }

    struct FakeWindow {
        has_toolbar: bool,
        buttons: Vec<ButtonHandle>,
        next_handle: u64,
        editor: Option<FakeEditor>,
    }

    impl FakeWindow {
        fn new(buffer: &str) -> Self {
            Self {
                has_toolbar: true,
                buttons: Vec::new(),
                next_handle: 1,
                editor: Some(FakeEditor {
                    buffer: buffer.to_string(),
                }),
            }
        }

        fn without_toolbar(mut self) -> Self {
            self.has_toolbar = false;
            self
        }

        fn without_editor(mut self) -> Self {
            self.editor = None;
            self
        }

        fn buffer(&self) -> &str {
            self.editor.as_ref().map_or("", |e| e.buffer.as_str())
        }
    }

    impl HostWindow for FakeWindow {
        fn insert_toolbar_button(&mut self, _label: &str) -> Option<ButtonHandle> {
            if !self.has_toolbar {
                return None;
            }
            let handle = ButtonHandle::new(self.next_handle);
            self.next_handle += 1;
            self.buttons.push(handle);
            Some(handle)
        }

        fn remove_toolbar_button(&mut self, handle: ButtonHandle) {
            self.buttons.retain(|h| *h != handle);
        }

        fn editor(&mut self) -> Option<&mut dyn EditorBuffer> {
            self.editor
                .as_mut()
                .map(|e| e as &mut dyn EditorBuffer)
        }
    }

    /// Records calls and returns a canned revision.
    struct FakeProofreader {
        calls: AtomicUsize,
        response: String,
    }

    impl FakeProofreader {
        fn returning(response: &str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                response: response.to_string(),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Proofreader for FakeProofreader {
        async fn proofread(&self, _api_key: &SecretString, _text: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }

        async fn proofread_with_prompt(
            &self,
            _api_key: &SecretString,
            _system_prompt: &str,
            _text: &str,
        ) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    fn authinfo_file(token: &str) -> tempfile::NamedTempFile {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "machine api.openai.com login apikey password {token}").unwrap();
        file
    }

    fn plugin_with(
        proofreader: Arc<dyn Proofreader>,
        authinfo: &tempfile::NamedTempFile,
    ) -> ProofreadPlugin {
        ProofreadPlugin::with_proofreader(proofreader, "api.openai.com")
            .with_authinfo_path(authinfo.path())
    }

    #[test]
    fn test_attach_and_detach() {
        let authinfo = authinfo_file("sk-test");
        let mut plugin = plugin_with(FakeProofreader::returning("x"), &authinfo);
        let mut window = FakeWindow::new("");

        assert!(!plugin.is_attached());
        plugin.attach(&mut window);
        assert!(plugin.is_attached());
        assert_eq!(window.buttons.len(), 1);

        // A second attach must not add a second button.
        plugin.attach(&mut window);
        assert_eq!(window.buttons.len(), 1);

        plugin.detach(&mut window);
        assert!(!plugin.is_attached());
        assert!(window.buttons.is_empty());

        // Detach is idempotent.
        plugin.detach(&mut window);
        assert!(window.buttons.is_empty());
    }

    #[test]
    fn test_attach_without_toolbar_is_noop() {
        let authinfo = authinfo_file("sk-test");
        let mut plugin = plugin_with(FakeProofreader::returning("x"), &authinfo);
        let mut window = FakeWindow::new("").without_toolbar();

        plugin.attach(&mut window);
        assert!(!plugin.is_attached());
        assert!(window.buttons.is_empty());
    }

    #[tokio::test]
    async fn test_click_replaces_buffer() {
        let authinfo = authinfo_file("sk-test");
        let proofreader = FakeProofreader::returning("The cat sat.");
        let plugin = plugin_with(proofreader.clone(), &authinfo);
        let mut window = FakeWindow::new("Teh cat sat.");

        plugin.on_proofread_clicked(&mut window).await;

        assert_eq!(window.buffer(), "The cat sat.");
        assert_eq!(proofreader.call_count(), 1);
    }

    #[tokio::test]
    async fn test_click_with_wrong_editor_kind_is_noop() {
        let authinfo = authinfo_file("sk-test");
        let proofreader = FakeProofreader::returning("x");
        let plugin = plugin_with(proofreader.clone(), &authinfo);
        let mut window = FakeWindow::new("hello").without_editor();

        plugin.on_proofread_clicked(&mut window).await;

        assert_eq!(proofreader.call_count(), 0);
    }

    #[tokio::test]
    async fn test_click_with_empty_buffer_is_noop() {
        let authinfo = authinfo_file("sk-test");
        let proofreader = FakeProofreader::returning("x");
        let plugin = plugin_with(proofreader.clone(), &authinfo);
        let mut window = FakeWindow::new("");

        plugin.on_proofread_clicked(&mut window).await;

        assert_eq!(proofreader.call_count(), 0);
    }

    #[tokio::test]
    async fn test_click_without_credentials_makes_no_request() {
        let proofreader = FakeProofreader::returning("x");
        let plugin = ProofreadPlugin::with_proofreader(proofreader.clone(), "api.openai.com")
            .with_authinfo_path("/nonexistent/.authinfo");
        let mut window = FakeWindow::new("Hello");

        plugin.on_proofread_clicked(&mut window).await;

        assert_eq!(window.buffer(), "Hello");
        assert_eq!(proofreader.call_count(), 0);
    }

    #[tokio::test]
    async fn test_prompt_click_uses_library() {
        let authinfo = authinfo_file("sk-test");
        let proofreader = FakeProofreader::returning("Formal text.");
        let library: PromptLibrary = [redline_common::Prompt {
            name: "formal".to_string(),
            prompt: "Rewrite formally.".to_string(),
        }]
        .into_iter()
        .collect();
        let plugin = plugin_with(proofreader.clone(), &authinfo).with_prompts(library);
        let mut window = FakeWindow::new("hey");

        plugin.on_prompt_clicked(&mut window, "formal").await;

        assert_eq!(window.buffer(), "Formal text.");
        assert_eq!(proofreader.call_count(), 1);
        assert_eq!(plugin.prompt_names().collect::<Vec<_>>(), vec!["formal"]);
    }

    #[tokio::test]
    async fn test_unknown_prompt_name_is_noop() {
        let authinfo = authinfo_file("sk-test");
        let proofreader = FakeProofreader::returning("x");
        let plugin = plugin_with(proofreader.clone(), &authinfo);
        let mut window = FakeWindow::new("hey");

        plugin.on_prompt_clicked(&mut window, "missing").await;

        assert_eq!(window.buffer(), "hey");
        assert_eq!(proofreader.call_count(), 0);
    }
}
