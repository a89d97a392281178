//! Runs the proofread click flow against a minimal in-memory host window.
//!
//! Reads the API key from `~/.authinfo` and sends the text given on the
//! command line to the real endpoint:
//!
//! ```sh
//! cargo run --example proofread_demo -- "Teh cat sat on teh mat."
//! ```

use redline::{ButtonHandle, EditorBuffer, HostWindow, ProofreadPlugin};
use redline_common::ProofreadConfig;

struct DemoEditor {
    buffer: String,
}

impl EditorBuffer for DemoEditor {
    fn text(&self) -> String {
        self.buffer.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
    }
}

struct DemoWindow {
    editor: DemoEditor,
}

impl HostWindow for DemoWindow {
    fn insert_toolbar_button(&mut self, label: &str) -> Option<ButtonHandle> {
        println!("[toolbar] + {label}");
        Some(ButtonHandle::new(1))
    }

    fn remove_toolbar_button(&mut self, _handle: ButtonHandle) {
        println!("[toolbar] - removed");
    }

    fn editor(&mut self) -> Option<&mut dyn EditorBuffer> {
        Some(&mut self.editor)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let text = std::env::args().nth(1).unwrap_or_else(|| {
        "Teh quick brown fox jump over the lazy dog.".to_string()
    });

    let mut plugin = ProofreadPlugin::from_config(ProofreadConfig::default())?;
    let mut window = DemoWindow {
        editor: DemoEditor { buffer: text },
    };

    plugin.attach(&mut window);
    println!("before: {}", window.editor.buffer);

    plugin.on_proofread_clicked(&mut window).await;
    println!("after:  {}", window.editor.buffer);

    plugin.detach(&mut window);
    Ok(())
}
