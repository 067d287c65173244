use std::time::Duration;
use thiserror::Error;

pub const COPY_REVERT_DELAY: Duration = Duration::from_millis(1200);

/// Copy button state: `Idle -> Copied -> Idle` once [`COPY_REVERT_DELAY`] elapses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyState {
    #[default]
    Idle,
    Copied,
}

impl CopyState {
    pub fn glyph(self) -> &'static str {
        match self {
            CopyState::Idle => "📋",
            CopyState::Copied => "✅",
        }
    }

    /// State after a clipboard write attempt. Failures leave the button untouched.
    pub fn after_write(self, succeeded: bool) -> Self {
        if succeeded { CopyState::Copied } else { self }
    }

    pub fn after_delay(self) -> Self {
        CopyState::Idle
    }
}

#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(String);

#[cfg(not(target_arch = "wasm32"))]
pub async fn write_clipboard(text: String) -> Result<(), ClipboardError> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
pub async fn write_clipboard(text: String) -> Result<(), ClipboardError> {
    let literal = serde_json::to_string(&text).map_err(|e| ClipboardError(e.to_string()))?;
    let script = format!(
        "try {{ await navigator.clipboard.writeText({literal}); return true; }} catch (e) {{ return false; }}"
    );
    let written = dioxus::document::eval(&script)
        .await
        .map_err(|e| ClipboardError(e.to_string()))?;
    if written.as_bool().unwrap_or(false) {
        Ok(())
    } else {
        Err(ClipboardError("navigator.clipboard rejected the write".into()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn wait_for_revert() {
    tokio::time::sleep(COPY_REVERT_DELAY).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn wait_for_revert() {
    let script = format!(
        "await new Promise((resolve) => setTimeout(resolve, {})); return true;",
        COPY_REVERT_DELAY.as_millis()
    );
    if let Err(err) = dioxus::document::eval(&script).await {
        tracing::debug!("revert timer failed: {err}");
    }
}
