//! Copy-to-clipboard toast.

use dioxus::prelude::*;
use portfolio_core::toast::{ToastPhase, ToastState, FADE_FOR, VISIBLE_FOR};
use portfolio_core::{PortfolioError, Result};

use super::icons;
use crate::context::use_toast;

/// Write `text` to the system clipboard.
fn copy_to_clipboard(text: &str) -> Result<()> {
    // arboard for cross-platform clipboard access
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| PortfolioError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| PortfolioError::Clipboard(e.to_string()))
}

/// Copy `address` and show the toast, replacing any toast already shown.
pub fn copy_email(mut toast: Signal<ToastState>, address: &'static str) {
    match copy_to_clipboard(address) {
        Ok(()) => {
            let generation = toast.write().show();
            tracing::info!(generation, "Copied email to clipboard");

            spawn(async move {
                tokio::time::sleep(VISIBLE_FOR).await;
                if !toast.write().begin_fade(generation) {
                    return;
                }
                tokio::time::sleep(FADE_FOR).await;
                toast.write().dismiss(generation);
            });
        }
        Err(e) => {
            tracing::error!("Failed to copy email: {}", e);
        }
    }
}

/// Floating "Email Copied to Clipboard" notice.
#[component]
pub fn CopyToast(address: &'static str) -> Element {
    let toast = use_toast();

    let class = match toast.read().phase() {
        ToastPhase::Hidden => return rsx! {},
        ToastPhase::Visible => "copy-toast glass",
        ToastPhase::Fading => "copy-toast glass fading",
    };

    rsx! {
        div { id: "copy-alert", class: "{class}",
            div { class: "toast-check", {icons::check()} }
            div {
                p { class: "toast-title", "Email Copied to Clipboard" }
                p { class: "toast-detail", "{address}" }
            }
        }
    }
}

