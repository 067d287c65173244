use crate::controller::use_chat;
use crate::transcript::quick_faq_prompts;
use crate::views::answer::SuggestionChip;
use dioxus::prelude::*;

/// Quick-FAQ panel, fetched once. A failed fetch leaves the panel empty.
#[component]
pub fn QuickFaqs() -> Element {
    let chat = use_chat();
    let prompts = use_resource(move || {
        let client = chat.client();
        async move {
            match client.fetch_faqs().await {
                Ok(items) => quick_faq_prompts(items),
                Err(err) => {
                    tracing::debug!("quick faqs unavailable: {err}");
                    Vec::new()
                }
            }
        }
    });

    let prompts = prompts.read().as_ref().cloned().unwrap_or_default();
    rsx! {
        div { id: "quick-faqs", class: "quick-faqs",
            for question in prompts {
                SuggestionChip { question, class: "chip" }
            }
        }
    }
}
