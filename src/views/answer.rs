use crate::controller::use_chat;
use crate::copy::{CopyState, wait_for_revert, write_clipboard};
use crate::transcript::AnswerView;
use dioxus::prelude::*;

#[component]
pub fn AnswerBubble(view: AnswerView) -> Element {
    rsx! {
        div { class: "bot-wrap fade-in",
            div { class: "bot-avatar", "D" }
            div {
                div { class: "copy-wrap",
                    div { class: "bubble bot-bubble", "{view.text}" }
                    CopyButton { text: view.text.clone() }
                }
                if !view.suggestions.is_empty() {
                    div { class: "suggestions",
                        for question in view.suggestions.iter().cloned() {
                            SuggestionChip { question, class: "suggestion-chip" }
                        }
                    }
                }
                if let Some(caption) = view.caption.as_ref() {
                    div { class: "meta", "{caption}" }
                }
            }
        }
    }
}

/// A chip that sends its own text as a new question.
#[component]
pub fn SuggestionChip(question: String, class: &'static str) -> Element {
    let chat = use_chat();
    let label = question.clone();
    rsx! {
        div {
            class: class,
            onclick: move |_| chat.send_question(question.clone()),
            "{label}"
        }
    }
}

#[component]
fn CopyButton(text: String) -> Element {
    let mut state = use_signal(CopyState::default);

    let on_copy = move |_| {
        let payload = text.clone();
        spawn(async move {
            match write_clipboard(payload).await {
                Ok(()) => {
                    state.set(state().after_write(true));
                    wait_for_revert().await;
                    state.set(state().after_delay());
                }
                Err(err) => tracing::warn!("copy failed: {err}"),
            }
        });
    };

    rsx! {
        button {
            class: "icon-btn copy-btn",
            r#type: "button",
            title: "Copy answer",
            onclick: on_copy,
            "{state().glyph()}"
        }
    }
}
