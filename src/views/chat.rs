use crate::controller::use_chat;
use crate::transcript::Entry;
use crate::types::{ChatMessage, Sender};
use crate::views::answer::AnswerBubble;
use crate::views::welcome::WelcomeCard;
use dioxus::events::Key;
use dioxus::prelude::*;
use std::rc::Rc;

const COMPOSER_ID: &str = "question";

/// Resets then grows the composer to its scroll height.
fn autosize_composer() {
    let script = format!(
        "const el = document.getElementById('{COMPOSER_ID}');
         if (el) {{ el.style.height = 'auto'; el.style.height = el.scrollHeight + 'px'; }}"
    );
    let _ = document::eval(&script);
}

/// Focuses the composer when `/` is pressed anywhere else on the page.
fn use_focus_shortcut(composer: Signal<Option<Rc<MountedData>>>) {
    use_hook(move || {
        spawn(async move {
            let script = format!(
                "document.addEventListener('keydown', (e) => {{
                    if (e.key === '/' && document.activeElement !== document.getElementById('{COMPOSER_ID}')) {{
                        e.preventDefault();
                        dioxus.send(true);
                    }}
                }});"
            );
            let mut listener = document::eval(&script);
            while listener.recv::<bool>().await.is_ok() {
                let target = composer.read().clone();
                if let Some(el) = target {
                    let _ = el.set_focus(true).await;
                }
            }
        });
    });
}

#[component]
pub fn ChatView() -> Element {
    let chat = use_chat();
    let transcript = chat.transcript();
    let entries: Vec<_> = transcript
        .read()
        .keyed_entries()
        .map(|(key, entry)| (key, entry.clone()))
        .collect();

    rsx! {
        div { class: "chat-wrap",
            div { id: "messages", class: "messages",
                for (key, entry) in entries {
                    TranscriptEntry { key: "{key}", entry }
                }
            }
            Composer {}
        }
    }
}

#[component]
fn TranscriptEntry(entry: Entry) -> Element {
    let scroll_into_view = move |ev: MountedEvent| async move {
        let _ = ev.data().scroll_to(ScrollBehavior::Smooth).await;
    };
    match entry {
        Entry::Welcome => rsx! { WelcomeCard {} },
        Entry::Message(message) => rsx! {
            div { onmounted: scroll_into_view,
                MessageBubble { message }
            }
        },
        Entry::Answer(view) => rsx! {
            div { onmounted: scroll_into_view,
                AnswerBubble { view }
            }
        },
        Entry::Typing(_) => rsx! {
            div { class: "message bot typing", onmounted: scroll_into_view,
                div { class: "typing",
                    span { class: "dot" }
                    span { class: "dot" }
                    span { class: "dot" }
                }
            }
        },
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    let sender = message.sender;
    rsx! {
        div { class: format_args!("message {} fade-in", sender.css_class()),
            if sender == Sender::User {
                div { class: "bubble user-bubble", "{message.text}" }
            } else {
                div { class: "avatar", "D" }
                div { class: "bubble", "{message.text}" }
            }
            div { class: "timestamp", "{message.timestamp}" }
        }
    }
}

#[component]
fn Composer() -> Element {
    let chat = use_chat();
    let mut input = chat.input();
    let mut composer = use_signal(|| Option::<Rc<MountedData>>::None);

    use_focus_shortcut(composer);
    use_effect(move || {
        input.read();
        autosize_composer();
    });

    let submit = {
        let chat = chat.clone();
        move |ev: FormEvent| {
            ev.prevent_default();
            chat.send_question(input());
        }
    };
    let on_keydown = {
        let chat = chat.clone();
        move |ev: KeyboardEvent| {
            if ev.key() == Key::Enter && !ev.modifiers().shift() {
                ev.prevent_default();
                chat.send_question(input());
            }
        }
    };

    rsx! {
        form { id: "chat-form", class: "composer", onsubmit: submit,
            textarea {
                id: COMPOSER_ID,
                rows: "1",
                placeholder: "Ask a question… (press / to focus)",
                value: "{input}",
                oninput: move |ev| input.set(ev.value()),
                onkeydown: on_keydown,
                onmounted: move |ev: MountedEvent| composer.set(Some(ev.data())),
            }
            button { class: "btn btn-primary", r#type: "submit", "Send" }
        }
    }
}
