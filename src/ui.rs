use crate::api::{AnswerClient, HttpAnswerClient};
use crate::config::AppConfig;
use crate::controller::use_chat_controller;
use crate::storage::platform_store;
use crate::theme::{ThemeStore, theme_definition};
use crate::types::ThemeMode;
use crate::views::{ChatView, QuickFaqs};
use dioxus::prelude::*;
use std::rc::Rc;
use std::sync::Arc;

const DCTM_CSS: Asset = asset!("/assets/dctm.css");

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let themes = use_context_provider(|| Rc::new(ThemeStore::new(platform_store(config.data_dir.clone()))));
    let theme = use_signal(|| themes.load());
    let api_base = config.api_base.clone();
    use_chat_controller(move || {
        tracing::info!(%api_base, "enquiry backend");
        Arc::new(HttpAnswerClient::new(&api_base)) as Arc<dyn AnswerClient>
    });

    let definition = theme_definition(theme());
    rsx! {
        ThemeStyles { theme }
        div { class: "app {definition.root_class}",
            AppHeader { theme }
            div { class: "layout",
                aside { class: "sidebar",
                    h3 { class: "section-title", "Quick FAQs" }
                    QuickFaqs {}
                }
                main { class: "main-container",
                    ChatView {}
                }
            }
        }
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: DCTM_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(theme: Signal<ThemeMode>) -> Element {
    rsx! {
        div { class: "header",
            div { class: "header-content",
                h1 { class: "header-title", "DCTM Enquiry Assistant" }
                ThemeToggle { theme }
            }
        }
    }
}

#[component]
fn ThemeToggle(theme: Signal<ThemeMode>) -> Element {
    let themes = use_context::<Rc<ThemeStore>>();
    let mut theme = theme;
    rsx! {
        button {
            id: "theme-toggle",
            class: "icon-btn",
            r#type: "button",
            title: "Toggle theme",
            onclick: move |_| {
                let next = themes.toggle(theme());
                tracing::debug!(theme = next.as_str(), "theme toggled");
                theme.set(next);
            },
            "{theme().toggle_icon()}"
        }
    }
}
