use crate::transcript::{WELCOME_PROMPTS, WELCOME_SUBTITLE, WELCOME_TITLE};
use crate::views::answer::SuggestionChip;
use dioxus::prelude::*;

#[component]
pub fn WelcomeCard() -> Element {
    rsx! {
        div { class: "welcome-card fade-in",
            div { class: "welcome-title", "{WELCOME_TITLE}" }
            div { class: "welcome-sub", "{WELCOME_SUBTITLE}" }
            div { class: "suggestions",
                for prompt in WELCOME_PROMPTS {
                    SuggestionChip { question: prompt.to_string(), class: "suggestion-chip" }
                }
            }
        }
    }
}
