use crate::api::AnswerClient;
use crate::transcript::{Transcript, exchange};
use dioxus::prelude::*;
use std::sync::Arc;

/// Shared chat state handed to every view through the context API.
///
/// One user action maps to either a no-op or an optimistic render, one
/// request, and one terminal render.
#[derive(Clone)]
pub struct ChatController {
    transcript: Signal<Transcript>,
    input: Signal<String>,
    client: Arc<dyn AnswerClient>,
}

impl ChatController {
    pub fn transcript(&self) -> Signal<Transcript> {
        self.transcript
    }

    pub fn input(&self) -> Signal<String> {
        self.input
    }

    pub fn client(&self) -> Arc<dyn AnswerClient> {
        Arc::clone(&self.client)
    }

    pub fn send_question(&self, question: String) {
        let mut transcript = self.transcript;
        let Some(pending) = transcript.with_mut(|t| t.begin(&question)) else {
            return;
        };
        let mut input = self.input;
        input.set(String::new());

        let client = self.client();
        tracing::debug!(id = pending.id, "question sent");
        spawn(async move {
            let outcome = exchange(client.as_ref(), &pending.question).await;
            transcript.with_mut(|t| t.resolve(pending.id, outcome));
        });
    }
}

pub fn use_chat_controller(client: impl FnOnce() -> Arc<dyn AnswerClient>) -> ChatController {
    let transcript = use_signal(Transcript::with_welcome);
    let input = use_signal(String::new);
    use_context_provider(|| ChatController {
        transcript,
        input,
        client: client(),
    })
}

pub fn use_chat() -> ChatController {
    use_context::<ChatController>()
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::api::ChatResult;
    use crate::types::{BotAnswer, FaqItem};
    use async_trait::async_trait;
    use dioxus::dioxus_core::{ElementId, Event, Mutation, NoOpMutations, ScopeId, VirtualDom};
    use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};
    use std::any::Any;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::{Mutex, Once};
    use std::time::Duration;

    /// Answers every question with `re: <question>` and keeps the questions it was asked.
    #[derive(Default)]
    pub(crate) struct RecordingClient {
        asked: Mutex<Vec<String>>,
    }

    impl RecordingClient {
        pub(crate) fn asked(&self) -> Vec<String> {
            self.asked.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AnswerClient for RecordingClient {
        async fn ask(&self, question: &str) -> ChatResult<BotAnswer> {
            self.asked.lock().unwrap().push(question.to_string());
            Ok(BotAnswer {
                answer: Some(format!("re: {question}")),
                ..Default::default()
            })
        }

        async fn fetch_faqs(&self) -> ChatResult<Vec<FaqItem>> {
            Ok(Vec::new())
        }
    }

    #[derive(Clone)]
    struct Fixture {
        client: Arc<RecordingClient>,
        body: fn() -> Element,
        controller: Rc<RefCell<Option<ChatController>>>,
    }

    #[component]
    fn FixtureRoot() -> Element {
        let fixture = use_context::<Fixture>();
        let client: Arc<dyn AnswerClient> = fixture.client.clone();
        let chat = use_chat_controller(move || client);
        fixture
            .controller
            .borrow_mut()
            .get_or_insert_with(|| chat.clone());

        let pending = chat.transcript().read().pending_count();
        let input = chat.input();
        rsx! {
            div { id: "status", "{pending} pending, draft {input}" }
            {(fixture.body)()}
        }
    }

    /// A rendered dom with a [`ChatController`] over a [`RecordingClient`].
    pub(crate) struct Harness {
        pub(crate) dom: VirtualDom,
        pub(crate) client: Arc<RecordingClient>,
        controller: Rc<RefCell<Option<ChatController>>>,
        clickable: Vec<ElementId>,
    }

    impl Harness {
        /// Renders `body` below the controller.
        pub(crate) fn new(body: fn() -> Element) -> Self {
            static CONVERTER: Once = Once::new();
            CONVERTER.call_once(|| {
                dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));
            });

            let client = Arc::new(RecordingClient::default());
            let controller = Rc::new(RefCell::new(None));
            let fixture = Fixture {
                client: Arc::clone(&client),
                body,
                controller: Rc::clone(&controller),
            };
            let mut dom = VirtualDom::new(FixtureRoot).with_root_context(fixture);
            let clickable = dom
                .rebuild_to_vec()
                .edits
                .into_iter()
                .filter_map(|edit| match edit {
                    Mutation::NewEventListener { name, id } if name == "click" => Some(id),
                    _ => None,
                })
                .collect();
            Self {
                dom,
                client,
                controller,
                clickable,
            }
        }

        /// Elements that registered a click listener on first render, in document order.
        pub(crate) fn clickable(&self) -> &[ElementId] {
            &self.clickable
        }

        /// Runs `f` against the controller inside the app scope.
        pub(crate) fn with_chat<T>(&self, f: impl FnOnce(&ChatController) -> T) -> T {
            let chat = self
                .controller
                .borrow()
                .clone()
                .expect("fixture installs a controller on first render");
            self.dom.in_runtime(|| ScopeId::APP.in_runtime(|| f(&chat)))
        }

        pub(crate) fn click(&mut self, id: ElementId) {
            let data = PlatformEventData::new(Box::new(SerializedMouseData::default()));
            let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
            self.dom.runtime().handle_event("click", event, id);
        }

        /// Polls spawned tasks and re-renders until the dom stays idle.
        pub(crate) async fn settle(&mut self) {
            while tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work())
                .await
                .is_ok()
            {
                self.dom.render_immediate(&mut NoOpMutations);
            }
        }
    }
}
