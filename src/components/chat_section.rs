//! Chat Section
//!
//! Assistant conversation with persisted history, voice input and read-aloud.

use leptos::ev::KeyboardEvent;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_speech::{
    create_speech_signals, speak, start_listening, stop_listening, stop_speaking, SpeechError,
};

use crate::api;
use crate::context::use_app_context;
use crate::format::{message_clock, now_timestamp};
use crate::i18n::t;
use crate::markdown::{plain_text, render_markdown};
use crate::models::{ChatRequest, Language, Message, Role};
use crate::storage;
use crate::store::{toast_error, toast_info, use_ui_store, UiStore};

fn is_greeting(content: &str) -> bool {
    Language::ALL.iter().any(|&lang| t(lang).chat.greeting == content)
}

/// Swap an untouched greeting-only history to `greeting`.
/// Returns whether anything changed.
pub fn relocalize_greeting(messages: &mut Vec<Message>, greeting: &str) -> bool {
    match messages.as_mut_slice() {
        [only] if only.role == Role::Assistant && only.content != greeting && is_greeting(&only.content) => {
            only.content = greeting.to_string();
            true
        }
        _ => false,
    }
}

/// Plain text of the newest assistant reply, if it has any words
pub fn last_assistant_text(messages: &[Message]) -> Option<String> {
    messages
        .iter()
        .rev()
        .find(|m| m.role == Role::Assistant)
        .map(|m| plain_text(&m.content))
        .filter(|text| !text.is_empty())
}

fn report_speech_error(store: &UiStore, language: Language, error: SpeechError) {
    let text = &t(language).chat;
    log::warn!("[SPEECH] {}", error);
    match error {
        SpeechError::Unsupported => toast_info(store, text.speech_unsupported, None),
        SpeechError::Browser(message) => toast_error(store, text.speech_failed, message),
    }
}

#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let clock = message.created_at.as_deref().and_then(message_clock);
    let (class, body) = match message.role {
        Role::User => (
            "message user",
            view! { <p class="message-text">{message.content}</p> }.into_any(),
        ),
        Role::Assistant => (
            "message assistant",
            view! {
                <div class="message-text markdown-body" inner_html=render_markdown(&message.content)></div>
            }.into_any(),
        ),
    };

    view! {
        <div class=class>
            {body}
            {clock.map(|time| view! { <span class="message-time">{time}</span> })}
        </div>
    }
}

#[component]
pub fn ChatSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let text = move || &t(ctx.language.get()).chat;

    let greeting = t(ctx.language.get_untracked()).chat.greeting;
    let (messages, set_messages) = signal(storage::initial_history(storage::load_history(), greeting));
    let (conversation_id, set_conversation_id) = signal(storage::load_conversation_id());
    let (input, set_input) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let speech = create_speech_signals();
    let list_ref = NodeRef::<Div>::new();

    // Greeting follows the language until the farmer writes something
    Effect::new(move |_| {
        let greeting = t(ctx.language.get()).chat.greeting;
        set_messages.maybe_update(|msgs| relocalize_greeting(msgs, greeting));
    });

    Effect::new(move |_| {
        messages.with(|msgs| {
            if msgs.iter().any(|m| m.role == Role::User) {
                storage::save_history(msgs);
            }
        });
    });

    // Keep the newest bubble in view
    Effect::new(move |_| {
        messages.track();
        loading.track();
        if let Some(list) = list_ref.get() {
            list.set_scroll_top(list.scroll_height());
        }
    });

    let send = move || {
        let message = input.get_untracked().trim().to_string();
        if message.is_empty() || loading.get_untracked() {
            return;
        }
        let language = ctx.language.get_untracked();

        set_input.set(String::new());
        set_messages.update(|msgs| msgs.push(Message::user(message.clone(), Some(now_timestamp()))));
        set_loading.set(true);

        let request = ChatRequest {
            message,
            conversation_id: conversation_id.get_untracked(),
            user_id: None,
            language: Some(language),
        };
        spawn_local(async move {
            match api::send_chat_message(&request).await {
                Ok(response) => {
                    log::debug!("[CHAT] Reply in conversation {}", response.conversation_id);
                    storage::save_conversation_id(&response.conversation_id);
                    set_conversation_id.set(Some(response.conversation_id));
                    set_messages.update(|msgs| {
                        msgs.push(Message::assistant(response.message, Some(response.created_at)))
                    });
                }
                Err(e) => {
                    log::error!("[CHAT] Failed to send message: {}", e);
                    toast_error(&store, t(language).chat.error, e);
                }
            }
            set_loading.set(false);
        });
    };

    let toggle_listening = move |_| {
        if speech.listening_read.get_untracked() {
            stop_listening(speech);
            return;
        }
        let language = ctx.language.get_untracked();
        let result = start_listening(speech, language.speech_locale(), move |transcript| {
            set_input.set(transcript);
        });
        if let Err(e) = result {
            report_speech_error(&store, language, e);
        }
    };

    let toggle_speaking = move |_| {
        if speech.speaking_read.get_untracked() {
            stop_speaking(speech);
            return;
        }
        let Some(reply) = messages.with_untracked(|msgs| last_assistant_text(msgs)) else {
            return;
        };
        let language = ctx.language.get_untracked();
        if let Err(e) = speak(speech, &reply, language.speech_locale()) {
            report_speech_error(&store, language, e);
        }
    };

    let clear_chat = move |_| {
        if speech.speaking_read.get_untracked() {
            stop_speaking(speech);
        }
        storage::clear_chat();
        set_conversation_id.set(None);
        let greeting = t(ctx.language.get_untracked()).chat.greeting;
        set_messages.set(vec![Message::assistant(greeting, None)]);
        log::info!("[CHAT] History cleared");
    };

    view! {
        <section class="card chat-section">
            <div class="card-header">
                <h2 class="card-title">"💬 " {move || text().title}</h2>
                <div class="card-actions">
                    <button
                        class=move || if speech.speaking_read.get() { "icon-btn active" } else { "icon-btn" }
                        title=move || if speech.speaking_read.get() { text().stop_speaking } else { text().speak }
                        on:click=toggle_speaking
                    >
                        {move || if speech.speaking_read.get() { "🔇" } else { "🔊" }}
                    </button>
                    <button class="icon-btn" title=move || text().clear on:click=clear_chat>
                        "🗑"
                    </button>
                </div>
            </div>

            <div class="chat-messages" node_ref=list_ref>
                {move || messages.get().into_iter().map(|message| view! { <MessageBubble message=message /> }).collect_view()}
                <Show when=move || loading.get()>
                    <div class="message assistant thinking">{move || text().thinking}</div>
                </Show>
            </div>

            <div class="chat-input-row">
                <button
                    class=move || if speech.listening_read.get() { "icon-btn mic-btn listening" } else { "icon-btn mic-btn" }
                    title=move || if speech.listening_read.get() { text().stop_listening } else { text().listen }
                    on:click=toggle_listening
                >
                    {move || if speech.listening_read.get() { "⏹" } else { "🎤" }}
                </button>
                <input
                    class="chat-input"
                    type="text"
                    placeholder=move || text().placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            send();
                        }
                    }
                />
                <button
                    class="primary-btn send-btn"
                    disabled=move || loading.get() || input.with(|value| value.trim().is_empty())
                    on:click=move |_| send()
                >
                    {move || text().send}
                </button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_follows_language() {
        let mut msgs = vec![Message::assistant(t(Language::En).chat.greeting, None)];
        assert!(relocalize_greeting(&mut msgs, t(Language::Gu).chat.greeting));
        assert_eq!(msgs[0].content, t(Language::Gu).chat.greeting);
        assert!(!relocalize_greeting(&mut msgs, t(Language::Gu).chat.greeting));
    }

    #[test]
    fn test_started_conversation_untouched() {
        let mut msgs = vec![
            Message::assistant(t(Language::En).chat.greeting, None),
            Message::user("When to sow mustard?", None),
        ];
        assert!(!relocalize_greeting(&mut msgs, t(Language::Hi).chat.greeting));
        assert_eq!(msgs[0].content, t(Language::En).chat.greeting);

        let mut reply_only = vec![Message::assistant("Use drip irrigation.", None)];
        assert!(!relocalize_greeting(&mut reply_only, t(Language::Hi).chat.greeting));
    }

    #[test]
    fn test_last_assistant_text() {
        let msgs = vec![
            Message::assistant("Hello", None),
            Message::user("Cotton pests?", None),
            Message::assistant("**Pink bollworm**: use pheromone traps.", None),
            Message::user("Thanks", None),
        ];
        assert_eq!(
            last_assistant_text(&msgs).as_deref(),
            Some("Pink bollworm: use pheromone traps")
        );
        assert_eq!(last_assistant_text(&[Message::user("hi", None)]), None);
    }
}
