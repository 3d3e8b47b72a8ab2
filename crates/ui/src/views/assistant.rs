use dioxus::prelude::*;

use crate::context::AppContext;

#[derive(Clone, Debug, PartialEq, Eq)]
enum ChatLine {
    Student(String),
    Assistant(String),
    Error(&'static str),
}

const GREETING: &str = "Hi! I'm your Doubt Clarifier. How can I help?";

/// Floating chat panel for the Doubt Clarifier. Rendered on the dashboard only.
#[component]
pub fn AssistantPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let assistant = ctx.assistant();

    let mut open = use_signal(|| false);
    let mut input = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut lines = use_signal(|| vec![ChatLine::Assistant(GREETING.to_string())]);

    let enabled = assistant.enabled();

    let send = use_callback(move |()| {
        let question = input().trim().to_string();
        if question.is_empty() || loading() {
            return;
        }
        input.set(String::new());
        lines.with_mut(|l| l.push(ChatLine::Student(question.clone())));
        loading.set(true);

        let assistant = assistant.clone();
        spawn(async move {
            match assistant.ask(&question).await {
                Ok(answer) => lines.with_mut(|l| l.push(ChatLine::Assistant(answer))),
                Err(_) => lines.with_mut(|l| {
                    l.push(ChatLine::Error(
                        "An error occurred while contacting the teacher assistant. Please try again.",
                    ));
                }),
            }
            loading.set(false);
        });
    });

    rsx! {
        div { class: "assistant",
            if open() {
                div { class: "assistant-panel",
                    div { class: "assistant-header",
                        span { "Doubt Clarifier" }
                        button {
                            class: "btn btn-link",
                            r#type: "button",
                            onclick: move |_| open.set(false),
                            "\u{2715}"
                        }
                    }
                    div { class: "assistant-messages",
                        for line in lines() {
                            match line {
                                ChatLine::Student(text) => rsx! {
                                    p { class: "assistant-line assistant-line--student", "{text}" }
                                },
                                ChatLine::Assistant(text) => rsx! {
                                    p { class: "assistant-line assistant-line--assistant", "{text}" }
                                },
                                ChatLine::Error(text) => rsx! {
                                    p { class: "assistant-line assistant-line--error", "{text}" }
                                },
                            }
                        }
                        if loading() {
                            p { class: "assistant-line assistant-line--assistant", "Thinking..." }
                        }
                    }
                    if enabled {
                        div { class: "assistant-input-row",
                            input {
                                class: "assistant-input",
                                r#type: "text",
                                placeholder: "Ask a question about this lesson...",
                                value: "{input()}",
                                oninput: move |evt| input.set(evt.value()),
                                onkeydown: move |evt: KeyboardEvent| {
                                    if evt.key() == Key::Enter {
                                        send.call(());
                                    }
                                },
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: loading(),
                                onclick: move |_| send.call(()),
                                "Send"
                            }
                        }
                    } else {
                        p { class: "assistant-disabled",
                            "The assistant is offline. Set STUDIO_AI_API_KEY to enable it."
                        }
                    }
                }
            }
            button {
                class: "btn assistant-toggle",
                r#type: "button",
                onclick: move |_| open.toggle(),
                if open() { "Close Helper" } else { "Ask the Doubt Clarifier" }
            }
        }
    }
}
