use dioxus::prelude::*;

use studio_core::model::{ModuleId, SyllabusModule};

use crate::context::AppContext;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Feedback {
    Success(&'static str),
    Error(&'static str),
}

#[component]
pub fn PracticeStep(module_id: ModuleId) -> Element {
    let ctx = use_context::<AppContext>();
    let practice = &SyllabusModule::get(module_id).practice;

    let mut code = use_signal(String::new);
    let mut feedback = use_signal(|| None::<Feedback>);

    let progress = ctx.progress();
    let run_code = move |_| {
        // Any run counts as a practice attempt, pass or fail.
        let progress = progress.clone();
        spawn(async move {
            let _ = progress.record_practice_attempt(module_id).await;
        });

        let practice = &SyllabusModule::get(module_id).practice;
        if practice.validate(&code()) {
            feedback.set(Some(Feedback::Success(practice.success_message)));
        } else {
            feedback.set(Some(Feedback::Error(practice.error_message)));
        }
    };

    rsx! {
        section { class: "step-card",
            h3 { class: "step-title", "Instructions" }
            p { class: "practice-instruction", "{practice.instruction}" }

            div { class: "code-panel",
                div { class: "code-panel-header",
                    span { "Editor" }
                    button {
                        class: "btn btn-run",
                        r#type: "button",
                        onclick: run_code,
                        "Run Code"
                    }
                }
                textarea {
                    class: "code-editor",
                    placeholder: "Type your code here...",
                    spellcheck: "false",
                    value: "{code()}",
                    oninput: move |evt| code.set(evt.value()),
                }
            }

            match feedback() {
                Some(Feedback::Success(text)) => rsx! {
                    p { class: "practice-feedback practice-feedback--success", "\u{2714} {text}" }
                },
                Some(Feedback::Error(text)) => rsx! {
                    p { class: "practice-feedback practice-feedback--error", "\u{2716} {text}" }
                },
                None => rsx! {},
            }
        }
    }
}
