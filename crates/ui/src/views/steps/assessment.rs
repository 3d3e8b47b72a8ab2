use dioxus::prelude::*;

use studio_core::model::{ModuleId, QUESTIONS_PER_MODULE, SyllabusModule};

use crate::context::AppContext;

#[component]
pub fn AssessmentStep(module_id: ModuleId) -> Element {
    let ctx = use_context::<AppContext>();
    let questions = &SyllabusModule::get(module_id).assessment;

    let mut answers = use_signal(|| vec![None::<usize>; usize::from(QUESTIONS_PER_MODULE)]);
    let mut submitted_score = use_signal(|| None::<u8>);
    let mut warning = use_signal(|| None::<&'static str>);

    let progress = ctx.progress();
    let submit = move |_| {
        // Incomplete answer sheets never reach the progress store.
        if answers().iter().any(Option::is_none) {
            warning.set(Some("Please answer all questions before submitting."));
            return;
        }
        warning.set(None);

        let progress = progress.clone();
        let sheet = answers();
        spawn(async move {
            match progress.submit_assessment(module_id, &sheet).await {
                Ok(score) => submitted_score.set(Some(score)),
                Err(_) => warning.set(Some("Could not save your submission. Please try again.")),
            }
        });
    };

    rsx! {
        section { class: "step-card",
            h3 { class: "step-title", "Module Assessment" }

            for (q_index, mcq) in questions.iter().enumerate() {
                div { class: "assessment-question",
                    p { class: "assessment-prompt", "{q_index + 1}. {mcq.question}" }
                    div { class: "assessment-options",
                        for (o_index, option) in mcq.options.iter().enumerate() {
                            button {
                                class: option_class(
                                    answers().get(q_index).copied().flatten(),
                                    o_index,
                                    mcq.correct_index,
                                    submitted_score().is_some(),
                                ),
                                r#type: "button",
                                disabled: submitted_score().is_some(),
                                onclick: move |_| {
                                    answers.with_mut(|sheet| sheet[q_index] = Some(o_index));
                                },
                                "{option}"
                            }
                        }
                    }
                }
            }

            if let Some(text) = warning() {
                p { class: "assessment-warning", "{text}" }
            }

            match submitted_score() {
                None => rsx! {
                    button {
                        class: "btn btn-primary assessment-submit",
                        r#type: "button",
                        onclick: submit,
                        "Submit Assessment"
                    }
                },
                Some(score) => rsx! {
                    div {
                        class: if score >= 3 { "assessment-result assessment-result--pass" } else { "assessment-result assessment-result--fail" },
                        h4 { "Final Score: {score} / {QUESTIONS_PER_MODULE}" }
                        p { "{result_text(score)}" }
                    }
                },
            }
        }
    }
}

fn option_class(
    chosen: Option<usize>,
    option_index: usize,
    correct_index: usize,
    submitted: bool,
) -> &'static str {
    if submitted {
        if option_index == correct_index {
            "assessment-option assessment-option--correct"
        } else if chosen == Some(option_index) {
            "assessment-option assessment-option--wrong"
        } else {
            "assessment-option"
        }
    } else if chosen == Some(option_index) {
        "assessment-option assessment-option--selected"
    } else {
        "assessment-option"
    }
}

fn result_text(score: u8) -> &'static str {
    if score == QUESTIONS_PER_MODULE {
        "Perfect score! Well done."
    } else if score >= 3 {
        "Good job! You've passed the assessment."
    } else {
        "Review the lesson and try to improve your score next time."
    }
}
