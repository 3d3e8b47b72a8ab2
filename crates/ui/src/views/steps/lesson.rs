use dioxus::prelude::*;

use studio_core::model::{ModuleId, SyllabusModule};

#[component]
pub fn LessonStep(module_id: ModuleId) -> Element {
    let lesson = &SyllabusModule::get(module_id).lesson;

    rsx! {
        section { class: "step-card",
            h3 { class: "step-title", "{lesson.heading}" }
            for paragraph in lesson.content {
                p { class: "lesson-paragraph", "{paragraph}" }
            }
            div { class: "code-panel",
                div { class: "code-panel-header", "Example" }
                pre { class: "code-block", "{lesson.code_example}" }
            }
        }
    }
}
