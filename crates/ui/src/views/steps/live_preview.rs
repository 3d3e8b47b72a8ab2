use dioxus::prelude::*;

use studio_core::model::{ModuleId, SyllabusModule};

#[component]
pub fn LivePreviewStep(module_id: ModuleId) -> Element {
    let preview = &SyllabusModule::get(module_id).live_preview;

    rsx! {
        section { class: "step-card",
            h3 { class: "step-title", "Live Preview" }
            div { class: "code-panel",
                div { class: "code-panel-header", "Sample" }
                pre { class: "code-block", "{preview.code}" }
            }
            p { class: "preview-explanation", "{preview.explanation}" }
        }
    }
}
