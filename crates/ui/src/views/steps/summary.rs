use dioxus::prelude::*;

use studio_core::model::{ModuleId, SyllabusModule};

#[component]
pub fn SummaryStep(module_id: ModuleId) -> Element {
    let summary = &SyllabusModule::get(module_id).summary;

    rsx! {
        section { class: "step-card",
            h3 { class: "step-title", "What You Learned" }
            ul { class: "summary-points",
                for point in summary.points {
                    li { "{point}" }
                }
            }
        }
    }
}
