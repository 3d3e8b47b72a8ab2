use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{AssistantPanel, ViewError, ViewState, view_state_from_resource};
use crate::vm::{ModuleCardVm, OverviewVm, map_module_cards, map_overview};

#[derive(Clone, Debug, PartialEq)]
struct DashboardData {
    overview: OverviewVm,
    modules: Vec<ModuleCardVm>,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();

    let resource = use_resource(move || {
        let progress = progress.clone();
        async move {
            let set = progress.load().await.map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(DashboardData {
                overview: map_overview(&set),
                modules: map_module_cards(&set),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page dashboard",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(data) => rsx! {
                    StudentOverview { overview: data.overview.clone() }
                    div { class: "module-grid",
                        for card in data.modules.clone() {
                            ModuleCard { card }
                        }
                    }
                },
            }

            // The doubt clarifier lives on the dashboard only.
            AssistantPanel {}
        }
    }
}

#[component]
fn StudentOverview(overview: OverviewVm) -> Element {
    rsx! {
        section { class: "overview-card",
            h2 { "Student Overview" }

            div { class: "overview-progress",
                p { class: "overview-label", "{overview.completed_label}" }
                div { class: "progress-track",
                    div {
                        class: "progress-fill",
                        style: "width: {overview.progress_percent}%",
                    }
                }
            }

            div { class: "overview-stats",
                div { class: "overview-stat",
                    p { class: "overview-stat-label", "Average Score" }
                    p { class: "overview-stat-value", "{overview.average_score_label}" }
                }
                div { class: "overview-stat",
                    p { class: "overview-stat-label", "Total Time Spent" }
                    p { class: "overview-stat-value", "{overview.total_time_label}" }
                }
            }
        }
    }
}

#[component]
fn ModuleCard(card: ModuleCardVm) -> Element {
    rsx! {
        div { class: "module-card",
            if card.is_complete {
                span { class: "module-complete-badge", "Complete" }
            }
            div { class: "module-card-head",
                span { class: "module-icon", "{card.icon}" }
                h2 { class: "module-title", "{card.title}" }
            }
            ul { class: "module-topics",
                for topic in card.topics {
                    li { "{topic}" }
                }
            }
            Link {
                class: "btn btn-primary module-open",
                to: Route::Module { module_id: card.id },
                "Open Module"
            }
        }
    }
}
