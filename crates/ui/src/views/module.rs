use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use studio_core::model::{ModuleId, SyllabusModule};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::steps::{
    AssessmentStep, LessonStep, LivePreviewStep, PracticeStep, SummaryStep,
};

/// The fixed five-step pedagogical flow every module walks through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Lesson,
    LivePreview,
    Practice,
    Assessment,
    Summary,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Lesson,
        Step::LivePreview,
        Step::Practice,
        Step::Assessment,
        Step::Summary,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Step::Lesson => "1. Lesson",
            Step::LivePreview => "2. Live Preview",
            Step::Practice => "3. Practice",
            Step::Assessment => "4. Assessment",
            Step::Summary => "5. Summary",
        }
    }
}

fn elapsed_seconds(from: DateTime<Utc>, to: DateTime<Utc>) -> u64 {
    u64::try_from((to - from).num_seconds()).unwrap_or(0)
}

#[component]
pub fn ModuleView(module_id: ModuleId) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let clock = ctx.clock();
    let module = SyllabusModule::get(module_id);

    let mut current_step = use_signal(|| Step::Lesson);
    let mut entered_at = use_signal(|| clock.now());

    // Landing on a module starts at the Lesson step, which counts as viewing it.
    {
        let progress = ctx.progress();
        use_future(move || {
            let progress = progress.clone();
            async move {
                let _ = progress.record_lesson_viewed(module_id).await;
            }
        });
    }

    let progress_for_steps = ctx.progress();
    let switch_step = use_callback(move |next: Step| {
        if next == current_step() {
            return;
        }
        // Leaving a step flushes the elapsed time to the store.
        let now = clock.now();
        let elapsed = elapsed_seconds(entered_at(), now);
        entered_at.set(now);
        current_step.set(next);

        let progress = progress_for_steps.clone();
        spawn(async move {
            let _ = progress.add_time_spent(module_id, elapsed).await;
            if next == Step::Lesson {
                let _ = progress.record_lesson_viewed(module_id).await;
            }
        });
    });

    let progress_for_back = ctx.progress();
    let back_to_dashboard = move |_| {
        let now = clock.now();
        let elapsed = elapsed_seconds(entered_at(), now);
        let progress = progress_for_back.clone();
        let nav = navigator;
        spawn(async move {
            let _ = progress.add_time_spent(module_id, elapsed).await;
            let _ = nav.push(Route::Home {});
        });
    };

    rsx! {
        div { class: "page module-page",
            button {
                class: "btn-link back-link",
                r#type: "button",
                onclick: back_to_dashboard,
                "\u{2190} Back to Dashboard"
            }

            h2 { class: "module-heading", "{module.title}" }

            nav { class: "step-tabs",
                for step in Step::ALL {
                    button {
                        class: if current_step() == step { "step-tab step-tab--active" } else { "step-tab" },
                        r#type: "button",
                        onclick: move |_| switch_step.call(step),
                        "{step.label()}"
                    }
                }
            }

            div { class: "step-content",
                match current_step() {
                    Step::Lesson => rsx! { LessonStep { module_id } },
                    Step::LivePreview => rsx! { LivePreviewStep { module_id } },
                    Step::Practice => rsx! { PracticeStep { module_id } },
                    Step::Assessment => rsx! { AssessmentStep { module_id } },
                    Step::Summary => rsx! { SummaryStep { module_id } },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use studio_core::time::{fixed_clock, fixed_now};

    #[test]
    fn elapsed_seconds_follows_an_advancing_clock() {
        let mut clock = fixed_clock();
        let entered = clock.now();
        clock.advance(Duration::seconds(90));
        assert_eq!(elapsed_seconds(entered, clock.now()), 90);
    }

    #[test]
    fn elapsed_seconds_floors_at_zero() {
        let now = fixed_now();
        assert_eq!(elapsed_seconds(now, now + Duration::seconds(30)), 30);
        // A clock that went backwards never produces a negative delta.
        assert_eq!(elapsed_seconds(now, now - Duration::seconds(5)), 0);
    }

    #[test]
    fn steps_are_ordered_and_labeled() {
        let labels: Vec<&str> = Step::ALL.iter().map(|step| step.label()).collect();
        assert_eq!(
            labels,
            vec![
                "1. Lesson",
                "2. Live Preview",
                "3. Practice",
                "4. Assessment",
                "5. Summary"
            ]
        );
    }
}
