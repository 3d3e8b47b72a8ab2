use studio_core::model::{ModuleId, ProgressUpdate};

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_fresh_dashboard() {
    let mut harness = setup_view_harness(ViewKind::Home);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    let expected = "Progress: 0 / 3 Modules Completed";
    assert!(html.contains(expected), "missing {expected} in {html}");
    assert!(html.contains("HTML & CSS Layouts"), "missing module card in {html}");
    assert!(html.contains("Python Logic & Variables"), "missing module card in {html}");
    assert!(html.contains("JavaScript & p5.js"), "missing module card in {html}");
    assert!(
        html.contains("Ask the Doubt Clarifier"),
        "missing assistant toggle in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_seeded_overview() {
    let mut harness = setup_view_harness(ViewKind::Home);
    let module = ModuleId::HtmlCss;
    harness
        .progress
        .update(module, ProgressUpdate::lesson_viewed())
        .await
        .expect("record lesson");
    harness
        .progress
        .update(module, ProgressUpdate::practice_attempted())
        .await
        .expect("record practice");
    harness
        .progress
        .update(module, ProgressUpdate::assessment_submitted(4))
        .await
        .expect("record assessment");
    harness
        .progress
        .update(module, ProgressUpdate::time_spent_total(3725))
        .await
        .expect("record time");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    let expected = "Progress: 1 / 3 Modules Completed";
    assert!(html.contains(expected), "missing {expected} in {html}");
    assert!(html.contains("Complete"), "missing complete badge in {html}");
    assert!(html.contains("80%"), "missing average score in {html}");
    assert!(html.contains("1h 2m 5s"), "missing total time in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn module_view_smoke_renders_step_tabs_and_lesson() {
    let mut harness = setup_view_harness(ViewKind::Module(ModuleId::HtmlCss));

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("HTML & CSS Layouts"), "missing heading in {html}");
    assert!(html.contains("1. Lesson"), "missing lesson tab in {html}");
    assert!(html.contains("5. Summary"), "missing summary tab in {html}");
    assert!(
        html.contains("Structuring the Web with HTML & CSS"),
        "missing lesson content in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn module_view_marks_lesson_viewed_on_mount() {
    let mut harness = setup_view_harness(ViewKind::Module(ModuleId::Python));

    harness.rebuild();
    harness.drive_async().await;

    let set = harness.progress.load().await.expect("load progress");
    assert!(set.record(ModuleId::Python).lesson_viewed());
    assert!(!set.record(ModuleId::HtmlCss).lesson_viewed());
}
