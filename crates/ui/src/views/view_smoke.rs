use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_hero() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("EcoBot Carbon Calculator"),
        "missing title in {html}"
    );
    assert!(
        html.contains("Start Calculating"),
        "missing cta in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn chat_view_smoke_renders_greeting_and_kind_buttons() {
    let mut harness = setup_view_harness(ViewKind::Chat);
    harness.rebuild();
    let html = harness.render();

    // Avoids the apostrophes in the greeting, which ssr escapes.
    assert!(
        html.contains("calculate your carbon footprint"),
        "missing greeting in {html}"
    );
    let fresh = harness.interviews.start_interview();
    assert_eq!(fresh.transcript().turns().len(), 1);
    assert!(html.contains("Individual"), "missing kind button in {html}");
    assert!(html.contains("Company"), "missing kind button in {html}");
    // Fixed clock puts a stable timestamp on the greeting turn.
    assert!(html.contains("22:13"), "missing time label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn chat_view_smoke_keeps_rendering_after_async_work() {
    let mut harness = setup_view_harness(ViewKind::Chat);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("chat-log"), "missing chat log in {html}");
}
