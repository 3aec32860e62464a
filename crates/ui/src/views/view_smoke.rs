use std::time::Duration;

use dioxus::prelude::*;
use services::{ApiError, Stage};

use super::test_harness::{FakeApi, ViewHarness, setup_view_harness};
use crate::vm::InterviewAction;

const ANSWER: &str = "Put a write-through cache in front of the primary store.";

fn stage(harness: &ViewHarness) -> Stage {
    harness
        .dom
        .in_runtime(|| harness.handles.session().read().stage())
}

async fn start_as(harness: &mut ViewHarness, role: &str) {
    harness.rebuild();
    let draft = harness.handles.draft();
    harness.dom.in_runtime(|| {
        let mut draft = draft;
        draft.write().role = role.to_string();
    });
    harness.act(InterviewAction::Start);
    harness.settle().await;
}

async fn answer(harness: &mut ViewHarness, text: &str) {
    harness.act(InterviewAction::EditAnswer(text.to_string()));
    harness.act(InterviewAction::Submit);
    harness.settle().await;
}

#[tokio::test(flavor = "current_thread")]
async fn setup_view_smoke_renders_form() {
    let mut harness = setup_view_harness(FakeApi::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Interview Prep Simulator"), "missing title in {html}");
    assert!(html.contains("Start Interview"), "missing start button in {html}");
    assert!(html.contains("System Design"), "missing type option in {html}");
    assert!(html.contains("Senior (5+ years)"), "missing level option in {html}");
    assert!(!html.contains("New Interview"), "unexpected restart button in {html}");
    assert!(html.contains("API: http://fake.test"), "missing base url in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn blank_role_shows_validation_notice() {
    let mut harness = setup_view_harness(FakeApi::default());
    harness.rebuild();
    harness.act(InterviewAction::Start);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Please enter a job role"), "missing notice in {html}");
    assert_eq!(stage(&harness), Stage::Setup);
}

#[tokio::test(flavor = "current_thread")]
async fn start_renders_question_with_full_clock() {
    let api = FakeApi::default().question("How would you cache product pages?", 180);
    let mut harness = setup_view_harness(api);
    start_as(&mut harness, "Backend Engineer").await;

    let html = harness.render();
    assert_eq!(stage(&harness), Stage::Question);
    assert!(html.contains("Question 1"), "missing number in {html}");
    assert!(html.contains("3:00"), "missing clock in {html}");
    assert!(html.contains("medium • Technical Interview"), "missing meta in {html}");
    assert!(html.contains("consistency"), "missing topic chip in {html}");
    assert!(html.contains("Interview started! Good luck!"), "missing notice in {html}");
    assert!(html.contains("New Interview"), "missing restart button in {html}");
    assert!(!html.contains("question__timer--urgent"), "timer should not be urgent in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn short_time_limit_marks_timer_urgent() {
    let api = FakeApi::default().question("Quick one", 20);
    let mut harness = setup_view_harness(api);
    start_as(&mut harness, "SRE").await;
    let html = harness.render();
    assert!(html.contains("0:20"), "missing clock in {html}");
    assert!(html.contains("question__timer--urgent"), "missing urgent class in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_start_keeps_setup_and_shows_fallback() {
    let api = FakeApi::default().failing_question(ApiError::Timeout);
    let mut harness = setup_view_harness(api);
    start_as(&mut harness, "SRE").await;
    let html = harness.render();
    assert_eq!(stage(&harness), Stage::Setup);
    assert!(html.contains("Failed to start interview"), "missing notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn submit_renders_feedback_breakdown() {
    let api = FakeApi::default().question("Cache design?", 180).score(85);
    let mut harness = setup_view_harness(api);
    start_as(&mut harness, "Backend Engineer").await;
    answer(&mut harness, ANSWER).await;

    let html = harness.render();
    assert_eq!(stage(&harness), Stage::Feedback);
    assert!(html.contains("Excellent answer!"), "missing band notice in {html}");
    assert!(html.contains("score--excellent"), "missing band class in {html}");
    assert!(html.contains("Technical Accuracy"), "missing breakdown label in {html}");
    assert!(html.contains("<strong>write-through</strong>"), "missing markdown in {html}");
    assert!(html.contains("How would you invalidate entries?"), "missing follow-up in {html}");
    assert!(!html.contains("Missing Topics"), "empty list should be hidden in {html}");
    assert!(html.contains("Next Question"), "missing next button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_submit_returns_to_question_with_running_timer() {
    let api = FakeApi::default()
        .question("Cache design?", 180)
        .failing_score(ApiError::Unreachable("connection refused".into()));
    let mut harness = setup_view_harness(api);
    start_as(&mut harness, "Backend Engineer").await;
    answer(&mut harness, ANSWER).await;

    let html = harness.render();
    assert!(html.contains("Failed to evaluate answer"), "missing notice in {html}");
    assert!(html.contains("Submit Answer"), "missing submit button in {html}");
    let running = harness
        .dom
        .in_runtime(|| harness.handles.session().read().is_timer_running());
    assert!(running);
}

#[tokio::test(flavor = "current_thread")]
async fn advance_shows_second_question() {
    let api = FakeApi::default()
        .question("First?", 180)
        .score(55)
        .question("Second?", 90);
    let mut harness = setup_view_harness(api);
    start_as(&mut harness, "SRE").await;
    answer(&mut harness, ANSWER).await;
    harness.act(InterviewAction::Advance);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Question 2"), "missing number in {html}");
    assert!(html.contains("Second?"), "missing prompt in {html}");
    assert!(html.contains("1:30"), "missing clock in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn ending_shows_summary_and_server_stats() {
    let api = FakeApi::default().question("Cache design?", 180).score(85);
    let mut harness = setup_view_harness(api);
    start_as(&mut harness, "SRE").await;
    answer(&mut harness, ANSWER).await;
    harness.act(InterviewAction::End);
    harness.settle().await;

    let html = harness.render();
    assert_eq!(stage(&harness), Stage::Complete);
    assert!(html.contains("Interview Complete!"), "missing title in {html}");
    assert!(html.contains("Question 1"), "missing score row in {html}");
    assert!(html.contains("Session started Oct 18, 2026 09:30"), "missing stats in {html}");
    assert!(html.contains("Start New Interview"), "missing restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn ending_without_answers_shows_dash_average() {
    let api = FakeApi::default().question("Cache design?", 180).without_stats();
    let mut harness = setup_view_harness(api);
    start_as(&mut harness, "SRE").await;
    harness.act(InterviewAction::End);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("—"), "missing dash average in {html}");
    assert!(html.contains("Session not found"), "missing stats error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn restart_returns_to_empty_setup() {
    let api = FakeApi::default().question("Cache design?", 180);
    let mut harness = setup_view_harness(api);
    start_as(&mut harness, "SRE").await;
    harness.act(InterviewAction::Restart);
    harness.settle().await;

    let html = harness.render();
    assert_eq!(stage(&harness), Stage::Setup);
    assert!(html.contains("Start Interview"), "missing setup in {html}");
    assert!(!html.contains("value=\"SRE\""), "draft should be cleared in {html}");
}

fn remaining(harness: &ViewHarness) -> u32 {
    harness
        .dom
        .in_runtime(|| harness.handles.session().read().time_remaining())
}

#[tokio::test(flavor = "current_thread")]
async fn repeated_topics_render_and_rerender() {
    let api =
        FakeApi::default().question_with_topics("Cache design?", 180, &["caching", "caching"]);
    let mut harness = setup_view_harness(api);
    start_as(&mut harness, "SRE").await;
    harness.act(InterviewAction::EditAnswer("first".into()));
    harness.act(InterviewAction::EditAnswer("first draft".into()));
    harness.settle().await;

    let html = harness.render();
    assert_eq!(stage(&harness), Stage::Question);
    assert_eq!(html.matches(">caching<").count(), 2, "expected both chips in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn countdown_ticks_then_freezes_after_submit() {
    let api = FakeApi::default().question("Cache design?", 180).score(85);
    let mut harness = setup_view_harness(api);
    start_as(&mut harness, "SRE").await;
    harness.drive_for(Duration::from_millis(2300)).await;
    assert_eq!(remaining(&harness), 178);
    assert!(harness.render().contains("2:58"), "clock should follow the countdown");

    answer(&mut harness, ANSWER).await;
    assert_eq!(stage(&harness), Stage::Feedback);
    let frozen = remaining(&harness);
    harness.drive_for(Duration::from_millis(1300)).await;
    assert_eq!(remaining(&harness), frozen);
}

#[tokio::test(flavor = "current_thread")]
async fn countdown_stops_when_interview_ends() {
    let api = FakeApi::default().question("Cache design?", 180).without_stats();
    let mut harness = setup_view_harness(api);
    start_as(&mut harness, "SRE").await;
    harness.drive_for(Duration::from_millis(1300)).await;
    harness.act(InterviewAction::End);
    harness.settle().await;

    assert_eq!(stage(&harness), Stage::Complete);
    let frozen = remaining(&harness);
    assert!(frozen < 180, "timer should have run before ending");
    harness.drive_for(Duration::from_millis(1300)).await;
    assert_eq!(remaining(&harness), frozen);
}

#[tokio::test(flavor = "current_thread")]
async fn restart_resets_clock_and_stops_ticking() {
    let api = FakeApi::default().question("Cache design?", 60);
    let mut harness = setup_view_harness(api);
    start_as(&mut harness, "SRE").await;
    harness.drive_for(Duration::from_millis(1300)).await;
    assert_eq!(remaining(&harness), 59);

    harness.act(InterviewAction::Restart);
    harness.settle().await;
    assert_eq!(stage(&harness), Stage::Setup);
    assert_eq!(remaining(&harness), 180);
    harness.drive_for(Duration::from_millis(1300)).await;
    assert_eq!(remaining(&harness), 180);
}
