use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use interview_core::model::{
    Feedback, FeedbackDetail, HealthStatus, InterviewSetup, IssuedQuestion, Question, SessionId,
    SessionStats,
};
use services::api::{NextQuestionRequest, SubmitAnswerRequest};
use services::{ApiError, InterviewApi};

use crate::context::{UiApp, build_app_context};
use crate::views::InterviewView;
use crate::views::interview::InterviewTestHandles;

/// In-memory `InterviewApi` replaying queued responses.
#[derive(Default)]
pub struct FakeApi {
    questions: Mutex<VecDeque<Result<IssuedQuestion, ApiError>>>,
    feedback: Mutex<VecDeque<Result<Feedback, ApiError>>>,
    stats_fail: bool,
}

impl FakeApi {
    pub fn question(self, text: &str, limit: u32) -> Self {
        self.questions
            .lock()
            .unwrap()
            .push_back(Ok(issued(text, limit)));
        self
    }

    pub fn question_with_topics(self, text: &str, limit: u32, topics: &[&str]) -> Self {
        let mut issued = issued(text, limit);
        issued.question.expected_topics = topics.iter().map(|topic| topic.to_string()).collect();
        self.questions.lock().unwrap().push_back(Ok(issued));
        self
    }

    pub fn failing_question(self, err: ApiError) -> Self {
        self.questions.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn score(self, score: u32) -> Self {
        self.feedback.lock().unwrap().push_back(Ok(feedback(score)));
        self
    }

    pub fn failing_score(self, err: ApiError) -> Self {
        self.feedback.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn without_stats(mut self) -> Self {
        self.stats_fail = true;
        self
    }

    fn pop_question(&self) -> Result<IssuedQuestion, ApiError> {
        self.questions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ApiError::Unreachable("no scripted question".into())))
    }
}

#[async_trait]
impl InterviewApi for FakeApi {
    async fn start_interview(&self, _setup: &InterviewSetup) -> Result<IssuedQuestion, ApiError> {
        self.pop_question()
    }

    async fn submit_answer(&self, _request: &SubmitAnswerRequest) -> Result<Feedback, ApiError> {
        self.feedback
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ApiError::Unreachable("no scripted feedback".into())))
    }

    async fn next_question(
        &self,
        _request: &NextQuestionRequest,
    ) -> Result<IssuedQuestion, ApiError> {
        self.pop_question()
    }

    async fn session_stats(&self, session_id: &SessionId) -> Result<SessionStats, ApiError> {
        if self.stats_fail {
            return Err(ApiError::Status {
                status: services::StatusCode::NOT_FOUND,
                detail: Some("Session not found".into()),
            });
        }
        Ok(SessionStats {
            session_id: session_id.clone(),
            questions_asked: 1,
            average_score: 85.0,
            scores: vec![85],
            created_at: "2026-10-18T09:30:00.000001".into(),
        })
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        Ok(HealthStatus {
            status: "healthy".into(),
            agent_ready: true,
            service: None,
            version: None,
        })
    }
}

pub fn issued(text: &str, limit: u32) -> IssuedQuestion {
    IssuedQuestion {
        session_id: SessionId::new("ui-session"),
        question: Question {
            text: text.to_string(),
            context: "Consider failure modes.".into(),
            difficulty: "medium".into(),
            expected_topics: vec!["caching".into(), "consistency".into()],
            time_limit_seconds: limit,
        },
    }
}

pub fn feedback(score: u32) -> Feedback {
    Feedback {
        overall_score: score,
        feedback_detail: FeedbackDetail {
            clarity: 80,
            technical_accuracy: score,
            completeness: 70,
            communication: 90,
        },
        strengths: vec!["Clear structure".into()],
        improvements: vec!["Quantify trade-offs".into()],
        missing_topics: Vec::new(),
        suggested_answer: "Start with a **write-through** cache.".into(),
        follow_up_question: Some("How would you invalidate entries?".into()),
    }
}

struct TestApp {
    api: Arc<FakeApi>,
}

impl UiApp for TestApp {
    fn api(&self) -> Arc<dyn InterviewApi> {
        self.api.clone()
    }

    fn api_base_url(&self) -> String {
        "http://fake.test".to_string()
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    handles: InterviewTestHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn InterviewHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { InterviewView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: InterviewTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let spawned requests resolve and the resulting state render.
    pub async fn settle(&mut self) {
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    /// Keep polling the dom until `span` of wall-clock time has passed.
    pub async fn drive_for(&mut self, span: std::time::Duration) {
        let deadline = tokio::time::Instant::now() + span;
        while tokio::time::Instant::now() < deadline {
            self.drive_async().await;
        }
    }

    pub fn act(&mut self, action: crate::vm::InterviewAction) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(action));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(api: FakeApi) -> ViewHarness {
    let handles = InterviewTestHandles::default();
    let app = Arc::new(TestApp { api: Arc::new(api) });
    let dom = VirtualDom::new_with_props(
        InterviewHarness,
        HarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
