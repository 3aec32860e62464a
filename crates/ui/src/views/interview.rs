use dioxus::core::Task;
use dioxus::prelude::*;
use interview_core::model::SetupDraft;
use services::{InterviewError, InterviewSession, Stage, TICK_PERIOD, run_countdown};

use crate::context::AppContext;
use crate::views::{CompleteView, FeedbackView, NoticeBanner, QuestionView, SetupView};
use crate::vm::{CompletionVm, FeedbackVm, InterviewAction, QuestionVm, progress_percent};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

fn log_outcome(action: &'static str, result: Result<services::Settled, InterviewError>) {
    match result {
        Ok(settled) => tracing::debug!(action, ?settled, "response handled"),
        Err(err) => tracing::debug!(action, error = %err, "action did not complete"),
    }
}

/// Root of the single-window interview flow. Owns the session signal and the
/// countdown task; every child only renders and reports actions.
#[component]
pub fn InterviewView() -> Element {
    let ctx = use_context::<AppContext>();
    let api = ctx.api();
    let api_base_url = ctx.api_base_url().to_string();

    let mut session = use_signal(InterviewSession::new);
    let mut draft = use_signal(SetupDraft::default);
    let mut timer_task = use_signal(|| None::<Task>);

    let dispatch = use_callback(move |action: InterviewAction| match action {
        InterviewAction::Start => {
            let form = draft.read().clone();
            let begun = session.write().begin_start(&form);
            let pending = match begun {
                Ok(pending) => pending,
                Err(err) => return log_outcome("start", Err(err)),
            };
            let api = api.clone();
            spawn(async move {
                let result = api.start_interview(&pending.request).await;
                let settled = session
                    .write()
                    .finish_start(pending.ticket, result, pending.request);
                log_outcome("start", settled);
            });
        }
        InterviewAction::EditAnswer(text) => session.write().set_answer_draft(text),
        InterviewAction::Submit => {
            let answer = session.read().answer_draft().to_string();
            let begun = session.write().begin_submit(&answer);
            let pending = match begun {
                Ok(pending) => pending,
                Err(err) => return log_outcome("submit", Err(err)),
            };
            let api = api.clone();
            spawn(async move {
                let result = api.submit_answer(&pending.request).await;
                let settled = session.write().finish_submit(pending.ticket, result);
                log_outcome("submit", settled);
            });
        }
        InterviewAction::Advance => {
            let begun = session.write().begin_advance();
            let pending = match begun {
                Ok(pending) => pending,
                Err(err) => return log_outcome("advance", Err(err)),
            };
            let api = api.clone();
            spawn(async move {
                let result = api.next_question(&pending.request).await;
                let settled = session.write().finish_advance(pending.ticket, result);
                log_outcome("advance", settled);
            });
        }
        InterviewAction::End => session.write().end(),
        InterviewAction::Restart => {
            session.write().restart();
            draft.set(SetupDraft::default());
        }
        InterviewAction::DismissNotice => session.write().dismiss_notice(),
    });

    // Restart the ticker whenever the timer (re)starts or stops.
    let timer_key = use_memo(move || session.read().running_timer());
    use_effect(move || {
        let key = timer_key();
        if let Some(task) = timer_task.write().take() {
            task.cancel();
        }
        if let Some(epoch) = key {
            let task = spawn(async move {
                run_countdown(TICK_PERIOD, move || session.write().tick(epoch)).await;
            });
            timer_task.set(Some(task));
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<InterviewTestHandles>() {
                handles.register(dispatch, session, draft);
            }
        }
    }

    let state = session.read();
    let stage = state.stage();
    let busy = state.is_busy();
    let notice = state.notice().cloned();
    let progress_style = format!("width: {:.0}%", progress_percent(&state));
    let question_vm = QuestionVm::from_session(&state);
    let feedback_vm = state.feedback().map(FeedbackVm::from);
    let completion_vm = CompletionVm::from(state.tally());
    let session_id = state.session_id().cloned();
    drop(state);

    rsx! {
        div { class: "interview",
            header { class: "interview__header",
                h1 { class: "interview__title", "Interview Prep Simulator" }
                if stage != Stage::Setup {
                    button {
                        class: "btn btn-secondary",
                        id: "header-restart",
                        r#type: "button",
                        onclick: move |_| dispatch.call(InterviewAction::Restart),
                        "New Interview"
                    }
                }
            }
            if matches!(stage, Stage::Question | Stage::Feedback) {
                div { class: "progress", id: "interview-progress",
                    div { class: "progress__fill", style: "{progress_style}" }
                }
            }
            if let Some(notice) = notice {
                NoticeBanner {
                    notice,
                    on_dismiss: move |()| dispatch.call(InterviewAction::DismissNotice),
                }
            }
            main { class: "interview__body",
                match stage {
                    Stage::Setup => rsx! {
                        SetupView { draft, busy, on_action: dispatch }
                    },
                    Stage::Question => match question_vm {
                        Some(vm) => rsx! { QuestionView { vm, busy, on_action: dispatch } },
                        None => rsx! {},
                    },
                    Stage::Feedback => match feedback_vm {
                        Some(vm) => rsx! { FeedbackView { vm, busy, on_action: dispatch } },
                        None => rsx! {},
                    },
                    Stage::Complete => rsx! {
                        CompleteView { vm: completion_vm, session_id, on_action: dispatch }
                    },
                }
            }
            footer { class: "interview__footer", "API: {api_base_url}" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct InterviewTestHandles {
    dispatch: Rc<RefCell<Option<Callback<InterviewAction>>>>,
    session: Rc<RefCell<Option<Signal<InterviewSession>>>>,
    draft: Rc<RefCell<Option<Signal<SetupDraft>>>>,
}

#[cfg(test)]
impl InterviewTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<InterviewAction>,
        session: Signal<InterviewSession>,
        draft: Signal<SetupDraft>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
        *self.draft.borrow_mut() = Some(draft);
    }

    pub(crate) fn dispatch(&self) -> Callback<InterviewAction> {
        (*self.dispatch.borrow()).expect("interview dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<InterviewSession> {
        (*self.session.borrow()).expect("interview session registered")
    }

    pub(crate) fn draft(&self) -> Signal<SetupDraft> {
        (*self.draft.borrow()).expect("setup draft registered")
    }
}
