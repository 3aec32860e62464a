use dioxus::prelude::*;
use interview_core::model::{SessionId, SessionStats};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CompletionVm, InterviewAction, format_created_at};

#[component]
pub fn CompleteView(
    vm: CompletionVm,
    session_id: Option<SessionId>,
    on_action: EventHandler<InterviewAction>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let api = ctx.api();
    let resource = use_resource(move || {
        let api = api.clone();
        let session_id = session_id.clone();
        async move {
            let Some(session_id) = session_id else {
                return Ok(None);
            };
            api.session_stats(&session_id)
                .await
                .map(Some)
                .map_err(|err| {
                    tracing::warn!(error = %err, "session stats unavailable");
                    ViewError::Service(err.user_message("Session stats unavailable"))
                })
        }
    });
    let stats = view_state_from_resource(&resource);

    rsx! {
        section { class: "card complete",
            h2 { class: "complete__title", "Interview Complete! 🎉" }
            div { class: "complete__summary",
                div { class: "stat",
                    span { class: "stat__value", id: "complete-count", "{vm.questions_answered}" }
                    span { class: "stat__label", "Questions Answered" }
                }
                div { class: "stat",
                    span { class: "stat__value", id: "complete-average", "{vm.average_label}" }
                    span { class: "stat__label", "Average Score" }
                }
            }

            if !vm.rows.is_empty() {
                ol { class: "complete__scores",
                    for row in vm.rows.iter() {
                        li { class: "complete__row", key: "{row.label}",
                            span { "{row.label}" }
                            span { class: "score score--{row.band_class}", "{row.score}" }
                        }
                    }
                }
            }

            match stats {
                ViewState::Ready(Some(stats)) => rsx! { ServerStats { stats } },
                ViewState::Loading => rsx! {
                    p { class: "complete__stats complete__stats--loading", "Loading session stats..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "complete__stats complete__stats--error", "{err.message()}" }
                },
                ViewState::Ready(None) | ViewState::Idle => rsx! {},
            }

            button {
                class: "btn btn-primary",
                id: "complete-restart",
                r#type: "button",
                onclick: move |_| on_action.call(InterviewAction::Restart),
                "Start New Interview"
            }
        }
    }
}

#[component]
fn ServerStats(stats: SessionStats) -> Element {
    let started = format_created_at(&stats);
    rsx! {
        p { class: "complete__stats", id: "complete-started",
            "Session started {started}"
        }
    }
}
