use dioxus::prelude::*;

use crate::vm::{FeedbackVm, InterviewAction};

#[component]
pub fn FeedbackView(vm: FeedbackVm, busy: bool, on_action: EventHandler<InterviewAction>) -> Element {
    let score_class = format!("score score--{}", vm.band_class);
    let next_label = if busy { "Loading..." } else { "Next Question" };

    rsx! {
        section { class: "card feedback",
            div { class: "feedback__overall",
                span { class: "{score_class}", id: "feedback-score", "{vm.score}" }
                span { class: "feedback__out-of", "/ 100" }
            }

            ul { class: "feedback__breakdown",
                for line in vm.breakdown.iter() {
                    li { class: "feedback__line", key: "{line.label}",
                        span { class: "feedback__label", "{line.label}" }
                        div { class: "meter",
                            div { class: "meter__fill", style: "width: {line.meter_percent}%" }
                        }
                        span { class: "feedback__value", "{line.score}" }
                    }
                }
            }

            FeedbackList { title: "Strengths", modifier: "feedback__list--strengths", items: vm.strengths.clone() }
            FeedbackList { title: "Areas to Improve", modifier: "feedback__list--improve", items: vm.improvements.clone() }
            FeedbackList { title: "Missing Topics", modifier: "feedback__list--missing", items: vm.missing_topics.clone() }

            if let Some(html) = vm.suggested_answer_html.as_ref() {
                div { class: "feedback__suggested",
                    h3 { "Suggested Answer" }
                    div { class: "markdown", dangerous_inner_html: "{html}" }
                }
            }
            if let Some(follow_up) = vm.follow_up.as_ref() {
                div { class: "feedback__follow-up",
                    h3 { "Follow-up" }
                    p { "{follow_up}" }
                }
            }

            div { class: "actions",
                button {
                    class: "btn btn-primary",
                    id: "feedback-next",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| on_action.call(InterviewAction::Advance),
                    "{next_label}"
                }
                button {
                    class: "btn btn-ghost",
                    id: "feedback-end",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| on_action.call(InterviewAction::End),
                    "End Interview"
                }
            }
        }
    }
}

#[component]
fn FeedbackList(title: &'static str, modifier: &'static str, items: Vec<String>) -> Element {
    if items.is_empty() {
        return rsx! {};
    }
    rsx! {
        div { class: "feedback__list {modifier}",
            h3 { "{title}" }
            ul {
                for item in items.iter() {
                    li { "{item}" }
                }
            }
        }
    }
}
