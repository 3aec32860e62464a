use dioxus::prelude::*;

use crate::vm::{InterviewAction, QuestionVm};

#[component]
pub fn QuestionView(vm: QuestionVm, busy: bool, on_action: EventHandler<InterviewAction>) -> Element {
    let timer_class = if vm.urgent {
        "question__timer question__timer--urgent"
    } else {
        "question__timer"
    };
    let submit_label = if busy { "Evaluating..." } else { "Submit Answer" };
    let char_count = vm.answer.chars().count();

    rsx! {
        section { class: "card question",
            header { class: "question__header",
                div {
                    h2 { class: "question__number", "{vm.number_label}" }
                    p { class: "question__meta", "{vm.meta_label}" }
                }
                span { class: "{timer_class}", id: "question-timer", "{vm.clock_label}" }
            }

            p { class: "question__text", "{vm.text}" }
            if let Some(context) = vm.context.as_ref() {
                p { class: "question__context", "💡 {context}" }
            }
            if !vm.topics.is_empty() {
                div { class: "question__topics",
                    span { class: "question__topics-label", "Topics to cover:" }
                    for (idx, topic) in vm.topics.iter().enumerate() {
                        span { class: "chip", key: "{idx}", "{topic}" }
                    }
                }
            }

            textarea {
                class: "question__answer",
                id: "question-answer",
                rows: "10",
                placeholder: "Type your answer here...",
                disabled: busy,
                value: "{vm.answer}",
                oninput: move |evt: FormEvent| on_action.call(InterviewAction::EditAnswer(evt.value())),
            }
            p { class: "question__count", "{char_count} characters" }

            div { class: "actions",
                button {
                    class: "btn btn-primary",
                    id: "question-submit",
                    r#type: "button",
                    disabled: !vm.can_submit,
                    onclick: move |_| on_action.call(InterviewAction::Submit),
                    "{submit_label}"
                }
                button {
                    class: "btn btn-ghost",
                    id: "question-end",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| on_action.call(InterviewAction::End),
                    "End Interview"
                }
            }
        }
    }
}
