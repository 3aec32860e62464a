use dioxus::prelude::*;
use interview_core::model::{ExperienceLevel, InterviewType, SetupDraft};

use crate::vm::InterviewAction;

#[component]
pub fn SetupView(
    draft: Signal<SetupDraft>,
    busy: bool,
    on_action: EventHandler<InterviewAction>,
) -> Element {
    let mut draft = draft;
    let form = draft.read().clone();
    let start_label = if busy { "Starting..." } else { "Start Interview" };

    rsx! {
        section { class: "card setup",
            h2 { class: "setup__title", "Set up your interview" }
            p { class: "setup__subtitle",
                "Pick a role and level. Questions adapt as you answer."
            }

            label { class: "field",
                span { class: "field__label", "Interview Type" }
                select {
                    id: "setup-type",
                    value: "{form.interview_type.as_str()}",
                    onchange: move |evt: FormEvent| {
                        if let Ok(value) = evt.value().parse::<InterviewType>() {
                            draft.write().interview_type = value;
                        }
                    },
                    for kind in InterviewType::ALL {
                        option {
                            value: "{kind.as_str()}",
                            selected: kind == form.interview_type,
                            "{kind.label()}"
                        }
                    }
                }
            }

            label { class: "field",
                span { class: "field__label", "Job Role" }
                input {
                    id: "setup-role",
                    r#type: "text",
                    placeholder: "e.g. Backend Engineer",
                    value: "{form.role}",
                    oninput: move |evt: FormEvent| draft.write().role = evt.value(),
                }
            }

            label { class: "field",
                span { class: "field__label", "Experience Level" }
                select {
                    id: "setup-level",
                    value: "{form.experience_level.as_str()}",
                    onchange: move |evt: FormEvent| {
                        if let Ok(value) = evt.value().parse::<ExperienceLevel>() {
                            draft.write().experience_level = value;
                        }
                    },
                    for level in ExperienceLevel::ALL {
                        option {
                            value: "{level.as_str()}",
                            selected: level == form.experience_level,
                            "{level.label()}"
                        }
                    }
                }
            }

            label { class: "field",
                span { class: "field__label", "Domain (optional)" }
                input {
                    id: "setup-domain",
                    r#type: "text",
                    placeholder: "e.g. fintech, healthcare",
                    value: "{form.domain}",
                    oninput: move |evt: FormEvent| draft.write().domain = evt.value(),
                }
            }

            button {
                class: "btn btn-primary",
                id: "setup-start",
                r#type: "button",
                disabled: busy,
                onclick: move |_| on_action.call(InterviewAction::Start),
                "{start_label}"
            }
        }
    }
}
