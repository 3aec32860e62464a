use dioxus::prelude::*;
use services::Notice;

#[component]
pub fn NoticeBanner(notice: Notice, on_dismiss: EventHandler<()>) -> Element {
    let class = format!("notice notice--{}", notice.kind().slug());
    let role = if notice.is_error() { "alert" } else { "status" };
    rsx! {
        div { class: "{class}", role: "{role}", id: "interview-notice",
            span { class: "notice__message", "{notice.message()}" }
            button {
                class: "notice__dismiss",
                r#type: "button",
                aria_label: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
