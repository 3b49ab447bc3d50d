use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;

use ecobot_core::model::{RespondentKind, Speaker};
use ecobot_core::tips::{Tip, VerdictSeverity};
use services::Submission;

use crate::context::AppContext;
use crate::vm::{ChatIntent, ChatVm, InputMode};

/// Pause between the final answer and the results reveal. Presentation
/// pacing only; nothing depends on it for correctness.
const RESULTS_DELAY: Duration = Duration::from_secs(1);

#[component]
pub fn ChatView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(move || {
        let mut vm = ChatVm::new(&ctx.interviews());
        if let Some(kind) = ctx.take_preselected_kind() {
            vm.choose_kind(kind);
        }
        vm
    });
    let mut input = use_signal(String::new);

    let dispatch = use_callback(move |intent: ChatIntent| {
        let mut vm = vm;
        match intent {
            ChatIntent::ChooseKind(kind) => {
                vm.write().choose_kind(kind);
            }
            ChatIntent::Reply(raw) => {
                let outcome = vm.write().submit(&raw);
                if outcome != Submission::Ignored {
                    input.set(String::new());
                }
                if outcome == Submission::Complete {
                    spawn(async move {
                        tokio::time::sleep(RESULTS_DELAY).await;
                        vm.write().finalize();
                    });
                }
            }
            ChatIntent::Reset => {
                vm.write().reset();
                input.set(String::new());
            }
        }
    });

    let on_send = use_callback(move |()| {
        let raw = input();
        if raw.trim().is_empty() {
            return;
        }
        dispatch.call(ChatIntent::Reply(raw));
    });

    let vm_guard = vm.read();
    let turns = vm_guard.turns();
    let mode = vm_guard.input_mode();
    let total_label = vm_guard.total_label();
    let report = vm_guard.report().cloned();
    drop(vm_guard);

    rsx! {
        div { class: "page chat-page",
            div { class: "chat-card",
                div { class: "chat-log",
                    for (index, turn) in turns.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: if turn.speaker == Speaker::User { "chat-turn chat-turn--user" } else { "chat-turn chat-turn--bot" },
                            span { class: "chat-turn__avatar",
                                if turn.speaker == Speaker::Bot { "🌱" } else { "🙂" }
                            }
                            div { class: "chat-turn__bubble",
                                p { class: "chat-turn__text", "{turn.content}" }
                                span { class: "chat-turn__time", "{turn.time_label}" }
                            }
                        }
                    }
                }
            }

            match mode {
                InputMode::KindButtons => rsx! {
                    div { class: "choice-row",
                        ChoiceButton {
                            label: "Individual",
                            onpick: move |()| dispatch.call(ChatIntent::ChooseKind(RespondentKind::Individual)),
                        }
                        ChoiceButton {
                            label: "Company",
                            onpick: move |()| dispatch.call(ChatIntent::ChooseKind(RespondentKind::Company)),
                        }
                    }
                },
                InputMode::FuelButtons => rsx! {
                    ReplyButtons { replies: &[("Petrol", "petrol"), ("Diesel", "diesel")], on_intent: dispatch }
                },
                InputMode::HaulButtons => rsx! {
                    ReplyButtons { replies: &[("Short Haul", "short"), ("Long Haul", "long")], on_intent: dispatch }
                },
                InputMode::CommuteButtons => rsx! {
                    ReplyButtons {
                        replies: &[("Car", "car"), ("Bus", "bus"), ("Train/Metro", "train")],
                        on_intent: dispatch,
                    }
                },
                InputMode::Number => rsx! {
                    div { class: "input-row",
                        input {
                            class: "input-row__field",
                            id: "chat-input",
                            r#type: "number",
                            min: "0",
                            placeholder: "Enter your answer...",
                            value: "{input}",
                            oninput: move |evt| input.set(evt.value()),
                            onkeydown: move |evt| {
                                if evt.key() == Key::Enter {
                                    on_send.call(());
                                }
                            },
                        }
                        button {
                            class: "input-row__send",
                            id: "chat-send",
                            onclick: move |_| on_send.call(()),
                            "Send"
                        }
                    }
                },
                InputMode::AwaitingResults => rsx! {
                    p { class: "chat-waiting", "Crunching the numbers..." }
                },
                InputMode::Results => rsx! {
                    if let (Some(report), Some(total_label)) = (report, total_label) {
                        ResultsPanel {
                            total_label,
                            severity: report.verdict.severity,
                            verdict_message: report.verdict.message,
                            kind: report.kind,
                            tips: report.tips.clone(),
                            share_url: report.share_url.to_string(),
                            on_intent: dispatch,
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ChoiceButton(label: &'static str, onpick: EventHandler<()>) -> Element {
    rsx! {
        button { class: "choice-btn", onclick: move |_| onpick.call(()), "{label}" }
    }
}

#[component]
fn ReplyButtons(
    replies: &'static [(&'static str, &'static str)],
    on_intent: EventHandler<ChatIntent>,
) -> Element {
    rsx! {
        div { class: "choice-row",
            for (label, reply) in replies.iter().copied() {
                button {
                    key: "{reply}",
                    class: "choice-btn",
                    onclick: move |_| on_intent.call(ChatIntent::Reply(reply.to_string())),
                    "{label}"
                }
            }
        }
    }
}

#[component]
fn ResultsPanel(
    total_label: String,
    severity: VerdictSeverity,
    verdict_message: &'static str,
    kind: RespondentKind,
    tips: Vec<Tip>,
    share_url: String,
    on_intent: EventHandler<ChatIntent>,
) -> Element {
    let verdict_class = match severity {
        VerdictSeverity::Excellent => "results__verdict results__verdict--excellent",
        VerdictSeverity::Good => "results__verdict results__verdict--good",
        VerdictSeverity::Encourage => "results__verdict results__verdict--encourage",
    };
    let subtitle = match kind {
        RespondentKind::Individual => "That's your personal annual carbon footprint!",
        RespondentKind::Company => "That's your company's estimated annual carbon footprint!",
    };

    rsx! {
        div { class: "results",
            div { class: "results-card",
                span { class: "results__badge", "{total_label}" }
                p { class: verdict_class, "{verdict_message}" }
                p { class: "results__subtitle", "{subtitle}" }
            }

            if !tips.is_empty() {
                div { class: "results-card",
                    h3 { class: "results__heading", "💡 Your Personalized Action Plan" }
                    for (index, tip) in tips.iter().enumerate() {
                        TipCard { key: "{index}", tip: tip.clone() }
                    }
                }
            }

            div { class: "results-card results-card--motivation",
                h3 { class: "results__heading", "Every Action Matters! 🌱" }
                div { class: "motivation-grid",
                    MotivationItem { title: "Small Changes", detail: "Lead to big impacts over time" }
                    MotivationItem { title: "Join Millions", detail: "Working towards a sustainable future" }
                    MotivationItem { title: "Planet Earth", detail: "Needs heroes like you" }
                }
            }

            div { class: "results__actions",
                button {
                    class: "choice-btn",
                    id: "results-restart",
                    onclick: move |_| on_intent.call(ChatIntent::Reset),
                    "Calculate Again"
                }
                button {
                    class: "choice-btn choice-btn--primary",
                    id: "results-share",
                    onclick: move |_| {
                        let js = format!("window.open({share_url:?}, '_blank');");
                        let _ = eval(&js);
                    },
                    "Share My Impact"
                }
            }
        }
    }
}

#[component]
fn TipCard(tip: Tip) -> Element {
    rsx! {
        div { class: "tip-card",
            h4 { class: "tip-card__title", "{tip.title}" }
            p { class: "tip-card__description", "{tip.description}" }
            span { class: "tip-card__impact", "📉 {tip.impact}" }
        }
    }
}

#[component]
fn MotivationItem(title: &'static str, detail: &'static str) -> Element {
    rsx! {
        div { class: "motivation-item",
            span { class: "motivation-item__title", "{title}" }
            span { class: "motivation-item__detail", "{detail}" }
        }
    }
}
