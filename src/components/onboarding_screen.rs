use yew::prelude::*;

use crate::hooks::use_pending_riders;
use crate::models::{DocumentStatus, OnboardingApplication, TrainingStatus};

#[function_component(OnboardingScreen)]
pub fn onboarding_screen() -> Html {
    let handle = use_pending_riders();

    let on_refresh = handle.refresh.reform(|_: MouseEvent| ());
    let pagination = handle.applications.pagination.clone();

    let on_prev = {
        let go_to_page = handle.go_to_page.clone();
        let page = pagination.current_page;
        Callback::from(move |_: MouseEvent| go_to_page.emit(page.saturating_sub(1).max(1)))
    };
    let on_next = {
        let go_to_page = handle.go_to_page.clone();
        let page = pagination.current_page;
        Callback::from(move |_: MouseEvent| go_to_page.emit(page + 1))
    };

    html! {
        <section class="onboarding-screen">
            <div class="screen-toolbar">
                <h2>{ format!("Pending applications: {}", handle.total_riders()) }</h2>
                <button onclick={on_refresh}>{"Refresh"}</button>
            </div>

            if handle.applications.loading {
                <p class="screen-loading">{"Loading applications..."}</p>
            }
            if let Some(error) = &handle.applications.error {
                <p class="screen-error">{ error.clone() }</p>
            }

            <div class="application-cards">
                { for handle.applications.items.iter().map(|application| application_card(
                    application,
                    handle.approve.clone(),
                    handle.reject.clone(),
                )) }
            </div>

            <div class="pagination">
                <button disabled={!pagination.has_prev()} onclick={on_prev}>{"Previous"}</button>
                <span>{ format!("Page {}", pagination.current_page) }</span>
                <button disabled={!pagination.has_next()} onclick={on_next}>{"Next"}</button>
            </div>
        </section>
    }
}

fn document_badge(status: DocumentStatus) -> &'static str {
    match status {
        DocumentStatus::Pending => "pending",
        DocumentStatus::Verified => "verified",
        DocumentStatus::Rejected => "rejected",
        DocumentStatus::Expired => "expired",
    }
}

fn training_badge(status: TrainingStatus) -> &'static str {
    match status {
        TrainingStatus::NotStarted => "not started",
        TrainingStatus::InProgress => "in progress",
        TrainingStatus::Completed => "completed",
        TrainingStatus::Failed => "failed",
    }
}

fn application_card(
    application: &OnboardingApplication,
    approve: Callback<String>,
    reject: Callback<(String, Option<String>)>,
) -> Html {
    let eligibility = application.approval_eligibility();

    let on_approve = {
        let id = application.id.clone();
        Callback::from(move |_: MouseEvent| approve.emit(id.clone()))
    };

    let on_reject = {
        let id = application.id.clone();
        Callback::from(move |_: MouseEvent| reject.emit((id.clone(), None)))
    };

    let approve_hint = match &eligibility {
        Ok(()) => "Ready for approval".to_string(),
        Err(blocker) => blocker.to_string(),
    };

    html! {
        <div class="application-card" key={application.id.clone()}>
            <div class="application-head">
                <h3>{ application.name.clone() }</h3>
                <span>{ application.email.clone() }</span>
                <span class="application-step">{ application.current_step_label() }</span>
            </div>

            <div class="progress-track">
                <div
                    class="progress-fill"
                    style={format!("width: {}%", application.progress)}
                />
                <span>{ format!("{}%", application.progress) }</span>
            </div>

            <div class="application-documents">
                <h4>{"Documents"}</h4>
                <ul>
                    { for application.documents.iter().map(|slot| html! {
                        <li class={format!("doc-{}", document_badge(slot.status))}>
                            { slot.kind.label() }
                            { " — " }
                            { document_badge(slot.status) }
                        </li>
                    }) }
                </ul>
            </div>

            <div class="application-training">
                <h4>{"Training"}</h4>
                <ul>
                    { for application.training.iter().map(|module| html! {
                        <li>
                            { module.name }
                            { if module.required { "" } else { " (optional)" } }
                            { " — " }
                            { training_badge(module.status) }
                        </li>
                    }) }
                </ul>
            </div>

            <div class="application-actions">
                <button
                    class={if eligibility.is_ok() { "btn-approve ready" } else { "btn-approve" }}
                    title={approve_hint.clone()}
                    onclick={on_approve}
                >
                    {"Approve"}
                </button>
                <button class="btn-reject" onclick={on_reject}>{"Reject"}</button>
                <span class="approve-hint">{ approve_hint }</span>
            </div>
        </div>
    }
}
