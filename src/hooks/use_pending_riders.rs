// ============================================================================
// USE PENDING RIDERS - Cola de solicitudes de onboarding
// ============================================================================
// Las solicitudes llegan planas del backend y se transforman aquí en el view
// model del workflow. Aprobar/rechazar NO muta el estado local del item: la
// solicitud simplemente sale de la cola de pendientes.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::collection::{is_latest_ticket, next_fetch_ticket, Collection};
use crate::models::{ListFilters, OnboardingApplication, PendingFilters};
use crate::services::{auth_service, rider_service};
use crate::utils::show_alert;

pub struct UsePendingRidersHandle {
    pub applications: UseStateHandle<Collection<OnboardingApplication>>,
    pub filters: UseStateHandle<PendingFilters>,
    pub fetch: Callback<PendingFilters>,
    pub update_filters: Callback<PendingFilters>,
    pub go_to_page: Callback<u32>,
    pub refresh: Callback<()>,
    /// Atajo permitido desde cualquier paso; el backend es la autoridad.
    /// La UI consulta `approval_eligibility()` para etiquetar el botón.
    pub approve: Callback<String>,
    pub reject: Callback<(String, Option<String>)>,
}

impl UsePendingRidersHandle {
    pub fn total_riders(&self) -> u64 {
        self.applications.pagination.total_items
    }
}

#[hook]
pub fn use_pending_riders() -> UsePendingRidersHandle {
    let applications = use_state(Collection::<OnboardingApplication>::default);
    let filters = use_state(PendingFilters::default);
    let seq = use_mut_ref(|| 0u64);

    let run_fetch: Rc<dyn Fn(PendingFilters)> = {
        let applications = applications.clone();
        let seq = seq.clone();
        Rc::new(move |query: PendingFilters| {
            let applications = applications.clone();
            let seq = seq.clone();
            let ticket = next_fetch_ticket(&seq);

            let mut next = (*applications).clone();
            next.begin_loading();
            applications.set(next);

            wasm_bindgen_futures::spawn_local(async move {
                let token = auth_service::get_token();
                match rider_service::fetch_pending_riders(token.as_deref(), &query).await {
                    Ok(response) => {
                        if is_latest_ticket(&seq, ticket) {
                            let views = response
                                .riders
                                .iter()
                                .map(OnboardingApplication::from_record)
                                .collect();
                            applications.set(Collection::loaded(views, response.pagination));
                        }
                    }
                    Err(e) => {
                        if is_latest_ticket(&seq, ticket) {
                            log::error!("❌ Error obteniendo solicitudes: {}", e);
                            let mut next = (*applications).clone();
                            next.fail(e.to_string());
                            applications.set(next);
                        }
                    }
                }
            });
        })
    };

    {
        let run_fetch = run_fetch.clone();
        let initial = (*filters).clone();
        use_effect_with((), move |_| {
            run_fetch(initial);
            || ()
        });
    }

    let fetch = {
        let run_fetch = run_fetch.clone();
        let filters = filters.clone();
        Callback::from(move |query: PendingFilters| {
            filters.set(query.clone());
            run_fetch(query);
        })
    };

    let update_filters = {
        let run_fetch = run_fetch.clone();
        let filters = filters.clone();
        Callback::from(move |mut next: PendingFilters| {
            next.set_page(1);
            filters.set(next.clone());
            run_fetch(next);
        })
    };

    let go_to_page = {
        let run_fetch = run_fetch.clone();
        let filters = filters.clone();
        Callback::from(move |page: u32| {
            let mut next = (*filters).clone();
            next.set_page(page);
            filters.set(next.clone());
            run_fetch(next);
        })
    };

    let refresh = {
        let run_fetch = run_fetch.clone();
        let filters = filters.clone();
        Callback::from(move |_| {
            run_fetch((*filters).clone());
        })
    };

    let approve = {
        let applications = applications.clone();
        Callback::from(move |application_id: String| {
            let applications = applications.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let token = auth_service::get_token();
                match rider_service::approve_rider(token.as_deref(), &application_id).await {
                    Ok(response) => {
                        log::info!("✅ {}", response.message);
                        let mut next = (*applications).clone();
                        next.remove_by_id(&application_id, |a| a.id.as_str());
                        applications.set(next);
                    }
                    Err(e) => {
                        log::error!("❌ Error aprobando {}: {}", application_id, e);
                        show_alert(&format!("Could not approve application: {}", e));
                        let mut next = (*applications).clone();
                        next.error = Some(e.to_string());
                        applications.set(next);
                    }
                }
            });
        })
    };

    let reject = {
        let applications = applications.clone();
        Callback::from(move |(application_id, reason): (String, Option<String>)| {
            let applications = applications.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let token = auth_service::get_token();
                match rider_service::reject_rider(token.as_deref(), &application_id, reason).await {
                    Ok(response) => {
                        log::info!("🚫 {}", response.message);
                        let mut next = (*applications).clone();
                        next.remove_by_id(&application_id, |a| a.id.as_str());
                        applications.set(next);
                    }
                    Err(e) => {
                        log::error!("❌ Error rechazando {}: {}", application_id, e);
                        show_alert(&format!("Could not reject application: {}", e));
                        let mut next = (*applications).clone();
                        next.error = Some(e.to_string());
                        applications.set(next);
                    }
                }
            });
        })
    };

    UsePendingRidersHandle {
        applications,
        filters,
        fetch,
        update_filters,
        go_to_page,
        refresh,
        approve,
        reject,
    }
}
