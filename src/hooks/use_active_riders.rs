// ============================================================================
// USE ACTIVE RIDERS - Riders en ruta para el mapa en vivo
// ============================================================================
// Único hook con refresco implícito: poll cada 30s mientras la pantalla
// está montada. El intervalo vive en un use_mut_ref y muere con el cleanup
// del efecto. Un poll solapado con un refresh manual se resuelve con el
// mismo guard de secuencia que el resto de hooks.
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::collection::{is_latest_ticket, next_fetch_ticket, Collection};
use crate::models::{Pagination, Rider};
use crate::services::{auth_service, rider_service};

pub struct UseActiveRidersHandle {
    pub riders: UseStateHandle<Collection<Rider>>,
    pub refresh: Callback<()>,
}

impl UseActiveRidersHandle {
    pub fn available_riders(&self) -> Vec<Rider> {
        self.riders.items.iter().filter(|r| r.availability).cloned().collect()
    }
}

#[hook]
pub fn use_active_riders() -> UseActiveRidersHandle {
    let riders = use_state(Collection::<Rider>::default);
    let seq = use_mut_ref(|| 0u64);
    let interval_handle = use_mut_ref(|| None::<Interval>);

    let run_fetch: Rc<dyn Fn()> = {
        let riders = riders.clone();
        let seq = seq.clone();
        Rc::new(move || {
            let riders = riders.clone();
            let seq = seq.clone();
            let ticket = next_fetch_ticket(&seq);

            let mut next = (*riders).clone();
            next.begin_loading();
            riders.set(next);

            wasm_bindgen_futures::spawn_local(async move {
                let token = auth_service::get_token();
                match rider_service::fetch_active_riders(token.as_deref()).await {
                    Ok(fetched) => {
                        if is_latest_ticket(&seq, ticket) {
                            let mut pagination = Pagination::default();
                            pagination.total_items = fetched.len() as u64;
                            riders.set(Collection::loaded(fetched, pagination));
                        }
                    }
                    Err(e) => {
                        // Los errores del poll solo quedan en el estado;
                        // nada de toasts cada 30 segundos
                        if is_latest_ticket(&seq, ticket) {
                            log::error!("❌ Error obteniendo riders activos: {}", e);
                            let mut next = (*riders).clone();
                            next.fail(e.to_string());
                            riders.set(next);
                        }
                    }
                }
            });
        })
    };

    // Fetch inicial + poll periódico mientras el componente viva
    {
        let run_fetch = run_fetch.clone();
        let interval_handle = interval_handle.clone();

        use_effect_with((), move |_| {
            run_fetch();

            let poll_ms = CONFIG.active_riders_poll_secs * 1000;
            log::info!("⏰ Poll de riders activos cada {}s", CONFIG.active_riders_poll_secs);

            let run_fetch_tick = run_fetch.clone();
            let interval = Interval::new(poll_ms, move || {
                run_fetch_tick();
            });
            *interval_handle.borrow_mut() = Some(interval);

            move || {
                *interval_handle.borrow_mut() = None;
            }
        });
    }

    let refresh = {
        let run_fetch = run_fetch.clone();
        Callback::from(move |_| {
            run_fetch();
        })
    };

    UseActiveRidersHandle { riders, refresh }
}
