use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::collection::{is_latest_ticket, next_fetch_ticket, Collection};
use crate::hooks::use_debounce::use_debounced_callback;
use crate::models::{ListFilters, Rider, RiderFilters, RiderStatus};
use crate::services::{auth_service, rider_service};
use crate::utils::show_alert;

pub struct UseRidersHandle {
    pub riders: UseStateHandle<Collection<Rider>>,
    pub filters: UseStateHandle<RiderFilters>,
    pub fetch: Callback<RiderFilters>,
    pub update_filters: Callback<RiderFilters>,
    pub set_search: Callback<String>,
    pub go_to_page: Callback<u32>,
    pub refresh: Callback<()>,
    pub update_status: Callback<(String, RiderStatus)>,
    /// Borrado remoto + retirada de la lista local; nunca hard-delete local
    pub delete_rider: Callback<String>,
}

impl UseRidersHandle {
    pub fn connected_riders(&self) -> Vec<Rider> {
        self.riders.items.iter().filter(|r| r.is_connected()).cloned().collect()
    }

    pub fn suspended_riders(&self) -> Vec<Rider> {
        self.riders
            .items
            .iter()
            .filter(|r| r.status == RiderStatus::Suspended)
            .cloned()
            .collect()
    }
}

#[hook]
pub fn use_riders() -> UseRidersHandle {
    let riders = use_state(Collection::<Rider>::default);
    let filters = use_state(RiderFilters::default);
    let seq = use_mut_ref(|| 0u64);

    let run_fetch: Rc<dyn Fn(RiderFilters)> = {
        let riders = riders.clone();
        let seq = seq.clone();
        Rc::new(move |query: RiderFilters| {
            let riders = riders.clone();
            let seq = seq.clone();
            let ticket = next_fetch_ticket(&seq);

            let mut next = (*riders).clone();
            next.begin_loading();
            riders.set(next);

            wasm_bindgen_futures::spawn_local(async move {
                let token = auth_service::get_token();
                match rider_service::fetch_riders(token.as_deref(), &query).await {
                    Ok(response) => {
                        if is_latest_ticket(&seq, ticket) {
                            riders.set(Collection::loaded(response.riders, response.pagination));
                        }
                    }
                    Err(e) => {
                        if is_latest_ticket(&seq, ticket) {
                            log::error!("❌ Error obteniendo riders: {}", e);
                            let mut next = (*riders).clone();
                            next.fail(e.to_string());
                            riders.set(next);
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
        Callback::from(move |query: RiderFilters| {
            filters.set(query.clone());
            run_fetch(query);
        })
    };

    let update_filters = {
        let run_fetch = run_fetch.clone();
        let filters = filters.clone();
        Callback::from(move |mut next: RiderFilters| {
            next.set_page(1);
            filters.set(next.clone());
            run_fetch(next);
        })
    };

    let set_search = {
        let filters = filters.clone();
        let update_filters = update_filters.clone();
        let apply = Callback::from(move |term: String| {
            let mut next = (*filters).clone();
            next.search = term;
            update_filters.emit(next);
        });
        use_debounced_callback(apply, CONFIG.search_debounce_ms)
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

    let update_status = {
        let riders = riders.clone();
        Callback::from(move |(rider_id, status): (String, RiderStatus)| {
            let riders = riders.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let token = auth_service::get_token();
                match rider_service::update_rider_status(token.as_deref(), &rider_id, status).await
                {
                    Ok(response) => {
                        let mut next = (*riders).clone();
                        next.patch_by_id(&rider_id, |r| r.id.as_str(), response.rider);
                        riders.set(next);
                    }
                    Err(e) => {
                        log::error!("❌ Error actualizando rider {}: {}", rider_id, e);
                        show_alert(&format!("Could not update rider: {}", e));
                        let mut next = (*riders).clone();
                        next.error = Some(e.to_string());
                        riders.set(next);
                    }
                }
            });
        })
    };

    let delete_rider = {
        let riders = riders.clone();
        Callback::from(move |rider_id: String| {
            let riders = riders.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let token = auth_service::get_token();
                match rider_service::delete_rider(token.as_deref(), &rider_id).await {
                    Ok(_) => {
                        let mut next = (*riders).clone();
                        next.remove_by_id(&rider_id, |r| r.id.as_str());
                        riders.set(next);
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando rider {}: {}", rider_id, e);
                        show_alert(&format!("Could not delete rider: {}", e));
                        let mut next = (*riders).clone();
                        next.error = Some(e.to_string());
                        riders.set(next);
                    }
                }
            });
        })
    };

    UseRidersHandle {
        riders,
        filters,
        fetch,
        update_filters,
        set_search,
        go_to_page,
        refresh,
        update_status,
        delete_rider,
    }
}
