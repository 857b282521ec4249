use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::collection::{is_latest_ticket, next_fetch_ticket, Collection};
use crate::hooks::use_debounce::use_debounced_callback;
use crate::models::{Customer, CustomerFilters, CustomerStatus, ListFilters};
use crate::services::{auth_service, customer_service};
use crate::utils::show_alert;

pub struct UseCustomersHandle {
    pub customers: UseStateHandle<Collection<Customer>>,
    pub filters: UseStateHandle<CustomerFilters>,
    pub fetch: Callback<CustomerFilters>,
    pub update_filters: Callback<CustomerFilters>,
    pub set_search: Callback<String>,
    pub go_to_page: Callback<u32>,
    pub refresh: Callback<()>,
    pub update_status: Callback<(String, CustomerStatus)>,
}

impl UseCustomersHandle {
    pub fn active_customers(&self) -> Vec<Customer> {
        self.customers.items.iter().filter(|c| c.is_active()).cloned().collect()
    }

    pub fn verified_customers(&self) -> Vec<Customer> {
        self.customers.items.iter().filter(|c| c.is_verified).cloned().collect()
    }
}

#[hook]
pub fn use_customers() -> UseCustomersHandle {
    let customers = use_state(Collection::<Customer>::default);
    let filters = use_state(CustomerFilters::default);
    let seq = use_mut_ref(|| 0u64);

    let run_fetch: Rc<dyn Fn(CustomerFilters)> = {
        let customers = customers.clone();
        let seq = seq.clone();
        Rc::new(move |query: CustomerFilters| {
            let customers = customers.clone();
            let seq = seq.clone();
            let ticket = next_fetch_ticket(&seq);

            let mut next = (*customers).clone();
            next.begin_loading();
            customers.set(next);

            wasm_bindgen_futures::spawn_local(async move {
                let token = auth_service::get_token();
                match customer_service::fetch_customers(token.as_deref(), &query).await {
                    Ok(response) => {
                        if is_latest_ticket(&seq, ticket) {
                            customers
                                .set(Collection::loaded(response.customers, response.pagination));
                        }
                    }
                    Err(e) => {
                        if is_latest_ticket(&seq, ticket) {
                            log::error!("❌ Error obteniendo clientes: {}", e);
                            let mut next = (*customers).clone();
                            next.fail(e.to_string());
                            customers.set(next);
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
        Callback::from(move |query: CustomerFilters| {
            filters.set(query.clone());
            run_fetch(query);
        })
    };

    let update_filters = {
        let run_fetch = run_fetch.clone();
        let filters = filters.clone();
        Callback::from(move |mut next: CustomerFilters| {
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
        let customers = customers.clone();
        Callback::from(move |(customer_id, status): (String, CustomerStatus)| {
            let customers = customers.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let token = auth_service::get_token();
                match customer_service::update_customer_status(
                    token.as_deref(),
                    &customer_id,
                    status,
                )
                .await
                {
                    Ok(response) => {
                        let mut next = (*customers).clone();
                        next.patch_by_id(&customer_id, |c| c.id.as_str(), response.customer);
                        customers.set(next);
                    }
                    Err(e) => {
                        log::error!("❌ Error actualizando cliente {}: {}", customer_id, e);
                        show_alert(&format!("Could not update customer: {}", e));
                        let mut next = (*customers).clone();
                        next.error = Some(e.to_string());
                        customers.set(next);
                    }
                }
            });
        })
    };

    UseCustomersHandle {
        customers,
        filters,
        fetch,
        update_filters,
        set_search,
        go_to_page,
        refresh,
        update_status,
    }
}
