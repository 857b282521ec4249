use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::collection::{is_latest_ticket, next_fetch_ticket, Collection};
use crate::hooks::use_debounce::use_debounced_callback;
use crate::models::{ListFilters, Order, OrderFilters, OrderStatus, PaymentStatus};
use crate::services::{auth_service, order_service};
use crate::utils::show_alert;

pub struct UseOrdersHandle {
    pub orders: UseStateHandle<Collection<Order>>,
    pub filters: UseStateHandle<OrderFilters>,
    pub fetch: Callback<OrderFilters>,
    /// Cambiar filtros SIEMPRE vuelve a la página 1
    pub update_filters: Callback<OrderFilters>,
    /// Búsqueda con debounce: un fetch por ráfaga de tecleo, no por tecla
    pub set_search: Callback<String>,
    pub go_to_page: Callback<u32>,
    pub refresh: Callback<()>,
    pub update_status: Callback<(String, OrderStatus)>,
    pub update_payment: Callback<(String, PaymentStatus)>,
}

impl UseOrdersHandle {
    // Vistas derivadas: filtros puros sobre la lista canónica,
    // recalculados en cada render; nunca se fetchean por separado
    pub fn active_orders(&self) -> Vec<Order> {
        self.orders.items.iter().filter(|o| o.is_active()).cloned().collect()
    }

    pub fn completed_orders(&self) -> Vec<Order> {
        self.orders.items.iter().filter(|o| o.is_completed()).cloned().collect()
    }

    pub fn cancelled_orders(&self) -> Vec<Order> {
        self.orders.items.iter().filter(|o| o.is_cancelled()).cloned().collect()
    }

    /// (en curso, entregados, cancelados) de la página actual
    pub fn status_summary(&self) -> (usize, usize, usize) {
        let mut summary = (0, 0, 0);
        for order in &self.orders.items {
            if order.is_completed() {
                summary.1 += 1;
            } else if order.is_cancelled() {
                summary.2 += 1;
            } else {
                summary.0 += 1;
            }
        }
        summary
    }
}

#[hook]
pub fn use_orders() -> UseOrdersHandle {
    let orders = use_state(Collection::<Order>::default);
    let filters = use_state(OrderFilters::default);
    let seq = use_mut_ref(|| 0u64);

    // Fetch etiquetado: solo la respuesta con el ticket más reciente escribe
    let run_fetch: Rc<dyn Fn(OrderFilters)> = {
        let orders = orders.clone();
        let seq = seq.clone();
        Rc::new(move |query: OrderFilters| {
            let orders = orders.clone();
            let seq = seq.clone();
            let ticket = next_fetch_ticket(&seq);

            let mut next = (*orders).clone();
            next.begin_loading();
            orders.set(next);

            wasm_bindgen_futures::spawn_local(async move {
                let token = auth_service::get_token();
                match order_service::fetch_orders(token.as_deref(), &query).await {
                    Ok(response) => {
                        if is_latest_ticket(&seq, ticket) {
                            orders.set(Collection::loaded(response.orders, response.pagination));
                        } else {
                            log::info!("⏭️ Respuesta obsoleta de pedidos descartada");
                        }
                    }
                    Err(e) => {
                        if is_latest_ticket(&seq, ticket) {
                            log::error!("❌ Error obteniendo pedidos: {}", e);
                            let mut next = (*orders).clone();
                            next.fail(e.to_string());
                            orders.set(next);
                        }
                    }
                }
            });
        })
    };

    // Primer fetch al montar
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
        Callback::from(move |query: OrderFilters| {
            filters.set(query.clone());
            run_fetch(query);
        })
    };

    let update_filters = {
        let run_fetch = run_fetch.clone();
        let filters = filters.clone();
        Callback::from(move |mut next: OrderFilters| {
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

    // Mutación: API primero, parche local por id después; sin refetch.
    // Si falla, el estado local no se toca y el error sube como toast.
    let update_status = {
        let orders = orders.clone();
        Callback::from(move |(order_id, status): (String, OrderStatus)| {
            let current = (*orders).clone();
            let Some(order) = current.items.iter().find(|o| o.id == order_id) else {
                return;
            };
            if !order.status.can_transition_to(status) {
                log::warn!(
                    "⚠️ Transición inválida: {} → {}",
                    order.status.as_str(),
                    status.as_str()
                );
                show_alert(&format!(
                    "Invalid status change: {} → {}",
                    order.status.as_str(),
                    status.as_str()
                ));
                return;
            }

            let orders = orders.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let token = auth_service::get_token();
                match order_service::update_order_status(token.as_deref(), &order_id, status).await
                {
                    Ok(response) => {
                        let mut next = (*orders).clone();
                        next.patch_by_id(&order_id, |o| o.id.as_str(), response.order);
                        orders.set(next);
                    }
                    Err(e) => {
                        log::error!("❌ Error actualizando pedido {}: {}", order_id, e);
                        show_alert(&format!("Could not update order: {}", e));
                        let mut next = (*orders).clone();
                        next.error = Some(e.to_string());
                        orders.set(next);
                    }
                }
            });
        })
    };

    let update_payment = {
        let orders = orders.clone();
        Callback::from(move |(order_id, payment): (String, PaymentStatus)| {
            let orders = orders.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let token = auth_service::get_token();
                match order_service::update_payment_status(token.as_deref(), &order_id, payment)
                    .await
                {
                    Ok(response) => {
                        let mut next = (*orders).clone();
                        next.patch_by_id(&order_id, |o| o.id.as_str(), response.order);
                        orders.set(next);
                    }
                    Err(e) => {
                        log::error!("❌ Error actualizando pago de {}: {}", order_id, e);
                        show_alert(&format!("Could not update payment: {}", e));
                        let mut next = (*orders).clone();
                        next.error = Some(e.to_string());
                        orders.set(next);
                    }
                }
            });
        })
    };

    UseOrdersHandle {
        orders,
        filters,
        fetch,
        update_filters,
        set_search,
        go_to_page,
        refresh,
        update_status,
        update_payment,
    }
}
