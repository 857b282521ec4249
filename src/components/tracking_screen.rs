use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{Order, OrderStatus};
use crate::services::order_service;

/// Autoservicio del cliente: consulta pública por número de seguimiento.
/// No pasa por los hooks de colección; es una consulta puntual sin sesión.
#[function_component(TrackingScreen)]
pub fn tracking_screen() -> Html {
    let input_ref = use_node_ref();
    let result = use_state(|| None::<Order>);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_submit = {
        let input_ref = input_ref.clone();
        let result = result.clone();
        let loading = loading.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let tracking_number = input.value().trim().to_string();
            if tracking_number.is_empty() {
                return;
            }

            let result = result.clone();
            let loading = loading.clone();
            let error = error.clone();

            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                error.set(None);

                match order_service::track_order(&tracking_number).await {
                    Ok(order) => {
                        result.set(Some(order));
                        loading.set(false);
                    }
                    Err(e) => {
                        log::error!("❌ Error en tracking {}: {}", tracking_number, e);
                        result.set(None);
                        error.set(Some(e.to_string()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <section class="tracking-screen">
            <form class="tracking-form" onsubmit={on_submit}>
                <input
                    type="text"
                    placeholder="Tracking number"
                    ref={input_ref}
                />
                <button type="submit" disabled={*loading}>
                    { if *loading { "Searching..." } else { "Track" } }
                </button>
            </form>

            if let Some(message) = &*error {
                <p class="screen-error">{ message.clone() }</p>
            }

            if let Some(order) = &*result {
                <div class="tracking-result">
                    <h3>{ order.tracking_number.clone() }</h3>
                    <ul class="tracking-timeline">
                        { for timeline(order.status) }
                    </ul>
                    <p>{ format!("From: {}", order.pickup_address) }</p>
                    <p>{ format!("To: {}", order.delivery_address) }</p>
                    <p>{ format!("Last update: {}", order.updated_at.format("%Y-%m-%d %H:%M")) }</p>
                </div>
            }
        </section>
    }
}

const TIMELINE: [OrderStatus; 6] = [
    OrderStatus::Pending,
    OrderStatus::Accepted,
    OrderStatus::PickedUp,
    OrderStatus::InTransit,
    OrderStatus::OutForDelivery,
    OrderStatus::Delivered,
];

fn timeline(current: OrderStatus) -> Vec<Html> {
    if current == OrderStatus::Cancelled {
        return vec![html! { <li class="step cancelled">{"CANCELLED"}</li> }];
    }

    let mut reached = true;
    TIMELINE
        .iter()
        .map(|step| {
            let class = if reached { "step reached" } else { "step" };
            if *step == current {
                reached = false;
            }
            html! { <li class={class}>{ step.as_str() }</li> }
        })
        .collect()
}
