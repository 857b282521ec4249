use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_riders;
use crate::models::{Rider, RiderStatus};

#[function_component(RidersScreen)]
pub fn riders_screen() -> Html {
    let handle = use_riders();

    let on_search = {
        let set_search = handle.set_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_search.emit(input.value());
        })
    };

    let on_status_filter = {
        let filters = handle.filters.clone();
        let update_filters = handle.update_filters.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*filters).clone();
            next.status = RiderStatus::parse_filter(&select.value());
            update_filters.emit(next);
        })
    };

    let pagination = handle.riders.pagination.clone();
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
    let on_refresh = handle.refresh.reform(|_: MouseEvent| ());

    html! {
        <section class="riders-screen">
            <div class="screen-toolbar">
                <input
                    type="search"
                    placeholder="Search riders by name or email"
                    oninput={on_search}
                />
                <select onchange={on_status_filter}>
                    <option value="all" selected={handle.filters.status.is_none()}>{"All statuses"}</option>
                    <option value="ACTIVE">{"ACTIVE"}</option>
                    <option value="ONLINE">{"ONLINE"}</option>
                    <option value="OFFLINE">{"OFFLINE"}</option>
                    <option value="SUSPENDED">{"SUSPENDED"}</option>
                </select>
                <button onclick={on_refresh}>{"Refresh"}</button>
            </div>

            <p class="screen-summary">
                { format!("{} connected right now", handle.connected_riders().len()) }
            </p>

            if handle.riders.loading {
                <p class="screen-loading">{"Loading riders..."}</p>
            }
            if let Some(error) = &handle.riders.error {
                <p class="screen-error">{ error.clone() }</p>
            }

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Vehicle"}</th>
                        <th>{"Status"}</th>
                        <th>{"Deliveries"}</th>
                        <th>{"Rating"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for handle.riders.items.iter().map(|rider| rider_row(
                        rider,
                        handle.update_status.clone(),
                        handle.delete_rider.clone(),
                    )) }
                </tbody>
            </table>

            <div class="pagination">
                <button disabled={!pagination.has_prev()} onclick={on_prev}>{"Previous"}</button>
                <span>{ format!("Page {} of {}", pagination.current_page, pagination.total_pages.max(1)) }</span>
                <button disabled={!pagination.has_next()} onclick={on_next}>{"Next"}</button>
            </div>
        </section>
    }
}

fn rider_row(
    rider: &Rider,
    update_status: Callback<(String, RiderStatus)>,
    delete_rider: Callback<String>,
) -> Html {
    let is_suspended = rider.status == RiderStatus::Suspended;

    let on_toggle_suspend = {
        let rider_id = rider.id.clone();
        let update_status = update_status.clone();
        Callback::from(move |_: MouseEvent| {
            let next = if is_suspended {
                RiderStatus::Active
            } else {
                RiderStatus::Suspended
            };
            update_status.emit((rider_id.clone(), next));
        })
    };

    let on_delete = {
        let rider_id = rider.id.clone();
        Callback::from(move |_: MouseEvent| {
            delete_rider.emit(rider_id.clone());
        })
    };

    html! {
        <tr key={rider.id.clone()}>
            <td>{ rider.name.clone() }</td>
            <td>{ rider.email.clone() }</td>
            <td>{ rider.vehicle_details.vehicle_type.clone() }</td>
            <td>{ rider.status.as_str() }</td>
            <td>{ rider.performance.total_deliveries }</td>
            <td>{ format!("{:.1}", rider.performance.average_rating) }</td>
            <td>
                <button onclick={on_toggle_suspend}>
                    { if is_suspended { "Reactivate" } else { "Suspend" } }
                </button>
                <button class="btn-danger" onclick={on_delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}
