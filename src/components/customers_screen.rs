use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_customers;
use crate::models::{Customer, CustomerStatus};

const STATUS_OPTIONS: [CustomerStatus; 3] = [
    CustomerStatus::Active,
    CustomerStatus::Inactive,
    CustomerStatus::Suspended,
];

#[function_component(CustomersScreen)]
pub fn customers_screen() -> Html {
    let handle = use_customers();

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
            next.status = CustomerStatus::parse_filter(&select.value());
            update_filters.emit(next);
        })
    };

    let pagination = handle.customers.pagination.clone();
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
        <section class="customers-screen">
            <div class="screen-toolbar">
                <input
                    type="search"
                    placeholder="Search customers by name or email"
                    oninput={on_search}
                />
                <select onchange={on_status_filter}>
                    <option value="all" selected={handle.filters.status.is_none()}>{"All statuses"}</option>
                    { for STATUS_OPTIONS.iter().map(|status| html! {
                        <option
                            value={status.as_str()}
                            selected={handle.filters.status == Some(*status)}
                        >
                            { status.as_str() }
                        </option>
                    }) }
                </select>
                <button onclick={on_refresh}>{"Refresh"}</button>
            </div>

            <p class="screen-summary">
                { format!(
                    "{} active · {} verified (this page)",
                    handle.active_customers().len(),
                    handle.verified_customers().len()
                ) }
            </p>

            if handle.customers.loading {
                <p class="screen-loading">{"Loading customers..."}</p>
            }
            if let Some(error) = &handle.customers.error {
                <p class="screen-error">{ error.clone() }</p>
            }

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Verified"}</th>
                        <th>{"Orders"}</th>
                        <th>{"Spent"}</th>
                        <th>{"Status"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for handle.customers.items.iter().map(|customer| customer_row(
                        customer,
                        handle.update_status.clone(),
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

fn customer_row(customer: &Customer, update_status: Callback<(String, CustomerStatus)>) -> Html {
    let customer_id = customer.id.clone();
    let on_status_change = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        if let Some(status) = CustomerStatus::parse_filter(&select.value()) {
            update_status.emit((customer_id.clone(), status));
        }
    });

    html! {
        <tr key={customer.id.clone()}>
            <td>{ customer.name.clone().unwrap_or_else(|| "—".to_string()) }</td>
            <td>{ customer.email.clone() }</td>
            <td>{ if customer.is_verified { "✓" } else { "—" } }</td>
            <td>{ customer.total_orders }</td>
            <td>{ format!("{:.2} €", customer.total_spent) }</td>
            <td>
                <select onchange={on_status_change}>
                    { for STATUS_OPTIONS.iter().map(|status| html! {
                        <option
                            value={status.as_str()}
                            selected={customer.status == *status}
                        >
                            { status.as_str() }
                        </option>
                    }) }
                </select>
            </td>
        </tr>
    }
}
