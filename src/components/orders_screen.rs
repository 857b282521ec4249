use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_orders;
use crate::models::{Order, OrderStatus, ParcelSize, PaymentStatus};

const STATUS_OPTIONS: [OrderStatus; 7] = [
    OrderStatus::Pending,
    OrderStatus::Accepted,
    OrderStatus::PickedUp,
    OrderStatus::InTransit,
    OrderStatus::OutForDelivery,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
];

#[function_component(OrdersScreen)]
pub fn orders_screen() -> Html {
    let handle = use_orders();

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
            next.status = OrderStatus::parse_filter(&select.value());
            update_filters.emit(next);
        })
    };

    let on_payment_filter = {
        let filters = handle.filters.clone();
        let update_filters = handle.update_filters.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*filters).clone();
            next.payment_status = PaymentStatus::parse_filter(&select.value());
            update_filters.emit(next);
        })
    };

    let on_size_filter = {
        let filters = handle.filters.clone();
        let update_filters = handle.update_filters.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*filters).clone();
            next.parcel_size = ParcelSize::parse_filter(&select.value());
            update_filters.emit(next);
        })
    };

    let (active, completed, cancelled) = handle.status_summary();
    let pagination = handle.orders.pagination.clone();

    let on_prev = {
        let go_to_page = handle.go_to_page.clone();
        let page = pagination.current_page;
        Callback::from(move |_: MouseEvent| {
            go_to_page.emit(page.saturating_sub(1).max(1));
        })
    };

    let on_next = {
        let go_to_page = handle.go_to_page.clone();
        let page = pagination.current_page;
        Callback::from(move |_: MouseEvent| {
            go_to_page.emit(page + 1);
        })
    };

    let on_refresh = handle.refresh.reform(|_: MouseEvent| ());

    html! {
        <section class="orders-screen">
            <div class="screen-toolbar">
                <input
                    type="search"
                    placeholder="Search by tracking number or customer"
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
                <select onchange={on_payment_filter}>
                    <option value="all" selected={handle.filters.payment_status.is_none()}>{"All payments"}</option>
                    <option value="PENDING">{"PENDING"}</option>
                    <option value="PAID">{"PAID"}</option>
                    <option value="REFUNDED">{"REFUNDED"}</option>
                </select>
                <select onchange={on_size_filter}>
                    <option value="all" selected={handle.filters.parcel_size.is_none()}>{"All sizes"}</option>
                    <option value="small">{"small"}</option>
                    <option value="medium">{"medium"}</option>
                    <option value="large">{"large"}</option>
                </select>
                <button onclick={on_refresh}>{"Refresh"}</button>
            </div>

            <p class="screen-summary">
                { format!("{} in progress · {} delivered · {} cancelled", active, completed, cancelled) }
            </p>

            if handle.orders.loading {
                <p class="screen-loading">{"Loading orders..."}</p>
            }
            if let Some(error) = &handle.orders.error {
                <p class="screen-error">{ error.clone() }</p>
            }

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Tracking"}</th>
                        <th>{"Customer"}</th>
                        <th>{"Rider"}</th>
                        <th>{"Size"}</th>
                        <th>{"Fee"}</th>
                        <th>{"Payment"}</th>
                        <th>{"Status"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for handle.orders.items.iter().map(|order| order_row(
                        order,
                        handle.update_status.clone(),
                        handle.update_payment.clone(),
                    )) }
                </tbody>
            </table>

            <div class="pagination">
                <button disabled={!pagination.has_prev()} onclick={on_prev}>{"Previous"}</button>
                <span>{ format!("Page {} of {} · {} orders", pagination.current_page, pagination.total_pages.max(1), pagination.total_items) }</span>
                <button disabled={!pagination.has_next()} onclick={on_next}>{"Next"}</button>
            </div>
        </section>
    }
}

fn order_row(
    order: &Order,
    update_status: Callback<(String, OrderStatus)>,
    update_payment: Callback<(String, PaymentStatus)>,
) -> Html {
    let order_id = order.id.clone();
    let on_status_change = {
        let order_id = order_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(status) = OrderStatus::parse_filter(&select.value()) {
                update_status.emit((order_id.clone(), status));
            }
        })
    };

    let on_mark_paid = {
        let order_id = order_id.clone();
        Callback::from(move |_: MouseEvent| {
            update_payment.emit((order_id.clone(), PaymentStatus::Paid));
        })
    };

    let rider_name = order
        .rider
        .as_ref()
        .map(|r| r.name.clone())
        .unwrap_or_else(|| "—".to_string());

    html! {
        <tr key={order.id.clone()}>
            <td>{ order.tracking_number.clone() }</td>
            <td>{ order.customer.email.clone() }</td>
            <td>{ rider_name }</td>
            <td>{ order.parcel_size.as_str() }</td>
            <td>{ format!("{:.2} €", order.delivery_fee) }</td>
            <td>{ order.payment_status.as_str() }</td>
            <td>
                <select onchange={on_status_change}>
                    { for STATUS_OPTIONS.iter().map(|status| html! {
                        <option
                            value={status.as_str()}
                            selected={order.status == *status}
                        >
                            { status.as_str() }
                        </option>
                    }) }
                </select>
            </td>
            <td>
                if order.payment_status == PaymentStatus::Pending {
                    <button onclick={on_mark_paid}>{"Mark paid"}</button>
                }
            </td>
        </tr>
    }
}
