use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_active_riders;
use crate::models::Rider;

/// Vista "en vivo" de la flota. El renderizado del mapa real queda fuera de
/// esta capa; aquí se pinta la lista con la última posición reportada, que
/// el hook refresca solo en cada poll.
#[function_component(LiveMapScreen)]
pub fn live_map_screen() -> Html {
    let handle = use_active_riders();
    let on_refresh = handle.refresh.reform(|_: MouseEvent| ());

    html! {
        <section class="live-map-screen">
            <div class="screen-toolbar">
                <h2>{ format!("Active riders: {}", handle.riders.items.len()) }</h2>
                <span class="poll-note">
                    { format!("auto-refresh every {}s", CONFIG.active_riders_poll_secs) }
                </span>
                <button onclick={on_refresh}>{"Refresh now"}</button>
            </div>

            if handle.riders.loading {
                <p class="screen-loading">{"Updating positions..."}</p>
            }
            if let Some(error) = &handle.riders.error {
                <p class="screen-error">{ error.clone() }</p>
            }

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Rider"}</th>
                        <th>{"Status"}</th>
                        <th>{"Available"}</th>
                        <th>{"Last position"}</th>
                        <th>{"Reported at"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for handle.riders.items.iter().map(rider_row) }
                </tbody>
            </table>
        </section>
    }
}

fn rider_row(rider: &Rider) -> Html {
    let (position, reported_at) = match &rider.current_location {
        Some(location) => (
            format!(
                "{:.5}, {:.5}{}",
                location.coordinates.latitude,
                location.coordinates.longitude,
                location
                    .address
                    .as_ref()
                    .map(|a| format!(" ({})", a))
                    .unwrap_or_default()
            ),
            location.updated_at.format("%H:%M:%S").to_string(),
        ),
        None => ("no position yet".to_string(), "—".to_string()),
    };

    html! {
        <tr key={rider.id.clone()}>
            <td>{ rider.name.clone() }</td>
            <td>{ rider.status.as_str() }</td>
            <td>{ if rider.availability { "yes" } else { "no" } }</td>
            <td>{ position }</td>
            <td>{ reported_at }</td>
        </tr>
    }
}
