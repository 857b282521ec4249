use yew::prelude::*;

use super::customers_screen::CustomersScreen;
use super::live_map_screen::LiveMapScreen;
use super::login_screen::LoginScreen;
use super::onboarding_screen::OnboardingScreen;
use super::orders_screen::OrdersScreen;
use super::riders_screen::RidersScreen;
use super::tracking_screen::TrackingScreen;
use crate::hooks::use_session;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Orders,
    Riders,
    Applications,
    Customers,
    LiveMap,
    Tracking,
}

impl Tab {
    fn label(&self) -> &'static str {
        match self {
            Tab::Orders => "Orders",
            Tab::Riders => "Riders",
            Tab::Applications => "Applications",
            Tab::Customers => "Customers",
            Tab::LiveMap => "Live map",
            Tab::Tracking => "Track a parcel",
        }
    }
}

const TABS: [Tab; 6] = [
    Tab::Orders,
    Tab::Riders,
    Tab::Applications,
    Tab::Customers,
    Tab::LiveMap,
    Tab::Tracking,
];

#[function_component(App)]
pub fn app() -> Html {
    let session = use_session();
    let active_tab = use_state(|| Tab::Orders);

    if !session.is_authenticated() {
        return html! {
            <LoginScreen
                on_login={session.login.clone()}
                loading={*session.loading}
                error={(*session.error).clone()}
            />
        };
    }

    let user_name = session
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();

    let on_logout = session.logout.reform(|_: MouseEvent| ());

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"Fleet Admin"}</h1>
                <nav class="app-tabs">
                    { for TABS.iter().map(|tab| {
                        let active_tab = active_tab.clone();
                        let tab = *tab;
                        let class = if *active_tab == tab { "tab active" } else { "tab" };
                        html! {
                            <button
                                class={class}
                                onclick={Callback::from(move |_| active_tab.set(tab))}
                            >
                                { tab.label() }
                            </button>
                        }
                    }) }
                </nav>
                <div class="app-user">
                    <span>{ user_name }</span>
                    <button class="btn-logout" onclick={on_logout}>{"Log out"}</button>
                </div>
            </header>

            <main class="app-content">
                {
                    match *active_tab {
                        Tab::Orders => html! { <OrdersScreen /> },
                        Tab::Riders => html! { <RidersScreen /> },
                        Tab::Applications => html! { <OnboardingScreen /> },
                        Tab::Customers => html! { <CustomersScreen /> },
                        Tab::LiveMap => html! { <LiveMapScreen /> },
                        Tab::Tracking => html! { <TrackingScreen /> },
                    }
                }
            </main>
        </div>
    }
}
