use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::{LoginForm, Portal};

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<LoginForm>,
    pub loading: bool,
    pub error: Option<String>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let remember_ref = use_node_ref();
    let portal = use_state(|| Portal::Admin);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let remember_ref = remember_ref.clone();
        let portal = portal.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value();
                let password = password_input.value();

                if email.is_empty() || password.is_empty() {
                    web_sys::window()
                        .unwrap()
                        .alert_with_message("Please fill in email and password")
                        .ok();
                    return;
                }

                let remember_me = remember_ref
                    .cast::<HtmlInputElement>()
                    .map(|input| input.checked())
                    .unwrap_or(false);

                on_login.emit(LoginForm {
                    email,
                    password,
                    remember_me,
                    portal: *portal,
                });
            }
        })
    };

    let toggle_portal = {
        let portal = portal.clone();
        Callback::from(move |_: MouseEvent| {
            let next = match *portal {
                Portal::Admin => Portal::Customer,
                Portal::Customer => Portal::Admin,
            };
            portal.set(next);
        })
    };

    let google_url = format!("{}/auth/google", CONFIG.backend_url());
    let portal_label = match *portal {
        Portal::Admin => "Admin portal",
        Portal::Customer => "Customer portal",
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🚚"}</div>
                    </div>
                    <h1>{"Fleet Admin"}</h1>
                    <p>{ portal_label }</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="you@company.com"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Your password"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group remember">
                        <input type="checkbox" id="remember" ref={remember_ref} />
                        <label for="remember">{"Remember me"}</label>
                    </div>

                    if let Some(message) = &props.error {
                        <p class="login-error">{ message.clone() }</p>
                    }

                    <button type="submit" class="btn-login" disabled={props.loading}>
                        <span class="btn-text">
                            { if props.loading { "Signing in..." } else { "Sign in" } }
                        </span>
                    </button>

                    <a class="btn-google" href={google_url}>
                        {"Continue with Google"}
                    </a>

                    <div class="login-footer">
                        <button type="button" class="btn-portal-link" onclick={toggle_portal}>
                            {
                                match *portal {
                                    Portal::Admin => "Customer? Sign in here",
                                    Portal::Customer => "Back to admin sign in",
                                }
                            }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
