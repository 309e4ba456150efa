//! Login page view with the email/password form.

use api::models::Credentials;
use dioxus::prelude::*;
use ui::{api_client, sign_in, use_session, ErrorText, TextField};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let nav = use_navigator();

    // Already signed in: straight to the dashboard
    if session().is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            if email().trim().is_empty() || password().is_empty() {
                error.set(Some("Ingrese el correo y la contraseña.".to_string()));
                return;
            }

            loading.set(true);
            let credentials = Credentials {
                email: email().trim().to_string(),
                password: password(),
            };
            let client = api_client(&session());
            match client.login(&credentials).await {
                Ok(token) => {
                    sign_in(session, token);
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.user_message()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-container",

            div {
                class: "login-card",

                h1 { "Iniciar Sesión en Gestión de Ingresos y Recursos de Equipo" }

                if loading() {
                    p { class: "login-progress", "Iniciando sesión..." }
                }

                form {
                    onsubmit: handle_submit,

                    TextField {
                        id: "email",
                        label: "Correo Electrónico",
                        input_type: "email",
                        value: email(),
                        disabled: loading(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    TextField {
                        id: "password",
                        label: "Contraseña",
                        input_type: "password",
                        value: password(),
                        disabled: loading(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    ErrorText { message: error() }

                    button {
                        r#type: "submit",
                        class: "primary full-width",
                        disabled: loading(),
                        "Entrar"
                    }
                }
            }
        }
    }
}
