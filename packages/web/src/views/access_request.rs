//! Access-request creation form. Only approved people are offered.

use api::forms::AccessRequestFields;
use api::models::{approved_people, person_choices, ACCESS_TYPES, USER_TYPES};
use dioxus::prelude::*;
use ui::icons::FaKey;
use ui::{
    api_client, use_form_submit, use_remote_list, use_session, use_session_guard, CheckboxGroup,
    ErrorText, Icon, PageCard, SelectField, SubmitRow,
};

use crate::Route;

#[component]
pub fn AccessRequest() -> Element {
    use_session_guard();
    let session = use_session();
    let nav = use_navigator();

    let people = use_remote_list(move || {
        let client = api_client(&session.peek());
        async move { client.list_people().await.map(approved_people) }
    });

    let mut user_id = use_signal(String::new);
    let mut user_type = use_signal(String::new);
    let mut selected_access = use_signal(Vec::<String>::new);
    let form = use_form_submit();

    let toggle_access = move |(name, checked): (String, bool)| {
        let mut selected = selected_access.write();
        if checked {
            if !selected.contains(&name) {
                selected.push(name);
            }
        } else {
            selected.retain(|item| item != &name);
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let fields = AccessRequestFields {
            user_id: user_id(),
            user_type: user_type(),
            access_types: selected_access(),
        };
        let client = api_client(&session());
        form.run(
            session,
            fields.new_request(),
            |payload| async move { client.create_access_request(&payload).await },
            "Solicitud de acceso creada exitosamente!",
            move || {
                nav.push(Route::Dashboard {});
            },
        );
    };

    let choices = person_choices(&people.items.read());
    let no_people = !people.loading() && choices.is_empty();

    rsx! {
        PageCard {
            title: "Solicitud de Accesos",
            blurb: "Complete este formulario para solicitar acceso a aplicaciones o sistemas.",
            icon: rsx! { Icon { width: 28, height: 28, fill: "white", icon: FaKey } },

            form {
                onsubmit: handle_submit,

                if no_people {
                    p { class: "form-error", "No hay usuarios aprobados disponibles para seleccionar." }
                } else {
                    SelectField {
                        id: "usuario",
                        label: "Nombre del Usuario",
                        value: user_id(),
                        disabled: people.loading(),
                        onchange: move |evt: FormEvent| user_id.set(evt.value()),

                        option { value: "", disabled: true, "Seleccione un usuario" }
                        for (id, name) in choices.clone() {
                            option { key: "{id}", value: "{id}", "{name}" }
                        }
                    }
                }

                SelectField {
                    id: "tipoUsuario",
                    label: "Tipo de Usuario",
                    value: user_type(),
                    onchange: move |evt: FormEvent| user_type.set(evt.value()),

                    option { value: "", disabled: true, "Seleccione un tipo" }
                    for kind in USER_TYPES {
                        option { key: "{kind}", value: "{kind}", "{kind}" }
                    }
                }

                CheckboxGroup {
                    label: "Accesos Solicitados",
                    options: ACCESS_TYPES.iter().map(|item| item.to_string()).collect::<Vec<_>>(),
                    selected: selected_access(),
                    on_toggle: toggle_access,
                }

                if let Some(message) = people.error() {
                    p { class: "form-error", "{message}" }
                }

                ErrorText { message: form.error() }

                SubmitRow {
                    busy: form.busy(),
                    disabled: people.loading() || no_people,
                    idle_label: "Enviar Solicitud",
                    busy_label: "Enviando...",
                    on_cancel: move |_| { nav.push(Route::Dashboard {}); },
                }
            }
        }
    }
}
