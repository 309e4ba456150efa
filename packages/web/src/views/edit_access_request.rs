//! Access-request edit form. The record and the approved-person list load
//! in parallel; the checkbox state is seeded by splitting the stored
//! comma-joined access string.

use api::dates::display_date;
use api::forms::AccessRequestFields;
use api::models::{
    approved_people, person_choices, split_access_types, AccessRequest as AccessRequestRecord,
    ACCESS_TYPES, USER_TYPES,
};
use dioxus::prelude::*;
use ui::icons::FaKey;
use ui::{
    api_client, surface_error, use_form_submit, use_remote_list, use_session, use_session_guard,
    CheckboxGroup, ErrorText, Icon, PageCard, RecordLoad, SelectField, SubmitRow,
};

use crate::Route;

#[component]
pub fn EditAccessRequest(id: String) -> Element {
    use_session_guard();
    let session = use_session();
    let nav = use_navigator();

    let mut record = use_signal(|| RecordLoad::<AccessRequestRecord>::Loading);
    let mut user_id = use_signal(String::new);
    let mut user_type = use_signal(String::new);
    let mut selected_access = use_signal(Vec::<String>::new);
    let form = use_form_submit();

    let route_id = id.clone();
    let _loader = use_resource(move || {
        let id = route_id.clone();
        async move {
            let client = api_client(&session.peek());
            match client.access_request(&id).await {
                Ok(request) => {
                    user_id.set(
                        request
                            .user_id
                            .as_ref()
                            .map(ToString::to_string)
                            .unwrap_or_default(),
                    );
                    user_type.set(request.user_type.clone());
                    selected_access.set(split_access_types(&request.access_type));
                    record.set(RecordLoad::Ready(request));
                }
                Err(err) => {
                    if let Some(message) = surface_error(err, session) {
                        record.set(RecordLoad::Failed(message));
                    }
                }
            }
        }
    });

    let people = use_remote_list(move || {
        let client = api_client(&session.peek());
        async move { client.list_people().await.map(approved_people) }
    });

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

    let submit_id = id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !record.peek().is_ready() {
            return;
        }
        let fields = AccessRequestFields {
            user_id: user_id(),
            user_type: user_type(),
            access_types: selected_access(),
        };
        let client = api_client(&session());
        let record_id = submit_id.clone();
        form.run(
            session,
            fields.request_update(),
            |payload| async move { client.update_access_request(&record_id, &payload).await },
            "Solicitud de acceso actualizada exitosamente!",
            move || {
                nav.push(Route::Dashboard {});
            },
        );
    };

    let choices = person_choices(&people.items.read());
    let no_people = !people.loading() && choices.is_empty();

    match record() {
        RecordLoad::Loading => rsx! {
            p { class: "page-status", "Cargando datos..." }
        },
        RecordLoad::NotFound => rsx! {
            p { class: "page-status page-error", "Solicitud no encontrada." }
        },
        RecordLoad::Failed(message) => rsx! {
            p { class: "page-status page-error", "{message}" }
        },
        RecordLoad::Ready(request) => rsx! {
            PageCard {
                title: "Editar Solicitud de Acceso",
                icon: rsx! { Icon { width: 28, height: 28, fill: "white", icon: FaKey } },

                p {
                    class: "record-meta",
                    "Estado Actual: "
                    strong { "{request.status}" }
                }
                p {
                    class: "record-meta",
                    "Fecha Solicitud: "
                    strong { "{display_date(&request.created_at)}" }
                }

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
                            for (choice_id, name) in choices.clone() {
                                option { key: "{choice_id}", value: "{choice_id}", "{name}" }
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
                        label: "Editar Accesos Solicitados",
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
                        idle_label: "Actualizar Solicitud",
                        busy_label: "Actualizando...",
                        on_cancel: move |_| { nav.push(Route::Dashboard {}); },
                    }
                }
            }
        },
    }
}
