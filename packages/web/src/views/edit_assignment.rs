//! Computer-assignment edit form.

use api::dates::date_input_value;
use api::forms::AssignmentFields;
use api::models::{approved_people, person_choices};
use api::Assignment;
use dioxus::prelude::*;
use ui::icons::FaLaptop;
use ui::{
    api_client, surface_error, use_form_submit, use_remote_list, use_session, use_session_guard,
    ErrorText, Icon, PageCard, RecordLoad, SelectField, SubmitRow, TextField,
};

use crate::Route;

#[component]
pub fn EditAssignment(id: String) -> Element {
    use_session_guard();
    let session = use_session();
    let nav = use_navigator();

    let mut record = use_signal(|| RecordLoad::<Assignment>::Loading);
    let mut user_id = use_signal(String::new);
    let mut serial = use_signal(String::new);
    let mut assigned_at = use_signal(String::new);
    let form = use_form_submit();

    let route_id = id.clone();
    let _loader = use_resource(move || {
        let id = route_id.clone();
        async move {
            let client = api_client(&session.peek());
            match client.assignment(&id).await {
                Ok(assignment) => {
                    user_id.set(
                        assignment
                            .user_id
                            .as_ref()
                            .map(ToString::to_string)
                            .unwrap_or_default(),
                    );
                    serial.set(assignment.computer_serial.clone().unwrap_or_default());
                    assigned_at.set(
                        assignment
                            .assigned_at
                            .as_deref()
                            .map(date_input_value)
                            .unwrap_or_default(),
                    );
                    record.set(RecordLoad::Ready(assignment));
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

    let submit_id = id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !record.peek().is_ready() {
            return;
        }
        let fields = AssignmentFields {
            user_id: user_id(),
            serial_number: serial(),
            assigned_at: assigned_at(),
        };
        let client = api_client(&session());
        let record_id = submit_id.clone();
        form.run(
            session,
            fields.assignment_update(),
            |payload| async move { client.update_assignment(&record_id, &payload).await },
            "Asignación actualizada exitosamente!",
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
            p { class: "page-status page-error", "Asignación no encontrada." }
        },
        RecordLoad::Failed(message) => rsx! {
            p { class: "page-status page-error", "{message}" }
        },
        RecordLoad::Ready(_) => rsx! {
            PageCard {
                title: "Editar Asignación de Computador",
                icon: rsx! { Icon { width: 28, height: 28, fill: "white", icon: FaLaptop } },

                form {
                    onsubmit: handle_submit,

                    if no_people {
                        p { class: "form-error", "No hay usuarios aprobados disponibles para seleccionar." }
                    } else {
                        SelectField {
                            id: "colaborador",
                            label: "Colaborador Asignado",
                            value: user_id(),
                            disabled: people.loading(),
                            onchange: move |evt: FormEvent| user_id.set(evt.value()),

                            option { value: "", disabled: true, "Seleccione un usuario" }
                            for (choice_id, name) in choices.clone() {
                                option { key: "{choice_id}", value: "{choice_id}", "{name}" }
                            }
                        }
                    }

                    TextField {
                        id: "computerSerial",
                        label: "Número de Serie del Equipo",
                        value: serial(),
                        oninput: move |evt: FormEvent| serial.set(evt.value()),
                    }

                    TextField {
                        id: "assignedAt",
                        label: "Fecha de Asignación",
                        input_type: "date",
                        value: assigned_at(),
                        oninput: move |evt: FormEvent| assigned_at.set(evt.value()),
                    }

                    if let Some(message) = people.error() {
                        p { class: "form-error", "{message}" }
                    }

                    ErrorText { message: form.error() }

                    SubmitRow {
                        busy: form.busy(),
                        disabled: people.loading() || no_people,
                        idle_label: "Actualizar Asignación",
                        busy_label: "Actualizando...",
                        on_cancel: move |_| { nav.push(Route::Dashboard {}); },
                    }
                }
            }
        },
    }
}
