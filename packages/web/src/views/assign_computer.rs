//! Computer-assignment creation form. The equipment select is fed by the
//! available-computers listing and fills the serial field; the serial can
//! also be typed directly.

use api::forms::AssignmentFields;
use api::models::{approved_people, person_choices, Computer};
use dioxus::prelude::*;
use ui::icons::FaLaptop;
use ui::{
    api_client, use_form_submit, use_remote_list, use_session, use_session_guard, ErrorText, Icon,
    PageCard, SelectField, SubmitRow, TextField,
};

use crate::Route;

fn computer_label(computer: &Computer) -> String {
    match computer.model.as_deref() {
        Some(model) if !model.is_empty() => format!("{} ({model})", computer.serial_number),
        _ => computer.serial_number.clone(),
    }
}

#[component]
pub fn AssignComputer() -> Element {
    use_session_guard();
    let session = use_session();
    let nav = use_navigator();

    let people = use_remote_list(move || {
        let client = api_client(&session.peek());
        async move { client.list_people().await.map(approved_people) }
    });
    let computers = use_remote_list(move || {
        let client = api_client(&session.peek());
        async move { client.list_computers().await }
    });

    let mut user_id = use_signal(String::new);
    let mut serial = use_signal(String::new);
    let mut assigned_at = use_signal(String::new);
    let form = use_form_submit();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let fields = AssignmentFields {
            user_id: user_id(),
            serial_number: serial(),
            assigned_at: assigned_at(),
        };
        let client = api_client(&session());
        form.run(
            session,
            fields.new_assignment(),
            |payload| async move { client.create_assignment(&payload).await },
            "Computador asignado exitosamente!",
            move || {
                nav.push(Route::Dashboard {});
            },
        );
    };

    let choices = person_choices(&people.items.read());
    let no_people = !people.loading() && choices.is_empty();
    let equipment: Vec<(String, String)> = computers
        .items
        .read()
        .iter()
        .filter(|computer| !computer.serial_number.is_empty())
        .map(|computer| (computer.serial_number.clone(), computer_label(computer)))
        .collect();

    rsx! {
        PageCard {
            title: "Asignación de Computador",
            blurb: "Asigne un equipo de cómputo a un nuevo ingreso.",
            icon: rsx! { Icon { width: 28, height: 28, fill: "white", icon: FaLaptop } },

            form {
                onsubmit: handle_submit,

                if no_people {
                    p { class: "form-error", "No hay usuarios aprobados disponibles para seleccionar." }
                } else {
                    SelectField {
                        id: "colaborador",
                        label: "Nombre del Colaborador",
                        value: user_id(),
                        disabled: people.loading(),
                        onchange: move |evt: FormEvent| user_id.set(evt.value()),

                        option { value: "", disabled: true, "Seleccione un usuario" }
                        for (id, name) in choices.clone() {
                            option { key: "{id}", value: "{id}", "{name}" }
                        }
                    }
                }

                if !equipment.is_empty() {
                    SelectField {
                        id: "equipo",
                        label: "Equipo Asignado",
                        value: serial(),
                        onchange: move |evt: FormEvent| serial.set(evt.value()),

                        option { value: "", "Seleccione un equipo" }
                        for (equipment_serial, label) in equipment.clone() {
                            option {
                                key: "{equipment_serial}",
                                value: "{equipment_serial}",
                                "{label}"
                            }
                        }
                    }
                }

                TextField {
                    id: "serial",
                    label: "Número de Serie",
                    value: serial(),
                    placeholder: "Ej: SN123456789",
                    oninput: move |evt: FormEvent| serial.set(evt.value()),
                }

                TextField {
                    id: "fechaEntrega",
                    label: "Fecha de Entrega",
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
                    idle_label: "Asignar Computador",
                    busy_label: "Asignando...",
                    on_cancel: move |_| { nav.push(Route::Dashboard {}); },
                }
            }
        }
    }
}
