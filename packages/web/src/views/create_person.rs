//! Person creation form.

use api::forms::PersonFields;
use dioxus::prelude::*;
use ui::icons::FaUserPlus;
use ui::{
    api_client, use_form_submit, use_session, use_session_guard, ErrorText, Icon, PageCard,
    SubmitRow, TextField,
};

use crate::Route;

#[component]
pub fn CreatePerson() -> Element {
    use_session_guard();
    let session = use_session();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut area = use_signal(String::new);
    let mut role = use_signal(String::new);
    let form = use_form_submit();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let fields = PersonFields {
            name: name(),
            email: email(),
            area: area(),
            role: role(),
        };
        let client = api_client(&session());
        form.run(
            session,
            fields.new_person(),
            |payload| async move { client.create_person(&payload).await },
            "Usuario registrado exitosamente!",
            move || {
                nav.push(Route::Dashboard {});
            },
        );
    };

    rsx! {
        PageCard {
            title: "Registrar Nuevo Miembro del Equipo",
            blurb: "Complete el siguiente formulario para registrar un nuevo miembro en el equipo.",
            icon: rsx! { Icon { width: 28, height: 28, fill: "white", icon: FaUserPlus } },

            form {
                onsubmit: handle_submit,

                TextField {
                    id: "nombre",
                    label: "Nombre completo",
                    value: name(),
                    placeholder: "Ej: Carlos Martínez",
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                TextField {
                    id: "correo",
                    label: "Correo electrónico",
                    input_type: "email",
                    value: email(),
                    placeholder: "Ej: carlos.martinez@empresa.com",
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                TextField {
                    id: "area",
                    label: "Área / Departamento",
                    value: area(),
                    placeholder: "Ej: Tecnología",
                    oninput: move |evt: FormEvent| area.set(evt.value()),
                }

                TextField {
                    id: "rol",
                    label: "Rol",
                    value: role(),
                    placeholder: "Ej: Desarrollador Frontend",
                    oninput: move |evt: FormEvent| role.set(evt.value()),
                }

                ErrorText { message: form.error() }

                SubmitRow {
                    busy: form.busy(),
                    idle_label: "Registrar Usuario",
                    busy_label: "Registrando...",
                    on_cancel: move |_| { nav.push(Route::Dashboard {}); },
                }
            }
        }
    }
}
