//! Person edit form. There is no get-by-id endpoint for this entity, so the
//! record comes from scanning the full `get-users` collection.

use api::forms::PersonFields;
use api::models::find_person;
use api::{Person, RecordId};
use dioxus::prelude::*;
use ui::icons::FaUserPen;
use ui::{
    api_client, surface_error, use_form_submit, use_session, use_session_guard, ErrorText, Icon,
    PageCard, RecordLoad, SubmitRow, TextField,
};

use crate::Route;

#[component]
pub fn EditPerson(id: String) -> Element {
    use_session_guard();
    let session = use_session();
    let nav = use_navigator();

    let mut record = use_signal(|| RecordLoad::<Person>::Loading);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut area = use_signal(String::new);
    let mut role = use_signal(String::new);
    let form = use_form_submit();

    let route_id = id.clone();
    let _loader = use_resource(move || {
        let id = route_id.clone();
        async move {
            let client = api_client(&session.peek());
            match client.list_people().await {
                Ok(people) => match find_person(people, &id) {
                    Some(person) => {
                        name.set(person.name.clone());
                        email.set(person.email.clone());
                        area.set(person.area.clone());
                        role.set(person.role.clone());
                        record.set(RecordLoad::Ready(person));
                    }
                    None => record.set(RecordLoad::NotFound),
                },
                Err(err) => {
                    if let Some(message) = surface_error(err, session) {
                        record.set(RecordLoad::Failed(message));
                    }
                }
            }
        }
    });

    let submit_id = id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !record.peek().is_ready() {
            return;
        }
        let fields = PersonFields {
            name: name(),
            email: email(),
            area: area(),
            role: role(),
        };
        let client = api_client(&session());
        let record_id = RecordId::from(submit_id.clone());
        form.run(
            session,
            fields.person_update(),
            |payload| async move { client.update_person(&record_id, &payload).await },
            "Usuario actualizado exitosamente!",
            move || {
                nav.push(Route::Dashboard {});
            },
        );
    };

    match record() {
        RecordLoad::Loading => rsx! {
            p { class: "page-status", "Cargando datos para edición..." }
        },
        RecordLoad::NotFound => rsx! {
            p { class: "page-status page-error", "No se encontró el usuario con ID {id} para editar." }
        },
        RecordLoad::Failed(message) => rsx! {
            p { class: "page-status page-error", "{message}" }
        },
        RecordLoad::Ready(_) => rsx! {
            PageCard {
                title: "Editar Miembro del Equipo",
                blurb: "Modifique los datos del miembro del equipo y guarde los cambios.",
                icon: rsx! { Icon { width: 28, height: 28, fill: "white", icon: FaUserPen } },

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
                        idle_label: "Actualizar Usuario",
                        busy_label: "Actualizando...",
                        on_cancel: move |_| { nav.push(Route::Dashboard {}); },
                    }
                }
            }
        },
    }
}
