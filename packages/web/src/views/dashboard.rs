//! Request dashboard: the three request collections merged into one table.

use api::dashboard::{
    access_request_rows, assignment_rows, person_rows, remove_record, DashboardRow, RequestKind,
};
use dioxus::prelude::*;
use ui::icons::{FaKey, FaLaptop, FaRightFromBracket, FaUserPlus};
use ui::{
    api_client, dialog, sign_out, surface_error, use_remote_list_with, use_session,
    use_session_guard, ActionCard, Icon, StatusBadge,
};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    use_session_guard();
    let session = use_session();
    let nav = use_navigator();

    // One error slot for the three sources: the first failure wins.
    let shared_error = use_signal(|| Option::<String>::None);

    let people = use_remote_list_with(shared_error, move || {
        let client = api_client(&session.peek());
        async move { client.list_people().await }
    });
    let requests = use_remote_list_with(shared_error, move || {
        let client = api_client(&session.peek());
        async move { client.list_access_requests().await }
    });
    let assignments = use_remote_list_with(shared_error, move || {
        let client = api_client(&session.peek());
        async move { client.list_assignments().await }
    });

    let on_edit = use_callback(move |row: DashboardRow| {
        let target = match row.kind {
            RequestKind::UserCreation => Route::EditPerson {
                id: row.id.to_string(),
            },
            RequestKind::AccessRequest => Route::EditAccessRequest {
                id: row.id.to_string(),
            },
            RequestKind::ComputerAssignment => Route::EditAssignment {
                id: row.id.to_string(),
            },
        };
        nav.push(target);
    });

    let on_delete = use_callback(move |row: DashboardRow| {
        let mut people_items = people.items;
        let mut request_items = requests.items;
        let mut assignment_items = assignments.items;
        spawn(async move {
            let prompt = format!(
                "¿Estás seguro de que quieres eliminar \"{}\" ({})?",
                row.person,
                row.kind.description()
            );
            if !dialog::confirm(&prompt) {
                return;
            }

            let client = api_client(&session.peek());
            let result = match row.kind {
                RequestKind::UserCreation => client.delete_person(&row.id).await,
                RequestKind::AccessRequest => client.delete_access_request(&row.id).await,
                RequestKind::ComputerAssignment => client.delete_assignment(&row.id).await,
            };

            match result {
                Ok(()) => {
                    // The server acknowledged; only now does the row leave local state.
                    match row.kind {
                        RequestKind::UserCreation => {
                            remove_record(&mut people_items.write(), &row.id);
                        }
                        RequestKind::AccessRequest => {
                            remove_record(&mut request_items.write(), &row.id);
                        }
                        RequestKind::ComputerAssignment => {
                            remove_record(&mut assignment_items.write(), &row.id);
                        }
                    }
                    dialog::alert(&row.kind.deleted_confirmation(&row.person));
                }
                Err(err) => {
                    tracing::error!("no se pudo eliminar la solicitud: {err}");
                    if let Some(message) = surface_error(err, session) {
                        dialog::alert(&format!("Error al eliminar: {message}"));
                    }
                }
            }
        });
    });

    // Fixed concatenation order: persons, access requests, assignments.
    let mut rows = person_rows(&people.items.read());
    rows.extend(access_request_rows(&requests.items.read()));
    rows.extend(assignment_rows(&assignments.items.read()));

    let any_loading = people.loading() || requests.loading() || assignments.loading();
    let error = shared_error();

    rsx! {
        div {
            class: "dashboard",

            header {
                class: "dashboard-header",
                h1 { "Gestión de Ingresos y Recursos de Equipo" }
                button {
                    class: "logout",
                    onclick: move |_| {
                        sign_out(session);
                        nav.push(Route::Login {});
                    },
                    Icon { width: 16, height: 16, fill: "currentColor", icon: FaRightFromBracket }
                    span { "Cerrar sesión" }
                }
            }

            div {
                class: "action-cards",

                ActionCard {
                    title: "Creación de Usuario",
                    blurb: "Registrar a una nueva persona en el equipo.",
                    button_label: "Registrar nuevo ingreso",
                    icon: rsx! { Icon { width: 28, height: 28, fill: "white", icon: FaUserPlus } },
                    onclick: move |_| { nav.push(Route::CreatePerson {}); },
                }

                ActionCard {
                    title: "Solicitud de Accesos",
                    blurb: "Solicitar permisos para un nuevo miembro del equipo.",
                    button_label: "Solicitar acceso",
                    icon: rsx! { Icon { width: 28, height: 28, fill: "white", icon: FaKey } },
                    onclick: move |_| { nav.push(Route::AccessRequest {}); },
                }

                ActionCard {
                    title: "Asignación de Computadores",
                    blurb: "Asignar un equipo portátil a un nuevo ingreso.",
                    button_label: "Asignar computador",
                    icon: rsx! { Icon { width: 28, height: 28, fill: "white", icon: FaLaptop } },
                    onclick: move |_| { nav.push(Route::AssignComputer {}); },
                }
            }

            div {
                class: "requests-panel",
                h2 { "Solicitudes Recientes" }

                table {
                    class: "requests-table",
                    thead {
                        tr {
                            th { "Persona" }
                            th { "Solicitud" }
                            th { "Estado" }
                            th { "Acciones" }
                        }
                    }
                    tbody {
                        if any_loading {
                            tr {
                                td { colspan: "4", class: "table-status", "Cargando solicitudes..." }
                            }
                        } else if rows.is_empty() {
                            if let Some(message) = error {
                                tr {
                                    td { colspan: "4", class: "table-status table-error", "{message}" }
                                }
                            } else {
                                tr {
                                    td { colspan: "4", class: "table-status", "No hay solicitudes recientes." }
                                }
                            }
                        } else {
                            for row in rows {
                                DashboardRowView {
                                    key: "{row.kind:?}-{row.id}",
                                    row: row.clone(),
                                    on_edit,
                                    on_delete,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DashboardRowView(
    row: DashboardRow,
    on_edit: Callback<DashboardRow>,
    on_delete: Callback<DashboardRow>,
) -> Element {
    let edit_row = row.clone();
    let delete_row = row.clone();
    rsx! {
        tr {
            td { "{row.person}" }
            td { "{row.request}" }
            td {
                StatusBadge { status: row.status.clone() }
            }
            td {
                class: "row-actions",
                button {
                    class: "link-edit",
                    onclick: move |_| on_edit.call(edit_row.clone()),
                    "Editar"
                }
                button {
                    class: "link-delete",
                    onclick: move |_| on_delete.call(delete_row.clone()),
                    "Eliminar"
                }
            }
        }
    }
}
