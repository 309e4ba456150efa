//! Row normalization for the request dashboard.
//!
//! The dashboard merges three independently fetched, differently shaped
//! collections into one table. Each source maps into [`DashboardRow`] here;
//! the view only concatenates the three row sets in their fixed order
//! (persons, access requests, assignments) and renders them. Rows without
//! an id cannot be edited or deleted, so the builders drop them and log how
//! many were lost instead of rendering dead rows.

use tracing::warn;

use crate::models::{
    status_matches, AccessRequest, Assignment, Person, RecordId, STATUS_APPROVED, STATUS_PENDING,
};

/// Which collection a dashboard row came from. Edit and delete actions are
/// routed by this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    UserCreation,
    AccessRequest,
    ComputerAssignment,
}

impl RequestKind {
    /// Human-readable request-type label, used by the delete confirmation.
    pub fn description(&self) -> &'static str {
        match self {
            RequestKind::UserCreation => "Creación de Usuario",
            RequestKind::AccessRequest => "Solicitud de Acceso",
            RequestKind::ComputerAssignment => "Asignación de Computador",
        }
    }

    /// Confirmation text shown after a successful delete.
    pub fn deleted_confirmation(&self, person: &str) -> String {
        match self {
            RequestKind::UserCreation => {
                format!("La solicitud de creación para \"{person}\" ha sido eliminada exitosamente.")
            }
            RequestKind::AccessRequest => {
                format!("La solicitud de acceso para \"{person}\" ha sido eliminada exitosamente.")
            }
            RequestKind::ComputerAssignment => {
                format!("La asignación de computador para \"{person}\" ha sido eliminada exitosamente.")
            }
        }
    }
}

/// The normalized row shape every source maps into.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardRow {
    pub id: RecordId,
    pub kind: RequestKind,
    pub person: String,
    pub request: String,
    pub status: String,
}

/// Default request label for person records that carry none.
pub const DEFAULT_CREATION_LABEL: &str = "creacion de usuario";

/// Map person records into dashboard rows.
pub fn person_rows(people: &[Person]) -> Vec<DashboardRow> {
    let mut dropped = 0usize;
    let rows = people
        .iter()
        .filter_map(|person| {
            let Some(id) = person.id.clone() else {
                dropped += 1;
                return None;
            };
            Some(DashboardRow {
                id,
                kind: RequestKind::UserCreation,
                person: person.name.clone(),
                request: person
                    .request
                    .clone()
                    .filter(|label| !label.is_empty())
                    .unwrap_or_else(|| DEFAULT_CREATION_LABEL.to_string()),
                status: person.status.clone(),
            })
        })
        .collect();
    log_dropped("usuarios", dropped);
    rows
}

/// Map access requests into dashboard rows, embedding the access-type
/// string in the label.
pub fn access_request_rows(requests: &[AccessRequest]) -> Vec<DashboardRow> {
    let mut dropped = 0usize;
    let rows = requests
        .iter()
        .filter_map(|request| {
            let Some(id) = request.id.clone() else {
                dropped += 1;
                return None;
            };
            Some(DashboardRow {
                id,
                kind: RequestKind::AccessRequest,
                person: request.user_name.clone(),
                request: format!("solicitud de acceso ({})", request.access_type),
                status: request.status.clone(),
            })
        })
        .collect();
    log_dropped("solicitudes de acceso", dropped);
    rows
}

/// Map assignments into dashboard rows. The serial number goes into the
/// label (with a placeholder when absent) and a missing status reads as
/// pending.
pub fn assignment_rows(assignments: &[Assignment]) -> Vec<DashboardRow> {
    let mut dropped = 0usize;
    let rows = assignments
        .iter()
        .filter_map(|assignment| {
            let Some(id) = assignment.id.clone() else {
                dropped += 1;
                return None;
            };
            let details = match assignment.computer_serial.as_deref() {
                Some(serial) if !serial.is_empty() => format!("Serial: {serial}"),
                _ => "Detalles no disponibles".to_string(),
            };
            Some(DashboardRow {
                id,
                kind: RequestKind::ComputerAssignment,
                person: assignment
                    .user_name
                    .clone()
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| "Usuario Desconocido".to_string()),
                request: format!("asignación de computador ({details})"),
                status: assignment
                    .status
                    .clone()
                    .filter(|status| !status.is_empty())
                    .unwrap_or_else(|| STATUS_PENDING.to_string()),
            })
        })
        .collect();
    log_dropped("asignaciones", dropped);
    rows
}

fn log_dropped(source: &str, dropped: usize) {
    if dropped > 0 {
        warn!("se descartaron {dropped} {source} sin id");
    }
}

/// Presentation class of a status string. Unrecognized values fall into
/// [`StatusClass::Other`] rather than erroring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusClass {
    Pending,
    Approved,
    Rejected,
    Other,
}

impl StatusClass {
    pub fn from_status(status: &str) -> Self {
        if status_matches(status, STATUS_PENDING) {
            StatusClass::Pending
        } else if status_matches(status, STATUS_APPROVED) {
            StatusClass::Approved
        } else if status_matches(status, "rechazado") {
            StatusClass::Rejected
        } else {
            StatusClass::Other
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StatusClass::Pending => "badge badge-pending",
            StatusClass::Approved => "badge badge-approved",
            StatusClass::Rejected => "badge badge-rejected",
            StatusClass::Other => "badge badge-other",
        }
    }
}

/// Records that can be addressed by id from the dashboard.
pub trait Identified {
    fn record_id(&self) -> Option<&RecordId>;
}

impl Identified for Person {
    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }
}

impl Identified for AccessRequest {
    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }
}

impl Identified for Assignment {
    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }
}

/// Remove the record the server acknowledged deleting. Returns whether a
/// record was actually removed; everything else is left untouched.
pub fn remove_record<T: Identified>(items: &mut Vec<T>, id: &RecordId) -> bool {
    let before = items.len();
    items.retain(|item| item.record_id() != Some(id));
    items.len() < before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: Option<&str>, name: &str, status: &str) -> Person {
        Person {
            id: id.map(RecordId::from),
            name: name.to_string(),
            email: String::new(),
            area: String::new(),
            department: String::new(),
            role: String::new(),
            status: status.to_string(),
            request: None,
        }
    }

    fn access_request(id: Option<&str>, user: &str, access: &str) -> AccessRequest {
        AccessRequest {
            id: id.map(RecordId::from),
            user_id: Some(RecordId::from("1")),
            user_name: user.to_string(),
            access_type: access.to_string(),
            status: "pendiente".to_string(),
            user_type: "Developer".to_string(),
            created_at: String::new(),
        }
    }

    fn assignment(id: Option<&str>, serial: Option<&str>, status: Option<&str>) -> Assignment {
        Assignment {
            id: id.map(RecordId::from),
            user_id: Some(RecordId::from("1")),
            user_name: Some("Laura".to_string()),
            user_email: None,
            computer_serial: serial.map(str::to_string),
            computer_model: None,
            status: status.map(str::to_string),
            assigned_at: None,
        }
    }

    #[test]
    fn sources_concatenate_to_the_sum_of_their_sizes() {
        let people = vec![person(Some("1"), "Ana", "aprobado"), person(Some("2"), "Luis", "pendiente")];
        let requests = vec![access_request(Some("3"), "Ana", "GitHub")];
        let assignments = vec![
            assignment(Some("4"), Some("SN1"), Some("aprobado")),
            assignment(Some("5"), None, None),
            assignment(Some("6"), Some("SN2"), None),
        ];

        let mut rows = person_rows(&people);
        rows.extend(access_request_rows(&requests));
        rows.extend(assignment_rows(&assignments));
        assert_eq!(rows.len(), 2 + 1 + 3);

        // Fixed concatenation order: persons, access requests, assignments.
        assert_eq!(rows[0].kind, RequestKind::UserCreation);
        assert_eq!(rows[2].kind, RequestKind::AccessRequest);
        assert_eq!(rows[3].kind, RequestKind::ComputerAssignment);
    }

    #[test]
    fn idless_rows_never_render() {
        let people = vec![person(Some("1"), "Ana", "aprobado"), person(None, "Sin Id", "aprobado")];
        assert_eq!(person_rows(&people).len(), 1);

        let requests = vec![access_request(None, "Ana", "GitHub")];
        assert!(access_request_rows(&requests).is_empty());

        let assignments = vec![assignment(None, Some("SN1"), None)];
        assert!(assignment_rows(&assignments).is_empty());
    }

    #[test]
    fn person_rows_use_the_default_creation_label() {
        let mut p = person(Some("1"), "Ana", "aprobado");
        let rows = person_rows(std::slice::from_ref(&p));
        assert_eq!(rows[0].request, DEFAULT_CREATION_LABEL);

        p.request = Some("alta prioritaria".to_string());
        let rows = person_rows(&[p]);
        assert_eq!(rows[0].request, "alta prioritaria");
    }

    #[test]
    fn access_rows_embed_the_access_string() {
        let rows = access_request_rows(&[access_request(Some("1"), "Ana", "GitHub, AWS")]);
        assert_eq!(rows[0].request, "solicitud de acceso (GitHub, AWS)");
    }

    #[test]
    fn assignment_rows_default_missing_fields() {
        let rows = assignment_rows(&[assignment(Some("1"), None, None)]);
        assert_eq!(rows[0].request, "asignación de computador (Detalles no disponibles)");
        assert_eq!(rows[0].status, STATUS_PENDING);

        let rows = assignment_rows(&[assignment(Some("2"), Some("SN9"), Some("aprobado"))]);
        assert_eq!(rows[0].request, "asignación de computador (Serial: SN9)");
        assert_eq!(rows[0].status, "aprobado");
    }

    #[test]
    fn missing_user_name_falls_back_to_unknown() {
        let mut a = assignment(Some("1"), Some("SN1"), None);
        a.user_name = None;
        let rows = assignment_rows(&[a]);
        assert_eq!(rows[0].person, "Usuario Desconocido");
    }

    #[test]
    fn status_classes_match_case_insensitively() {
        assert_eq!(StatusClass::from_status("pendiente"), StatusClass::Pending);
        assert_eq!(StatusClass::from_status("Aprobado"), StatusClass::Approved);
        assert_eq!(StatusClass::from_status("RECHAZADO"), StatusClass::Rejected);
        assert_eq!(StatusClass::from_status("en revisión"), StatusClass::Other);
        assert_eq!(StatusClass::from_status(""), StatusClass::Other);
    }

    #[test]
    fn remove_record_takes_exactly_the_acknowledged_row() {
        let mut people = vec![
            person(Some("1"), "Ana", "aprobado"),
            person(Some("2"), "Luis", "pendiente"),
        ];
        assert!(remove_record(&mut people, &RecordId::from("1")));
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].name, "Luis");

        // A failed delete never reaches remove_record; an unknown id is a no-op.
        assert!(!remove_record(&mut people, &RecordId::from("99")));
        assert_eq!(people.len(), 1);
    }

    #[test]
    fn single_approved_person_scenario() {
        let people = vec![person(Some("1"), "Ana", "aprobado")];
        let mut rows = person_rows(&people);
        rows.extend(access_request_rows(&[]));
        rows.extend(assignment_rows(&[]));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].person, "Ana");
        assert_eq!(rows[0].request, DEFAULT_CREATION_LABEL);
        assert_eq!(StatusClass::from_status(&rows[0].status), StatusClass::Approved);
    }
}
