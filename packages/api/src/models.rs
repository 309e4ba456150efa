//! # Domain models for the personnel-management API
//!
//! Records as the external API returns them, plus the write payloads each
//! endpoint expects. All durable state lives server-side; these types only
//! exist for the lifetime of a page.
//!
//! ## Records
//!
//! | Struct | Source endpoint |
//! |--------|-----------------|
//! | [`Person`] | `get-users` (bare collection) |
//! | [`AccessRequest`] | `get-access-requests`, `get-access-request-by-id/{id}` |
//! | [`Assignment`] | `get-assignments`, `get-assignment-by-id/{id}` |
//! | [`Computer`] | `get-computers` |
//!
//! The API emits record ids as either JSON strings or numbers depending on
//! the endpoint; [`RecordId`] normalizes both to a string. Ids can also be
//! missing outright — those records are unusable (no edit route, no delete
//! endpoint) and get dropped by the callers that need an id.
//!
//! ## Status handling
//!
//! Approval status is an open string set compared case-insensitively after
//! trimming (`"aprobado"`, `"Aprobado "` and `"APROBADO"` all count as
//! approved). [`approved_people`] derives the eligible-person list offered
//! by the selects in the access-request and assignment forms.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Status string the API uses for an approved person.
pub const STATUS_APPROVED: &str = "aprobado";
/// Status assumed for records the API returns without one.
pub const STATUS_PENDING: &str = "pendiente";

/// The fixed catalog of systems an access request can name.
pub const ACCESS_TYPES: [&str; 6] = ["GitHub", "Grafana", "AWS", "Confluence", "Figma", "JFROG"];

/// The fixed catalog of user/role classifications on an access request.
pub const USER_TYPES: [&str; 7] = ["PM", "UX", "QA", "Scrum Master", "Developer", "BA", "DevOps"];

/// A record id, normalized from the JSON string or number the API emits.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId(value)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => RecordId(n.to_string()),
            Raw::Text(s) => RecordId(s),
        })
    }
}

/// A team member record.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: String,
    /// Request label supplied by some deployments; the dashboard fills in a
    /// default when absent.
    #[serde(default)]
    pub request: Option<String>,
}

impl Person {
    pub fn is_approved(&self) -> bool {
        status_matches(&self.status, STATUS_APPROVED)
    }
}

/// A request for a set of named system accesses.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AccessRequest {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub user_id: Option<RecordId>,
    #[serde(default)]
    pub user_name: String,
    /// Comma-joined list of access-system names; see [`split_access_types`].
    #[serde(default)]
    pub access_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub user_type: String,
    #[serde(default)]
    pub created_at: String,
}

/// A record linking a person to a piece of equipment.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Assignment {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub user_id: Option<RecordId>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default, alias = "computer_serial_number")]
    pub computer_serial: Option<String>,
    #[serde(default)]
    pub computer_model: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub assigned_at: Option<String>,
}

/// An entry in the available-computers listing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Computer {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

// Write payloads, shaped exactly as each endpoint expects them.

/// Body of `POST create-user`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewPerson {
    pub name: String,
    pub email: String,
    pub area: String,
    pub rol: String,
}

/// Body of `PUT update-user/{id}`. The API wants `area` duplicated into
/// `department`; callers fill both from the single area field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PersonUpdate {
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub area: String,
}

/// Body of `POST create-access-request`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewAccessRequest {
    pub user_id: String,
    pub access_type: String,
}

/// Body of `PUT update-access-request/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccessRequestUpdate {
    pub user_id: String,
    pub user_type: String,
    pub access_type: String,
}

/// Body of `POST create-assignment`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewAssignment {
    pub user_id: String,
    pub serial_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_at: Option<String>,
}

/// Body of `PUT update-assignment/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AssignmentUpdate {
    pub user_id: String,
    pub computer_serial_number: String,
    pub assigned_at: String,
}

/// Body of `POST login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Response of `POST login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Case-insensitive, whitespace-tolerant status comparison.
pub fn status_matches(status: &str, expected: &str) -> bool {
    status.trim().eq_ignore_ascii_case(expected)
}

/// Keep only approved people that carry an id, preserving order. This is the
/// derived list offered by the person selects.
pub fn approved_people(people: Vec<Person>) -> Vec<Person> {
    people
        .into_iter()
        .filter(|person| person.id.is_some() && person.is_approved())
        .collect()
}

/// `(id, name)` pairs for a person select. Records without an id cannot be
/// referenced by a request, so they are skipped.
pub fn person_choices(people: &[Person]) -> Vec<(String, String)> {
    people
        .iter()
        .filter_map(|person| {
            person
                .id
                .as_ref()
                .map(|id| (id.to_string(), person.name.clone()))
        })
        .collect()
}

/// Find a person by the id taken from an edit route. `get-users` is the only
/// read endpoint for this entity, so edits scan the full collection.
pub fn find_person(people: Vec<Person>, id: &str) -> Option<Person> {
    people
        .into_iter()
        .find(|person| person.id.as_ref().is_some_and(|pid| pid.as_str() == id))
}

/// Serialize a set of access-type selections for the API.
pub fn join_access_types(selected: &[String]) -> String {
    selected.join(", ")
}

/// Parse a stored access-type string back into checkbox state.
pub fn split_access_types(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: Option<&str>, status: &str) -> Person {
        Person {
            id: id.map(RecordId::from),
            name: "Ana".to_string(),
            email: String::new(),
            area: String::new(),
            department: String::new(),
            role: String::new(),
            status: status.to_string(),
            request: None,
        }
    }

    #[test]
    fn record_id_decodes_from_string_and_number() {
        let from_number: RecordId = serde_json::from_str("42").unwrap();
        let from_string: RecordId = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.as_str(), "42");
    }

    #[test]
    fn missing_and_null_ids_decode_to_none() {
        let parsed: Person = serde_json::from_str(r#"{"name": "Ana", "id": null}"#).unwrap();
        assert!(parsed.id.is_none());

        let parsed: Person = serde_json::from_str(r#"{"name": "Ana"}"#).unwrap();
        assert!(parsed.id.is_none());
    }

    #[test]
    fn approval_matching_ignores_case_and_whitespace() {
        assert!(person(Some("1"), "aprobado").is_approved());
        assert!(person(Some("1"), "Aprobado ").is_approved());
        assert!(person(Some("1"), "APROBADO").is_approved());
        assert!(!person(Some("1"), "pendiente").is_approved());
        assert!(!person(Some("1"), "").is_approved());
    }

    #[test]
    fn approved_people_drops_unapproved_and_idless_records() {
        let people = vec![
            person(Some("1"), "aprobado"),
            person(Some("2"), "pendiente"),
            person(None, "aprobado"),
            person(Some("3"), "Aprobado"),
        ];
        let approved = approved_people(people);
        let ids: Vec<&str> = approved
            .iter()
            .map(|p| p.id.as_ref().unwrap().as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn person_choices_skip_idless_records() {
        let people = vec![person(Some("1"), "aprobado"), person(None, "aprobado")];
        let choices = person_choices(&people);
        assert_eq!(choices, vec![("1".to_string(), "Ana".to_string())]);
    }

    #[test]
    fn find_person_compares_normalized_ids() {
        let people = vec![person(Some("10"), "aprobado"), person(Some("11"), "pendiente")];
        assert!(find_person(people.clone(), "11").is_some());
        assert!(find_person(people, "12").is_none());
    }

    #[test]
    fn access_types_round_trip_in_any_order() {
        let selections = [
            vec!["GitHub".to_string(), "AWS".to_string()],
            vec!["JFROG".to_string(), "Figma".to_string(), "Grafana".to_string()],
            vec!["Confluence".to_string()],
        ];
        for selected in selections {
            let joined = join_access_types(&selected);
            assert_eq!(split_access_types(&joined), selected);
        }
    }

    #[test]
    fn split_access_types_trims_and_drops_empties() {
        assert_eq!(
            split_access_types("GitHub,  AWS , ,JFROG"),
            vec!["GitHub", "AWS", "JFROG"]
        );
        assert!(split_access_types("").is_empty());
        assert!(split_access_types(" , ").is_empty());
    }

    #[test]
    fn assignment_accepts_both_serial_field_names() {
        let parsed: Assignment =
            serde_json::from_str(r#"{"id": 1, "computer_serial": "SN1"}"#).unwrap();
        assert_eq!(parsed.computer_serial.as_deref(), Some("SN1"));

        let parsed: Assignment =
            serde_json::from_str(r#"{"id": 1, "computer_serial_number": "SN2"}"#).unwrap();
        assert_eq!(parsed.computer_serial.as_deref(), Some("SN2"));
    }
}
