//! Validation and payload building for the create/edit forms.
//!
//! Each form's fields live in a plain struct the view fills from its input
//! signals. Validation runs synchronously at submit time, before any network
//! call: the first failing rule wins and its message is shown inline. A
//! passing validation yields the exact write payload the endpoint expects,
//! so a view that holds an `Err` never has anything to send.

use crate::models::{
    join_access_types, AccessRequestUpdate, AssignmentUpdate, NewAccessRequest, NewAssignment,
    NewPerson, PersonUpdate,
};

/// Field state of the person create/edit forms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersonFields {
    pub name: String,
    pub email: String,
    pub area: String,
    pub role: String,
}

/// Field state of the access-request create/edit forms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccessRequestFields {
    /// Selected person id; empty when nothing is chosen.
    pub user_id: String,
    pub user_type: String,
    pub access_types: Vec<String>,
}

/// Field state of the assignment create/edit forms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssignmentFields {
    pub user_id: String,
    pub serial_number: String,
    pub assigned_at: String,
}

impl PersonFields {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Por favor, ingrese el nombre completo.".to_string());
        }
        if self.email.trim().is_empty() {
            return Err("Por favor, ingrese el correo electrónico.".to_string());
        }
        if self.area.trim().is_empty() {
            return Err("Por favor, ingrese el área o departamento.".to_string());
        }
        if self.role.trim().is_empty() {
            return Err("Por favor, ingrese el rol.".to_string());
        }
        Ok(())
    }

    pub fn new_person(&self) -> Result<NewPerson, String> {
        self.validate()?;
        Ok(NewPerson {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            area: self.area.trim().to_string(),
            rol: self.role.trim().to_string(),
        })
    }

    /// Update payload; the API wants the area duplicated into `department`.
    pub fn person_update(&self) -> Result<PersonUpdate, String> {
        self.validate()?;
        Ok(PersonUpdate {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.area.trim().to_string(),
            role: self.role.trim().to_string(),
            area: self.area.trim().to_string(),
        })
    }
}

impl AccessRequestFields {
    fn validate(&self) -> Result<(), String> {
        if self.user_id.is_empty() {
            return Err("Por favor, seleccione un usuario.".to_string());
        }
        if self.user_type.is_empty() {
            return Err("Por favor, seleccione un tipo de usuario.".to_string());
        }
        if self.access_types.is_empty() {
            return Err("Por favor, seleccione al menos un tipo de acceso.".to_string());
        }
        Ok(())
    }

    pub fn new_request(&self) -> Result<NewAccessRequest, String> {
        self.validate()?;
        Ok(NewAccessRequest {
            user_id: self.user_id.clone(),
            access_type: join_access_types(&self.access_types),
        })
    }

    pub fn request_update(&self) -> Result<AccessRequestUpdate, String> {
        self.validate()?;
        Ok(AccessRequestUpdate {
            user_id: self.user_id.clone(),
            user_type: self.user_type.clone(),
            access_type: join_access_types(&self.access_types),
        })
    }
}

impl AssignmentFields {
    fn validate(&self) -> Result<(), String> {
        if self.user_id.is_empty() {
            return Err("Por favor, seleccione un usuario.".to_string());
        }
        if self.serial_number.trim().is_empty() {
            return Err("Por favor, ingrese el número de serie del equipo.".to_string());
        }
        if self.assigned_at.is_empty() {
            return Err("Por favor, seleccione la fecha de asignación.".to_string());
        }
        Ok(())
    }

    pub fn new_assignment(&self) -> Result<NewAssignment, String> {
        self.validate()?;
        Ok(NewAssignment {
            user_id: self.user_id.clone(),
            serial_number: self.serial_number.trim().to_string(),
            assigned_at: Some(self.assigned_at.clone()),
        })
    }

    pub fn assignment_update(&self) -> Result<AssignmentUpdate, String> {
        self.validate()?;
        Ok(AssignmentUpdate {
            user_id: self.user_id.clone(),
            computer_serial_number: self.serial_number.trim().to_string(),
            assigned_at: self.assigned_at.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn access_fields() -> AccessRequestFields {
        AccessRequestFields {
            user_id: "3".to_string(),
            user_type: "Developer".to_string(),
            access_types: vec!["GitHub".to_string(), "AWS".to_string()],
        }
    }

    #[test]
    fn person_form_rejects_blank_required_fields() {
        let mut fields = PersonFields {
            name: "Carlos Martínez".to_string(),
            email: "carlos@empresa.com".to_string(),
            area: "Tecnología".to_string(),
            role: "Desarrollador".to_string(),
        };
        assert!(fields.new_person().is_ok());

        fields.email = "   ".to_string();
        let err = fields.new_person().unwrap_err();
        assert_eq!(err, "Por favor, ingrese el correo electrónico.");
    }

    #[test]
    fn person_update_duplicates_area_into_department() {
        let fields = PersonFields {
            name: "Carlos".to_string(),
            email: "c@e.com".to_string(),
            area: "Tecnología".to_string(),
            role: "Dev".to_string(),
        };
        let payload = fields.person_update().unwrap();
        assert_eq!(payload.department, "Tecnología");
        assert_eq!(payload.area, "Tecnología");
    }

    #[test]
    fn access_request_requires_a_selected_person_first() {
        let mut fields = access_fields();
        fields.user_id.clear();
        // Missing person wins even with access types checked.
        assert_eq!(
            fields.new_request().unwrap_err(),
            "Por favor, seleccione un usuario."
        );
    }

    #[test]
    fn access_request_requires_a_user_type_and_at_least_one_access() {
        let mut fields = access_fields();
        fields.user_type.clear();
        assert_eq!(
            fields.new_request().unwrap_err(),
            "Por favor, seleccione un tipo de usuario."
        );

        let mut fields = access_fields();
        fields.access_types.clear();
        assert_eq!(
            fields.request_update().unwrap_err(),
            "Por favor, seleccione al menos un tipo de acceso."
        );
    }

    #[test]
    fn access_request_payload_joins_the_selection() {
        let payload = access_fields().request_update().unwrap();
        assert_eq!(payload.access_type, "GitHub, AWS");
        assert_eq!(payload.user_type, "Developer");
    }

    #[test]
    fn assignment_requires_person_serial_and_date() {
        let fields = AssignmentFields {
            user_id: "2".to_string(),
            serial_number: "SN123456789".to_string(),
            assigned_at: "2024-03-05".to_string(),
        };
        assert!(fields.new_assignment().is_ok());

        let blank_serial = AssignmentFields {
            serial_number: "  ".to_string(),
            ..fields.clone()
        };
        assert_eq!(
            blank_serial.assignment_update().unwrap_err(),
            "Por favor, ingrese el número de serie del equipo."
        );

        let no_date = AssignmentFields {
            assigned_at: String::new(),
            ..fields
        };
        assert_eq!(
            no_date.assignment_update().unwrap_err(),
            "Por favor, seleccione la fecha de asignación."
        );
    }
}
