mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod create_person;
pub use create_person::CreatePerson;

mod edit_person;
pub use edit_person::EditPerson;

mod access_request;
pub use access_request::AccessRequest;

mod edit_access_request;
pub use edit_access_request::EditAccessRequest;

mod assign_computer;
pub use assign_computer::AssignComputer;

mod edit_assignment;
pub use edit_assignment::EditAssignment;
