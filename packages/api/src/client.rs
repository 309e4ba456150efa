//! HTTP client for the personnel-management API.
//!
//! One async method per endpoint, all under the `/personnel-management/`
//! base path except `login`, which lives at the service root. Every request
//! attaches `Authorization: Bearer <token>` when the session carries one; a
//! 401 maps to [`ApiError::Unauthorized`] before any body decoding so the
//! UI can expire the session in one place. There are no client-side
//! timeouts and no automatic retries — a failure surfaces once and the user
//! decides whether to act again.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::envelope::{Envelope, ListResponse};
use crate::error::{message_from_body, ApiError};
use crate::models::{
    AccessRequest, AccessRequestUpdate, Assignment, AssignmentUpdate, Computer, Credentials,
    NewAccessRequest, NewAssignment, NewPerson, Person, PersonUpdate, RecordId, TokenResponse,
};

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token: None,
        }
    }

    /// Attach the session's bearer credential to every subsequent call.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/personnel-management/{path}", self.config.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.authorized(request).send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status,
                message: message_from_body(status, &body),
            });
        }
        Ok(response)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        response.json::<ListResponse<T>>().await?.into_result()
    }

    async fn get_record<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        response.json::<Envelope<T>>().await?.into_result()
    }

    /// Writes only matter for their acknowledgment; the `{message}` body is
    /// discarded once the status checks out.
    async fn write(&self, request: RequestBuilder) -> Result<(), ApiError> {
        self.send(request).await?;
        Ok(())
    }

    // Persons

    pub async fn list_people(&self) -> Result<Vec<Person>, ApiError> {
        self.get_list("get-users").await
    }

    pub async fn create_person(&self, person: &NewPerson) -> Result<(), ApiError> {
        self.write(self.http.post(self.url("create-user")).json(person))
            .await
    }

    pub async fn update_person(&self, id: &RecordId, update: &PersonUpdate) -> Result<(), ApiError> {
        self.write(
            self.http
                .put(self.url(&format!("update-user/{id}")))
                .json(update),
        )
        .await
    }

    pub async fn delete_person(&self, id: &RecordId) -> Result<(), ApiError> {
        self.write(self.http.delete(self.url(&format!("delete-user/{id}"))))
            .await
    }

    // Access requests

    pub async fn list_access_requests(&self) -> Result<Vec<AccessRequest>, ApiError> {
        self.get_list("get-access-requests").await
    }

    pub async fn access_request(&self, id: &str) -> Result<AccessRequest, ApiError> {
        self.get_record(&format!("get-access-request-by-id/{id}")).await
    }

    pub async fn create_access_request(&self, request: &NewAccessRequest) -> Result<(), ApiError> {
        self.write(
            self.http
                .post(self.url("create-access-request"))
                .json(request),
        )
        .await
    }

    pub async fn update_access_request(
        &self,
        id: &str,
        update: &AccessRequestUpdate,
    ) -> Result<(), ApiError> {
        self.write(
            self.http
                .put(self.url(&format!("update-access-request/{id}")))
                .json(update),
        )
        .await
    }

    pub async fn delete_access_request(&self, id: &RecordId) -> Result<(), ApiError> {
        self.write(
            self.http
                .delete(self.url(&format!("delete-access-request/{id}"))),
        )
        .await
    }

    // Computer assignments

    pub async fn list_assignments(&self) -> Result<Vec<Assignment>, ApiError> {
        self.get_list("get-assignments").await
    }

    pub async fn assignment(&self, id: &str) -> Result<Assignment, ApiError> {
        self.get_record(&format!("get-assignment-by-id/{id}")).await
    }

    pub async fn list_computers(&self) -> Result<Vec<Computer>, ApiError> {
        self.get_list("get-computers").await
    }

    pub async fn create_assignment(&self, assignment: &NewAssignment) -> Result<(), ApiError> {
        self.write(
            self.http
                .post(self.url("create-assignment"))
                .json(assignment),
        )
        .await
    }

    pub async fn update_assignment(
        &self,
        id: &str,
        update: &AssignmentUpdate,
    ) -> Result<(), ApiError> {
        self.write(
            self.http
                .put(self.url(&format!("update-assignment/{id}")))
                .json(update),
        )
        .await
    }

    pub async fn delete_assignment(&self, id: &RecordId) -> Result<(), ApiError> {
        self.write(
            self.http
                .delete(self.url(&format!("delete-assignment/{id}"))),
        )
        .await
    }

    // Session

    /// Exchange credentials for a bearer token. The login endpoint lives at
    /// the service root, outside the personnel-management base path.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let url = format!("{}/login", self.config.base_url);
        let response = self.send(self.http.post(url).json(credentials)).await?;
        let body: TokenResponse = response.json().await?;
        body.token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::Envelope("Respuesta de autenticación inválida.".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_under_the_management_base_path() {
        let client = ApiClient::new(ApiConfig::new("http://localhost:4000"));
        assert_eq!(
            client.url("get-users"),
            "http://localhost:4000/personnel-management/get-users"
        );
        assert_eq!(
            client.url(&format!("delete-user/{}", RecordId::from("7"))),
            "http://localhost:4000/personnel-management/delete-user/7"
        );
    }
}
