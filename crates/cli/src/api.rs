//! HTTP client for the todo API.

use anyhow::Result;
use reqwest::{Client, Response};
use shared::api::{
    CreateTodoPayload, DeleteTodoResponse, LoginPayload, LoginResponse, RequestVerifyPayload,
    SignupPayload, TodoItem, UpdateTodoPayload, UpdateTodoResponse, VerifyCodePayload,
    VerifyCodeResponse, VerifyUserPayload,
};
use uuid::Uuid;

pub struct Api {
    pub http: Client,
    pub base_url: String,
}

impl Api {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Creates an account.
    pub async fn signup(&self, payload: SignupPayload) -> Result<()> {
        Self::check_response(
            self.http
                .post(format!("{}/signup", self.base_url))
                .json(&payload)
                .send()
                .await?,
        )
        .await?;

        Ok(())
    }

    /// Exchanges credentials for a session token.
    pub async fn login(&self, payload: LoginPayload) -> Result<LoginResponse> {
        let response = Self::check_response(
            self.http
                .post(format!("{}/login", self.base_url))
                .json(&payload)
                .send()
                .await?,
        )
        .await?;

        Ok(response.json().await?)
    }

    /// Requests a verification code be sent to the given email.
    pub async fn request_verify(&self, payload: RequestVerifyPayload) -> Result<()> {
        Self::check_response(
            self.http
                .post(format!("{}/request-verify", self.base_url))
                .json(&payload)
                .send()
                .await?,
        )
        .await?;

        Ok(())
    }

    /// Submits the emailed code. Fails with the server's message on a bad code.
    pub async fn verify_code(&self, payload: VerifyCodePayload) -> Result<VerifyCodeResponse> {
        let response = Self::check_response(
            self.http
                .post(format!("{}/verify-code", self.base_url))
                .json(&payload)
                .send()
                .await?,
        )
        .await?;

        Ok(response.json().await?)
    }

    /// Marks the account as verified.
    pub async fn verify_user(&self, payload: VerifyUserPayload) -> Result<()> {
        Self::check_response(
            self.http
                .post(format!("{}/verify-user", self.base_url))
                .json(&payload)
                .send()
                .await?,
        )
        .await?;

        Ok(())
    }

    /// Lists every todo.
    pub async fn list_todos(&self) -> Result<Vec<TodoItem>> {
        let response = Self::check_response(
            self.http
                .get(format!("{}/todos", self.base_url))
                .send()
                .await?,
        )
        .await?;

        Ok(response.json().await?)
    }

    /// Lists the todos owned by `user`.
    pub async fn list_user_todos(&self, user: &str) -> Result<Vec<TodoItem>> {
        let response = Self::check_response(
            self.http
                .get(format!("{}/todos/{}", self.base_url, user))
                .send()
                .await?,
        )
        .await?;

        Ok(response.json().await?)
    }

    pub async fn create_todo(&self, payload: CreateTodoPayload) -> Result<TodoItem> {
        let response = Self::check_response(
            self.http
                .post(format!("{}/todos", self.base_url))
                .json(&payload)
                .send()
                .await?,
        )
        .await?;

        Ok(response.json().await?)
    }

    pub async fn update_todo(
        &self,
        id: Uuid,
        payload: UpdateTodoPayload,
    ) -> Result<UpdateTodoResponse> {
        let response = Self::check_response(
            self.http
                .put(format!("{}/todos/{}", self.base_url, id))
                .json(&payload)
                .send()
                .await?,
        )
        .await?;

        Ok(response.json().await?)
    }

    pub async fn delete_todo(&self, id: Uuid) -> Result<DeleteTodoResponse> {
        let response = Self::check_response(
            self.http
                .delete(format!("{}/todos/{}", self.base_url, id))
                .send()
                .await?,
        )
        .await?;

        Ok(response.json().await?)
    }

    async fn check_response(response: Response) -> Result<Response> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            // Try to extract error message from JSON response
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|json| {
                    json.get("error")
                        .or_else(|| json.get("message"))
                        .and_then(|v| v.as_str())
                        .map(|s| s.to_string())
                })
                .unwrap_or_else(|| {
                    if body.is_empty() {
                        status
                            .canonical_reason()
                            .unwrap_or("Request failed")
                            .to_string()
                    } else {
                        body
                    }
                });

            anyhow::bail!("{}", message);
        }

        Ok(response)
    }
}
