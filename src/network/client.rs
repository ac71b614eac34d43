//! HTTP client wrapper - talks to the chat backend and the auth service

use serde::{Deserialize, Serialize};

use crate::messages::NetworkResponse;
use crate::models::Session;

/// Service endpoints and credentials, fixed at startup
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub backend_url: String,
    pub auth_url: String,
    pub auth_key: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatReplyBody {
    reply: String,
}

#[derive(Serialize)]
struct AuthRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenBody {
    access_token: String,
    #[serde(default)]
    user: Option<AuthUser>,
}

#[derive(Deserialize)]
struct AuthUser {
    #[serde(default)]
    email: Option<String>,
}

#[derive(Deserialize)]
struct AuthErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
}

/// Send one chat message; any failure collapses to `ChatFailed` and the
/// app layer appends the fixed fallback text
pub async fn send_chat(
    client: &reqwest::Client,
    config: &ServiceConfig,
    id: u64,
    message: String,
) -> NetworkResponse {
    let url = format!("{}/api/chat", config.backend_url.trim_end_matches('/'));
    let result = client
        .post(&url)
        .json(&ChatRequest { message: &message })
        .send()
        .await;

    match result {
        Ok(resp) if resp.status().is_success() => match resp.json::<ChatReplyBody>().await {
            Ok(body) => NetworkResponse::ChatReply {
                id,
                reply: body.reply,
            },
            Err(e) => {
                tracing::warn!(id, error = %e, "Chat reply was not valid JSON");
                NetworkResponse::ChatFailed { id }
            }
        },
        Ok(resp) => {
            tracing::warn!(id, status = resp.status().as_u16(), "Chat backend rejected message");
            NetworkResponse::ChatFailed { id }
        }
        Err(e) => {
            tracing::warn!(id, error = %e, "Chat backend unreachable");
            NetworkResponse::ChatFailed { id }
        }
    }
}

/// Sign in with email/password against the auth service
pub async fn sign_in(
    client: &reqwest::Client,
    config: &ServiceConfig,
    id: u64,
    email: String,
    password: String,
) -> NetworkResponse {
    let url = format!(
        "{}/auth/v1/token?grant_type=password",
        config.auth_url.trim_end_matches('/')
    );
    let result = client
        .post(&url)
        .header("apikey", &config.auth_key)
        .json(&AuthRequest {
            email: &email,
            password: &password,
        })
        .send()
        .await;

    match result {
        Ok(resp) if resp.status().is_success() => match resp.json::<TokenBody>().await {
            Ok(body) => {
                let email = body.user.and_then(|u| u.email).unwrap_or(email);
                NetworkResponse::SignedIn {
                    id,
                    session: Session {
                        email,
                        access_token: body.access_token,
                    },
                }
            }
            Err(e) => NetworkResponse::AuthError {
                id,
                message: format!("Sign-in failed: {}", e),
            },
        },
        Ok(resp) => auth_error(id, resp).await,
        Err(e) => NetworkResponse::AuthError {
            id,
            message: connect_message(&e),
        },
    }
}

/// Create an account; success means a verification email was sent
pub async fn sign_up(
    client: &reqwest::Client,
    config: &ServiceConfig,
    id: u64,
    email: String,
    password: String,
) -> NetworkResponse {
    let url = format!("{}/auth/v1/signup", config.auth_url.trim_end_matches('/'));
    let result = client
        .post(&url)
        .header("apikey", &config.auth_key)
        .json(&AuthRequest {
            email: &email,
            password: &password,
        })
        .send()
        .await;

    match result {
        Ok(resp) if resp.status().is_success() => NetworkResponse::SignedUp { id },
        Ok(resp) => auth_error(id, resp).await,
        Err(e) => NetworkResponse::AuthError {
            id,
            message: connect_message(&e),
        },
    }
}

/// Invalidate the session token. Reported as signed out even when the
/// service rejects the token; the local session is gone either way.
pub async fn sign_out(
    client: &reqwest::Client,
    config: &ServiceConfig,
    id: u64,
    access_token: String,
) -> NetworkResponse {
    let url = format!("{}/auth/v1/logout", config.auth_url.trim_end_matches('/'));
    let result = client
        .post(&url)
        .header("apikey", &config.auth_key)
        .header("Authorization", format!("Bearer {}", access_token))
        .send()
        .await;

    match result {
        Ok(_) => NetworkResponse::SignedOut { id },
        Err(e) => NetworkResponse::AuthError {
            id,
            message: connect_message(&e),
        },
    }
}

/// Extract the user-facing message from a non-success auth response
async fn auth_error(id: u64, resp: reqwest::Response) -> NetworkResponse {
    let status = resp.status();
    let message = match resp.json::<AuthErrorBody>().await {
        Ok(body) => body
            .error_description
            .or(body.msg)
            .unwrap_or_else(|| format!("Auth request failed ({})", status)),
        Err(_) => format!("Auth request failed ({})", status),
    };
    NetworkResponse::AuthError { id, message }
}

fn connect_message(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        String::from("Auth request timed out (30s)")
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        format!("Auth request failed: {}", e)
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
