//! Network messages - communication between App and Network layers

use crate::models::Session;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Send one chat message to the backend
    SendChat { id: u64, message: String },
    /// Sign in with email/password
    SignIn {
        id: u64,
        email: String,
        password: String,
    },
    /// Create an account with email/password
    SignUp {
        id: u64,
        email: String,
        password: String,
    },
    /// Invalidate the current session
    SignOut { id: u64, access_token: String },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// The backend replied to a chat message
    ChatReply { id: u64, reply: String },
    /// The chat backend was unreachable or answered garbage
    ChatFailed { id: u64 },
    /// Sign-in succeeded
    SignedIn { id: u64, session: Session },
    /// Sign-up accepted; a verification email is on its way
    SignedUp { id: u64 },
    /// Sign-out completed
    SignedOut { id: u64 },
    /// Any auth operation failed; message is user-facing
    AuthError { id: u64, message: String },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::ChatReply { id, .. } => *id,
            NetworkResponse::ChatFailed { id } => *id,
            NetworkResponse::SignedIn { id, .. } => *id,
            NetworkResponse::SignedUp { id } => *id,
            NetworkResponse::SignedOut { id } => *id,
            NetworkResponse::AuthError { id, .. } => *id,
        }
    }
}
