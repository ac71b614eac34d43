//! Network actor - runs chat and auth requests in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{self, create_client, ServiceConfig};

/// Network actor that processes chat and auth commands
pub struct NetworkActor {
    client: reqwest::Client,
    config: ServiceConfig,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(config: ServiceConfig, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(),
            config,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::SendChat { id, message }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let config = self.config.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, "Sending chat message");
                                let result = client::send_chat(&client, &config, id, message).await;
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::SignIn { id, email, password }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let config = self.config.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, %email, "Signing in");
                                let result =
                                    client::sign_in(&client, &config, id, email, password).await;
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::SignUp { id, email, password }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let config = self.config.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, %email, "Signing up");
                                let result =
                                    client::sign_up(&client, &config, id, email, password).await;
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::SignOut { id, access_token }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let config = self.config.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, "Signing out");
                                let result =
                                    client::sign_out(&client, &config, id, access_token).await;
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
