//! Gateway actor - runs authentication calls in the Tokio runtime

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;

use crate::gateway::{dispatch, AuthGateway};
use crate::messages::{GatewayCommand, GatewayResponse};

/// Gateway actor that executes calls and supports cancelling them by id
pub struct GatewayActor {
    gateway: Arc<dyn AuthGateway>,
    response_tx: mpsc::UnboundedSender<GatewayResponse>,
    active_calls: JoinSet<u64>,
    cancel_handles: HashMap<u64, oneshot::Sender<()>>,
}

impl GatewayActor {
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        response_tx: mpsc::UnboundedSender<GatewayResponse>,
    ) -> Self {
        GatewayActor {
            gateway,
            response_tx,
            active_calls: JoinSet::new(),
            cancel_handles: HashMap::new(),
        }
    }

    /// Run the gateway actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<GatewayCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(GatewayCommand::Execute { id, call }) => {
                            let (cancel_tx, cancel_rx) = oneshot::channel();
                            self.cancel_handles.insert(id, cancel_tx);

                            let response_tx = self.response_tx.clone();
                            let name = call.name();
                            let future = dispatch(self.gateway.as_ref(), call);

                            self.active_calls.spawn(async move {
                                tracing::info!(id, call = name, "Executing gateway call");
                                tokio::select! {
                                    result = future => {
                                        let response = match result {
                                            Ok(reply) => GatewayResponse::Completed { id, reply },
                                            Err(e) => {
                                                tracing::warn!(id, call = name, error = %e, "Gateway call failed");
                                                GatewayResponse::Failed { id, error: e.to_string() }
                                            }
                                        };
                                        tracing::info!(id, call = name, "Gateway call completed");
                                        let _ = response_tx.send(response);
                                    }
                                    _ = cancel_rx => {
                                        tracing::debug!(id, call = name, "Gateway call dropped");
                                    }
                                }
                                id
                            });
                        }

                        Some(GatewayCommand::Cancel(id)) => {
                            if let Some(cancel_tx) = self.cancel_handles.remove(&id) {
                                tracing::info!(id, "Cancelling gateway call");
                                let _ = cancel_tx.send(());
                                let _ = self.response_tx.send(GatewayResponse::Cancelled { id });
                            }
                        }

                        Some(GatewayCommand::Shutdown) => {
                            for (_, cancel_tx) in self.cancel_handles.drain() {
                                let _ = cancel_tx.send(());
                            }
                            break;
                        }

                        None => break,
                    }
                }

                Some(result) = self.active_calls.join_next() => {
                    if let Ok(id) = result {
                        self.cancel_handles.remove(&id);
                    }
                }
            }
        }

        self.active_calls.shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{GatewayFuture, MockGateway};
    use crate::messages::GatewayCall;
    use crate::models::{AuthReply, Credentials, NewAccount, SocialProvider};

    struct FailingGateway;

    impl AuthGateway for FailingGateway {
        fn login(&self, _: Credentials) -> GatewayFuture {
            Box::pin(async { Err(anyhow::anyhow!("connection refused")) })
        }
        fn sign_up(&self, _: NewAccount) -> GatewayFuture {
            Box::pin(async { Err(anyhow::anyhow!("connection refused")) })
        }
        fn request_password_reset(&self, _: String) -> GatewayFuture {
            Box::pin(async { Err(anyhow::anyhow!("connection refused")) })
        }
        fn social_login(&self, _: SocialProvider) -> GatewayFuture {
            Box::pin(async { Err(anyhow::anyhow!("connection refused")) })
        }
        fn resend_code(&self) -> GatewayFuture {
            Box::pin(async { Err(anyhow::anyhow!("connection refused")) })
        }
    }

    fn spawn_actor(
        gateway: Arc<dyn AuthGateway>,
    ) -> (
        mpsc::UnboundedSender<GatewayCommand>,
        mpsc::UnboundedReceiver<GatewayResponse>,
    ) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, resp_rx) = mpsc::unbounded_channel();
        tokio::spawn(GatewayActor::new(gateway, resp_tx).run(cmd_rx));
        (cmd_tx, resp_rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_reports_completion() {
        let (cmd_tx, mut resp_rx) = spawn_actor(Arc::new(MockGateway::default()));
        cmd_tx
            .send(GatewayCommand::Execute {
                id: 7,
                call: GatewayCall::SocialLogin(SocialProvider::Google),
            })
            .unwrap();

        let response = resp_rx.recv().await.unwrap();
        assert_eq!(
            response,
            GatewayResponse::Completed {
                id: 7,
                reply: AuthReply::SocialSignedIn {
                    provider: SocialProvider::Google
                },
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_suppresses_completion() {
        let (cmd_tx, mut resp_rx) = spawn_actor(Arc::new(MockGateway::default()));
        cmd_tx
            .send(GatewayCommand::Execute {
                id: 1,
                call: GatewayCall::ResendCode,
            })
            .unwrap();
        cmd_tx.send(GatewayCommand::Cancel(1)).unwrap();

        assert_eq!(resp_rx.recv().await, Some(GatewayResponse::Cancelled { id: 1 }));

        tokio::time::sleep(std::time::Duration::from_secs(5)).await;
        assert!(resp_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_errors_become_failed_responses() {
        let (cmd_tx, mut resp_rx) = spawn_actor(Arc::new(FailingGateway));
        cmd_tx
            .send(GatewayCommand::Execute {
                id: 3,
                call: GatewayCall::PasswordReset {
                    email: "ada@example.com".into(),
                },
            })
            .unwrap();

        match resp_rx.recv().await.unwrap() {
            GatewayResponse::Failed { id, error } => {
                assert_eq!(id, 3);
                assert!(error.contains("connection refused"));
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }
}
