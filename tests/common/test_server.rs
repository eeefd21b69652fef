use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Resolver endpoint answering `https://<network>.remote/<path>`, or a fixed
/// error status when configured to fail.
pub struct TestResolverServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

#[derive(Clone)]
struct ServerState {
    fail_with: Option<StatusCode>,
    hits: Arc<AtomicUsize>,
}

impl TestResolverServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        Self::spawn(None).await
    }

    pub async fn start_failing(status: StatusCode) -> Result<Self, std::io::Error> {
        Self::spawn(Some(status)).await
    }

    async fn spawn(fail_with: Option<StatusCode>) -> Result<Self, std::io::Error> {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/resolve", post(resolve))
            .with_state(ServerState {
                fail_with,
                hits: Arc::clone(&hits),
            });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            hits,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/resolve", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestResolverServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn resolve(State(state): State<ServerState>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    state.hits.fetch_add(1, Ordering::SeqCst);

    if let Some(status) = state.fail_with {
        return (status, Json(json!({ "error": "unavailable" })));
    }

    let network = body["network"].as_str().unwrap_or_default();
    let path = body["path"].as_str().unwrap_or_default();
    (
        StatusCode::OK,
        Json(json!({ "url": format!("https://{network}.remote/{}", path.trim_start_matches('/')) })),
    )
}
