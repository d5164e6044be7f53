//! In-process stand-in for the remote API, used by the async tests.

use std::sync::{Arc, Mutex};

use axum::extract::Request;
use axum::http::header::AUTHORIZATION;
use axum::middleware::{self, Next};
use axum::Router;

#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
}

pub struct MockApi {
    pub base_url: String,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl MockApi {
    /// Serve `router` on an ephemeral local port, recording every request.
    pub async fn start(router: Router) -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let recorder = calls.clone();
        let router = router.layer(middleware::from_fn(move |req: Request, next: Next| {
            let recorder = recorder.clone();
            async move {
                recorder.lock().unwrap().push(Call {
                    method: req.method().to_string(),
                    path: req.uri().path().to_string(),
                    authorization: req
                        .headers()
                        .get(AUTHORIZATION)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string),
                });
                next.run(req).await
            }
        }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            calls,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.calls().iter().filter(|c| c.path == path).count()
    }
}
