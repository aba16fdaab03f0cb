//! Shared helpers for the HTTP integration tests
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use police_adapter::{create_router, AppState, InMemoryRecordStore};
use police_domain::{
    BearerToken, FailureKind, LookupOutcome, MailMessage, MailNotifier, Plate, PlateMatch,
    RecordStore, RemoteFailure, VehicleRegistry, VehicleStatus,
};
use police_usecase::{NotificationDispatcher, PoliceServices};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

// =============================================================================
// Raw HTTP stub
// =============================================================================

/// Minimal HTTP/1.1 server answering every request with one canned reply
pub struct StubServer {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub async fn respond(status: u16, body: &'static str) -> Self {
        Self::start(Some((status, body))).await
    }

    /// Accepts connections and never answers
    pub async fn silent() -> Self {
        Self::start(None).await
    }

    async fn start(reply: Option<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let recorded = recorded.clone();
                tokio::spawn(async move {
                    let request = read_request(&mut stream).await;
                    recorded.lock().unwrap().push(request);
                    match reply {
                        Some((status, body)) => {
                            let response = format!(
                                "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                                status,
                                body.len(),
                                body
                            );
                            let _ = stream.write_all(response.as_bytes()).await;
                            let _ = stream.shutdown().await;
                        }
                        None => tokio::time::sleep(Duration::from_secs(30)).await,
                    }
                });
            }
        });

        Self { addr, requests }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Raw text of every request received, lower-cased
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.to_lowercase())
            .collect()
    }
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}

/// An address nothing listens on
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

// =============================================================================
// Stub ports for the API tests
// =============================================================================

#[derive(Default)]
pub struct StubRegistry {
    pub fail_notifications: bool,
    pub lookup: Option<LookupOutcome>,
    pub notified: Mutex<Vec<(String, VehicleStatus)>>,
}

#[async_trait]
impl VehicleRegistry for StubRegistry {
    async fn notify_status(
        &self,
        plate: &Plate,
        status: VehicleStatus,
    ) -> Result<(), RemoteFailure> {
        self.notified.lock().unwrap().push((plate.to_string(), status));
        if self.fail_notifications {
            Err(RemoteFailure::new(FailureKind::Status(503), "registry down"))
        } else {
            Ok(())
        }
    }

    async fn fetch_by_plate(&self, _plate: &Plate, _credential: &BearerToken) -> LookupOutcome {
        self.lookup.clone().unwrap_or(LookupOutcome::NotFound)
    }
}

#[derive(Default)]
pub struct StubMailer {
    pub sent: Mutex<Vec<MailMessage>>,
}

#[async_trait]
impl MailNotifier for StubMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), RemoteFailure> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

// =============================================================================
// Running API
// =============================================================================

pub struct TestApp {
    pub base: String,
    pub client: reqwest::Client,
    pub registry: Arc<StubRegistry>,
}

impl TestApp {
    pub async fn spawn(registry: StubRegistry) -> Self {
        let registry = Arc::new(registry);
        let store = RecordStore::from_backend(Arc::new(InMemoryRecordStore::new()));
        let (dispatcher, _worker) =
            NotificationDispatcher::spawn(16, registry.clone(), Arc::new(StubMailer::default()));
        let services = PoliceServices::new(store, registry.clone(), dispatcher, PlateMatch::Substring);
        let router = create_router(Arc::new(AppState::new(services)), "http://localhost:4200");

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base: format!("http://{}/api/police", addr),
            client: reqwest::Client::new(),
            registry,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .bearer_auth("test-token")
            .send()
            .await
            .unwrap()
    }

    pub async fn post(&self, path: &str, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .bearer_auth("test-token")
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn put(&self, path: &str) -> reqwest::Response {
        self.client
            .put(self.url(path))
            .bearer_auth("test-token")
            .send()
            .await
            .unwrap()
    }
}
