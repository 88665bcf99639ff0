use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use clara_sitemap::config::FirestoreConfig;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{header, Request, Response};
use hyper_util::rt::TokioIo;
use indoc::indoc;
use tokio::net::TcpListener;

pub use hyper::StatusCode;

pub const TWO_ARTICLES: &str = indoc! {r#"
    {
      "documents": [
        {
          "name": "projects/le-choix-de-clara/databases/(default)/documents/artifacts/le-choix-de-clara/public/data/articles/abc123",
          "fields": { "title": { "stringValue": "Bien choisir sa poussette" } },
          "createTime": "2024-02-01T08:00:00.000000Z",
          "updateTime": "2024-02-03T08:00:00.000000Z"
        },
        {
          "name": "projects/le-choix-de-clara/databases/(default)/documents/artifacts/le-choix-de-clara/public/data/articles/xyz789",
          "fields": {},
          "createTime": "2024-03-01T08:00:00.000000Z",
          "updateTime": "2024-03-01T08:00:00.000000Z"
        }
      ]
    }
"#};

/// A stand-in for the Firestore REST API that answers every request with the
/// same status and body.
pub struct FakeFirestore {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeFirestore {
    pub async fn serve(status: StatusCode, body: &'static str) -> Self {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();

        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = requests.clone();

        tokio::task::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };

                let io = TokioIo::new(stream);
                let seen = seen.clone();

                tokio::task::spawn(async move {
                    let service = service_fn(move |req: Request<hyper::body::Incoming>| {
                        seen.lock().unwrap().push(req.uri().path().to_string());

                        async move {
                            Ok::<_, Infallible>(
                                Response::builder()
                                    .header(header::CONTENT_TYPE, "application/json")
                                    .status(status)
                                    .body(Full::new(Bytes::from_static(body.as_bytes())))
                                    .unwrap(),
                            )
                        }
                    });

                    if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                        eprintln!("Error serving connection: {err:?}");
                    }
                });
            }
        });

        Self { addr, requests }
    }

    pub fn api_base(&self) -> String {
        format!("http://{}", self.addr)
    }

    #[allow(dead_code)]
    pub fn config(&self) -> FirestoreConfig {
        FirestoreConfig {
            api_base: self.api_base(),
            ..Default::default()
        }
    }

    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}
