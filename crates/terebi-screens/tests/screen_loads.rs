//! Screen state machine transitions against a local stub catalog host:
//! all-or-nothing commits, the loaded latch, and reload.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use terebi_api::{Credential, TmdbClient};
use terebi_screens::movies::MoviesScreen;
use terebi_screens::ScreenState;

const MOVIE_PAGE: &str = r#"{"page":1,"total_pages":1,"total_results":1,"results":[{"id":603,"title":"The Matrix","poster_path":null,"backdrop_path":null,"overview":"","vote_average":8.2}]}"#;

/// Minimal HTTP server answering the movie listing endpoints. Optionally
/// 404s `/movie/top_rated` so one of a screen's concurrent sub-fetches
/// fails while the other succeeds.
struct StubCatalog {
    base_url: String,
    hits: Arc<AtomicUsize>,
    task: JoinHandle<()>,
}

impl StubCatalog {
    async fn start(fail_top_rated: bool) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        let task = tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                counter.fetch_add(1, Ordering::SeqCst);

                let mut buf = vec![0u8; 4096];
                let n = stream.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).into_owned();

                let (status, body) = if fail_top_rated && request.contains("/movie/top_rated") {
                    ("404 Not Found", "{}")
                } else {
                    ("200 OK", MOVIE_PAGE)
                };
                let response = format!(
                    "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len(),
                );
                let _ = stream.write_all(response.as_bytes()).await;
            }
        });

        Self {
            base_url,
            hits,
            task,
        }
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Stop accepting connections; later requests are refused.
    async fn stop(self) {
        self.task.abort();
        let _ = self.task.await;
    }
}

fn client(base_url: &str) -> Arc<TmdbClient> {
    Arc::new(TmdbClient::with_base_url(Credential::new("abc123"), base_url).unwrap())
}

#[tokio::test]
async fn test_failed_sub_fetch_commits_nothing() {
    let server = StubCatalog::start(true).await;
    let mut screen = MoviesScreen::new(client(&server.base_url));
    assert!(matches!(screen.state(), ScreenState::Idle));

    screen.load_if_needed().await;

    // Popular succeeded but top-rated 404ed; neither list lands.
    assert!(screen.state().data().is_none());
    let message = screen.state().error().expect("load should fail");
    assert!(message.contains("404"), "unexpected error: {message}");
    server.stop().await;
}

#[tokio::test]
async fn test_success_latches_until_reload() {
    let server = StubCatalog::start(false).await;
    let mut screen = MoviesScreen::new(client(&server.base_url));

    screen.load_if_needed().await;
    let data = screen.state().data().expect("load should succeed");
    assert_eq!(data.popular.len(), 1);
    assert_eq!(data.top_rated.len(), 1);
    let after_first = server.hits();
    assert_eq!(after_first, 2);

    // Latched; no further requests.
    screen.load_if_needed().await;
    assert_eq!(server.hits(), after_first);

    screen.reload().await;
    assert_eq!(server.hits(), after_first + 2);
    assert!(screen.state().data().is_some());
    server.stop().await;
}

#[tokio::test]
async fn test_failed_reload_replaces_ready_wholesale() {
    let server = StubCatalog::start(false).await;
    let mut screen = MoviesScreen::new(client(&server.base_url));

    screen.load_if_needed().await;
    assert!(screen.state().data().is_some());

    server.stop().await;
    screen.reload().await;

    // All-or-nothing: the failed reload leaves Failed, not a stale or
    // half-updated Ready payload.
    assert!(screen.state().data().is_none());
    assert!(screen.state().error().is_some());
}
