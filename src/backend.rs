use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    Router,
};
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use thiserror::Error;
use tokio::{net::TcpListener, signal};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BASE_PATH: &str = "/portfolio/";
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS: u64 = 3_600;

const PORT_BOUNDS: (u16, u16) = (1, 65_535);
const STATIC_CACHE_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 31_536_000);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped with an I/O error: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Always starts and ends with `/`.
    pub base_path: String,
    pub dist_dir: PathBuf,
    pub static_cache_max_age_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            base_path: DEFAULT_BASE_PATH.to_string(),
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            static_cache_max_age_seconds: DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Absent or out-of-bounds values fall
    /// back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_env_non_empty_string(&lookup, "HOST")
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(DEFAULT_HOST);
        let port = parse_env_u16_with_bounds(&lookup, "PORT", DEFAULT_PORT, PORT_BOUNDS);
        let base_path = parse_env_non_empty_string(&lookup, "PORTFOLIO_BASE_PATH")
            .and_then(|value| normalize_base_path(&value))
            .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());
        let dist_dir = parse_env_non_empty_string(&lookup, "PORTFOLIO_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let static_cache_max_age_seconds = parse_env_u64_with_bounds(
            &lookup,
            "STATIC_CACHE_MAX_AGE_SECONDS",
            DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS,
            STATIC_CACHE_MAX_AGE_SECONDS_BOUNDS,
        );

        Self {
            host,
            port,
            base_path,
            dist_dir,
            static_cache_max_age_seconds,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Clone, Debug)]
struct ResponsePolicy {
    base_path: String,
    static_cache_max_age_seconds: u64,
}

#[derive(Debug, PartialEq, Eq)]
enum BaseRoute {
    Redirect,
    Inside(String),
    Outside,
}

pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let address = config.socket_addr();
    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| ServerError::Bind { address, source })?;

    info!(
        %address,
        base_path = %config.base_path,
        dist_dir = %config.dist_dir.display(),
        "server_listening"
    );

    axum::serve(listener, router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("server_stopped");
    Ok(())
}

pub fn router(config: &ServerConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index));
    let policy = Arc::new(ResponsePolicy {
        base_path: config.base_path.clone(),
        static_cache_max_age_seconds: config.static_cache_max_age_seconds,
    });

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(policy, serve_under_base))
}

async fn serve_under_base(
    State(policy): State<Arc<ResponsePolicy>>,
    mut request: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    info!(request_id = %request_id, method = %method, path = %path, "request_started");

    let mut response = match route_under_base(&policy.base_path, &path) {
        BaseRoute::Redirect => Redirect::permanent(&policy.base_path).into_response(),
        BaseRoute::Outside => StatusCode::NOT_FOUND.into_response(),
        BaseRoute::Inside(local_path) => {
            let local = match request.uri().query() {
                Some(query) => format!("{local_path}?{query}"),
                None => local_path,
            };
            if let Ok(uri) = local.parse::<Uri>() {
                *request.uri_mut() = uri;
            }

            let mut response = next.run(request).await;
            if response.status().is_success() || response.status() == StatusCode::NOT_MODIFIED {
                let content_type = response
                    .headers()
                    .get(header::CONTENT_TYPE)
                    .and_then(|value| value.to_str().ok())
                    .map(ToString::to_string);
                response.headers_mut().insert(
                    header::CACHE_CONTROL,
                    cache_control_for(content_type.as_deref(), policy.static_cache_max_age_seconds),
                );
            }
            response
        }
    };

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    info!(
        request_id = %request_id,
        status = response.status().as_u16(),
        duration_ms = started.elapsed().as_millis() as u64,
        "request_completed"
    );
    response
}

fn route_under_base(base_path: &str, path: &str) -> BaseRoute {
    if base_path == "/" {
        return BaseRoute::Inside(path.to_string());
    }
    if path == "/" || path == base_path.trim_end_matches('/') {
        return BaseRoute::Redirect;
    }
    match path.strip_prefix(base_path) {
        Some(rest) => BaseRoute::Inside(format!("/{rest}")),
        None => BaseRoute::Outside,
    }
}

/// Collapse a configured base path to `/segment/.../`. Rejects traversal
/// segments and anything that is not a plain path.
pub fn normalize_base_path(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty()
        || raw.contains(&['?', '#', '\\'][..])
        || raw.chars().any(char::is_whitespace)
    {
        return None;
    }

    let segments: Vec<&str> = raw.split('/').filter(|segment| !segment.is_empty()).collect();
    if segments.iter().any(|segment| *segment == "." || *segment == "..") {
        return None;
    }
    if segments.is_empty() {
        return Some("/".to_string());
    }

    Some(format!("/{}/", segments.join("/")))
}

fn cache_control_for(content_type: Option<&str>, max_age_seconds: u64) -> HeaderValue {
    let is_html = content_type.is_some_and(|value| value.starts_with("text/html"));
    if is_html || max_age_seconds == 0 {
        return HeaderValue::from_static("no-cache");
    }
    HeaderValue::from_str(&format!("public, max-age={max_age_seconds}"))
        .unwrap_or_else(|_| HeaderValue::from_static("no-cache"))
}

fn parse_env_non_empty_string<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_env_u64_with_bounds<F>(lookup: &F, name: &str, default: u64, bounds: (u64, u64)) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_u16_with_bounds<F>(lookup: &F, name: &str, default: u16, bounds: (u16, u16)) -> u16
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            warn!(%error, "ctrl_c_handler_failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                warn!(%error, "sigterm_handler_failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!(signal = "ctrl_c", "shutdown_requested"),
        _ = terminate => info!(signal = "sigterm", "shutdown_requested"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| values.get(name).cloned()
    }

    #[test]
    fn config_defaults_without_environment() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn config_reads_bounded_values() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", " 9000 "),
            ("PORTFOLIO_BASE_PATH", "site//v2"),
            ("PORTFOLIO_DIST_DIR", "public"),
            ("STATIC_CACHE_MAX_AGE_SECONDS", "0"),
        ]));

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.base_path, "/site/v2/");
        assert_eq!(config.dist_dir, PathBuf::from("public"));
        assert_eq!(config.static_cache_max_age_seconds, 0);
    }

    #[test]
    fn out_of_bounds_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "not-an-ip"),
            ("PORT", "0"),
            ("PORTFOLIO_BASE_PATH", "/../etc"),
            ("STATIC_CACHE_MAX_AGE_SECONDS", "31536001"),
        ]));

        assert_eq!(config, ServerConfig::default());
        assert_eq!(
            ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).port,
            DEFAULT_PORT
        );
    }

    #[test]
    fn base_path_normalisation() {
        assert_eq!(normalize_base_path("/portfolio"), Some("/portfolio/".to_string()));
        assert_eq!(normalize_base_path("portfolio/"), Some("/portfolio/".to_string()));
        assert_eq!(normalize_base_path("/"), Some("/".to_string()));
        assert_eq!(normalize_base_path("///"), Some("/".to_string()));
        assert_eq!(normalize_base_path("/a/./b"), None);
        assert_eq!(normalize_base_path("/a b"), None);
        assert_eq!(normalize_base_path("/x?y"), None);
        assert_eq!(normalize_base_path("   "), None);
    }

    #[test]
    fn requests_are_routed_relative_to_base() {
        let base = "/portfolio/";

        assert_eq!(route_under_base(base, "/"), BaseRoute::Redirect);
        assert_eq!(route_under_base(base, "/portfolio"), BaseRoute::Redirect);
        assert_eq!(route_under_base(base, "/portfolio/"), BaseRoute::Inside("/".to_string()));
        assert_eq!(
            route_under_base(base, "/portfolio/assets/app.js"),
            BaseRoute::Inside("/assets/app.js".to_string())
        );
        assert_eq!(route_under_base(base, "/portfolios"), BaseRoute::Outside);
        assert_eq!(route_under_base("/", "/"), BaseRoute::Inside("/".to_string()));
    }

    #[test]
    fn html_is_never_cached_long() {
        assert_eq!(cache_control_for(Some("text/html; charset=utf-8"), 3_600), "no-cache");
        assert_eq!(cache_control_for(Some("application/wasm"), 3_600), "public, max-age=3600");
        assert_eq!(cache_control_for(None, 0), "no-cache");
    }

    #[test]
    fn request_id_is_propagated_or_generated() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(" abc-123 "));
        assert_eq!(resolve_request_id(&headers), "abc-123");

        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"));
        assert_ne!(generated, resolve_request_id(&HeaderMap::new()));
    }

    async fn get(address: SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(address).await.expect("connect to test server");
        let request = format!(
            "GET {path} HTTP/1.1\r\nHost: localhost\r\nx-request-id: test-{}\r\n\
             Connection: close\r\n\r\n",
            path.len()
        );
        stream.write_all(request.as_bytes()).await.expect("send request");

        let mut raw = Vec::new();
        stream.read_to_end(&mut raw).await.expect("read response");
        String::from_utf8_lossy(&raw).to_ascii_lowercase()
    }

    #[tokio::test]
    async fn serves_dist_under_base_path() {
        let dist_dir =
            std::env::temp_dir().join(format!("portfolio-dist-{}", generate_request_id()));
        std::fs::create_dir_all(&dist_dir).expect("create dist dir");
        std::fs::write(dist_dir.join("index.html"), "<html>portfolio index</html>")
            .expect("write index");
        std::fs::write(dist_dir.join("app.js"), "console.log('app');").expect("write script");

        let config = ServerConfig {
            dist_dir: dist_dir.clone(),
            ..ServerConfig::default()
        };
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
        let address = listener.local_addr().expect("local address");
        let app = router(&config);
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let script = get(address, "/portfolio/app.js").await;
        assert!(script.starts_with("http/1.1 200"));
        assert!(script.contains("cache-control: public, max-age=3600"));
        assert!(script.contains("x-request-id: test-17"));
        assert!(script.contains("console.log('app');"));

        let root = get(address, "/").await;
        assert!(root.starts_with("http/1.1 308"));
        assert!(root.contains("location: /portfolio/"));

        let index = get(address, "/portfolio/").await;
        assert!(index.contains("cache-control: no-cache"));
        assert!(index.contains("portfolio index"));

        let fallback = get(address, "/portfolio/projects/unknown").await;
        assert!(fallback.starts_with("http/1.1 200"));
        assert!(fallback.contains("portfolio index"));

        let outside = get(address, "/elsewhere").await;
        assert!(outside.starts_with("http/1.1 404"));

        let _ = std::fs::remove_dir_all(dist_dir);
    }
}
