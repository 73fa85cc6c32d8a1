//! Static hosting for the `trunk build` output.
//!
//! Serves `dist/` with an `index.html` fallback and sets cache headers:
//! fingerprinted assets are immutable, documents always revalidate.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use std::{path::PathBuf, sync::Arc, time::Instant};
use tower_http::services::{ServeDir, ServeFile};

use crate::logging::{log_event, LogLevel};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_STATIC_MAX_AGE_SECONDS: u64 = 365 * 24 * 60 * 60;

const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const STATIC_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 365 * 24 * 60 * 60);

#[derive(Clone, Debug, PartialEq)]
struct HostingConfig {
    port: u16,
    dist_dir: PathBuf,
    log_level: LogLevel,
    static_max_age_seconds: u64,
}

impl HostingConfig {
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u16_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = parse_non_empty_string(lookup("DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = parse_non_empty_string(lookup("LOG_LEVEL"))
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);
        let static_max_age_seconds = parse_u64_with_bounds(
            lookup("STATIC_MAX_AGE_SECONDS"),
            DEFAULT_STATIC_MAX_AGE_SECONDS,
            STATIC_MAX_AGE_SECONDS_BOUNDS,
        );

        Self {
            port,
            dist_dir,
            log_level,
            static_max_age_seconds,
        }
    }
}

fn parse_u64_with_bounds(value: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_u16_with_bounds(value: Option<String>, default: u16, bounds: (u16, u16)) -> u16 {
    value
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CachePolicy {
    Revalidate,
    Immutable,
}

impl CachePolicy {
    /// Documents and extension-less routes revalidate; everything else trunk
    /// emits carries a content hash in its name.
    fn for_path(path: &str) -> Self {
        let file_name = path.rsplit('/').next().unwrap_or_default();
        if file_name.is_empty() || file_name.ends_with(".html") || !file_name.contains('.') {
            Self::Revalidate
        } else {
            Self::Immutable
        }
    }

    fn header_value(self, max_age_seconds: u64) -> HeaderValue {
        match self {
            Self::Revalidate => HeaderValue::from_static("no-cache"),
            Self::Immutable => cache_control(&format!(
                "public, max-age={max_age_seconds}, immutable"
            )),
        }
    }
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

async fn cache_and_log(
    State(config): State<Arc<HostingConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let status = response.status();

    // Error bodies (including the index fallback) must never be pinned.
    let policy = if status.is_success() {
        CachePolicy::for_path(&path)
    } else {
        CachePolicy::Revalidate
    };
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        policy.header_value(config.static_max_age_seconds),
    );

    log_event(
        config.log_level,
        LogLevel::Debug,
        "server.request",
        request_fields(
            method.as_str(),
            &path,
            status.as_u16(),
            started.elapsed().as_millis() as u64,
        ),
    );

    response
}

fn request_fields(method: &str, path: &str, status: u16, duration_ms: u64) -> Value {
    json!({
        "method": method,
        "path": path,
        "status": status,
        "duration_ms": duration_ms,
    })
}

fn start_fields(config: &HostingConfig) -> Value {
    json!({
        "url": format!("http://127.0.0.1:{}", config.port),
        "dist_dir": config.dist_dir.display().to_string(),
        "static_max_age_seconds": config.static_max_age_seconds,
    })
}

fn router(config: Arc<HostingConfig>) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(config, cache_and_log))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(HostingConfig::from_env());
    let bind_address = format!("0.0.0.0:{}", config.port);

    if !config.dist_dir.join("index.html").is_file() {
        log_event(
            config.log_level,
            LogLevel::Info,
            "server.dist_missing",
            json!({
                "dist_dir": config.dist_dir.display().to_string(),
                "hint": "run `trunk build --release` first",
            }),
        );
    }

    let app = router(Arc::clone(&config));
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    log_event(
        config.log_level,
        LogLevel::Info,
        "server.start",
        start_fields(&config),
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn config_from(pairs: &[(&str, &str)]) -> HostingConfig {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        HostingConfig::from_lookup(|name| values.get(name).cloned())
    }

    fn scratch_dist(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "portfolio-dist-{}-{name}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("create scratch dist");
        std::fs::write(dir.join("index.html"), "<!doctype html><div id=\"app\"></div>")
            .expect("write index");
        std::fs::write(dir.join("app-3f2a91.js"), "export {};").expect("write asset");
        dir
    }

    async fn get(address: std::net::SocketAddr, path: &str) -> String {
        let mut stream = tokio::net::TcpStream::connect(address)
            .await
            .expect("connect");
        let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.expect("write request");

        let mut response = Vec::new();
        stream.read_to_end(&mut response).await.expect("read response");
        String::from_utf8_lossy(&response).to_ascii_lowercase()
    }

    #[test]
    fn config_defaults_when_environment_is_empty() {
        let config = config_from(&[]);
        assert_eq!(
            config,
            HostingConfig {
                port: DEFAULT_PORT,
                dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
                log_level: DEFAULT_LOG_LEVEL,
                static_max_age_seconds: DEFAULT_STATIC_MAX_AGE_SECONDS,
            }
        );
    }

    #[test]
    fn config_reads_valid_overrides() {
        let config = config_from(&[
            ("PORT", " 9000 "),
            ("DIST_DIR", "/srv/site"),
            ("LOG_LEVEL", "Debug"),
            ("STATIC_MAX_AGE_SECONDS", "600"),
        ]);

        assert_eq!(config.port, 9000);
        assert_eq!(config.dist_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.static_max_age_seconds, 600);
    }

    #[test]
    fn config_ignores_out_of_range_or_malformed_values() {
        let config = config_from(&[
            ("PORT", "0"),
            ("DIST_DIR", "   "),
            ("LOG_LEVEL", "verbose"),
            ("STATIC_MAX_AGE_SECONDS", "99999999999"),
        ]);

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.static_max_age_seconds, DEFAULT_STATIC_MAX_AGE_SECONDS);
    }

    #[test]
    fn cache_policy_pins_only_fingerprinted_assets() {
        assert_eq!(CachePolicy::for_path("/"), CachePolicy::Revalidate);
        assert_eq!(CachePolicy::for_path("/index.html"), CachePolicy::Revalidate);
        assert_eq!(CachePolicy::for_path("/projects"), CachePolicy::Revalidate);
        assert_eq!(
            CachePolicy::for_path("/ruchira-portfolio-9c1e_bg.wasm"),
            CachePolicy::Immutable
        );
        assert_eq!(
            CachePolicy::Immutable.header_value(600),
            HeaderValue::from_static("public, max-age=600, immutable")
        );
    }

    #[test]
    fn log_fields_use_snake_case_keys() {
        let request = request_fields("GET", "/", 200, 12);
        assert_eq!(request["duration_ms"], 12);
        assert_eq!(request["status"], 200);

        let start = start_fields(&config_from(&[("DIST_DIR", "/srv/site")]));
        assert_eq!(start["dist_dir"], "/srv/site");

        for fields in [request, start] {
            let keys = fields.as_object().map(|map| map.keys().cloned().collect::<Vec<_>>());
            for key in keys.unwrap_or_default() {
                assert_eq!(key, key.to_ascii_lowercase(), "{key} is not snake_case");
            }
        }
    }

    #[tokio::test]
    async fn serves_dist_with_cache_headers_and_index_fallback() {
        let dist_dir = scratch_dist("serve");
        let config = Arc::new(HostingConfig {
            dist_dir: dist_dir.clone(),
            ..config_from(&[])
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let address = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router(config)).await;
        });

        let root = get(address, "/").await;
        assert!(root.starts_with("http/1.1 200"), "{root}");
        assert!(root.contains("cache-control: no-cache"));
        assert!(root.contains("id=\"app\""));

        let asset = get(address, "/app-3f2a91.js").await;
        assert!(asset.starts_with("http/1.1 200"), "{asset}");
        assert!(asset.contains("immutable"));

        let missing = get(address, "/missing-1a2b.js").await;
        assert!(missing.starts_with("http/1.1 404"), "{missing}");
        assert!(missing.contains("cache-control: no-cache"));
        assert!(missing.contains("id=\"app\""));

        let _ = std::fs::remove_dir_all(dist_dir);
    }
}
