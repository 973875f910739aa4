use crate::effects::{
    config::{parse_non_empty_string, parse_u16_with_bounds},
    log::{event_payload, LogLevel, DEFAULT_LOG_LEVEL},
    markup::DOM_HOOKS,
};
use axum::Router;
use scraper::{Html, Selector};
use serde::Serialize;
use serde_json::json;
use std::{
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const DEFAULT_STATIC_DIR: &str = "dist";
const INDEX_FILE: &str = "index.html";

#[derive(Clone, Debug, PartialEq)]
struct ServerConfig {
    port: u16,
    static_dir: PathBuf,
    log_level: LogLevel,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u16_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let static_dir = parse_non_empty_string(lookup("STATIC_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let log_level = parse_non_empty_string(lookup("LOG_LEVEL"))
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            static_dir,
            log_level,
        }
    }

    fn index_path(&self) -> PathBuf {
        self.static_dir.join(INDEX_FILE)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
struct HookReport {
    behavior: &'static str,
    selector: String,
    matches: usize,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    audit_page(&config, &config.index_path());

    let static_service =
        ServeDir::new(&config.static_dir).not_found_service(ServeFile::new(config.index_path()));
    let app = Router::new().fallback_service(static_service);

    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        &config,
        LogLevel::Info,
        "server_listening",
        json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "staticDir": config.static_dir.display().to_string(),
        }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

fn audit_page(config: &ServerConfig, index_path: &Path) {
    let document_html = match fs::read_to_string(index_path) {
        Ok(document_html) => document_html,
        Err(error) => {
            log_event(
                config,
                LogLevel::Info,
                "markup_audit_skipped",
                json!({
                    "path": index_path.display().to_string(),
                    "reason": error.to_string(),
                }),
            );
            return;
        }
    };

    let reports = audit_markup(&document_html);
    for report in &reports {
        let (level, event) = if report.matches == 0 {
            (LogLevel::Warn, "markup_hook_missing")
        } else {
            (LogLevel::Debug, "markup_hook_found")
        };
        log_event(
            config,
            level,
            event,
            serde_json::to_value(report).unwrap_or_default(),
        );
    }

    log_event(
        config,
        LogLevel::Info,
        "markup_audit_complete",
        json!({
            "path": index_path.display().to_string(),
            "hooks": reports.len(),
            "missing": missing_hooks(&reports).len(),
        }),
    );
}

fn audit_markup(document_html: &str) -> Vec<HookReport> {
    let document = Html::parse_document(document_html);

    DOM_HOOKS
        .iter()
        .map(|hook| {
            let selector = hook.css_selector();
            HookReport {
                behavior: hook.behavior,
                matches: count_matches(&document, &selector),
                selector,
            }
        })
        .collect()
}

fn missing_hooks(reports: &[HookReport]) -> Vec<&str> {
    reports
        .iter()
        .filter(|report| report.matches == 0)
        .map(|report| report.selector.as_str())
        .collect()
}

fn count_matches(document: &Html, selector: &str) -> usize {
    Selector::parse(selector)
        .map(|selector| document.select(&selector).count())
        .unwrap_or(0)
}

fn log_event(config: &ServerConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    println!("{}", event_payload(now_unix_seconds(), level, event, fields));
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}
