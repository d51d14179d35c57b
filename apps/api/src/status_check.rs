//! Server status check — is the backend API up, is the frontend port open?

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::net::TcpStream;
use tracing::debug;

use crate::config::StatusCheckConfig;

/// Outcome of a GET against the backend status URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlCheck {
    /// Responded with a status below 400.
    Up(u16),
    /// Responded, but with 400 or above.
    Unhealthy(u16),
    /// No HTTP response at all.
    Unreachable(String),
}

impl UrlCheck {
    pub fn is_up(&self) -> bool {
        matches!(self, UrlCheck::Up(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    BothRunning,
    BackendOnly,
    FrontendOnly,
    Neither,
}

#[derive(Debug, Clone)]
pub struct StatusReport {
    pub backend_port: u16,
    pub backend_port_open: bool,
    /// Only probed when the backend port is open.
    pub backend_api: Option<UrlCheck>,
    pub frontend_port: u16,
    pub frontend_port_open: bool,
}

impl StatusReport {
    /// Based on open ports only; an unhealthy API still counts as running.
    pub fn verdict(&self) -> Verdict {
        match (self.backend_port_open, self.frontend_port_open) {
            (true, true) => Verdict::BothRunning,
            (true, false) => Verdict::BackendOnly,
            (false, true) => Verdict::FrontendOnly,
            (false, false) => Verdict::Neither,
        }
    }
}

impl Verdict {
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::BothRunning => "Both servers appear to be running correctly.",
            Verdict::BackendOnly => "Backend is running, but frontend is not available.",
            Verdict::FrontendOnly => "Frontend is running, but backend is not available.",
            Verdict::Neither => "Neither server is running.",
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Verdict::BothRunning => None,
            Verdict::BackendOnly => Some("Start the frontend server."),
            Verdict::FrontendOnly => Some("Start the backend server (resume-assistant)."),
            Verdict::Neither => Some("Start the backend (resume-assistant) and frontend servers."),
        }
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resume Assistant Server Status Check")?;
        writeln!(f, "====================================")?;

        writeln!(f, "\nBackend:")?;
        if !self.backend_port_open {
            writeln!(f, "  NOT running (port {} is closed)", self.backend_port)?;
        } else {
            writeln!(f, "  port {} is open", self.backend_port)?;
            match &self.backend_api {
                Some(UrlCheck::Up(status)) => {
                    writeln!(f, "  API is responding (status {status})")?
                }
                Some(UrlCheck::Unhealthy(status)) => writeln!(
                    f,
                    "  port is open but API is not responding properly: status {status}"
                )?,
                Some(UrlCheck::Unreachable(reason)) => writeln!(
                    f,
                    "  port is open but API is not responding properly: {reason}"
                )?,
                None => {}
            }
        }

        writeln!(f, "\nFrontend:")?;
        if self.frontend_port_open {
            writeln!(f, "  running (port {} is open)", self.frontend_port)?;
        } else {
            writeln!(f, "  NOT running (port {} is closed)", self.frontend_port)?;
        }

        let verdict = self.verdict();
        writeln!(f, "\nSummary: {}", verdict.message())?;
        if let Some(hint) = verdict.hint() {
            writeln!(f, "  {hint}")?;
        }
        write!(
            f,
            "\nIf the servers were started recently they may still be initializing; \
             wait a moment and check again."
        )
    }
}

/// True when a TCP connection to `host:port` succeeds within `timeout`.
pub async fn check_port_open(host: &str, port: u16, timeout: Duration) -> bool {
    match tokio::time::timeout(timeout, TcpStream::connect((host, port))).await {
        Ok(Ok(_)) => true,
        Ok(Err(e)) => {
            debug!("{host}:{port} refused: {e}");
            false
        }
        Err(_) => {
            debug!("{host}:{port} timed out after {}ms", timeout.as_millis());
            false
        }
    }
}

pub async fn check_url(client: &Client, url: &str) -> UrlCheck {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            if status < 400 {
                UrlCheck::Up(status)
            } else {
                UrlCheck::Unhealthy(status)
            }
        }
        Err(e) => UrlCheck::Unreachable(e.to_string()),
    }
}

/// Probes the backend port, then its status URL if the port is open, then the frontend port.
pub async fn run_checks(config: &StatusCheckConfig) -> Result<StatusReport> {
    let (backend_host, backend_port) = config.backend_address()?;
    let client = Client::builder()
        .timeout(config.timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let backend_port_open = check_port_open(&backend_host, backend_port, config.timeout).await;
    let backend_api = if backend_port_open {
        Some(check_url(&client, &config.backend_status_url).await)
    } else {
        None
    };

    let frontend_port_open =
        check_port_open(&config.frontend_host, config.frontend_port, config.timeout).await;

    Ok(StatusReport {
        backend_port,
        backend_port_open,
        backend_api,
        frontend_port: config.frontend_port,
        frontend_port_open,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use tokio::net::TcpListener;

    const TIMEOUT: Duration = Duration::from_secs(2);

    /// A port that was just bound and released; nothing listens on it.
    /// Racy: another process may take the port before the probe connects.
    async fn closed_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    }

    async fn spawn_status_server(status: StatusCode) -> u16 {
        let app = Router::new().route("/status", get(move || async move { status }));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        port
    }

    fn report(backend: bool, frontend: bool) -> StatusReport {
        StatusReport {
            backend_port: 5000,
            backend_port_open: backend,
            backend_api: backend.then_some(UrlCheck::Up(200)),
            frontend_port: 3000,
            frontend_port_open: frontend,
        }
    }

    #[tokio::test]
    async fn test_open_port_detected() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        assert!(check_port_open("127.0.0.1", port, TIMEOUT).await);
    }

    #[tokio::test]
    async fn test_closed_port_detected() {
        let port = closed_port().await;
        assert!(!check_port_open("127.0.0.1", port, TIMEOUT).await);
    }

    #[tokio::test]
    async fn test_check_url_up_and_unhealthy() {
        let client = Client::new();
        let ok_port = spawn_status_server(StatusCode::OK).await;
        let bad_port = spawn_status_server(StatusCode::SERVICE_UNAVAILABLE).await;

        let up = check_url(&client, &format!("http://127.0.0.1:{ok_port}/status")).await;
        assert_eq!(up, UrlCheck::Up(200));
        assert!(up.is_up());

        let down = check_url(&client, &format!("http://127.0.0.1:{bad_port}/status")).await;
        assert_eq!(down, UrlCheck::Unhealthy(503));
    }

    #[tokio::test]
    async fn test_check_url_unreachable() {
        let port = closed_port().await;
        let result = check_url(&Client::new(), &format!("http://127.0.0.1:{port}/status")).await;
        assert!(matches!(result, UrlCheck::Unreachable(_)));
    }

    #[tokio::test]
    async fn test_run_checks_backend_only() {
        let backend_port = spawn_status_server(StatusCode::OK).await;
        let frontend_port = closed_port().await;
        let config = StatusCheckConfig {
            backend_status_url: format!("http://127.0.0.1:{backend_port}/status"),
            frontend_host: "127.0.0.1".to_string(),
            frontend_port,
            timeout: TIMEOUT,
        };

        let report = run_checks(&config).await.unwrap();
        assert!(report.backend_port_open);
        assert_eq!(report.backend_api, Some(UrlCheck::Up(200)));
        assert!(!report.frontend_port_open);
        assert_eq!(report.verdict(), Verdict::BackendOnly);
    }

    #[tokio::test]
    async fn test_run_checks_skips_url_when_port_closed() {
        let backend_port = closed_port().await;
        let config = StatusCheckConfig {
            backend_status_url: format!("http://127.0.0.1:{backend_port}/status"),
            frontend_host: "127.0.0.1".to_string(),
            frontend_port: closed_port().await,
            timeout: TIMEOUT,
        };

        let report = run_checks(&config).await.unwrap();
        assert!(report.backend_api.is_none());
        assert_eq!(report.verdict(), Verdict::Neither);
    }

    #[test]
    fn test_verdicts() {
        assert_eq!(report(true, true).verdict(), Verdict::BothRunning);
        assert_eq!(report(false, true).verdict(), Verdict::FrontendOnly);
        assert!(Verdict::BothRunning.hint().is_none());
        assert!(Verdict::Neither.hint().is_some());
    }

    #[test]
    fn test_report_display() {
        let text = report(true, false).to_string();
        assert!(text.contains("port 5000 is open"));
        assert!(text.contains("API is responding (status 200)"));
        assert!(text.contains("NOT running (port 3000 is closed)"));
        assert!(text.contains(Verdict::BackendOnly.message()));
    }
}
