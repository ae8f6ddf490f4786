use gloo::net::http::Request;
use serde::Deserialize;
use shared::LogEntry;
use wasm_bindgen_futures::spawn_local;

const LOG_ENDPOINT: &str = "http://localhost:5000/api/logs";

#[derive(Debug, Deserialize)]
struct LogResponse {
    #[allow(dead_code)]
    success: bool,
}

/// Forwards browser-side log lines to the backend, which re-emits them through tracing
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log("debug", message, Some(component.to_string()));
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log("info", message, Some(component.to_string()));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log("warn", message, Some(component.to_string()));
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log("error", message, Some(component.to_string()));
    }

    fn log(level: &str, message: &str, component: Option<String>) {
        let entry = LogEntry {
            level: level.to_string(),
            message: message.to_string(),
            component,
        };

        // Send log asynchronously without blocking
        spawn_local(async move {
            let request = match Request::post(LOG_ENDPOINT).json(&entry) {
                Ok(request) => request,
                Err(e) => {
                    gloo::console::error!("Failed to encode log entry:", e.to_string());
                    return;
                }
            };

            match request.send().await {
                Ok(response) => {
                    if response.json::<LogResponse>().await.is_err() {
                        gloo::console::warn!("Log endpoint returned an unexpected body");
                    }
                }
                Err(e) => gloo::console::warn!("Failed to forward log:", e.to_string()),
            }
        });
    }
}
