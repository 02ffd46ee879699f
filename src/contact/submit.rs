use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::info;
use serde::Deserialize;
use thiserror::Error;

use super::form::ContactPayload;
use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SubmitReceipt {
    #[serde(default)]
    pub reference: Option<String>,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not reach the uplink: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("uplink rejected the transmission ({0})")]
    Rejected(u16),
}

/// Where the contact form sends its payload.
pub trait ContactSubmitter {
    fn submit(&self, payload: ContactPayload) -> LocalBoxFuture<'static, Result<SubmitReceipt, SubmitError>>;
}

/// Waits a fixed time and reports success. Nothing leaves the browser.
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

impl ContactSubmitter for SimulatedSubmitter {
    fn submit(&self, payload: ContactPayload) -> LocalBoxFuture<'static, Result<SubmitReceipt, SubmitError>> {
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            TimeoutFuture::new(delay_ms).await;
            info!("simulated transmission from {} accepted", payload.codename);
            Ok(SubmitReceipt::default())
        })
    }
}

/// Posts the payload as JSON to the backend.
pub struct HttpSubmitter {
    pub url: String,
}

impl HttpSubmitter {
    pub fn new(path: &str) -> Self {
        Self {
            url: format!("{}{}", config::get_backend_url(), path),
        }
    }
}

impl ContactSubmitter for HttpSubmitter {
    fn submit(&self, payload: ContactPayload) -> LocalBoxFuture<'static, Result<SubmitReceipt, SubmitError>> {
        let url = self.url.clone();
        Box::pin(async move {
            let response = Request::post(&url).json(&payload)?.send().await?;
            if !response.ok() {
                return Err(SubmitError::Rejected(response.status()));
            }
            // An empty body still counts as delivered.
            Ok(response.json::<SubmitReceipt>().await.unwrap_or_default())
        })
    }
}

/// Picks the real backend when the build names one.
pub fn default_submitter() -> Box<dyn ContactSubmitter> {
    match config::contact_endpoint() {
        Some(path) => {
            info!("contact form posting to {}", path);
            Box::new(HttpSubmitter::new(path))
        }
        None => Box::new(SimulatedSubmitter {
            delay_ms: config::SIMULATED_SUBMIT_DELAY_MS,
        }),
    }
}
