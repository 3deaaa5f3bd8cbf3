//! Test utilities: deterministic fakes for the provider seams.
#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use vitrine_core::{
    DeploymentOrder, DeploymentRecord, TextGenerationRequest, TextGenerationResponse,
};
use vitrine_error::{GeminiError, GeminiErrorKind, VercelError, VercelErrorKind, VitrineResult};
use vitrine_interface::{DeploymentHost, TextGenerator};

/// Generator fake that records every request and answers with a fixed
/// response.
pub struct FakeGenerator {
    pub model: String,
    pub text: String,
    pub calls: AtomicUsize,
    pub requests: Mutex<Vec<TextGenerationRequest>>,
}

impl FakeGenerator {
    pub fn returning(model: &str, text: &str) -> Self {
        Self {
            model: model.to_string(),
            text: text.to_string(),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> TextGenerationRequest {
        self.requests
            .lock()
            .expect("requests lock")
            .last()
            .cloned()
            .expect("at least one recorded request")
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(
        &self,
        request: &TextGenerationRequest,
    ) -> VitrineResult<TextGenerationResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());
        Ok(TextGenerationResponse {
            model: self.model.clone(),
            text: self.text.clone(),
        })
    }
}

/// Generator fake that fails like an overloaded upstream.
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(
        &self,
        _request: &TextGenerationRequest,
    ) -> VitrineResult<TextGenerationResponse> {
        Err(GeminiError::new(GeminiErrorKind::HttpError {
            status_code: 503,
            message: "upstream unavailable".to_string(),
        })
        .into())
    }
}

/// Host fake that records every order and answers with a fixed record.
pub struct FakeHost {
    pub record: DeploymentRecord,
    pub orders: Mutex<Vec<DeploymentOrder>>,
}

impl FakeHost {
    pub fn returning(record: DeploymentRecord) -> Self {
        Self {
            record,
            orders: Mutex::new(Vec::new()),
        }
    }

    pub fn last_order(&self) -> DeploymentOrder {
        self.orders
            .lock()
            .expect("orders lock")
            .last()
            .cloned()
            .expect("at least one recorded order")
    }
}

#[async_trait]
impl DeploymentHost for FakeHost {
    async fn deploy(&self, order: &DeploymentOrder) -> VitrineResult<DeploymentRecord> {
        self.orders.lock().expect("orders lock").push(order.clone());
        Ok(self.record.clone())
    }
}

/// Host fake that fails like a provider rejecting the payload.
pub struct FailingHost;

#[async_trait]
impl DeploymentHost for FailingHost {
    async fn deploy(&self, _order: &DeploymentOrder) -> VitrineResult<DeploymentRecord> {
        Err(VercelError::new(VercelErrorKind::HttpError {
            status_code: 402,
            message: "payment required".to_string(),
        })
        .into())
    }
}
