//! Test helpers: build the router against an in-memory store.
//!
//! Run from workspace root: `cargo test -p threadfile-api`.

#![allow(dead_code)]

pub mod fixtures;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::{TestResponse, TestServer};
use threadfile_api::constants;
use threadfile_api::setup;
use threadfile_core::Config;

/// API path for tests (e.g. `/api/upload`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_BASE, path)
}

/// Test application with default configuration.
pub struct TestApp {
    pub server: TestServer,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Upload `data` as `file_name` for `thread_id`.
    pub async fn upload(&self, thread_id: &str, file_name: &str, data: Vec<u8>) -> TestResponse {
        let form = MultipartForm::new()
            .add_text("threadId", thread_id)
            .add_part("file", file_part(file_name, data));
        self.server.post(&api_path("/upload")).multipart(form).await
    }
}

pub fn file_part(file_name: &str, data: Vec<u8>) -> Part {
    let mime = if file_name.ends_with(".pdf") {
        "application/pdf"
    } else if file_name.ends_with(".docx") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    } else {
        "application/octet-stream"
    };
    Part::bytes(bytes::Bytes::from(data))
        .file_name(file_name.to_string())
        .mime_type(mime)
}

pub fn setup_test_app() -> TestApp {
    let config = Config::from_lookup(|_| None).expect("Failed to build test config");
    let (_state, router) = setup::build_app(config).expect("Failed to build app");
    let server = TestServer::new(router.into_make_service()).expect("Failed to create test server");
    TestApp { server }
}
