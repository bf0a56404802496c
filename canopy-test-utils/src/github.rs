//! GitHub API fixtures and mock-endpoint builders.
//!
//! The JSON builders mirror the shape of real contents-endpoint rows,
//! including the extra fields canopy ignores, so tests exercise the
//! tolerant-decoding path rather than a minimal payload.

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A `type: "file"` contents row with a download URL.
pub fn file_entry(name: &str, entry_path: &str, download_url: &str) -> Value {
  json!({
      "name": name,
      "path": entry_path,
      "sha": "3d21ec53a331a6f037a91c368710b99387d012c1",
      "size": 1024,
      "type": "file",
      "download_url": download_url,
      "html_url": format!("https://github.com/owner/repo/blob/main/{entry_path}"),
      "_links": { "self": format!("https://api.github.com/repos/owner/repo/contents/{entry_path}") }
  })
}

/// A `type: "dir"` contents row; directories carry no download URL.
pub fn dir_entry(name: &str, entry_path: &str) -> Value {
  json!({
      "name": name,
      "path": entry_path,
      "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
      "size": 0,
      "type": "dir",
      "download_url": null,
      "html_url": format!("https://github.com/owner/repo/tree/main/{entry_path}")
  })
}

/// Mount the identity endpoint (`GET /user`) with the given status.
pub async fn mock_user_identity(server: &MockServer, status: u16) {
  Mock::given(method("GET"))
    .and(path("/user"))
    .respond_with(ResponseTemplate::new(status).set_body_json(json!({
        "login": "octocat",
        "id": 1
    })))
    .mount(server)
    .await;
}

/// Mount the owner-lookup endpoint (`GET /users/{owner}`).
pub async fn mock_owner_lookup(server: &MockServer, owner: &str, status: u16) {
  Mock::given(method("GET"))
    .and(path(format!("/users/{owner}")))
    .respond_with(ResponseTemplate::new(status).set_body_json(json!({
        "login": owner,
        "id": 1
    })))
    .mount(server)
    .await;
}

/// Mount a contents-endpoint listing for one directory level.
///
/// An empty `dir_path` mounts the repository root.
pub async fn mock_listing(server: &MockServer, owner: &str, repo: &str, dir_path: &str, entries: Vec<Value>) {
  let endpoint = if dir_path.is_empty() {
    format!("/repos/{owner}/{repo}/contents")
  } else {
    format!("/repos/{owner}/{repo}/contents/{dir_path}")
  };

  Mock::given(method("GET"))
    .and(path(endpoint))
    .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(entries)))
    .mount(server)
    .await;
}

/// Mount a raw-content URL returning the given status and body bytes.
pub async fn mock_raw_file(server: &MockServer, file_path: &str, status: u16, body: impl Into<Vec<u8>>) {
  Mock::given(method("GET"))
    .and(path(file_path))
    .respond_with(ResponseTemplate::new(status).set_body_bytes(body.into()))
    .mount(server)
    .await;
}
