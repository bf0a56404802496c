//! Session-level integration tests driving a full browse flow against a
//! mock GitHub API.

use std::time::Duration;

use canopy::{
  AuthToken, BrowseSession, Cancelled, ErrorDetail, ExpandOutcome, ExpansionState, FileContent, GitHubClient,
  OpenOutcome, RepoLocator,
};
use canopy_test_utils::github::{dir_entry, file_entry, mock_listing, mock_owner_lookup, mock_raw_file, mock_user_identity};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session_against(server: &MockServer) -> BrowseSession {
  let client = GitHubClient::new().with_base_url(server.uri());
  BrowseSession::with_client(client, AuthToken::new("test_token"), RepoLocator::new("octocat", "Hello-World"))
}

#[tokio::test]
async fn full_browse_flow() {
  let server = MockServer::start().await;

  mock_user_identity(&server, 200).await;
  mock_owner_lookup(&server, "octocat", 200).await;
  let readme_url = format!("{}/raw/README.md", server.uri());
  mock_listing(
    &server,
    "octocat",
    "Hello-World",
    "",
    vec![file_entry("README.md", "README.md", &readme_url), dir_entry("src", "src")],
  )
  .await;
  mock_listing(
    &server,
    "octocat",
    "Hello-World",
    "src",
    vec![file_entry("main.rs", "src/main.rs", "d2")],
  )
  .await;
  mock_raw_file(&server, "/raw/README.md", 200, "hello world").await;

  // The dialog flow validates credentials before browsing starts
  let client = GitHubClient::new().with_base_url(server.uri());
  let token = AuthToken::new("test_token");
  let cancel = canopy::CancelToken::new();
  assert!(client.validate_token(&token, &cancel).await.unwrap());
  assert!(client.validate_owner(&token, "octocat", &cancel).await.unwrap());

  let mut session = session_against(&server);

  // Root expansion materializes one level, directories first
  let outcome = session.expand_directory("").await.unwrap();
  assert_eq!(outcome, ExpandOutcome::Expanded { children: 2 });

  let root_children: Vec<&str> = session
    .tree()
    .root()
    .children()
    .iter()
    .map(|node| node.entry().unwrap().name.as_str())
    .collect();
  assert_eq!(root_children, ["src", "README.md"]);

  // The unexpanded child directory still shows a placeholder
  let src = session.tree().node("src").unwrap();
  assert_eq!(src.state(), ExpansionState::Collapsed);
  assert!(src.children()[0].is_placeholder());

  // Expanding the child fetches exactly its level
  let outcome = session.expand_directory("src").await.unwrap();
  assert_eq!(outcome, ExpandOutcome::Expanded { children: 1 });
  assert!(session.tree().node("src/main.rs").is_some());

  // Re-expansion is a no-op, not a second fetch
  let outcome = session.expand_directory("").await.unwrap();
  assert_eq!(outcome, ExpandOutcome::AlreadyExpanded);

  // Selecting the readme fetches its text through the download URL
  let outcome = session.open_file("README.md", Some(readme_url.as_str())).await.unwrap();
  match outcome {
    OpenOutcome::Opened(result) => {
      assert!(result.success);
      assert_eq!(result.data, FileContent::Text("hello world".to_string()));
    }
    OpenOutcome::InFlight => panic!("nothing else should be in flight"),
  }
}

#[tokio::test]
async fn failed_expansion_reverts_then_retries() {
  let server = MockServer::start().await;

  // First attempt hits a server error, the retry succeeds
  Mock::given(method("GET"))
    .and(path("/repos/octocat/Hello-World/contents"))
    .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
    .up_to_n_times(1)
    .mount(&server)
    .await;
  mock_listing(
    &server,
    "octocat",
    "Hello-World",
    "",
    vec![file_entry("README.md", "README.md", "d1")],
  )
  .await;

  let mut session = session_against(&server);

  let outcome = session.expand_directory("").await.unwrap();
  match outcome {
    ExpandOutcome::Failed { message } => assert!(message.contains("HTTP 500")),
    other => panic!("expected failure, got {other:?}"),
  }
  assert_eq!(session.tree().root().state(), ExpansionState::Collapsed);

  let outcome = session.expand_directory("").await.unwrap();
  assert_eq!(outcome, ExpandOutcome::Expanded { children: 1 });
}

#[tokio::test]
async fn generic_error_detail_hides_http_specifics() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/repos/octocat/Hello-World/contents"))
    .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
    .mount(&server)
    .await;

  let mut session = session_against(&server).with_error_detail(ErrorDetail::Generic);

  let outcome = session.expand_directory("").await.unwrap();
  match outcome {
    ExpandOutcome::Failed { message } => {
      assert_eq!(message, "Could not load directory contents");
    }
    other => panic!("expected failure, got {other:?}"),
  }
}

#[tokio::test]
async fn png_selection_routes_to_binary() {
  let server = MockServer::start().await;
  let payload: Vec<u8> = vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0xff];
  mock_raw_file(&server, "/raw/diagram.png", 200, payload.clone()).await;

  let session = session_against(&server);
  let url = format!("{}/raw/diagram.png", server.uri());

  let outcome = session.open_file("diagram.png", Some(url.as_str())).await.unwrap();
  match outcome {
    OpenOutcome::Opened(result) => {
      assert!(result.success);
      assert_eq!(result.data, FileContent::Binary(payload));
    }
    OpenOutcome::InFlight => panic!("nothing else should be in flight"),
  }
}

#[tokio::test]
async fn missing_download_url_is_a_terminal_failure() {
  let server = MockServer::start().await;
  let session = session_against(&server);

  let outcome = session.open_file("entry.txt", None).await.unwrap();
  match outcome {
    OpenOutcome::Opened(result) => {
      assert!(!result.success);
      assert_eq!(result.data, FileContent::Text(String::new()));
      assert!(result.message.unwrap().contains("no retrievable content"));
    }
    OpenOutcome::InFlight => panic!("no fetch should have been attempted"),
  }
}

#[tokio::test]
async fn concurrent_fetches_of_one_url_deduplicate() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/raw/big.txt"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_string("contents")
        .set_delay(Duration::from_millis(100)),
    )
    .mount(&server)
    .await;

  let session = session_against(&server);
  let url = format!("{}/raw/big.txt", server.uri());

  let (first, second) = tokio::join!(session.open_file("big.txt", Some(url.as_str())), session.open_file("big.txt", Some(url.as_str())));

  let outcomes = [first.unwrap(), second.unwrap()];
  let skipped = outcomes.iter().filter(|o| matches!(o, OpenOutcome::InFlight)).count();
  let opened = outcomes.iter().filter(|o| matches!(o, OpenOutcome::Opened(_))).count();
  assert_eq!(skipped, 1);
  assert_eq!(opened, 1);

  // The key is released once the winner completes
  let outcome = session.open_file("big.txt", Some(url.as_str())).await.unwrap();
  assert!(matches!(outcome, OpenOutcome::Opened(_)));
}

#[tokio::test]
async fn closed_session_cancels_everything() {
  let server = MockServer::start().await;
  let mut session = session_against(&server);

  session.close();

  assert_eq!(session.expand_directory("").await, Err(Cancelled));
  assert_eq!(session.open_file("README.md", Some("http://example/readme")).await, Err(Cancelled));
}

#[tokio::test]
async fn cancellation_mid_flight_aborts_cleanly() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/repos/octocat/Hello-World/contents"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_string("[]")
        .set_delay(Duration::from_secs(5)),
    )
    .mount(&server)
    .await;

  let mut session = session_against(&server);
  let cancel = session.cancel_token();

  let canceller = async move {
    tokio::time::sleep(Duration::from_millis(50)).await;
    cancel.cancel();
  };

  let (outcome, ()) = tokio::join!(session.expand_directory(""), canceller);
  assert_eq!(outcome, Err(Cancelled));
}
