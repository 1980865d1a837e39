use super::*;

#[test]
fn command_endpoint_formats_api_path() {
    assert_eq!(command_endpoint(Command::Read), "/api/read");
    assert_eq!(command_endpoint(Command::Write), "/api/write");
    assert_eq!(command_endpoint(Command::Update), "/api/update");
    assert_eq!(command_endpoint(Command::Search), "/api/search");
}

#[test]
fn command_query_blank_argument_sends_nothing() {
    for command in Command::ALL {
        assert_eq!(command_query(command, ""), None);
        assert_eq!(command_query(command, "   "), None);
    }
}

#[test]
fn command_query_search_uses_key_param() {
    assert_eq!(
        command_query(Command::Search, " SONAR_TOKEN "),
        Some(("key", "SONAR_TOKEN".to_owned()))
    );
}

#[test]
fn command_query_other_commands_use_filter_param() {
    assert_eq!(command_query(Command::Update, "billing"), Some(("filter", "billing".to_owned())));
}

#[test]
fn status_error_formats_endpoint_and_status() {
    assert_eq!(status_error("/api/read", 404).to_string(), "/api/read returned status 404");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn helpers_are_unavailable_without_browser() {
    // Futures that resolve without awaiting anything; poll once on a noop waker.
    let waker = std::task::Waker::noop();
    let mut cx = std::task::Context::from_waker(waker);
    let mut license = std::pin::pin!(fetch_license());
    assert_eq!(
        license.as_mut().poll(&mut cx),
        std::task::Poll::Ready(Err(ApiError::Unavailable))
    );
}
