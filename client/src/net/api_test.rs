use super::*;
use serde_json::json;

#[test]
fn failure_prefers_server_message() {
    let body = json!({ "success": false, "message": "Provider has active services" });
    assert_eq!(
        failure_from_body(409, Some(&body)),
        ApiError::Rejected("Provider has active services".to_owned())
    );
}

#[test]
fn failure_falls_back_to_status() {
    assert_eq!(failure_from_body(500, None), ApiError::Status(500));
    assert_eq!(failure_from_body(404, Some(&json!({ "message": "" }))), ApiError::Status(404));
    assert_eq!(failure_from_body(502, Some(&json!("Bad Gateway"))), ApiError::Status(502));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_off_browser() {
    use crate::net::resource::HOTELS;
    use crate::net::types::Hotel;

    let result = futures_lite_block_on(fetch_collection::<Hotel>("http://x", &HOTELS, &[]));
    assert_eq!(result, Err(ApiError::Unavailable));
    let result = futures_lite_block_on(delete_record("http://x", &HOTELS, "h1"));
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Poll a future that never suspends.
#[cfg(not(feature = "hydrate"))]
fn futures_lite_block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::task::{Context, Poll, Waker};

    let mut fut = std::pin::pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future suspended"),
    }
}
