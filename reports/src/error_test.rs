use super::*;

#[test]
fn unauthorized_displays_credential_message_regardless_of_detail() {
    for op in [Operation::Analysis, Operation::Research, Operation::Audit] {
        let err = ApiError::from_response(op, 401, r#"{"detail":"Invalid or missing API key"}"#);
        assert_eq!(err, ApiError::Unauthorized(op));
        assert_eq!(err.to_string(), "Invalid credential");
    }
}

#[test]
fn quota_exceeded_displays_fixed_message_and_keeps_detail() {
    let err = ApiError::from_response(
        Operation::Research,
        429,
        r#"{"detail":"Monthly quota exceeded (10/10). Upgrade your plan."}"#,
    );
    assert_eq!(err.to_string(), "Quota exceeded");
    assert!(matches!(
        err,
        ApiError::QuotaExceeded { detail: Some(ref d), .. } if d.starts_with("Monthly quota")
    ));
}

#[test]
fn other_status_prefers_server_detail() {
    let err = ApiError::from_response(Operation::Checkout, 400, r#"{"detail":"Invalid plan: gold"}"#);
    assert_eq!(err.to_string(), "Invalid plan: gold");
    assert_eq!(err.status(), Some(400));
}

#[test]
fn other_status_without_detail_uses_operation_fallback() {
    let err = ApiError::from_response(Operation::Audit, 500, "Internal Server Error");
    assert_eq!(err.to_string(), "Site audit failed");

    let err = ApiError::from_response(Operation::Analysis, 502, r#"{"detail":"   "}"#);
    assert_eq!(err.to_string(), "Domain analysis failed");
}

#[test]
fn validation_detail_list_uses_first_msg() {
    let body = r#"{"detail":[{"loc":["body","domain"],"msg":"field required","type":"value_error.missing"}]}"#;
    assert_eq!(extract_detail(body), Some("field required".to_owned()));
}

#[test]
fn extract_detail_ignores_non_json_and_missing_field() {
    assert_eq!(extract_detail("<html>bad gateway</html>"), None);
    assert_eq!(extract_detail(r#"{"error":"x"}"#), None);
    assert_eq!(extract_detail(r#"{"detail":42}"#), None);
}

#[test]
fn network_and_decode_errors_use_generic_message() {
    let net = ApiError::network(Operation::History, "connection refused");
    assert_eq!(net.to_string(), "History request failed");
    assert_eq!(net.status(), None);

    let dec = ApiError::decode(Operation::Research, "missing field `keyword`");
    assert_eq!(dec.to_string(), "Keyword research failed");
    assert_eq!(dec.operation(), Operation::Research);
}

#[test]
fn status_reports_classified_codes() {
    assert_eq!(ApiError::Unauthorized(Operation::Audit).status(), Some(401));
    let quota = ApiError::QuotaExceeded { op: Operation::Audit, detail: None };
    assert_eq!(quota.status(), Some(429));
    assert_eq!(ApiError::InvalidInput(Operation::Audit).status(), None);
}

#[test]
fn forwarder_unreachable_reply_is_a_network_failure() {
    let body = r#"{"detail":"SEO backend unreachable","error":"upstream_unreachable"}"#;
    let err = ApiError::from_response(Operation::Analysis, 502, body);
    assert!(matches!(err, ApiError::Network { op: Operation::Analysis, .. }));
    assert_eq!(err.to_string(), "Domain analysis failed");
    assert_eq!(err.status(), None);
}

#[test]
fn backend_bad_gateway_without_marker_keeps_detail() {
    let err = ApiError::from_response(Operation::Audit, 502, r#"{"detail":"Crawler timed out"}"#);
    assert_eq!(err.to_string(), "Crawler timed out");
    assert_eq!(err.status(), Some(502));
}
