use fuelcast_core::errors::*;

#[test]
fn rejection_uses_server_message() {
    let err = SubmitError::rejection(400, Some("bad input".into()));
    assert_eq!(err.alert_text(), "Error: bad input");
    assert!(err.to_string().contains("400"));
}

#[test]
fn rejection_without_message_falls_back() {
    let err = SubmitError::rejection(500, None);
    assert_eq!(err.alert_text(), "Error: Unknown error occurred");

    let err = SubmitError::rejection(500, Some(String::new()));
    assert_eq!(err.alert_text(), "Error: Unknown error occurred");
}

#[test]
fn transport_failure_alert_is_generic() {
    let err = SubmitError::transport("connection refused (os error 111)");
    assert_eq!(err.alert_text(), "Failed to connect to the server.");
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn error_codes_are_stable() {
    assert_eq!(
        SubmitError::rejection(400, None).error_code(),
        "SERVER_REJECTION"
    );
    assert_eq!(SubmitError::transport("x").error_code(), "TRANSPORT_FAILURE");
    assert_eq!(
        PredictError::MissingFeature { name: "sfoc".into() }.error_code(),
        "INVALID_FEATURES"
    );
    assert_eq!(
        PredictError::Estimator { reason: "nan".into() }.error_code(),
        "ESTIMATOR_ERROR"
    );
}

#[test]
fn coded_string_prefixes_code() {
    let err = ConfigError::FileNotFound {
        path: "/etc/fuelcast.toml".into(),
    };
    assert_eq!(
        err.coded_string(),
        "[CONFIG_ERROR] Config file not found: /etc/fuelcast.toml"
    );
}

// --- From impls ---

#[test]
fn subsystem_errors_convert_to_fuelcast_error() {
    let err: FuelcastError = SubmitError::transport("timeout").into();
    assert!(matches!(err, FuelcastError::Submit(_)));
    assert_eq!(err.error_code(), "TRANSPORT_FAILURE");

    let err: FuelcastError = PredictError::NotAnObject.into();
    assert_eq!(err.to_string(), "payload must be a JSON object");

    let err: FuelcastError = ConfigError::ValidationFailed {
        field: "client.base_url".into(),
        message: "not a url".into(),
    }
    .into();
    assert!(err.to_string().contains("client.base_url"));
}

#[test]
fn predict_error_classifies_client_faults() {
    assert!(PredictError::NotANumber { name: "sfoc".into() }.is_client_error());
    assert!(!PredictError::Estimator { reason: "x".into() }.is_client_error());
}
