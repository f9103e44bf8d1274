//! Custom assertion macros

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert an HTTP response's status and JSON `error` message
#[macro_export]
macro_rules! assert_error_body {
    ($response:expr, $status:expr, $message:expr) => {
        let (status, body) = $response;
        assert_eq!(status, $status, "unexpected status, body: {}", body);
        assert_eq!(body["error"], $message);
        assert_eq!(body["status"], $status.as_u16());
    };
}
