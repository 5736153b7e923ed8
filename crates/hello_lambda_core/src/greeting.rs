use crate::contract::{EnvelopeError, Headers, ProxyResponse};

pub const GREETING_STATUS_CODE: u16 = 200;
pub const GREETING_HEADER_NAME: &str = "X-Some-Header";
pub const GREETING_HEADER_VALUE: &str = "Wow";
pub const GREETING_MESSAGE: &str = "Hello from Lambda!";

/// The envelope returned for every invocation, whatever the event.
pub fn greeting_response() -> Result<ProxyResponse, EnvelopeError> {
    let headers = Headers::from([(
        GREETING_HEADER_NAME.to_string(),
        GREETING_HEADER_VALUE.to_string(),
    )]);
    ProxyResponse::json(GREETING_STATUS_CODE, headers, GREETING_MESSAGE)
}
