use crate::error::Result;
use crate::sink::ResponseSink;
use http::StatusCode;
use serde::Serialize;

const CONTENT_TYPE_JSON: &str = "application/json";

/// Payload argument for the no-body call sites, avoids spelling out
/// `None::<&()>` in every handler.
pub const NO_PAYLOAD: Option<&()> = None;

/// Builds exactly one success response against a borrowed sink.
///
/// Constructed per request, used for one terminal operation, then
/// discarded. Each operation commits the sink once; a second
/// operation surfaces the sink's [`AlreadyWritten`] error instead of
/// overwriting the response already on the wire.
///
/// [`AlreadyWritten`]: crate::error::RespondError::AlreadyWritten
pub struct ResponseBuilder<'a, S: ResponseSink> {
    sink: &'a mut S,
}

impl<'a, S: ResponseSink> ResponseBuilder<'a, S> {
    /// Bind a builder to a sink. No validation happens here; problems
    /// surface when an operation is invoked.
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink }
    }

    /// Respond `200 OK`, serializing `payload` as JSON if present.
    pub fn ok<T: Serialize>(&mut self, payload: Option<&T>) -> Result<()> {
        self.respond(StatusCode::OK, payload)
    }

    /// Respond `201 Created`, serializing `payload` as JSON if present.
    pub fn created<T: Serialize>(&mut self, payload: Option<&T>) -> Result<()> {
        self.respond(StatusCode::CREATED, payload)
    }

    /// Respond `202 Accepted`, serializing `payload` as JSON if present.
    pub fn accepted<T: Serialize>(&mut self, payload: Option<&T>) -> Result<()> {
        self.respond(StatusCode::ACCEPTED, payload)
    }

    /// Respond `204 No Content`: zero body bytes, no content-type.
    /// A supplied payload is ignored, never serialized.
    pub fn no_content<T: Serialize>(&mut self, _payload: Option<&T>) -> Result<()> {
        self.respond::<()>(StatusCode::NO_CONTENT, None)
    }

    fn respond<T: Serialize>(&mut self, status: StatusCode, payload: Option<&T>) -> Result<()> {
        let value = match payload {
            Some(value) => value,
            None => {
                self.sink.set_status(status);
                return self.sink.write_body(&[]);
            }
        };

        let body = match serde_json::to_vec(value) {
            Ok(body) => body,
            Err(e) => {
                // Nothing committed yet: downgrade to an empty 500 so
                // the client still gets a valid status. A sink that
                // already committed rejects this, which is fine.
                self.sink.set_status(StatusCode::INTERNAL_SERVER_ERROR);
                let _ = self.sink.write_body(&[]);
                return Err(e.into());
            }
        };

        self.sink.set_header("Content-Type", CONTENT_TYPE_JSON);
        self.sink.set_status(status);
        self.sink.write_body(&body)
    }
}
