use crate::error::{RespondError, Result};
use bytes::{Bytes, BytesMut};
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};

/// Write-once destination for an HTTP response.
///
/// Status and headers are buffered until [`write_body`] commits the
/// response; headers always precede body bytes on the wire. A sink
/// accepts exactly one commit and fails every later one, so callers
/// cannot silently overwrite a response that already went out.
///
/// [`write_body`]: ResponseSink::write_body
pub trait ResponseSink {
    /// Set the status code for the pending response.
    fn set_status(&mut self, status: StatusCode);

    /// Set a header on the pending response.
    fn set_header(&mut self, name: &str, value: &str);

    /// Commit the response: status line, headers, then `body`.
    /// An empty slice commits a body-less response.
    ///
    /// Returns [`RespondError::AlreadyWritten`] if the sink has
    /// already committed.
    fn write_body(&mut self, body: &[u8]) -> Result<()>;
}

/// In-memory write-once sink that records the committed response.
///
/// Plays the recorder role in tests and assembles the raw `HTTP/1.1`
/// bytes a server loop ships to the client.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Bytes,
    raw_bytes: Bytes,
    written: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed status code; `200 OK` if the response committed
    /// without one being set.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Raw response bytes (status line, headers, body), empty until
    /// the sink commits.
    pub fn raw_bytes(&self) -> &Bytes {
        &self.raw_bytes
    }

    pub fn is_written(&self) -> bool {
        self.written
    }

    fn assemble(&self) -> Bytes {
        let status = self.status();

        let mut raw = BytesMut::new();
        raw.extend_from_slice(b"HTTP/1.1 ");
        raw.extend_from_slice(status.as_str().as_bytes());
        raw.extend_from_slice(b" ");
        raw.extend_from_slice(status.canonical_reason().unwrap_or("").as_bytes());
        raw.extend_from_slice(b"\r\n");

        for (name, value) in self.headers.iter() {
            raw.extend_from_slice(name.as_str().as_bytes());
            raw.extend_from_slice(b": ");
            raw.extend_from_slice(value.as_bytes());
            raw.extend_from_slice(b"\r\n");
        }

        raw.extend_from_slice(b"\r\n");
        raw.extend_from_slice(&self.body);
        raw.freeze()
    }
}

impl ResponseSink for RecordingSink {
    fn set_status(&mut self, status: StatusCode) {
        if !self.written {
            self.status = Some(status);
        }
    }

    fn set_header(&mut self, name: &str, value: &str) {
        if self.written {
            return;
        }
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
    }

    fn write_body(&mut self, body: &[u8]) -> Result<()> {
        if self.written {
            return Err(RespondError::AlreadyWritten);
        }

        self.body = Bytes::copy_from_slice(body);
        self.raw_bytes = self.assemble();
        self.written = true;
        Ok(())
    }
}
