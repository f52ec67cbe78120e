//! HTTP transport abstraction
//!
//! The poll loop issues one blocking GET per tick. A response of any status
//! code is a [`HttpResponse`]; a request that never produced a response is a
//! [`TransportError`] carrying a non-positive code.

/// A received HTTP response
///
/// The body borrows the caller-provided receive buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpResponse<'a> {
    /// HTTP status code (always positive)
    pub status: u16,
    /// Response body, possibly truncated to the buffer size
    pub body: &'a [u8],
}

impl<'a> HttpResponse<'a> {
    /// Create a response
    pub fn new(status: u16, body: &'a [u8]) -> Self {
        Self { status, body }
    }

    /// Check for a 2xx status code
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failures (no response received)
///
/// The numeric codes follow the convention of the common embedded HTTP
/// clients, so they are what the device shows on its error screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Server refused the connection (-1)
    ConnectionRefused,
    /// Sending request headers failed (-2)
    SendHeaderFailed,
    /// Sending request payload failed (-3)
    SendPayloadFailed,
    /// No connection to the server (-4)
    NotConnected,
    /// Connection dropped mid-request (-5)
    ConnectionLost,
    /// No stream available (-6)
    NoStream,
    /// Peer is not an HTTP server (-7)
    NoHttpServer,
    /// Out of memory for the request (-8)
    OutOfMemory,
    /// Unsupported transfer encoding (-9)
    Encoding,
    /// Writing the body to the stream failed (-10)
    StreamWrite,
    /// Timed out waiting for the response (-11)
    ReadTimeout,
    /// Any other non-positive code
    Other(i16),
}

impl TransportError {
    /// Numeric failure code, always `<= 0`
    pub fn code(self) -> i16 {
        match self {
            TransportError::ConnectionRefused => -1,
            TransportError::SendHeaderFailed => -2,
            TransportError::SendPayloadFailed => -3,
            TransportError::NotConnected => -4,
            TransportError::ConnectionLost => -5,
            TransportError::NoStream => -6,
            TransportError::NoHttpServer => -7,
            TransportError::OutOfMemory => -8,
            TransportError::Encoding => -9,
            TransportError::StreamWrite => -10,
            TransportError::ReadTimeout => -11,
            TransportError::Other(code) => code.min(0),
        }
    }

    /// Map a raw client code to an error
    ///
    /// Returns `None` for positive codes, which denote a response.
    pub fn from_code(code: i16) -> Option<Self> {
        let err = match code {
            c if c > 0 => return None,
            -1 => TransportError::ConnectionRefused,
            -2 => TransportError::SendHeaderFailed,
            -3 => TransportError::SendPayloadFailed,
            -4 => TransportError::NotConnected,
            -5 => TransportError::ConnectionLost,
            -6 => TransportError::NoStream,
            -7 => TransportError::NoHttpServer,
            -8 => TransportError::OutOfMemory,
            -9 => TransportError::Encoding,
            -10 => TransportError::StreamWrite,
            -11 => TransportError::ReadTimeout,
            other => TransportError::Other(other),
        };
        Some(err)
    }
}

/// Blocking HTTP client
pub trait HttpClient {
    /// Issue a GET request
    ///
    /// The response body is written into `buf`; bodies longer than the
    /// buffer are truncated. Blocks until a response arrives or the
    /// transport gives up.
    fn get<'a>(
        &mut self,
        url: &str,
        buf: &'a mut [u8],
    ) -> Result<HttpResponse<'a>, TransportError>;
}
