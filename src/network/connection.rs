//! Connection Handler
//!
//! One TCP connection per request: open, send, read to end-of-stream, close.

use std::io::{self, BufReader, BufWriter};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::protocol::{
    read_response, recover_error_response, write_request, RawResponse, Request,
};

/// A single-use connection to the clipboard server
///
/// The stream is owned here and released when the value is dropped, so
/// every exit path of [`Connection::round_trip`] closes it.
pub struct Connection {
    /// TCP stream to the server
    stream: TcpStream,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Connect to the configured server
    ///
    /// Tries every resolved address in order and applies the configured
    /// timeouts to the stream that connects.
    pub fn open(config: &ClientConfig) -> Result<Self> {
        let addrs = (config.server.as_str(), config.port).to_socket_addrs()?;

        let mut last_error = None;
        for addr in addrs {
            let attempt = match config.connect_timeout() {
                Some(timeout) => TcpStream::connect_timeout(&addr, timeout),
                None => TcpStream::connect(addr),
            };
            match attempt {
                Ok(stream) => return Self::from_stream(stream, config),
                Err(e) => {
                    tracing::debug!("Connect to {} failed: {}", addr, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no addresses resolved for {}", config.address()),
                )
            })
            .into())
    }

    fn from_stream(stream: TcpStream, config: &ClientConfig) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| config.address());

        // Disable Nagle's algorithm, the request line is tiny
        stream.set_nodelay(true)?;
        stream.set_read_timeout(config.read_timeout())?;
        stream.set_write_timeout(config.write_timeout())?;

        tracing::debug!("Connected to {}", peer_addr);
        Ok(Self { stream, peer_addr })
    }

    /// Send one request and read the whole response
    ///
    /// Consumes the connection. A request with a body half-closes the
    /// write side after the body so the server sees where it ends. If the
    /// write breaks, an error reply the server already sent is returned
    /// instead of the write failure.
    pub fn round_trip(self, request: &Request) -> Result<RawResponse> {
        tracing::debug!(
            "{} -> {} {}",
            self.peer_addr,
            request.wire_method(),
            request.path()
        );

        let mut reader = BufReader::new(&self.stream);

        if let Err(e) = self.write(request) {
            return recover_error_response(&mut reader, e);
        }

        let response = read_response(&mut reader)?;

        tracing::trace!(
            "{} <- {} bytes (error: {})",
            self.peer_addr,
            response.payload().map_or(0, |p| p.len()),
            response.is_error()
        );

        Ok(response)
    }

    /// Write the request and, when it has a body, half-close the stream
    fn write(&self, request: &Request) -> Result<()> {
        let mut writer = BufWriter::new(&self.stream);
        write_request(&mut writer, request)?;

        if request.body().is_some() {
            self.stream.shutdown(Shutdown::Write)?;
        }
        Ok(())
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        tracing::trace!("Connection to {} closed", self.peer_addr);
    }
}

/// Open a connection, perform one round trip and close it
///
/// Returns the classified response; connection failures surface as
/// [`LcbError::Connection`](crate::LcbError::Connection).
pub fn send(config: &ClientConfig, request: &Request) -> Result<RawResponse> {
    Connection::open(config)?.round_trip(request)
}
