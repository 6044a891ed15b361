use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::time::Duration;

use crate::composition::CompositionStore;

pub mod api;
pub mod routes;

const MAX_BODY_BYTES: usize = 1 << 20;
const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Serve the composition API on `bind_addr`, one request at a time.
pub fn run_server(bind_addr: &str, store: CompositionStore) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_addr)?;
    tracing::info!("teamcomp server listening on http://{bind_addr}");

    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                if let Err(err) = handle_connection(&mut stream, &store) {
                    tracing::warn!(error = %err, "request error");
                }
            }
            Err(err) => tracing::warn!(error = %err, "connection failed"),
        }
    }

    Ok(())
}

fn handle_connection(stream: &mut TcpStream, store: &CompositionStore) -> std::io::Result<()> {
    stream.set_read_timeout(Some(READ_TIMEOUT))?;
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line)? == 0 {
        return Ok(());
    }
    let mut request_parts = request_line.split_whitespace();
    let method = request_parts.next().unwrap_or("GET").to_string();
    let path = request_parts.next().unwrap_or("/").to_string();

    let mut content_length = 0usize;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header)? == 0 {
            break;
        }
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    let response = if content_length > MAX_BODY_BYTES {
        tracing::warn!(%method, %path, content_length, "request body too large");
        routes::payload_too_large(MAX_BODY_BYTES)
    } else {
        let mut body = vec![0_u8; content_length];
        reader.read_exact(&mut body)?;
        routes::route_request(store, &method, &path, &String::from_utf8_lossy(&body))
    };
    tracing::debug!(%method, %path, status = response.status_code, "request handled");
    stream.write_all(response.to_http_string().as_bytes())?;
    stream.flush()?;
    Ok(())
}
