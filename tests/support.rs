use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::process::{Command, Output, Stdio};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// One POST captured by the test server.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// Header names lowercased, values trimmed.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl ServerHandle {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a lightweight HTTP server that records request bodies and headers
/// and answers every request with `response_body`.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_http_server(response_body: &'static str) -> Result<(String, ServerHandle), String> {
    spawn_server(response_body, None)
}

/// Like `spawn_http_server`, but stop accepting (and close the listener)
/// after `max_requests` connections, so later requests are refused.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_http_server_limited(
    response_body: &'static str,
    max_requests: usize,
) -> Result<(String, ServerHandle), String> {
    spawn_server(response_body, Some(max_requests))
}

fn spawn_server(
    response_body: &'static str,
    max_requests: Option<usize>,
) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let requests_in_thread = Arc::clone(&requests);

    let handle = thread::spawn(move || {
        let mut served: usize = 0;
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }
            if let Some(limit) = max_requests {
                if served >= limit {
                    break;
                }
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    served = served.saturating_add(1);
                    let requests = Arc::clone(&requests_in_thread);
                    thread::spawn(move || handle_client(stream, response_body, &requests));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
            requests,
        },
    ))
}

fn handle_client(
    mut stream: TcpStream,
    response_body: &str,
    requests: &Arc<Mutex<Vec<CapturedRequest>>>,
) {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];
    let header_end = loop {
        match stream.read(&mut chunk) {
            Ok(0) => return,
            Ok(read) => {
                buffer.extend_from_slice(&chunk[..read]);
                if let Some(position) = find_header_end(&buffer) {
                    break position;
                }
            }
            Err(_) => return,
        }
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).into_owned();
    let headers: Vec<(String, String)> = head
        .lines()
        .skip(1)
        .filter_map(|line| {
            line.split_once(':')
                .map(|(key, value)| (key.trim().to_ascii_lowercase(), value.trim().to_owned()))
        })
        .collect();
    let content_length = headers
        .iter()
        .find(|(key, _)| key == "content-length")
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buffer[header_end + 4..].to_vec();
    while body.len() < content_length {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(read) => body.extend_from_slice(&chunk[..read]),
            Err(_) => break,
        }
    }
    body.truncate(content_length);

    // Record before responding so the caller sees request k captured before
    // it can issue request k+1.
    if let Ok(mut guard) = requests.lock() {
        guard.push(CapturedRequest {
            headers,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response_body.len(),
        response_body
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

fn find_header_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|window| window == b"\r\n\r\n")
}

/// Run the `drover` binary and capture output, optionally feeding stdin.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_drover<I, S>(args: I, stdin_data: Option<&str>) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = drover_bin()?;
    let mut command = Command::new(bin);
    command
        .args(args)
        .env("RUST_LOG", "error")
        .env_remove("DROVER_URL")
        .env_remove("DROVER_CLIENT_ID")
        .env_remove("DROVER_WAIT")
        .env_remove("DROVER_ROUNDS")
        .env_remove("DROVER_RECEIVER");

    match stdin_data {
        Some(data) => {
            command
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped());
            let mut child = command
                .spawn()
                .map_err(|err| format!("spawn drover failed: {}", err))?;
            if let Some(mut stdin) = child.stdin.take() {
                stdin
                    .write_all(data.as_bytes())
                    .map_err(|err| format!("write stdin failed: {}", err))?;
            }
            child
                .wait_with_output()
                .map_err(|err| format!("wait for drover failed: {}", err))
        }
        None => {
            command.stdin(Stdio::null());
            command
                .output()
                .map_err(|err| format!("run drover failed: {}", err))
        }
    }
}

fn drover_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_drover").map_or_else(
        || Err("CARGO_BIN_EXE_drover missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
