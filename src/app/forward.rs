use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::args::ForwardArgs;
use crate::error::AppResult;
use crate::http::{Envelope, RequestClient};
use crate::http::client::parse_endpoint;

/// Forward stdin log records to the broker proxy until end of input.
///
/// Lines blank after trimming are skipped without sending. Every other line
/// is assumed to already be a serialized JSON value and is spliced verbatim
/// into the configured envelope; the broker's rejection of a malformed
/// record comes back as a non-empty response body, which is echoed to
/// stderr. An empty response is the success case and produces no output.
pub async fn run_forward(args: &ForwardArgs) -> AppResult<()> {
    let endpoint = parse_endpoint(&args.url)?;
    let envelope = Envelope::for_receiver(args.receiver.clone());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        // CRLF input leaves a trailing '\r' after the newline split.
        let record = line.strip_suffix('\r').unwrap_or(&line);
        if record.trim().is_empty() {
            continue;
        }

        let body = envelope.wrap(record);
        let client = RequestClient::new()?;
        let reply = client.send_json(&endpoint, body.into_bytes()).await?;
        if reply.is_empty() {
            debug!("record accepted");
        } else {
            eprintln!("{reply}");
        }
    }
    Ok(())
}
