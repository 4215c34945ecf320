use tokio::time::sleep;
use tracing::debug;

use crate::args::WorkloadArgs;
use crate::error::AppResult;
use crate::http::RequestClient;
use crate::http::client::parse_endpoint;

/// Drive the workload loop: one ranked form POST per round.
///
/// The rank starts at zero and always equals the number of requests issued
/// before the current one. Each round builds a fresh client, posts
/// `client_id` and `next_rank`, prints the response body to stdout, then
/// waits before the next round. Any transport failure aborts the loop;
/// progress already made (rank increments, elapsed waits) is not rolled
/// back.
pub async fn run_workload(args: &WorkloadArgs) -> AppResult<()> {
    let endpoint = parse_endpoint(&args.url)?;
    let client_id = args.client_id.to_string();

    let mut rank: u64 = 0;
    while args.rounds.permits(rank) {
        let next_rank = rank.to_string();
        let client = RequestClient::new()?;
        let reply = client
            .send_form(
                &endpoint,
                &[
                    ("client_id", client_id.as_str()),
                    ("next_rank", next_rank.as_str()),
                ],
            )
            .await?;
        println!("{reply}");
        rank = rank.saturating_add(1);
        debug!(rank, "workload request issued");

        // The trailing wait after the final round is skipped.
        if args.rounds.permits(rank) {
            sleep(args.wait).await;
        }
    }
    Ok(())
}
