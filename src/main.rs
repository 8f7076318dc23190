/*
 * Responsibility
 * - tokio runtime entry
 * - Call app::run() (no logic here)
 */
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    records_api::app::run().await
}
