//! Notepost Engine - Main entry point.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    notepost_engine::server::run().await
}
