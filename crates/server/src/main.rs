#[tokio::main]
async fn main() -> anyhow::Result<()> {
    formaid_server::start().await
}
