#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vistag_server::start().await
}
