#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockprompt::run().await
}
