#[tokio::main]
async fn main() -> std::io::Result<()> {
    ultimate_server::run_with_config().await
}
