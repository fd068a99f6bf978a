#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = lms_rust::run().await {
        eprintln!("lms-rust fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
