use anyhow::Result;
use hello_template::greet;
use tracing::{info, subscriber, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let my_subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    subscriber::set_global_default(my_subscriber)?;

    info!("Starting application");
    println!("{}", greet(Some("Developer")));
    info!("Application finished");
    Ok(())
}
