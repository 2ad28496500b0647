use anyhow::Result;

use pumpwatch::config::Config;
use pumpwatch::exchange::BinanceFutures;
use pumpwatch::{report, scanner};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    let client = BinanceFutures::new(&cfg);

    let gainers = scanner::tradable_gainers(&client).await;
    if gainers.is_empty() {
        println!("could not fetch a tradable gainer list");
        return Ok(());
    }

    println!("short candidates: gainers up more than 200% off their 30-day low");
    let reports = report::scan(&client, &gainers).await;
    print!("{}", report::render(&reports));
    Ok(())
}
