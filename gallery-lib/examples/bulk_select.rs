//! Bulk selection against a live list endpoint.
//!
//! Run with: cargo run --example bulk_select -- 15
//!
//! Reads an optional `GALLERY_URL` from the environment or a .env file and
//! falls back to the public Art Institute of Chicago API.

use std::env;
use std::time::Duration;

use gallery_lib::ARTIC_BASE_URL;
use gallery_lib::GalleryClient;
use gallery_lib::Session;
use gallery_lib::SessionConfig;
use simplelog::ColorChoice;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::TermLogger;
use simplelog::TerminalMode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let count: i64 = env::args().nth(1).unwrap_or_else(|| "15".to_string()).parse()?;
    let url = env::var("GALLERY_URL").unwrap_or_else(|_| ARTIC_BASE_URL.to_string());

    let client = GalleryClient::builder()
        .url(url)
        .timeout(Duration::from_secs(15))
        .build();
    let session = Session::new(client, SessionConfig::default());

    session.open().await?;
    println!("{}", session.page_report());

    match session.select_first_n(count).await {
        Ok(selected) => println!("Selected {} artworks", selected),
        Err(e) if e.is_invalid_count() => {
            println!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    for page in 0..session.page_count().min(3) {
        session.navigate(page).await?;
        println!("\n{}", session.page_report());
        for artwork in session.current_page() {
            let mark = if session.is_selected(artwork.id) { "[x]" } else { "[ ]" };
            println!(
                "{} {} | {} | {} | {}",
                mark,
                artwork.title_or_default(),
                artwork.place_or_default(),
                artwork.artist_or_default().lines().next().unwrap_or_default(),
                artwork.dates
            );
        }
    }

    Ok(())
}
