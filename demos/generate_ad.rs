//! End-to-end library usage.
//!
//! Run with: `cargo run --example generate_ad`
//!
//! Requires `GOOGLE_API_KEY` and a product photo at `product.jpg`.

use adforge::{AdParameters, AdSession, AssetSlot, EnvCredentialGate, GeminiBackend};

#[tokio::main]
async fn main() -> adforge::Result<()> {
    let backend = GeminiBackend::builder().build()?;
    let mut session = AdSession::new(backend, EnvCredentialGate);

    session.params = AdParameters {
        brand_name: "swaggers".to_owned(),
        slogan: "STYLE THAT SPEAKS FOR ITSELF".to_owned(),
        actual_price: "5000".to_owned(),
        sale_price: "3500".to_owned(),
        currency: "Rupees".to_owned(),
        ..AdParameters::default()
    };
    session.assets.load(AssetSlot::Product, "product.jpg").await?;

    session.generate_ad().await;

    match session.sink().creative() {
        Some(creative) => {
            let name = session.download_file_name();
            creative.save(&name)?;
            println!("Saved {name} ({} bytes)", creative.size());
        }
        None => {
            eprintln!(
                "{}",
                session.sink().error().unwrap_or("Ad generation failed.")
            );
        }
    }

    Ok(())
}
