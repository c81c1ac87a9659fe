//! Interactive basket comparison example
//!
//! Logs into the account backend, loads one of the user's shopping lists
//! and the product catalog, geocodes the supermarkets around the user's
//! zip code, and prints the list total at every selected supermarket.
//!
//! Run: cargo run --example compare_totals

use cesta_client::{ClientConfig, FileStore};
use cesta_engine::{SelectionSet, compare_totals, filter_within_radius};
use shared::money::format_brl;
use std::collections::HashMap;
use std::io::{self, Write};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("\n🧺 Cesta - Basket Comparison");
    println!("============================\n");

    let config = ClientConfig::from_env();
    println!("Backend: {}", config.api_base_url);

    // 1. Login
    let username = get_input("Username: ");
    let password = get_input("Password: ");

    let client = config.build_http_client();
    let login = client.login(&username, &password).await?;
    let client = client.with_token(login.token);

    let user = client.current_user().await?;
    println!("✅ Logged in as {}", user.username);
    if !user.is_premium {
        println!("Note: comparing across supermarkets is a premium feature in the app.");
    }

    // 2. Pick a list
    let lists = client.my_lists().await?;
    if lists.is_empty() {
        println!("No lists yet - create one in the app first.");
        return Ok(());
    }
    println!("\nYour lists:");
    for (index, list) in lists.iter().enumerate() {
        println!(
            "{}. {} ({} products)",
            index + 1,
            list.title,
            list.products.len()
        );
    }
    let choice = get_input_with_default("Pick a list", "1")
        .parse::<usize>()
        .unwrap_or(1);
    let list = &lists[choice.saturating_sub(1).min(lists.len() - 1)];

    // 3. Load the catalog and resolve venue coordinates
    let catalog = client.fetch_catalog().await?;
    println!(
        "\nCatalog: {} products, {} supermarkets",
        catalog.products.len(),
        catalog.supermarkets.len()
    );

    let geocoder = config.build_geocode_client();
    let zip = get_input_with_default("Your zip code", &user.zip_code);
    let center = geocoder.geocode(&zip).await?;
    if center.is_none() {
        println!("Could not resolve '{}' - skipping the nearby filter.", zip);
    }

    let mut supermarkets = catalog.supermarkets;
    for market in &mut supermarkets {
        if market.address.is_empty() {
            continue;
        }
        market.coordinates = geocoder.geocode(&market.address).await?;
    }

    // 4. Filter by radius and build the selection
    let radius_km = get_input_with_default("Radius in km", "10")
        .parse::<f64>()
        .unwrap_or(10.0);
    let nearby = filter_within_radius(&supermarkets, center, radius_km);
    println!("{} supermarkets within {} km", nearby.len(), radius_km);

    let mut selection = SelectionSet::restore(
        "@selectedSupermarkets",
        FileStore::new("cesta-data/storage.json"),
    );
    if !nearby.is_empty() {
        selection.select_all(nearby.iter().cloned());
    }
    if selection.is_empty() {
        println!("Nothing nearby - selecting every supermarket.");
        selection.select_all(supermarkets.iter().map(|m| m.id.clone()));
    }

    // 5. Compare totals
    let names: HashMap<&str, &str> = supermarkets
        .iter()
        .map(|m| (m.id.as_str(), m.name.as_str()))
        .collect();

    println!("\n━━━ {} ━━━", list.title);
    for row in compare_totals(list, selection.snapshot()) {
        let name = names
            .get(row.supermarket_id.as_str())
            .copied()
            .unwrap_or(row.supermarket_id.as_str());
        println!("{:<32} {}", name, format_brl(row.total));
    }

    Ok(())
}

fn get_input(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().unwrap();
    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();
    input.trim().to_string()
}

fn get_input_with_default(prompt: &str, default: &str) -> String {
    print!("{} [{}]: ", prompt, default);
    io::stdout().flush().unwrap();
    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();
    let input = input.trim();
    if input.is_empty() {
        default.to_string()
    } else {
        input.to_string()
    }
}
