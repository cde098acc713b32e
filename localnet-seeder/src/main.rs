//! # localnet-seeder
//!
//! One-shot bootstrap client for LocalNet.
//!
//! Generates ed25519 dev identities (Alice, Bob, Mallory by default),
//! derives a mock `did:key:` for each, and funds them through the ledger's
//! faucet. Run it once after bringing the topology up; rerunning simply
//! stacks more faucet credit on the same names' fresh keys.
//!
//! ```bash
//! localnet-seeder --ledger-url http://127.0.0.1:8082
//! localnet-seeder --name Carol --name Dave
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;
use std::time::Duration;

/// One-shot dev identity generator and faucet client for LocalNet.
#[derive(Parser, Debug)]
#[command(name = "localnet-seeder")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the ledger service
    #[arg(long, default_value = "http://ledger:8082")]
    ledger_url: String,

    /// Identity names to generate (defaults to Alice, Bob, Mallory)
    #[arg(long = "name")]
    names: Vec<String>,

    /// How many times to poll the ledger's health before giving up
    #[arg(long, default_value_t = 10)]
    health_retries: u32,
}

/// A freshly generated dev identity.
struct Identity {
    name: String,
    did: String,
    secret_hex: String,
    public_hex: String,
}

fn generate_identity(name: &str) -> Identity {
    let signing_key = SigningKey::generate(&mut OsRng);
    let secret_hex = hex::encode(signing_key.to_bytes());
    let public_hex = hex::encode(signing_key.verifying_key().to_bytes());

    // Mock DID: enough of the public key to be recognizable, nothing more.
    let did = format!("did:key:{}", &public_hex[..16]);

    Identity {
        name: name.to_string(),
        did,
        secret_hex,
        public_hex,
    }
}

async fn wait_for_ledger(client: &reqwest::Client, ledger_url: &str, retries: u32) -> bool {
    println!("Waiting for ledger at {ledger_url}...");
    for _ in 0..retries {
        let health = client
            .get(format!("{ledger_url}/health"))
            .timeout(Duration::from_secs(2))
            .send()
            .await;
        if matches!(health, Ok(res) if res.status().is_success()) {
            println!("Ledger is up!");
            return true;
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
    println!("Warning: ledger not reachable, proceeding without funding.");
    false
}

async fn fund(client: &reqwest::Client, ledger_url: &str, did: &str) -> Result<u64> {
    let response = client
        .get(format!("{ledger_url}/faucet/{did}"))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .context("faucet request failed")?;

    if !response.status().is_success() {
        anyhow::bail!("faucet returned {}", response.status());
    }

    let body: serde_json::Value = response.json().await.context("faucet response not JSON")?;
    body["new_balance"]
        .as_u64()
        .context("faucet response missing new_balance")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let names = if cli.names.is_empty() {
        vec![
            "Alice".to_string(),
            "Bob".to_string(),
            "Mallory".to_string(),
        ]
    } else {
        cli.names
    };

    println!("LocalNet seeder - generating dev identities...\n");

    let client = reqwest::Client::new();
    let ledger_up = wait_for_ledger(&client, &cli.ledger_url, cli.health_retries).await;

    for name in &names {
        let identity = generate_identity(name);

        println!("--- {} identity ---", identity.name);
        println!("DID: {}", identity.did);
        println!("Secret key: {}", identity.secret_hex);
        println!("Public key: {}", identity.public_hex);

        if ledger_up {
            match fund(&client, &cli.ledger_url, &identity.did).await {
                Ok(new_balance) => println!("Funded: 1000 OAP (balance: {new_balance})"),
                Err(e) => println!("Funding failed: {e}"),
            }
        }
        println!("-------------------\n");
    }

    println!("Seeding complete.");
    Ok(())
}
