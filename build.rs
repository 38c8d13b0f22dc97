//! Build script for discover-sync.
//!
//! Copies `.env.example` into the local data directory, next to the `.env`
//! file that `config::load_env` reads:
//! - Linux: `~/.local/share/discover-sync/.env.example`
//! - macOS: `~/Library/Application Support/discover-sync/.env.example`
//! - Windows: `%LOCALAPPDATA%/discover-sync/.env.example`
//!
//! A missing template only produces a cargo warning.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("discover-sync");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    // read-only build sandboxes (e.g. the lambda packaging image) have no data dir
    if let Err(e) = fs::create_dir_all(&out_dir) {
        println!("cargo:warning=cannot create {}: {}", out_dir.display(), e);
        return Ok(());
    }

    let contents = fs::read_to_string(&env_example_path)?;
    fs::write(out_dir.join(".env.example"), contents)?;

    Ok(())
}
