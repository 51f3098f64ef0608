//! `phishguard features <url>` – local feature breakdown, no network.

use anyhow::{Context, Result};
use phishguard_core::features::extract_features;
use phishguard_core::report::render::render_features;
use phishguard_core::url_model::normalize_url;

pub fn run_features(url: &str, json: bool) -> Result<()> {
    let features =
        extract_features(url).with_context(|| format!("cannot parse {:?} as a URL", url))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&features)?);
    } else {
        println!("URL: {}", normalize_url(url));
        print!("{}", render_features(&features));
    }
    Ok(())
}
