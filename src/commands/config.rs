// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

use anyhow::Result;
use graph_visual::config::Settings;

pub fn run(key: Option<&str>, settings: &Settings) -> Result<()> {
    match key {
        Some(key) => {
            tracing::debug!("Getting {}", key);
            println!("{}", settings.get(key)?);
        }
        None => print!("{}", settings.to_toml()?),
    }
    Ok(())
}
