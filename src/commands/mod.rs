// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod config;
pub mod inspect;
pub mod legend;
pub mod render;

use anyhow::{Context, Result};
use graph_visual::types::GraphData;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Read graph JSON from a file, or from stdin when `input` is `None` or `-`
pub fn read_graph(input: Option<&Path>) -> Result<Option<GraphData>> {
    match input {
        Some(path) if path != Path::new("-") => GraphData::load(path)
            .with_context(|| format!("Failed to load graph from {}", path.display())),
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read graph from stdin")?;
            GraphData::from_json(&content).context("Failed to parse graph from stdin")
        }
    }
}

/// Write `content` to `output`, or to stdout
pub fn write_output(content: &str, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(&path, content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
