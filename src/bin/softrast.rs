// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Command-file renderer
//!
//! Reads a command file, rasterizes every `png` session it describes and
//! writes the resulting images.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use softrast::core::command::Interpreter;
use softrast::core::config::RenderConfig;
use softrast::core::encoder::write_png;
use softrast::core::error::Result;
use softrast::core::raster::FillStrategy;

/// Software rasterizer for triangle command files
#[derive(Parser)]
#[command(name = "softrast")]
#[command(version, about = "Software triangle rasterizer", long_about = None)]
struct Args {
    /// Command file to render
    input: PathBuf,

    /// Triangle fill strategy (scanline or edge-function)
    #[arg(short, long)]
    strategy: Option<FillStrategy>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop at the first rejected draw request
    #[arg(long)]
    abort_on_draw_error: bool,
}

fn main() -> ExitCode {
    // Optional .env for development settings (RUST_LOG, SOFTRAST_*)
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    info!("softrast v{}", env!("CARGO_PKG_VERSION"));
    info!("Rendering {} ({} fill)", args.input.display(), config.fill_strategy);

    let script = std::fs::read_to_string(&args.input)?;

    let mut interpreter = Interpreter::new(config);
    interpreter.run(&script)?;
    let summary = interpreter.summary();

    let images = interpreter.finish();
    for image in &images {
        write_png(&image.framebuffer, &image.output)?;
    }

    info!(
        "Done: {} image(s), {} draw call(s) ({} rejected), {} triangle(s) drawn, {} skipped",
        images.len(),
        summary.draw_calls,
        summary.rejected_draw_calls,
        summary.triangles.drawn,
        summary.triangles.skipped
    );
    Ok(())
}

fn load_config(args: &Args) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    config.apply_env()?;

    if let Some(strategy) = args.strategy {
        config.fill_strategy = strategy;
    }
    if args.abort_on_draw_error {
        config.abort_on_draw_error = true;
    }
    Ok(config)
}
