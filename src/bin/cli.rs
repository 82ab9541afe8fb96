// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Triplane Team

//! Triplane CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::Path;
use triplane::{render_file, triangles_from_file};

#[derive(Parser)]
#[command(name = "triplane")]
#[command(about = "Triplane - COLLADA triangles as CSS 3D transforms", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input .dae file
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Output HTML file
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a .dae file to an HTML document of CSS triangles
    Render {
        /// Input .dae file
        input: String,

        /// Output HTML file
        #[arg(short, long)]
        output: String,
    },

    /// Decode a .dae file and output its triangles as JSON
    Parse {
        /// Input .dae file
        input: String,

        /// Output JSON file
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Render { input, output }) => {
            render_command(input, output, cli.verbose)?;
        }
        Some(Commands::Parse { input, output }) => {
            parse_command(input, output.as_deref(), cli.verbose)?;
        }
        Some(Commands::Version) => {
            println!("Triplane v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            // Default behavior: render input to output
            if let (Some(input), Some(output)) = (&cli.input, &cli.output) {
                render_command(input, output, cli.verbose)?;
            } else {
                eprintln!("{} Input and output files required", "Error:".red());
                eprintln!("Usage: triplane <INPUT> --output <OUTPUT>");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn render_command(input: &str, output: &str, verbose: bool) -> Result<()> {
    if verbose {
        println!("Rendering: {}", input);
    }

    if !Path::new(input).exists() {
        eprintln!("{} Input file not found: {}", "Error:".red(), input);
        std::process::exit(1);
    }

    let start = std::time::Instant::now();
    let html = render_file(input)?;
    std::fs::write(output, html)?;

    if verbose {
        println!("Rendered in {:.2?}", start.elapsed());
        println!("Output: {}", output);
    } else {
        println!("Successfully rendered {} -> {}", input, output);
    }

    Ok(())
}

fn parse_command(input: &str, output: Option<&str>, verbose: bool) -> Result<()> {
    if verbose {
        println!("Parsing: {}", input);
    }

    if !Path::new(input).exists() {
        eprintln!("{} Input file not found: {}", "Error:".red(), input);
        std::process::exit(1);
    }

    let triangles = triangles_from_file(input)?;
    let json = serde_json::to_string_pretty(&triangles)?;

    if verbose {
        println!("Triangles: {}", triangles.len());
    }

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        if verbose {
            println!("Triangles written to: {}", output_path);
        }
    } else {
        println!("{}", json);
    }

    Ok(())
}
