// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line explorer for the Fano plane.
//!
//! ```bash
//! fano structure
//! fano verify --json
//! fano line 0 1
//! fano --base-line 0,2,3 collinear 0 2 3
//! RUST_LOG=debug fano matrix
//! ```

use clap::{Parser, Subcommand};
use fano_plane::{FanoError, FanoPlane};
use serde::Serialize;
use std::fmt::Display;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "fano")]
#[command(about = "Explore the Fano plane: lines, intersections, symmetries", long_about = None)]
struct Cli {
    /// Base line of the cyclic construction (three residues mod 7)
    #[arg(long, global = true, value_delimiter = ',', default_values_t = [0u8, 1, 3])]
    base_line: Vec<u8>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log construction details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print lines, incidence matrix, pencils and intersection table
    Structure,

    /// Check every axiom of the plane
    Verify,

    /// Print the 7×7 incidence matrix and its Gram product
    Matrix,

    /// Line through two distinct points
    Line { a: i32, b: i32 },

    /// Point shared by two distinct lines
    Intersect { i: i32, j: i32 },

    /// Third point on the line through two points
    Third { a: i32, b: i32 },

    /// Whether three points are collinear
    Collinear { a: i32, b: i32, c: i32 },

    /// Points not on a line
    Complement { line: i32 },

    /// Cyclic automorphism p ↦ p + k and its action on lines
    Automorphism { k: i32 },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print `value` as JSON or through its text rendering.
fn emit<T: Serialize>(json: bool, value: &T, text: impl Display) {
    if json {
        match serde_json::to_string_pretty(value) {
            Ok(s) => println!("{}", s),
            Err(e) => error!("could not serialize output: {}", e),
        }
    } else {
        println!("{}", text);
    }
}

fn run(cli: &Cli) -> Result<bool, FanoError> {
    let base = match cli.base_line.as_slice() {
        &[a, b, c] => [a, b, c],
        other => {
            return Err(FanoError::InvalidDifferenceSet {
                base: [0; 3],
                reason: format!("expected three residues, got {}", other.len()),
            })
        }
    };
    let plane = FanoPlane::with_base_line(base)?;
    debug!(base = %plane.base_line(), "plane constructed");

    match &cli.command {
        Commands::Structure => {
            #[derive(Serialize)]
            struct Structure<'a> {
                points: Vec<u8>,
                lines: &'a [fano_plane::Line; 7],
                incidence: fano_plane::IncidenceMatrix,
            }
            let snapshot = Structure {
                points: plane.points().iter().map(|p| p.value()).collect(),
                lines: plane.lines(),
                incidence: plane.incidence_matrix(),
            };
            emit(cli.json, &snapshot, &plane);
        }
        Commands::Verify => {
            let report = plane.verify_axioms();
            emit(cli.json, &report, &report);
            return Ok(report.all_hold());
        }
        Commands::Matrix => {
            let m = plane.incidence_matrix();
            let gram = m.gram();
            let mut text = format!("{}\n\nM·Mᵗ:", m);
            for row in &gram {
                text.push('\n');
                for v in row {
                    text.push_str(&format!("{:>3}", v));
                }
            }
            emit(cli.json, &serde_json::json!({ "matrix": m, "gram": gram }), text);
        }
        Commands::Line { a, b } => {
            let id = plane.line_through_points(*a, *b)?;
            let line = plane.line(id)?;
            emit(cli.json, &serde_json::json!({ "line": id, "points": line }), format!("{}: {}", id, line));
        }
        Commands::Intersect { i, j } => {
            let p = plane.intersection(*i, *j)?;
            emit(cli.json, &p, p);
        }
        Commands::Third { a, b } => {
            let p = plane.third_point(*a, *b)?;
            emit(cli.json, &p, p);
        }
        Commands::Collinear { a, b, c } => {
            let collinear = plane.is_collinear(*a, *b, *c)?;
            emit(cli.json, &collinear, collinear);
        }
        Commands::Complement { line } => {
            let set = plane.complement_line(*line)?;
            emit(cli.json, &set, set);
        }
        Commands::Automorphism { k } => {
            let perm = plane.automorphism_cyclic(*k)?;
            let image = plane.line_permutation(&perm);
            let text = match &image {
                Some(lines) => {
                    let mapped: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
                    format!("{}\nlines: {}", perm, mapped.join(" "))
                }
                None => format!("{}\nnot an automorphism", perm),
            };
            emit(cli.json, &serde_json::json!({ "permutation": perm, "lines": image }), text);
        }
    }
    Ok(true)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}
