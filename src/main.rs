//! Command-line interface for scan_cube
//!
//! Two blocking workflows over six pre-captured face images: `calibrate`
//! learns a color profile from a solved cube, `solve` scans a scrambled
//! cube stage by stage and prints the move sequence.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scan_cube::{
    calibrate_from_faces, cube, CalibrationProfile, ColorClassifier, CommandSolver,
    CubeStateAssembler, FaceRecord, FaceScanner, FrameSource, ImageFileSource, ScanConfig,
    ScanError, SolverAdapter, SCAN_SEQUENCE,
};

#[derive(Parser)]
#[command(
    name = "scan_cube",
    version,
    about = "Scan and solve a Rubik's cube from face images"
)]
struct Cli {
    /// Pipeline configuration file (JSON); defaults apply when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Learn a calibration profile from six images of a solved cube
    Calibrate {
        /// Six face images in scan order (U R F D L B)
        #[arg(num_args = 6, required = true)]
        faces: Vec<PathBuf>,

        /// Where to write the profile (default from config)
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Scan a scrambled cube and print the solving move sequence
    Solve {
        /// Six face images in scan order (U R F D L B)
        #[arg(num_args = 6, required = true)]
        faces: Vec<PathBuf>,

        /// Calibration profile to classify with (default from config)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// External two-phase solver executable (default from config)
        #[arg(long)]
        solver: Option<String>,

        /// Extra arguments passed to the solver before the facelet string
        #[arg(long)]
        solver_arg: Vec<String>,
    },

    /// Print the guided scan sequence
    Guide,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ScanConfig::from_json_file(path)
            .map_err(|e| anyhow!("config {}: {e}", path.display()))?,
        None => ScanConfig::default(),
    };

    match cli.command {
        Commands::Calibrate { faces, profile } => calibrate(faces, profile, config),
        Commands::Solve {
            faces,
            profile,
            solver,
            solver_arg,
        } => solve(faces, profile, solver, solver_arg, config),
        Commands::Guide => {
            print_guide();
            Ok(())
        }
    }
}

fn load_faces(paths: Vec<PathBuf>) -> anyhow::Result<Vec<image::RgbImage>> {
    let mut source = ImageFileSource::new(paths);
    let mut frames = Vec::with_capacity(6);
    for guide in SCAN_SEQUENCE {
        let frame = source
            .capture()
            .map_err(user_error)
            .with_context(|| format!("loading the {} face image", guide.face.position_name()))?;
        frames.push(frame);
    }
    Ok(frames)
}

fn calibrate(
    faces: Vec<PathBuf>,
    profile: Option<PathBuf>,
    config: ScanConfig,
) -> anyhow::Result<()> {
    let profile_path = profile.unwrap_or(config.profile_path);

    println!("Calibrating from a solved cube. Face order:");
    print_guide();

    let images: [image::RgbImage; 6] = load_faces(faces)?
        .try_into()
        .map_err(|_| anyhow!("expected exactly six face images"))?;
    let learned = calibrate_from_faces(&images).map_err(user_error)?;

    println!("\nLearned reference colors:");
    for (color, hsv) in learned.entries() {
        println!(
            "  {:>8}: H={:5.1} S={:5.1} V={:5.1}",
            color.name(),
            hsv.h,
            hsv.s,
            hsv.v
        );
    }

    learned.save(&profile_path).map_err(user_error)?;
    println!("\nProfile saved to {}", profile_path.display());
    Ok(())
}

fn solve(
    faces: Vec<PathBuf>,
    profile: Option<PathBuf>,
    solver: Option<String>,
    solver_args: Vec<String>,
    config: ScanConfig,
) -> anyhow::Result<()> {
    let profile_path = profile.unwrap_or_else(|| config.profile_path.clone());
    let program = solver.unwrap_or_else(|| config.solver.program.clone());
    let args = if solver_args.is_empty() {
        config.solver.args.clone()
    } else {
        solver_args
    };

    let profile = CalibrationProfile::load(&profile_path).map_err(user_error)?;
    let images = load_faces(faces)?;

    // Stage 1: scan each face
    let classifier = ColorClassifier::with_weights(config.weights.clone().into());
    let scanner = FaceScanner::with_classifier(&profile, classifier)
        .with_window_fraction(config.sampling.cell_window_fraction);
    let mut records: Vec<FaceRecord> = Vec::with_capacity(6);
    for (image, guide) in images.iter().zip(SCAN_SEQUENCE) {
        let record = scanner.scan(image).map_err(user_error)?;
        println!(
            "Scanned {} face: center {}",
            guide.face.position_name(),
            record.center().name()
        );
        records.push(record);
    }
    let records: [FaceRecord; 6] = records
        .try_into()
        .map_err(|_| anyhow!("expected exactly six face records"))?;

    // Stage 2: assemble, with face identity taken from centers
    let assembly = match CubeStateAssembler::new().assemble(&records) {
        Ok(assembly) => assembly,
        Err(e) => fail(e)?,
    };
    println!("\nFace colors:");
    for (color, face) in assembly.mapping.entries() {
        println!("  {} -> {}", color.name(), face.position_name());
    }

    // Stage 3: validate before spending a solver call
    if let Err(e) = cube::validate(&assembly.state) {
        fail::<()>(e)?;
    }
    println!("Cube state: {}", assembly.state);

    // Stage 4: solve
    let adapter = SolverAdapter::new(CommandSolver::new(program, args));
    let moves = match adapter.solve(&assembly.state) {
        Ok(moves) => moves,
        Err(e) => fail(e)?,
    };

    if moves.is_empty() {
        println!("\nCube is already solved, no moves needed.");
        return Ok(());
    }

    let stats = moves.stats();
    println!("\nSolution ({} moves): {}", stats.total_moves, moves);
    println!(
        "Quarter turns: {}, half turns: {}",
        stats.quarter_turns, stats.half_turns
    );
    println!("\nSteps:");
    for (i, m) in moves.iter().enumerate() {
        println!("  {:2}. {:3} {}", i + 1, m.to_string(), m.description());
    }
    Ok(())
}

fn print_guide() {
    for (i, guide) in SCAN_SEQUENCE.iter().enumerate() {
        println!(
            "  {}. {} face ({}): {}",
            i + 1,
            guide.face.position_name(),
            guide.solved_color.name(),
            guide.instruction
        );
    }
}

/// Surface the actionable hint, then propagate the error
fn fail<T>(e: ScanError) -> anyhow::Result<T> {
    eprintln!("{}", e.user_message());
    bail!(e)
}

fn user_error(e: ScanError) -> anyhow::Error {
    anyhow!("{e}: {}", e.user_message())
}
