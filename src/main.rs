//! CubeMaster CLI
//!
//! Usage:
//!   cubemaster --moves "R U R' U'"              # Apply moves to a solved cube
//!   cubemaster --alg pll-t                      # Show a PLL case and its setup
//!   cubemaster --list                           # List the PLL catalog
//!   cubemaster --facelets <54 letters> --resolve
//!   cubemaster --invert "R U R' U'"             # Print the inverse sequence
//!   cubemaster --interactive                    # Practice loop on one cube
//!   cubemaster --serve                          # HTTP API server
//!   cubemaster --moves "R" --json               # JSON output

use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cubemaster::core::{
    apply_move, apply_notation, catalog, format_sequence, from_facelet_string, invert_sequence, load_state,
    parse_sequence, run_server, save_state, validate,
};
use cubemaster::types::{AlgorithmCategory, CubeOutput, CubieState, FaceletState, Move};
use cubemaster::{CubeError, Result, DEFAULT_ADDR, DEFAULT_STATE_DIR, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "cubemaster",
    version = VERSION,
    about = "CubeMaster - Rubik's cube move engine and cubie resolver",
    long_about = "CubeMaster applies face turns to a 3x3 cube, resolves sticker colors\n\
                  into pieces and orientations, and plays back the PLL catalog.\n\n\
                  Starting state (first match wins):\n  \
                  --state <file>      A state saved with --save\n  \
                  --facelets <str>    54-letter solver string (URFDLB order)\n  \
                  --alg <id>          The case a catalog algorithm solves\n  \
                  (none)              Solved cube\n\n\
                  Move notation: U R F D L B, optionally followed by ' or 2"
)]
struct Args {
    /// Moves to apply, e.g. "R U R' U'"
    #[arg(short, long)]
    moves: Option<String>,

    /// Start from the setup of a catalog algorithm (e.g. pll-t)
    #[arg(short, long)]
    alg: Option<String>,

    /// List the algorithm catalog
    #[arg(short, long)]
    list: bool,

    /// Load the starting state from a saved JSON file
    #[arg(long)]
    state: Option<String>,

    /// Starting state as a 54-letter facelet string
    #[arg(long)]
    facelets: Option<String>,

    /// Validate the result and show the cubie view
    #[arg(short, long)]
    resolve: bool,

    /// Print the inverse of a move sequence and exit
    #[arg(long)]
    invert: Option<String>,

    /// Save the resulting state into this directory
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_STATE_DIR)]
    save: Option<String>,

    /// Interactive mode - read moves from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, default_value = DEFAULT_ADDR)]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Single-line parseable output
    #[arg(long)]
    parseable: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cubemaster=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let result = if args.serve {
        run_serve(&args).await
    } else if args.list {
        run_list(&args)
    } else if let Some(ref moves) = args.invert {
        run_invert(moves, &args)
    } else if args.interactive {
        run_interactive(&args)
    } else if args.moves.is_some() || args.alg.is_some() || args.state.is_some() || args.facelets.is_some() {
        run_single(&args)
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args)
    };

    if let Err(e) = result {
        eprintln!("{}: {}", e.code(), e);
        std::process::exit(1);
    }
}

/// Resolve the starting state from --state, --facelets or --alg
fn starting_state(args: &Args) -> Result<FaceletState> {
    if let Some(ref path) = args.state {
        return load_state(path);
    }
    if let Some(ref facelets) = args.facelets {
        return from_facelet_string(facelets);
    }
    if let Some(ref id) = args.alg {
        let algorithm = catalog::find(id)
            .ok_or_else(|| CubeError::malformed(format!("no algorithm with id {:?}", id)))?;
        return algorithm.setup_state();
    }
    Ok(FaceletState::solved())
}

/// Starting state plus --moves, with cubies attached when --resolve is set
fn evaluate(args: &Args) -> Result<CubeOutput> {
    let mut state = starting_state(args)?;
    let moves = match args.moves {
        Some(ref notation) => apply_notation(&mut state, notation)?,
        None => Vec::new(),
    };

    let mut output = CubeOutput::new(state, moves);
    if args.resolve {
        let cubies = validate(&output.state)?;
        output = output.with_cubies(cubies);
    }
    Ok(output)
}

/// Run a single evaluation
fn run_single(args: &Args) -> Result<()> {
    if let Some(ref id) = args.alg {
        if !args.json && !args.parseable {
            if let Some(algorithm) = catalog::find(id) {
                println!("{} ({})", algorithm.name, algorithm.category.name());
                println!("  algorithm: {}", algorithm.notation);
                println!("  setup:     {}", algorithm.setup_notation()?);
                println!("  look for:  {}", algorithm.recognition);
                println!();
            }
        }
    }

    let output = evaluate(args)?;

    if let Some(ref dir) = args.save {
        let path = save_state(&output.state, dir)?;
        info!(%path, "state saved");
    }

    print_output(&output, args)?;
    if !args.json && !args.parseable {
        if let Some(ref cubies) = output.cubies {
            print_cubies(cubies);
        }
    }
    Ok(())
}

fn print_output(output: &CubeOutput, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(output)?);
    } else if args.parseable {
        println!("{}", output.to_parseable_string());
    } else {
        print!("{}", render(output, args.no_color));
    }
    Ok(())
}

fn print_cubies(cubies: &CubieState) {
    println!();
    println!("corners (slot <- piece, twist):");
    for c in &cubies.corners {
        println!("  {} <- {}  {}", c.slot, c.piece, c.orientation);
    }
    println!("edges (slot <- piece, flip):");
    for e in &cubies.edges {
        println!("  {:<3} <- {:<3} {}", e.slot.name(), e.piece.name(), e.orientation);
    }
}

/// List the algorithm catalog
fn run_list(args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog::all())?);
        return Ok(());
    }

    for category in [
        AlgorithmCategory::Edges,
        AlgorithmCategory::Corners,
        AlgorithmCategory::Adjacent,
        AlgorithmCategory::Diagonal,
    ] {
        println!("[{}]", category.name());
        for algorithm in catalog::by_category(category) {
            println!("  {:<7} {:<8} {}", algorithm.id, algorithm.name, algorithm.notation);
        }
    }
    Ok(())
}

/// Print the inverse of a sequence
fn run_invert(notation: &str, args: &Args) -> Result<()> {
    let moves = parse_sequence(notation)?;
    let inverse = invert_sequence(&moves);

    if args.json {
        println!("{}", serde_json::to_string(&inverse)?);
    } else {
        println!("{}", format_sequence(&inverse));
    }
    Ok(())
}

/// Interactive practice loop on a single cube
fn run_interactive(args: &Args) -> Result<()> {
    let mut state = starting_state(args)?;
    let mut history: Vec<Move> = Vec::new();

    print_header(args.no_color);
    println!("Type moves (e.g. R U R' U') and press Enter.");
    println!("Commands: undo, reset, resolve, quit");
    println!();
    print!("{}", render(&CubeOutput::new(state.clone(), Vec::new()), args.no_color));

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("[{}] > ", history.len());
        stdout.flush()?;

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Moves: {}", history.len());
            break;
        }
        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("reset") {
            state = starting_state(args)?;
            history.clear();
        } else if line.eq_ignore_ascii_case("undo") {
            if let Some(last) = history.pop() {
                apply_move(&mut state, last.inverse());
            }
        } else if line.eq_ignore_ascii_case("resolve") {
            match validate(&state) {
                Ok(cubies) => {
                    print_cubies(&cubies);
                    let verdict = if cubies.legality().is_solvable() { "solvable" } else { "NOT solvable" };
                    println!("  {}", verdict);
                }
                Err(e) => println!("{}: {}", e.code(), e),
            }
            continue;
        } else {
            match apply_notation(&mut state, line) {
                Ok(moves) => history.extend(moves),
                Err(e) => {
                    println!("{}: {}", e.code(), e);
                    continue;
                }
            }
        }

        let output = CubeOutput::new(state.clone(), history.clone());
        if args.json {
            println!("{}", serde_json::to_string(&output)?);
        } else {
            print!("{}", render(&output, args.no_color));
            if output.solved && !history.is_empty() {
                println!("  Solved in {} moves", history.len());
            }
        }
    }
    Ok(())
}

fn render(output: &CubeOutput, no_color: bool) -> String {
    if no_color {
        output.to_plain_string()
    } else {
        output.to_terminal_string()
    }
}

/// Print header
fn print_header(no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  CubeMaster v{} - Interactive", VERSION);
        println!("========================================");
    } else {
        println!("\x1b[1m========================================\x1b[0m");
        println!("\x1b[1m  CubeMaster v{} - Interactive\x1b[0m", VERSION);
        println!("\x1b[1m========================================\x1b[0m");
    }
    println!();
}

/// Run HTTP API server
async fn run_serve(args: &Args) -> Result<()> {
    let dir = args.save.clone().unwrap_or_else(|| DEFAULT_STATE_DIR.to_string());
    run_server(&args.addr, dir).await
}

// =============================================================================
// TESTS
// =============================================================================
