//! Command-line interface for generating batches of boards

use crate::algorithm::executor::{ArrowMode, Board, BoardConfig};
use crate::algorithm::regeneration::RegenerationOutcome;
use crate::io::configuration::{
    DEFAULT_BLOCKER_COUNT, DEFAULT_EDGE_OUTWARD_PROBABILITY, DEFAULT_EXIT_COUNT, DEFAULT_HEIGHT,
    DEFAULT_NOISE_JITTER, DEFAULT_REGENERATE_ATTEMPTS, DEFAULT_SEED, DEFAULT_WIDTH,
};
use crate::io::error::{Result, file_system_error};
use crate::io::progress::ProgressManager;
use crate::io::summary::BatchSummary;
use clap::Parser;
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arrowboard")]
#[command(author, version, about = "Generate solvable arrow-grid puzzle boards")]
/// Command-line arguments for the board generator
// Generator toggles map one-to-one onto boolean flags
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Number of columns
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Number of rows
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation (batch boards use seed + index)
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Draw arrow directions at random instead of facing the nearest edge
    #[arg(short, long)]
    pub random: bool,

    /// Disable the potential-field pipeline
    #[arg(long)]
    pub no_potential_field: bool,

    /// Skip loop repair for randomly directed boards
    #[arg(long)]
    pub no_cycle_repair: bool,

    /// Border exits seeding the potential field
    #[arg(short, long, default_value_t = DEFAULT_EXIT_COUNT)]
    pub exits: usize,

    /// Potential-field jitter weight
    #[arg(short, long, default_value_t = DEFAULT_NOISE_JITTER)]
    pub jitter: usize,

    /// Blockers to scatter
    #[arg(short, long, default_value_t = DEFAULT_BLOCKER_COUNT)]
    pub blockers: usize,

    /// Chance that a border arrow faces off the board (random mode)
    #[arg(long, default_value_t = DEFAULT_EDGE_OUTWARD_PROBABILITY)]
    pub edge_probability: f64,

    /// Keep arrows that point into perpendicular arrows (random mode)
    #[arg(long)]
    pub allow_collisions: bool,

    /// Keep boards without an immediate move instead of rebuilding them
    #[arg(long)]
    pub no_regenerate: bool,

    /// Rebuild attempts for boards without an immediate move
    #[arg(short, long, default_value_t = DEFAULT_REGENERATE_ATTEMPTS)]
    pub attempts: usize,

    /// Number of boards to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Write boards to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.count > 1
    }

    /// Generation parameters for the board at `index` of the batch
    pub const fn board_config(&self, index: usize) -> BoardConfig {
        BoardConfig {
            width: self.width,
            height: self.height,
            arrow_mode: if self.random {
                ArrowMode::Random
            } else {
                ArrowMode::Deterministic
            },
            seed: self.seed.wrapping_add(index as u64),
            ensure_solvable_random: !self.no_cycle_repair,
            use_potential_field: !self.no_potential_field,
            exit_count: self.exits,
            noise_jitter: self.jitter,
            blocker_count: self.blockers,
            edge_outward_probability: self.edge_probability,
            avoid_orthogonal_collisions: !self.allow_collisions,
            regenerate_if_no_move: !self.no_regenerate,
            regenerate_attempts: self.attempts,
        }
    }
}

/// Text dump of a board with a one-line header
pub fn render_board(board: &Board, index: usize) -> String {
    let status = match board.report().regeneration {
        RegenerationOutcome::Exhausted { .. } => "no move (regeneration exhausted)",
        _ if board.report().solvable => "playable",
        _ => "no move",
    };

    let mut text = String::new();
    let _ = writeln!(
        text,
        "# board {} seed={} {}x{} {status}",
        index + 1,
        board.seed(),
        board.grid().width(),
        board.grid().height()
    );
    let _ = write!(text, "{}", board.grid());
    text
}

/// Generates every board requested on the command line and writes them out
pub struct BatchGenerator {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchGenerator {
    /// Create a new batch generator with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate the batch and write the boards
    ///
    /// # Errors
    ///
    /// Returns an error if a board configuration is invalid or the output
    /// cannot be written
    pub fn run(&mut self) -> Result<BatchSummary> {
        let mut summary = BatchSummary::default();
        let mut text = String::new();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        for index in 0..self.cli.count {
            let board = Board::generate(self.cli.board_config(index))?;
            summary.record(board.report());

            if index > 0 {
                text.push('\n');
            }
            text.push_str(&render_board(&board, index));

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_board(board.report().solvable);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        self.write_output(&text)?;
        self.report_summary(&summary);
        Ok(summary)
    }

    fn write_output(&self, text: &str) -> Result<()> {
        match &self.cli.output {
            Some(path) => std::fs::write(path, text)
                .map_err(|source| file_system_error(path.clone(), "write", source)),
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
                Ok(())
            }
        }
    }

    // Allow print for the end-of-run summary
    #[allow(clippy::print_stderr)]
    fn report_summary(&self, summary: &BatchSummary) {
        log::info!("Batch finished: {summary}");
        if !self.cli.quiet && self.cli.count > 1 {
            eprintln!("{summary}");
        }
    }
}
