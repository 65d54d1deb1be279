use log::debug;

use crate::algorithm::activation::{ActivationResult, activate};
use crate::algorithm::assignment::{
    assign_deterministic_directions, assign_gradient_directions, assign_random_directions,
};
use crate::algorithm::bias::{apply_edge_outward_bias, resolve_orthogonal_collisions};
use crate::algorithm::cycles::{count_cycles, fix_arrow_cycles};
use crate::algorithm::distance::{DistanceField, pick_exits};
use crate::algorithm::obstacles::scatter_blockers;
use crate::algorithm::regeneration::{
    GenerationPhase, RegenerationController, RegenerationOutcome,
};
use crate::algorithm::solvability::{count_arrows, has_any_immediate_move};
use crate::io::configuration::{
    DEFAULT_BLOCKER_COUNT, DEFAULT_EDGE_OUTWARD_PROBABILITY, DEFAULT_EXIT_COUNT, DEFAULT_HEIGHT,
    DEFAULT_NOISE_JITTER, DEFAULT_REGENERATE_ATTEMPTS, DEFAULT_SEED, DEFAULT_WIDTH,
    MAX_GRID_DIMENSION, MAX_NOISE_JITTER, MAX_REGENERATE_ATTEMPTS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::math::random::{RandomSource, SeededRandom};
use crate::spatial::{Cell, Direction, Grid, Position};

/// How arrows are pointed when the potential field is off
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ArrowMode {
    /// Every arrow faces its nearest edge
    #[default]
    Deterministic,
    /// Every arrow gets an independent uniform direction
    Random,
}

/// Board generation parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Direction source used when the potential field is off
    pub arrow_mode: ArrowMode,
    /// Seed for every random draw of a generation pass
    pub seed: u64,
    /// Repair loops in randomly directed boards
    pub ensure_solvable_random: bool,
    /// Derive directions from a BFS potential field (overrides `arrow_mode`)
    pub use_potential_field: bool,
    /// Border exits seeding the potential field
    pub exit_count: usize,
    /// Jitter weight; gradient picks are overridden with probability `j / (4 + j)`
    pub noise_jitter: usize,
    /// Blockers scattered after directions are set
    pub blocker_count: usize,
    /// Chance that a border arrow is turned to face off the board (random mode)
    pub edge_outward_probability: f64,
    /// Rewrite arrows that point into a perpendicular arrow (random mode)
    pub avoid_orthogonal_collisions: bool,
    /// Rebuild boards that have no immediate move
    pub regenerate_if_no_move: bool,
    /// Rebuild budget per regeneration round
    pub regenerate_attempts: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            arrow_mode: ArrowMode::Deterministic,
            seed: DEFAULT_SEED,
            ensure_solvable_random: true,
            use_potential_field: true,
            exit_count: DEFAULT_EXIT_COUNT,
            noise_jitter: DEFAULT_NOISE_JITTER,
            blocker_count: DEFAULT_BLOCKER_COUNT,
            edge_outward_probability: DEFAULT_EDGE_OUTWARD_PROBABILITY,
            avoid_orthogonal_collisions: true,
            regenerate_if_no_move: true,
            regenerate_attempts: DEFAULT_REGENERATE_ATTEMPTS,
        }
    }
}

impl BoardConfig {
    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - either dimension is zero or above `MAX_GRID_DIMENSION`
    /// - the edge probability is outside `[0, 1]`
    /// - the jitter weight is above `MAX_NOISE_JITTER`
    /// - regeneration is enabled with an attempt budget outside `1..=MAX_REGENERATE_ATTEMPTS`
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        if !(0.0..=1.0).contains(&self.edge_outward_probability) {
            return Err(invalid_parameter(
                "edge_outward_probability",
                &self.edge_outward_probability,
                &"must be a probability in [0, 1]",
            ));
        }

        if self.noise_jitter > MAX_NOISE_JITTER {
            return Err(invalid_parameter(
                "noise_jitter",
                &self.noise_jitter,
                &format!("must be at most {MAX_NOISE_JITTER}"),
            ));
        }

        if self.regenerate_if_no_move
            && !(1..=MAX_REGENERATE_ATTEMPTS).contains(&self.regenerate_attempts)
        {
            return Err(invalid_parameter(
                "regenerate_attempts",
                &self.regenerate_attempts,
                &format!("must be between 1 and {MAX_REGENERATE_ATTEMPTS}"),
            ));
        }

        Ok(())
    }

    const fn uses_random_pipeline(&self) -> bool {
        !self.use_potential_field && matches!(self.arrow_mode, ArrowMode::Random)
    }
}

/// Counters from one pipeline pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Exits seeding the potential field (empty when the field is off)
    pub exits: Vec<Position>,
    /// Gradient picks overridden by jitter
    pub jittered: usize,
    /// Loops found and broken in random mode
    pub cycles_repaired: usize,
    /// Border arrows turned outward
    pub edge_biased: usize,
    /// Arrows rewritten by the orthogonal collision pass
    pub collisions_resolved: usize,
    /// Blockers actually placed
    pub blockers_placed: usize,
}

/// Summary of how a board came to be
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Counters from the accepted pipeline pass
    pub stats: PipelineStats,
    /// Whether the board had an immediate move when generation returned
    pub solvable: bool,
    /// Result of the regeneration round, if one ran
    pub regeneration: RegenerationOutcome,
}

/// Run one full pipeline pass with `seed`
///
/// Reseeds `rng`, then draws in a fixed order: exits and jitter (potential
/// field) or per-cell directions (random mode), edge bias, blocker placement.
pub fn build_grid<R: RandomSource + ?Sized>(
    config: &BoardConfig,
    seed: u64,
    rng: &mut R,
) -> (Grid, PipelineStats) {
    rng.reseed(seed);

    let mut grid = Grid::new(config.width, config.height, Cell::Arrow(Direction::Up));
    let mut stats = PipelineStats::default();

    if config.use_potential_field {
        stats.exits = pick_exits(config.width, config.height, config.exit_count, rng);
        let field = DistanceField::compute(config.width, config.height, &stats.exits);
        stats.jittered = assign_gradient_directions(&mut grid, &field, config.noise_jitter, rng);
    } else {
        match config.arrow_mode {
            ArrowMode::Deterministic => assign_deterministic_directions(&mut grid),
            ArrowMode::Random => assign_random_directions(&mut grid, rng),
        }
    }

    if config.uses_random_pipeline() {
        if config.ensure_solvable_random {
            stats.cycles_repaired += fix_arrow_cycles(&mut grid).repaired.len();
        }

        stats.edge_biased =
            apply_edge_outward_bias(&mut grid, config.edge_outward_probability, rng);

        if config.avoid_orthogonal_collisions {
            stats.collisions_resolved = resolve_orthogonal_collisions(&mut grid);

            // Collision rewrites can close a two-cell loop
            if config.ensure_solvable_random && count_cycles(&grid) > 0 {
                stats.cycles_repaired += fix_arrow_cycles(&mut grid).repaired.len();
            }
        }
    }

    stats.blockers_placed = scatter_blockers(&mut grid, config.blocker_count, rng);

    debug!(
        "Built {}x{} board with seed {seed}: {} exits, {} jittered, {} cycles repaired, {} blockers",
        config.width,
        config.height,
        stats.exits.len(),
        stats.jittered,
        stats.cycles_repaired,
        stats.blockers_placed
    );

    (grid, stats)
}

/// Generated puzzle board together with the generator state that maintains it
///
/// The board owns its random stream so that mid-game regeneration continues
/// the same reproducible sequence of draws.
#[derive(Debug, Clone)]
pub struct Board<R: RandomSource = SeededRandom> {
    grid: Grid,
    config: BoardConfig,
    rng: R,
    phase: GenerationPhase,
    report: GenerationReport,
}

impl Board<SeededRandom> {
    /// Generate a board with the default `StdRng`-backed random source
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn generate(config: BoardConfig) -> Result<Self> {
        Self::generate_with(config, SeededRandom::new(config.seed))
    }
}

impl<R: RandomSource> Board<R> {
    /// Generate a board drawing from a caller-supplied random source
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn generate_with(config: BoardConfig, rng: R) -> Result<Self> {
        config.validate()?;

        let mut board = Self {
            grid: Grid::new(config.width, config.height, Cell::Empty),
            config,
            rng,
            phase: GenerationPhase::Generating,
            report: GenerationReport::default(),
        };

        let (grid, stats) = build_grid(&board.config, board.config.seed, &mut board.rng);
        board.grid = grid;
        board.report.stats = stats;
        board.phase = GenerationPhase::Idle;

        if board.config.regenerate_if_no_move {
            board.regenerate_if_needed();
        } else {
            board.report.regeneration = RegenerationOutcome::Skipped;
        }

        board.report.solvable = has_any_immediate_move(&board.grid);
        if board.report.solvable {
            debug!("Board has at least one immediate move");
        }
        Ok(board)
    }

    /// Current cell layout
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable cell layout for external effects
    ///
    /// Callers should follow up with [`Board::ensure_playable`].
    pub const fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Configuration the board was generated from (seed reflects regeneration)
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Seed of the current layout
    pub const fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Generator lifecycle phase
    pub const fn phase(&self) -> GenerationPhase {
        self.phase
    }

    /// How the board was generated and last regenerated
    pub const fn report(&self) -> &GenerationReport {
        &self.report
    }

    /// Whether at least one arrow can be activated right now
    pub fn has_any_immediate_move(&self) -> bool {
        has_any_immediate_move(&self.grid)
    }

    /// Number of arrows left on the board
    pub fn arrow_count(&self) -> usize {
        count_arrows(&self.grid)
    }

    /// Resolve a tap on `[x, y]`
    pub fn try_activate(&mut self, x: usize, y: usize) -> ActivationResult {
        activate(&mut self.grid, [x, y])
    }

    /// Reveal every cell within `radius` of `[cx, cy]` (square area)
    ///
    /// Cells outside the grid are ignored. Returns positions whose state changed.
    pub fn reveal_area(&mut self, cx: usize, cy: usize, radius: usize) -> Vec<Position> {
        let x_range = cx.saturating_sub(radius)..=cx.saturating_add(radius);
        let y_range = cy.saturating_sub(radius)..=cy.saturating_add(radius);

        let mut changed = Vec::new();
        for y in y_range {
            for x in x_range.clone() {
                if self.grid.reveal([x, y]) {
                    changed.push([x, y]);
                }
            }
        }
        changed
    }

    /// Reveal every cell of row `y`, returning positions whose state changed
    pub fn clear_row(&mut self, y: usize) -> Vec<Position> {
        let mut changed = Vec::new();
        for x in 0..self.grid.width() {
            if self.grid.reveal([x, y]) {
                changed.push([x, y]);
            }
        }
        changed
    }

    /// Make sure the board still has a move, regenerating if configured
    ///
    /// Does nothing beyond the check when regeneration is disabled, another
    /// generation step is in flight, or no arrows are left (a cleared board is
    /// finished, not stuck). Returns whether a move exists afterwards and
    /// records it in the report.
    pub fn ensure_playable(&mut self) -> bool {
        let regenerate = self.config.regenerate_if_no_move
            && self.phase.can_regenerate()
            && self.arrow_count() > 0;

        if regenerate && !self.has_any_immediate_move() {
            debug!("No immediate move left; regenerating mid-game");
            self.regenerate_if_needed();
        }

        self.report.solvable = self.has_any_immediate_move();
        self.report.solvable
    }

    fn regenerate_if_needed(&mut self) {
        if !self.phase.can_regenerate() {
            self.report.regeneration = RegenerationOutcome::Skipped;
            return;
        }

        self.phase = GenerationPhase::Regenerating;

        let controller = RegenerationController::new(self.config.regenerate_attempts);
        let config = self.config;
        let mut last_stats = None;
        let regeneration = controller.run(&mut self.grid, config.seed, &mut self.rng, |seed, rng| {
            let (grid, stats) = build_grid(&config, seed, rng);
            last_stats = Some(stats);
            grid
        });

        if let Some(stats) = last_stats {
            self.report.stats = stats;
        }
        self.config.seed = regeneration.seed;
        self.report.regeneration = regeneration.outcome;
        self.phase = GenerationPhase::Idle;
    }
}

/// Generate a board with the default random source
///
/// # Errors
///
/// Returns an error if the configuration fails validation
pub fn generate(config: BoardConfig) -> Result<Board> {
    Board::generate(config)
}

/// Resolve a tap on `[x, y]` of `board`
pub fn try_activate<R: RandomSource>(board: &mut Board<R>, x: usize, y: usize) -> ActivationResult {
    board.try_activate(x, y)
}

/// Make sure `board` still has a move, regenerating if configured
pub fn ensure_playable<R: RandomSource>(board: &mut Board<R>) -> bool {
    board.ensure_playable()
}
