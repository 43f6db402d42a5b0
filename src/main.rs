//! Zeta Arena headless runner
//!
//! Drives the simulation with a simple autopilot at a fixed frame rate and
//! prints the final snapshot as JSON. Useful for soak runs and balance checks.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use clap::Parser;
    use glam::Vec2;

    use zeta_arena::consts::*;
    use zeta_arena::sim::{Difficulty, GameEvent, GameState, Snapshot, TickInput, Upgrade};
    use zeta_arena::Tuning;

    /// Enemies closer than this make the autopilot back off
    const RETREAT_DISTANCE: f32 = 150.0;
    /// Host frame length; the sim is stepped at SIM_DT inside each frame
    const FRAME_DT: f32 = 1.0 / 30.0;

    #[derive(Debug, Parser)]
    #[command(name = "zeta-arena", about = "Run the arena simulation headless")]
    pub struct Args {
        /// Tuning JSON file (defaults are used when omitted)
        #[arg(long)]
        pub config: Option<PathBuf>,
        /// Simulated seconds to run
        #[arg(long, default_value_t = 60.0)]
        pub seconds: f32,
        /// Override the tuning seed
        #[arg(long)]
        pub seed: Option<u64>,
        /// very-easy, easy, normal, hard, chaotic or insane
        #[arg(long, default_value = "normal")]
        pub difficulty: String,
    }

    /// Fixed-timestep driver, as a windowed host would run it
    struct Runner {
        state: GameState,
        accumulator: f32,
    }

    impl Runner {
        fn frame(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let snapshot = self.state.snapshot();
                let input = autopilot(&snapshot);
                self.state.advance(SIM_DT, &input);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            let cost = self.state.upgrade_cost(Upgrade::WeaponDamage);
            if self.state.progress.currency >= cost {
                self.state.purchase_upgrade(Upgrade::WeaponDamage);
            }

            for event in self.state.drain_events() {
                match event {
                    GameEvent::WaveCleared { wave } => log::info!("Wave {} cleared", wave),
                    GameEvent::PlayerDamaged { remaining, .. } => {
                        log::debug!("Player hit, {} hp left", remaining)
                    }
                    GameEvent::UpgradePurchased { upgrade, cost } => {
                        log::info!("Bought {:?} for {}", upgrade, cost)
                    }
                    _ => {}
                }
            }
        }
    }

    /// Aim at the nearest enemy, always fire, back away when it gets close
    fn autopilot(snapshot: &Snapshot) -> TickInput {
        let me = snapshot.player.bounds.center();
        let nearest = snapshot
            .enemies
            .iter()
            .map(|e| e.bounds.center())
            .min_by(|a, b| {
                a.distance_squared(me)
                    .partial_cmp(&b.distance_squared(me))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        let Some(target) = nearest else {
            return TickInput::default();
        };

        let mut input = TickInput {
            fire: true,
            aim: target,
            ..Default::default()
        };
        let away: Vec2 = me - target;
        if away.length() < RETREAT_DISTANCE {
            input.move_left = away.x < -1.0;
            input.move_right = away.x > 1.0;
            input.move_up = away.y < -1.0;
            input.move_down = away.y > 1.0;
        }
        input
    }

    pub fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
        let mut tuning = match &args.config {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };
        if let Some(seed) = args.seed {
            tuning.seed = seed;
        }
        let difficulty = Difficulty::from_str(&args.difficulty)
            .ok_or_else(|| format!("unknown difficulty: {}", args.difficulty))?;

        let mut runner = Runner {
            state: GameState::new(tuning, difficulty)?,
            accumulator: 0.0,
        };

        let frames = (args.seconds.max(0.0) / FRAME_DT).ceil() as u64;
        for _ in 0..frames {
            runner.frame(FRAME_DT);
            if runner.state.is_game_over() {
                break;
            }
        }

        let snapshot = runner.state.snapshot();
        log::info!(
            "Finished after {} ticks: wave {}, {} kills, game over: {}",
            snapshot.tick,
            snapshot.wave,
            snapshot.kill_count,
            snapshot.game_over
        );
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    log::info!("Zeta Arena (headless) starting...");

    let args = headless::Args::parse();
    if let Err(e) = headless::run(args) {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The simulation is embedded by a host on wasm; there is no headless runner
}
