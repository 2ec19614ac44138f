//! Headless scenario runner: scripts gestures against the Orbit simulations
//! at a fixed 60 Hz step and logs what they emit.
//!
//! Usage: `orbit-sim [slingshot|gravity-well|seal|all]` (default `all`).
//! Log level follows `RUST_LOG`, defaulting to `info`.

use anyhow::{bail, Context};
use glam::Vec2;
use orbit_core::{demo_group, run_fixed, GravityWell, Seal, SealPhase, Slingshot};

const DT: f32 = 1.0 / 60.0;
const FRAME_MS: f64 = DT as f64 * 1000.0;
const SEED: u64 = 7;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scenario = std::env::args().nth(1).unwrap_or_else(|| "all".to_string());
    match scenario.as_str() {
        "slingshot" => slingshot(),
        "gravity-well" => gravity_well(),
        "seal" => seal(),
        "all" => {
            slingshot()?;
            gravity_well()?;
            seal()
        }
        other => bail!("unknown scenario '{other}'; expected slingshot, gravity-well, seal or all"),
    }
}

fn slingshot() -> anyhow::Result<()> {
    let mut sling = Slingshot::with_seed(SEED);
    let grab = Vec2::new(200.0, 600.0);
    let mut clock_ms = 0.0;

    // (sideways, pull) per gesture; the last one is too weak to launch
    for (sideways, pull) in [(0.0, 150.0), (-140.0, 80.0), (90.0, 45.0), (10.0, 12.0)] {
        sling.pointer_down(grab);
        sling.pointer_move(grab + Vec2::new(sideways, -pull));
        log::info!(
            "[sim] slingshot drag ({sideways}, {pull}) -> ${} {}",
            sling.amount(),
            sling.category().label()
        );
        sling.pointer_up();
        let launched = run_fixed(&mut sling, DT, 240, clock_ms);
        clock_ms += 240.0 * FRAME_MS;
        match launched.as_slice() {
            [] => log::info!("[sim] slingshot snapped back, phase {:?}", sling.phase()),
            [expense] => log::info!(
                "[sim] slingshot expense {} ${} {} at ({:.2}, {:.2})",
                expense.id,
                expense.amount,
                expense.category.id(),
                expense.x,
                expense.y
            ),
            many => bail!("one gesture launched {} expenses", many.len()),
        }
    }
    Ok(())
}

/// Wall clock for the well; streams expire as it advances.
#[derive(Default)]
struct Timeline {
    now_ms: f64,
}

impl Timeline {
    fn run(&mut self, well: &mut GravityWell, frames: usize) {
        run_fixed(well, DT, frames, self.now_ms);
        self.now_ms += frames as f64 * FRAME_MS;
    }
}

fn gravity_well() -> anyhow::Result<()> {
    let mut well = GravityWell::new(demo_group(), 390.0, 700.0);
    let mut timeline = Timeline::default();

    timeline.run(&mut well, 120);
    for (from, to) in [("1", "2"), ("1", "3"), ("3", "4")] {
        let start = well.bubble(from).context("missing bubble")?.position;
        let end = well.bubble(to).context("missing bubble")?.position;
        if !well.pointer_down(start) {
            bail!("no bubble under {start}");
        }
        well.pointer_move(end);
        match well.pointer_up(timeline.now_ms) {
            Some(s) => {
                log::info!("[sim] well {} -> {} moved {}", s.from_id, s.to_id, s.transfer);
            }
            None => log::info!("[sim] well drop {from} -> {to} hit nothing"),
        }
        timeline.run(&mut well, 60);
        log::info!("[sim] well streams live: {}", well.streams().len());
    }
    timeline.run(&mut well, 180);

    for user in well.users() {
        log::info!("[sim] well {} balance {}", user.name, user.balance);
    }
    log::info!("[sim] well streams after expiry: {}", well.streams().len());
    Ok(())
}

fn seal() -> anyhow::Result<()> {
    let mut seal = Seal::with_seed(SEED);

    seal.pointer_down();
    let early = run_fixed(&mut seal, DT, 8, 0.0);
    seal.pointer_up();
    run_fixed(&mut seal, DT, 60, 0.0);
    log::info!(
        "[sim] seal early release: events={} progress={:.3}",
        early.len(),
        seal.state().hold_progress
    );

    seal.pointer_down();
    let events = run_fixed(&mut seal, DT, 90, 0.0);
    seal.pointer_up();
    run_fixed(&mut seal, DT, 60, 0.0);
    if seal.phase() != SealPhase::Completed {
        bail!("hold did not complete");
    }
    log::info!(
        "[sim] seal held: events={} shatter={:.3}",
        events.len(),
        seal.state().shatter_progress
    );
    Ok(())
}
