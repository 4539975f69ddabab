//! vyshhorod — headless run of the civil_alert dashboard.
//!
//! Loops the default ALERT/SAFE schedule over Vyshhorod, ranks the nearest
//! shelters every second of simulated time, prints a line at each phase
//! change, and writes a shelter plan (text + CSV) whenever an ALERT starts.
//!
//! # Environment
//!
//! | Variable        | Default                   | Meaning                              |
//! |-----------------|---------------------------|--------------------------------------|
//! | `SHELTER_CSV`   | `shelters_vyshhorod.csv`  | shelter table; built-in if absent    |
//! | `SCHEDULE_CSV`  | *(unset)*                 | phase schedule; default if unset     |
//! | `DEMO_TICKS`    | `315`                     | seconds of simulated time to run     |
//! | `RADIUS_KM`     | `3`                       | focus radius (clamped to 1–10)       |
//! | `PLAN_DIR`      | `output/vyshhorod`        | where plan files are written         |
//! | `DEMO_REALTIME` | `0`                       | `1` sleeps one tick interval per tick |
//! | `RUST_LOG`      | `info`                    | tracing filter                       |

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ca_core::Tick;
use ca_cycle::load_schedule_csv;
use ca_dashboard::{DashboardBuilder, DashboardConfig, DashboardObserver, Refresh};
use ca_output::{CsvPlanWriter, PlanObserver, PlanWriter, TextPlanWriter, status_line};
use ca_shelter::{builtin_shelters, load_shelters_csv};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_SHELTER_CSV: &str = "shelters_vyshhorod.csv";
const DEFAULT_PLAN_DIR:    &str = "output/vyshhorod";
const DEFAULT_TICKS:       u64  = 315; // one full default cycle

// ── Observer wrapper that also prints status ─────────────────────────────────

struct StatusObserver<W: PlanWriter> {
    inner:         PlanObserver<W>,
    refreshes:     u64,
    phase_changes: u64,
}

impl<W: PlanWriter> StatusObserver<W> {
    fn new(inner: PlanObserver<W>) -> Self {
        Self { inner, refreshes: 0, phase_changes: 0 }
    }
}

impl<W: PlanWriter> DashboardObserver for StatusObserver<W> {
    fn on_refresh(&mut self, refresh: &Refresh) {
        self.refreshes += 1;
        self.inner.on_refresh(refresh);
    }

    fn on_phase_change(&mut self, refresh: &Refresh) {
        self.phase_changes += 1;
        println!("[{:>6}] {}", refresh.tick.to_string(), status_line(refresh));
        for (i, r) in refresh.nearest.iter().enumerate() {
            let mut extra = Vec::new();
            if let Some(t) = r.shelter.shelter_type() {
                extra.push(t.to_owned());
            }
            if let Some(c) = r.shelter.capacity() {
                extra.push(format!("cap {c}"));
            }
            let extra = if extra.is_empty() { String::new() } else { format!(" • {}", extra.join(" • ")) };
            println!(
                "         {}. {} — {:.2} km • ~{} min walk{}",
                i + 1,
                r.shelter.name(),
                r.distance_km,
                r.eta_minutes,
                extra
            );
        }
        self.inner.on_phase_change(refresh);
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        self.inner.on_run_end(final_tick);
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(v) => v.trim().parse().with_context(|| format!("invalid {key}={v:?}")),
        Err(_) => Ok(default),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let ticks:     u64     = env_or("DEMO_TICKS", DEFAULT_TICKS)?;
    let radius_km: f64     = env_or("RADIUS_KM", 3.0)?;
    let realtime:  u8      = env_or("DEMO_REALTIME", 0)?;
    let plan_dir:  PathBuf = env_or("PLAN_DIR", PathBuf::from(DEFAULT_PLAN_DIR))?;
    let shelter_csv: PathBuf = env_or("SHELTER_CSV", PathBuf::from(DEFAULT_SHELTER_CSV))?;

    println!("=== vyshhorod — civil alert dashboard ===");
    println!("Ticks: {ticks}  |  Radius: {radius_km} km");
    println!();

    // 1. Shelters: CSV if present, otherwise the built-in table.
    let shelters = if shelter_csv.exists() {
        let s = load_shelters_csv(&shelter_csv)
            .with_context(|| format!("loading {}", shelter_csv.display()))?;
        info!(path = %shelter_csv.display(), count = s.len(), "shelters loaded from CSV");
        s
    } else {
        warn!(path = %shelter_csv.display(), "shelter CSV not found; using built-in demo list");
        builtin_shelters()
    };

    // 2. Schedule.
    let mut builder = DashboardBuilder::new(DashboardConfig { radius_km, ..DashboardConfig::default() })
        .shelters(shelters);
    if let Ok(path) = std::env::var("SCHEDULE_CSV") {
        let schedule = load_schedule_csv(Path::new(&path)).with_context(|| format!("loading {path}"))?;
        info!(path = %path, cycle_len = schedule.cycle_len(), "schedule loaded from CSV");
        builder = builder.schedule(schedule);
    }

    // 3. Dashboard.
    let mut dash = builder.build()?;
    println!(
        "Schedule: {} phases, {} s cycle  |  Shelters: {}  |  Home: {}",
        dash.clock().schedule().len(),
        dash.clock().cycle_len(),
        dash.shelters().len(),
        dash.home(),
    );
    if dash.shelters().is_empty() {
        warn!("no shelters loaded; upload a CSV with name,lat,lon columns");
    }
    println!();

    // 4. Plan output.
    std::fs::create_dir_all(&plan_dir)?;
    let writer = (TextPlanWriter::create(&plan_dir)?, CsvPlanWriter::create(&plan_dir)?);
    let mut obs = StatusObserver::new(PlanObserver::new(writer));

    // 5. Run.
    let t0 = Instant::now();
    if realtime == 1 {
        let interval = dash.config.tick_interval;
        for _ in 0..ticks {
            dash.run_ticks(1, &mut obs);
            std::thread::sleep(interval);
        }
    } else {
        dash.run_ticks(ticks, &mut obs);
    }
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!();
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!("  refreshes     : {}", obs.refreshes);
    println!("  phase changes : {}", obs.phase_changes);
    println!("  plans written : {} ({})", obs.inner.plans_written(), plan_dir.display());
    println!();

    // 7. Full distance table.
    let mut all = dash.all_distances();
    all.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    println!("{:<28} {:>8} {:>6}", "Shelter", "km", "min");
    println!("{}", "-".repeat(44));
    for r in &all {
        println!("{:<28} {:>8.2} {:>6}", r.shelter.name(), r.distance_km, r.eta_minutes);
    }

    Ok(())
}
