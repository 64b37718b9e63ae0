use clap::{Parser, Subcommand};
use scuba_core::units::depth_length;
use scuba_core::{DepthUnit, DiveError, WaterType};
use scuba_plan::{PendingCalculations, PlanError, ThirdsCommand};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use uom::si::length::{foot, meter};
use uom::si::pressure::bar;

#[derive(Parser)]
#[command(name = "scuba-cli")]
#[command(about = "ScubaMath CLI - dive gas and depth calculations", long_about = None)]
struct Cli {
    /// Water type: ffw, fsw, msw, mfw, or a custom depth per ATA such as 35ft or 11m
    #[arg(long, global = true, default_value = "fsw")]
    water: WaterType,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert atmospheres absolute to depth
    AtaToDepth {
        /// Absolute pressure in ATA
        #[arg(allow_negative_numbers = true)]
        ata: f64,
    },
    /// Convert depth to atmospheres absolute
    DepthToAta {
        /// Depth in water-type units
        #[arg(allow_negative_numbers = true)]
        depth: i32,
    },
    /// Best oxygen mix for a planned depth
    BestMix {
        /// Planned depth
        #[arg(allow_negative_numbers = true)]
        depth: i32,
        /// Oxygen partial pressure limit
        #[arg(long, default_value_t = 1.4, allow_negative_numbers = true)]
        ppo2: f64,
    },
    /// Equivalent air depth of a nitrox mix
    Ead {
        /// Oxygen percent
        #[arg(allow_negative_numbers = true)]
        o2: i32,
        /// Actual depth
        #[arg(allow_negative_numbers = true)]
        depth: i32,
    },
    /// Equivalent nitrogen depth of a helium mix
    End {
        /// Helium percent
        #[arg(allow_negative_numbers = true)]
        helium: i32,
        /// Actual depth
        #[arg(allow_negative_numbers = true)]
        depth: i32,
    },
    /// Maximum operating depth of a mix
    Mod {
        /// Oxygen percent
        #[arg(allow_negative_numbers = true)]
        o2: i32,
        /// Oxygen partial pressure limit
        #[arg(long, default_value_t = 1.4, allow_negative_numbers = true)]
        ppo2: f64,
        /// Helium percent (trimix)
        #[arg(long, allow_negative_numbers = true)]
        helium: Option<i32>,
    },
    /// Round a tank pressure down so it divides into thirds
    RoundThirds {
        /// Tank pressure
        #[arg(allow_negative_numbers = true)]
        pressure: i32,
    },
    /// Turn pressure for a thirds gas plan
    Turn {
        /// Gas volume to reserve
        #[arg(allow_negative_numbers = true)]
        volume: f64,
        /// Starting tank pressure
        #[arg(allow_negative_numbers = true)]
        pressure: i32,
        /// Fill percentage the volume is rated at
        #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
        baseline: f64,
        /// Number of tanks
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        tanks: i32,
    },
    /// Run every calculation in a YAML plan file
    Batch {
        /// Path to the plan YAML file
        plan_path: PathBuf,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Dive(#[from] DiveError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{failed} of {total} calculations failed")]
    BatchFailed { failed: usize, total: usize },
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let water = cli.water;
    info!(%water, "using water type");

    match cli.command {
        Commands::AtaToDepth { ata } => cmd_ata_to_depth(ata, water),
        Commands::DepthToAta { depth } => cmd_depth_to_ata(depth, water),
        Commands::BestMix { depth, ppo2 } => cmd_best_mix(depth, ppo2, water),
        Commands::Ead { o2, depth } => cmd_ead(o2, depth, water),
        Commands::End { helium, depth } => cmd_end(helium, depth, water),
        Commands::Mod { o2, ppo2, helium } => cmd_mod(o2, ppo2, helium, water),
        Commands::RoundThirds { pressure } => cmd_round_thirds(pressure),
        Commands::Turn {
            volume,
            pressure,
            baseline,
            tanks,
        } => cmd_turn(volume, pressure, baseline, tanks),
        Commands::Batch { plan_path } => cmd_batch(&plan_path),
    }
}

/// "111 ft (33.8 m)"
fn format_depth(depth: i32, water: WaterType) -> String {
    let unit = water.depth_unit();
    let length = depth_length(depth, unit);
    match unit {
        DepthUnit::Feet => format!("{} ft ({:.1} m)", depth, length.get::<meter>()),
        DepthUnit::Meters => format!("{} m ({:.0} ft)", depth, length.get::<foot>()),
    }
}

fn cmd_ata_to_depth(ata: f64, water: WaterType) -> CliResult<()> {
    let depth = scuba_math::ata_to_depth(ata, water.depth_per_ata())?;
    println!("{ata} ATA = {}", format_depth(depth, water));
    Ok(())
}

fn cmd_depth_to_ata(depth: i32, water: WaterType) -> CliResult<()> {
    let ata = scuba_math::depth_to_ata(depth, water.depth_per_ata())?;
    let pressure = scuba_core::units::ata_pressure(ata);
    println!(
        "{} = {:.2} ATA ({:.3} bar)",
        format_depth(depth, water),
        ata,
        pressure.get::<bar>()
    );
    Ok(())
}

fn cmd_best_mix(depth: i32, ppo2: f64, water: WaterType) -> CliResult<()> {
    let fraction = scuba_math::best_o2_mix(depth, ppo2, water.depth_per_ata())?;
    println!(
        "Best mix at {} for ppO2 {}: {:.2} ({:.0}% O2)",
        format_depth(depth, water),
        ppo2,
        fraction,
        fraction * 100.0
    );
    if fraction > 1.0 {
        println!("  note: limit exceeds pure oxygen at this depth");
    }
    Ok(())
}

fn cmd_ead(o2: i32, depth: i32, water: WaterType) -> CliResult<()> {
    let ead = scuba_math::equivalent_air_depth(o2, depth, water.depth_per_ata())?;
    println!(
        "{}% O2 at {}: EAD {}",
        o2,
        format_depth(depth, water),
        format_depth(ead, water)
    );
    Ok(())
}

fn cmd_end(helium: i32, depth: i32, water: WaterType) -> CliResult<()> {
    let end = scuba_math::equivalent_nitrogen_depth(helium, depth, water.depth_per_ata())?;
    println!(
        "{}% He at {}: END {}",
        helium,
        format_depth(depth, water),
        format_depth(end, water)
    );
    Ok(())
}

fn cmd_mod(o2: i32, ppo2: f64, helium: Option<i32>, water: WaterType) -> CliResult<()> {
    let (label, depth) = match helium {
        Some(he) => (
            format!("{o2}/{he}"),
            scuba_math::max_operating_depth_trimix(o2, he)?,
        ),
        None => (
            format!("{o2}% O2"),
            scuba_math::max_operating_depth(ppo2, o2, water.depth_per_ata())?,
        ),
    };
    println!("{} MOD at ppO2 {}: {}", label, ppo2, format_depth(depth, water));
    Ok(())
}

fn cmd_round_thirds(pressure: i32) -> CliResult<()> {
    let rounded = scuba_math::round_pressure_for_thirds(pressure)?;
    println!("{} -> {} (thirds of {})", pressure, rounded, rounded / 3);
    Ok(())
}

fn cmd_turn(volume: f64, pressure: i32, baseline: f64, tanks: i32) -> CliResult<()> {
    let mut cmd = ThirdsCommand::configure(volume, pressure, baseline, tanks);
    let turn = cmd.execute()?;
    println!("Turn pressure: {turn}");
    Ok(())
}

fn cmd_batch(plan_path: &Path) -> CliResult<()> {
    let text = std::fs::read_to_string(plan_path).map_err(|source| CliError::Io {
        path: plan_path.to_path_buf(),
        source,
    })?;
    let plan = PendingCalculations::from_yaml_str(&text)?;

    if plan.is_empty() {
        println!("No calculations in plan");
        return Ok(());
    }

    let results = plan.run_all();
    let total = results.len();
    let mut failed = 0;
    for (label, result) in results {
        match result {
            Ok(outcome) => println!("✓ {label}: {outcome}"),
            Err(err) => {
                failed += 1;
                println!("✗ {label}: {err}");
            }
        }
    }

    if failed > 0 {
        return Err(CliError::BatchFailed { failed, total });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_depth_is_a_value_not_a_flag() {
        let cli = Cli::try_parse_from(["scuba-cli", "depth-to-ata", "-5"]).unwrap();
        assert!(matches!(cli.command, Commands::DepthToAta { depth: -5 }));

        let cli =
            Cli::try_parse_from(["scuba-cli", "--water", "msw", "ead", "32", "-10"]).unwrap();
        assert_eq!(cli.water, WaterType::MetersSaltwater);
        assert!(matches!(cli.command, Commands::Ead { o2: 32, depth: -10 }));

        let cli = Cli::try_parse_from(["scuba-cli", "round-thirds", "-3469"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::RoundThirds { pressure: -3469 }
        ));
    }

    #[test]
    fn negative_depth_runs_through_formulas() {
        assert!(cmd_depth_to_ata(-5, WaterType::FeetSaltwater).is_ok());
        assert!(cmd_ata_to_depth(0.5, WaterType::FeetSaltwater).is_ok());
    }

    #[test]
    fn ead_passes_unusual_fractions_through() {
        assert!(cmd_ead(0, 100, WaterType::FeetSaltwater).is_ok());
        assert!(cmd_ead(101, 100, WaterType::FeetSaltwater).is_ok());
    }

    #[test]
    fn mod_reports_domain_errors_not_validation_errors() {
        assert!(matches!(
            cmd_mod(0, 1.4, None, WaterType::FeetSaltwater),
            Err(CliError::Dive(DiveError::DivisionByZero { .. }))
        ));
        assert!(matches!(
            cmd_mod(18, 1.4, Some(45), WaterType::FeetSaltwater),
            Err(CliError::Dive(DiveError::NotImplemented { .. }))
        ));
        assert!(cmd_mod(32, 1.4, None, WaterType::FeetSaltwater).is_ok());
    }

    #[test]
    fn ead_reports_zero_divisor_only_where_one_exists() {
        // EAD never divides by depth per ATA, so unverified MFW still runs.
        assert!(cmd_ead(32, 30, WaterType::MetersFreshwater).is_ok());
        assert!(matches!(
            cmd_depth_to_ata(30, WaterType::MetersFreshwater),
            Err(CliError::Dive(DiveError::DivisionByZero { .. }))
        ));
    }
}
