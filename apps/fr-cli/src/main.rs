use clap::{Parser, Subcommand};
use fr_app::report::{
    binary_report, compound_listing, constants_listing, saturation_line, shortcut_report,
    vapor_pressure_line,
};
use fr_app::{AppError, AppResult, BinaryOverrides, ShortcutOverrides, case_service, query, run_service};
use fr_props::PropertyTable;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fr-cli")]
#[command(about = "Fractionate CLI - binary McCabe-Thiele and multicomponent FUG(K) column design", long_about = None)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List compounds in the property table
    Compounds {
        /// Substring matched against key, name, formula and aliases
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show a compound's correlation constants
    Constants {
        compound: String,
    },
    /// Vapor pressure at a temperature
    VaporPressure {
        compound: String,
        /// Temperature in K
        temperature_k: f64,
    },
    /// Saturation temperature at a pressure
    Tsat {
        compound: String,
        /// Pressure in Pa
        pressure_pa: f64,
    },
    /// Load and validate a case file
    Validate {
        /// Path to the case file (.yaml, .yml or .json)
        case_path: PathBuf,
        /// Print the case summary as YAML
        #[arg(long)]
        yaml: bool,
    },
    /// Rewrite a case file in the format given by the output extension
    Convert {
        case_path: PathBuf,
        output: PathBuf,
    },
    /// McCabe-Thiele design of a binary case
    Binary {
        case_path: PathBuf,
        /// Reflux ratio, replacing the case's reflux setting
        #[arg(long)]
        reflux_ratio: Option<f64>,
        /// Write the diagram series as CSV
        #[arg(long)]
        diagram_csv: Option<PathBuf>,
        /// Print the design as YAML instead of the text report
        #[arg(long)]
        yaml: bool,
    },
    /// FUG(K) shortcut design of a multicomponent case
    Shortcut {
        case_path: PathBuf,
        /// Multiple of the minimum reflux, 1.1 to 1.5
        #[arg(long)]
        reflux_factor: Option<f64>,
        /// Tray efficiency, fraction or percent
        #[arg(long)]
        efficiency: Option<f64>,
        /// Print the report as YAML instead of text
        #[arg(long)]
        yaml: bool,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let table = PropertyTable::builtin();
    match cli.command {
        Commands::Compounds { query } => cmd_compounds(&table, query.as_deref()),
        Commands::Constants { compound } => cmd_constants(&table, &compound),
        Commands::VaporPressure {
            compound,
            temperature_k,
        } => cmd_vapor_pressure(&table, &compound, temperature_k),
        Commands::Tsat {
            compound,
            pressure_pa,
        } => cmd_tsat(&table, &compound, pressure_pa),
        Commands::Validate { case_path, yaml } => cmd_validate(&case_path, yaml),
        Commands::Convert { case_path, output } => cmd_convert(&case_path, &output),
        Commands::Binary {
            case_path,
            reflux_ratio,
            diagram_csv,
            yaml,
        } => cmd_binary(
            &table,
            &case_path,
            BinaryOverrides { reflux_ratio },
            diagram_csv.as_deref(),
            yaml,
        ),
        Commands::Shortcut {
            case_path,
            reflux_factor,
            efficiency,
            yaml,
        } => cmd_shortcut(
            &table,
            &case_path,
            ShortcutOverrides {
                reflux_factor,
                tray_efficiency: efficiency,
            },
            yaml,
        ),
    }
}

fn cmd_compounds(table: &PropertyTable, q: Option<&str>) -> AppResult<()> {
    let compounds = query::list_compounds(table, q);
    if compounds.is_empty() {
        println!("No compounds match");
    } else {
        print!("{}", compound_listing(&compounds));
    }
    Ok(())
}

fn cmd_constants(table: &PropertyTable, name: &str) -> AppResult<()> {
    print!("{}", constants_listing(query::compound(table, name)?));
    Ok(())
}

fn cmd_vapor_pressure(table: &PropertyTable, name: &str, temperature_k: f64) -> AppResult<()> {
    let result = query::vapor_pressure(table, name, temperature_k)?;
    println!("{}", vapor_pressure_line(&result));
    Ok(())
}

fn cmd_tsat(table: &PropertyTable, name: &str, pressure_pa: f64) -> AppResult<()> {
    let result = query::saturation_temperature(table, name, pressure_pa)?;
    println!("{}", saturation_line(&result));
    Ok(())
}

fn cmd_validate(case_path: &Path, yaml: bool) -> AppResult<()> {
    tracing::info!(path = %case_path.display(), "validating case");
    let case = case_service::load_case(case_path)?;
    let summary = case_service::summarize(&case);
    if yaml {
        return print_yaml(&summary);
    }
    println!("Validating case: {}", case_path.display());
    println!("✓ Case is valid");
    println!(
        "  {} ({} case, version {}): {} components, {:.3} kg/h feed",
        summary.name,
        summary.kind,
        summary.version,
        summary.components.len(),
        summary.total_feed_kg_per_h
    );
    println!("  fed: {}", case_service::fed_components(&case.case).join(", "));
    Ok(())
}

fn cmd_convert(case_path: &Path, output: &Path) -> AppResult<()> {
    let case = case_service::load_case(case_path)?;
    case_service::save_case(output, &case)?;
    tracing::info!(from = %case_path.display(), to = %output.display(), "case converted");
    println!("✓ Case written to {}", output.display());
    Ok(())
}

fn print_yaml<T: Serialize>(value: &T) -> AppResult<()> {
    let text = serde_yaml::to_string(value).map_err(|e| AppError::Serialization(e.to_string()))?;
    print!("{}", text);
    Ok(())
}

fn cmd_binary(
    table: &PropertyTable,
    case_path: &Path,
    overrides: BinaryOverrides,
    diagram_csv: Option<&Path>,
    yaml: bool,
) -> AppResult<()> {
    let case = case_service::load_case(case_path)?;
    tracing::info!(case = %case.name, ?overrides, "running binary design");
    let run = run_service::run_binary(&case, overrides, table)?;

    if yaml {
        print_yaml(&run.design)?;
    } else {
        print!("{}", binary_report(&run));
    }

    if let Some(path) = diagram_csv {
        std::fs::write(path, run.diagram.to_csv()).map_err(|source| AppError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), points = run.diagram.staircase.len(), "diagram csv written");
        eprintln!("✓ Diagram written to {}", path.display());
    }
    Ok(())
}

fn cmd_shortcut(
    table: &PropertyTable,
    case_path: &Path,
    overrides: ShortcutOverrides,
    yaml: bool,
) -> AppResult<()> {
    let case = case_service::load_case(case_path)?;
    tracing::info!(case = %case.name, ?overrides, "running shortcut design");
    let report = run_service::run_shortcut(&case, overrides, table)?;

    if yaml {
        print_yaml(&report)?;
    } else {
        print!("{}", shortcut_report(&case.name, &report, table));
    }
    Ok(())
}
