#![forbid(unsafe_code)]
use anyhow::Result;
use brigade::{
    coverage::{validate_daily_coverage, CoverageStatus},
    io,
    scheduler::{generate_daily_schedule, generate_weekly_schedule},
    settings::SettingsStore,
    storage::{JsonStorage, Storage},
};
use chrono::{Duration, NaiveDate};
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planification (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de roster (employés + services)
    #[arg(long, global = true, default_value = "roster.json")]
    roster: String,

    /// Fichier JSON de paramétrage (horaires + exigences)
    #[arg(long, global = true, default_value = "settings.json")]
    settings: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Écrire le paramétrage de repli dans le fichier de settings
    InitSettings,

    /// Importer des employés depuis un CSV
    ImportEmployees {
        #[arg(long)]
        csv: String,
    },

    /// Générer le planning d'un jour (ou d'une semaine avec --week)
    Generate {
        /// Date ISO "YYYY-MM-DD"
        #[arg(long)]
        date: String,
        /// Génère 7 jours consécutifs à partir de --date
        #[arg(long)]
        week: bool,
    },

    /// Évaluer la couverture d'une journée (code retour 1 si critical)
    Coverage {
        /// Date ISO "YYYY-MM-DD"
        #[arg(long)]
        date: String,
    },

    /// Lister et optionnellement exporter
    List {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.roster)?;
    let settings_store = SettingsStore::new(&cli.settings);
    let mut roster = storage.load_or_empty()?;

    let code = match cli.cmd {
        Commands::InitSettings => {
            let settings = brigade::Settings::default_single_location();
            settings_store.save(&settings)?;
            println!("settings written to {}", cli.settings);
            0
        }
        Commands::ImportEmployees { csv } => {
            let employees = io::import_employees_csv(csv)?;
            println!("{} employee(s) imported", employees.len());
            roster.employees.extend(employees);
            storage.save(&roster)?;
            0
        }
        Commands::Generate { date, week } => {
            let settings = settings_store.load_or_default()?;
            settings.validate()?;
            let start: NaiveDate = date.parse()?;
            let days: i64 = if week { 7 } else { 1 };
            let end = start + Duration::days(days - 1);

            // régénération = suppression du lot auto-généré précédent,
            // les services saisis à la main sont conservés
            roster
                .shifts
                .retain(|s| !(s.is_auto_generated() && s.date >= start && s.date <= end));

            let generated = if week {
                generate_weekly_schedule(start, &roster.employees, &settings)
            } else {
                generate_daily_schedule(start, &roster.employees, &settings)
            };
            println!("{} shift(s) generated", generated.len());
            roster.shifts.extend(generated);
            storage.save(&roster)?;
            0
        }
        Commands::Coverage { date } => {
            let settings = settings_store.load_or_default()?;
            settings.validate()?;
            let date: NaiveDate = date.parse()?;
            let day_shifts = roster.shifts_on(date);
            let report = validate_daily_coverage(date, &day_shifts, &settings);

            println!("status: {}", report.status);
            for issue in &report.issues {
                println!("- [{:?}] {}", issue.kind, issue.message);
            }
            for (position, stats) in &report.stats {
                println!("{position}: {} shift(s), {}h", stats.count, stats.hours);
            }
            i32::from(report.status == CoverageStatus::Critical)
        }
        Commands::List { out_json, out_csv } => {
            if let Some(path) = out_json {
                io::export_roster_json(path, &roster)?;
            }
            if let Some(path) = out_csv {
                io::export_shifts_csv(path, &roster)?;
            }
            // impression compacte
            for s in &roster.shifts {
                println!(
                    "{} | {} {} → {} | {} ({})",
                    s.id.as_str(),
                    s.date,
                    s.start_time,
                    s.end_time,
                    s.employee_name,
                    s.position
                );
            }
            0
        }
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
