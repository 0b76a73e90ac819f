use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use delivery_schedule::config::Config;
use delivery_schedule::constants::{
    INFO_DATE_UNCHANGED, INFO_NO_LEADS, INFO_SWEEP_RUNNING, SUCCESS_DATE_RECALCULATED, SUCCESS_LEAD_CREATED,
    SUCCESS_LEAD_UPDATED, SUCCESS_SWEEP_FINISHED,
};
use delivery_schedule::lead;
use delivery_schedule::logger;
use delivery_schedule::schedule::{canonical_label, DeliveryDay, RecurrencePlan};
use delivery_schedule::service::{DeliveryService, LeadChanges, NewLead, RecalcOutcome, SweepStatus};
use delivery_schedule::utils::datetime;
use uuid::Uuid;

/// delivery-schedule - next delivery dates for recurring leads
#[derive(Parser)]
#[command(name = "delivery-schedule", version)]
#[command(about = "Track recurring leads and their next delivery dates", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    InitConfig {
        /// Destination (defaults to the user config directory)
        path: Option<PathBuf>,
    },
    /// Create a lead
    Add {
        #[arg(long)]
        name: String,
        /// Recurrence plan (semanal, quincenal, mensual)
        #[arg(long)]
        plan: Option<String>,
        /// Preferred delivery day (lunes .. domingo)
        #[arg(long)]
        day: Option<String>,
    },
    /// Edit a lead
    Edit {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, conflicts_with = "clear_plan")]
        plan: Option<String>,
        #[arg(long, conflicts_with = "clear_day")]
        day: Option<String>,
        /// Unset the recurrence plan
        #[arg(long)]
        clear_plan: bool,
        /// Unset the preferred day
        #[arg(long)]
        clear_day: bool,
    },
    /// Recalculate one lead's next delivery date
    Recalc { id: Uuid },
    /// Roll forward every lead whose delivery is due today
    Sweep,
    /// List leads
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::InitConfig { path } = &cli.command {
        let path = match path {
            Some(path) => path.clone(),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    logger::init(&config.logging)?;

    let service = DeliveryService::from_config(&config).await?;
    let now = datetime::local_now();

    match cli.command {
        Commands::InitConfig { .. } => Ok(()),
        Commands::Add { name, plan, day } => {
            let outcome = service
                .create_lead(
                    NewLead {
                        name,
                        recurrence_plan: plan,
                        preferred_weekday: day,
                    },
                    now,
                )
                .await?;
            println!("{}: {}", SUCCESS_LEAD_CREATED, outcome.lead().uuid);
            print_outcome(&outcome);
            Ok(())
        }
        Commands::Edit {
            id,
            name,
            plan,
            day,
            clear_plan,
            clear_day,
        } => {
            let changes = LeadChanges {
                name,
                recurrence_plan: if clear_plan { Some(None) } else { plan.map(Some) },
                preferred_weekday: if clear_day { Some(None) } else { day.map(Some) },
            };
            let outcome = service.update_lead(&id, changes, now).await?;
            println!("{}: {}", SUCCESS_LEAD_UPDATED, id);
            print_outcome(&outcome);
            Ok(())
        }
        Commands::Recalc { id } => {
            let outcome = service.recalculate(&id, now).await?;
            print_outcome(&outcome);
            Ok(())
        }
        Commands::Sweep => {
            match service.sweep(now).await? {
                SweepStatus::Finished(report) => println!(
                    "{}: {} rescheduled, {} not due, {} misconfigured ({} examined)",
                    SUCCESS_SWEEP_FINISHED, report.rescheduled, report.not_due, report.misconfigured, report.examined
                ),
                SweepStatus::InProgress => println!("{}", INFO_SWEEP_RUNNING),
            }
            Ok(())
        }
        Commands::List { json } => {
            let leads = service.get_leads().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&leads)?);
            } else if leads.is_empty() {
                println!("{}", INFO_NO_LEADS);
            } else {
                for lead in &leads {
                    print_lead(lead, now.date());
                }
            }
            Ok(())
        }
    }
}

fn print_outcome(outcome: &RecalcOutcome) {
    match outcome {
        RecalcOutcome::Updated(lead) => println!(
            "{}: {}",
            SUCCESS_DATE_RECALCULATED,
            lead.next_delivery_date.as_deref().unwrap_or("-")
        ),
        RecalcOutcome::Unchanged(_, reason) => println!("{} ({:?})", INFO_DATE_UNCHANGED, reason),
        RecalcOutcome::NotTriggered(_) => {}
    }
}

fn print_lead(lead: &lead::Model, today: chrono::NaiveDate) {
    let next = match lead.next_delivery_date.as_deref() {
        Some(raw) => match datetime::parse_date(raw) {
            Ok(date) => format!("{} ({})", raw, datetime::format_human_date(date, today)),
            Err(_) => raw.to_string(),
        },
        None => "-".to_string(),
    };
    let plan = lead
        .recurrence_plan
        .as_deref()
        .map_or_else(|| "-".to_string(), canonical_label::<RecurrencePlan>);
    let day = lead
        .preferred_weekday
        .as_deref()
        .map_or_else(|| "-".to_string(), canonical_label::<DeliveryDay>);
    println!("{}  {:<24} {:<10} {:<10} {}", lead.uuid, lead.name, plan, day, next);
}
