#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use shiftplan::{
    io,
    model::{StaffId, StaffMember},
    notification::{prepare_submission_reminder, TextReminder},
    period::{period_for_date, periods_for_month, PeriodHalf},
    planner::{PlanOptions, Planner, RosterIssue},
    storage::{JsonStorage, Storage},
    SlotCatalog,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Minimalist roster planning CLI (no database)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Enable logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Planbook JSON file
    #[arg(long, global = true, default_value = "planbook.json")]
    planbook: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Import staff from a CSV (`staff_id,name[,active]`)
    ImportStaff {
        #[arg(long)]
        csv: String,
    },

    /// Import availability submissions from a CSV (`staff_id,date,preference`)
    ImportPrefs {
        #[arg(long)]
        csv: String,
    },

    /// Add a single staff member
    AddStaff {
        #[arg(long)]
        name: String,
        /// Generated when omitted
        #[arg(long)]
        id: Option<String>,
    },

    /// Plan the roster for an inclusive date range
    Plan {
        /// YYYY-MM-DD
        #[arg(long)]
        start: String,
        /// YYYY-MM-DD
        #[arg(long)]
        end: String,
        /// Slot catalog JSON (built-in standard catalog when omitted)
        #[arg(long)]
        catalog: Option<String>,
        #[arg(long, default_value_t = 366)]
        max_days: i64,
    },

    /// List the planned roster and optionally export it
    List {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Check the planned roster for coverage gaps and double bookings
    Check {
        #[arg(long)]
        catalog: Option<String>,
        /// CSV issue report (optional)
        #[arg(long)]
        report: Option<String>,
    },

    /// Print the two scheduling periods of a month
    Periods {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
    },

    /// Generate a submission reminder for a staff member
    Remind {
        #[arg(long)]
        staff: String,
        /// Output file (plain text)
        #[arg(long)]
        out: String,
        /// Day inside the period to remind about (default: today)
        #[arg(long)]
        date: Option<String>,
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

    let storage = JsonStorage::open(&cli.planbook)?;
    let mut planner = match storage.load() {
        Ok(book) => {
            let mut p = Planner::new();
            *p.planbook_mut() = book;
            p
        }
        Err(_) => Planner::new(),
    };

    let code = match cli.cmd {
        Commands::ImportStaff { csv } => {
            let staff = io::import_staff_csv(csv)?;
            planner.add_staff(staff);
            storage.save(planner.planbook())?;
            0
        }
        Commands::ImportPrefs { csv } => {
            let records = io::import_preferences_csv(csv)?;
            planner.record_preferences(records);
            storage.save(planner.planbook())?;
            0
        }
        Commands::AddStaff { name, id } => {
            let member = match id {
                Some(id) => StaffMember::new(id, name),
                None => StaffMember {
                    id: StaffId::random(),
                    name,
                    active: true,
                },
            };
            println!("Added {} ({})", member.name, member.id.as_str());
            planner.add_staff(vec![member]);
            storage.save(planner.planbook())?;
            0
        }
        Commands::Plan {
            start,
            end,
            catalog,
            max_days,
        } => {
            let start: NaiveDate = start.parse()?;
            let end: NaiveDate = end.parse()?;
            let catalog = load_catalog(catalog.as_deref())?;
            let opts = PlanOptions {
                max_period_days: max_days,
            };
            let roster = planner.plan(start, end, &catalog, opts)?;
            let (days, total) = (roster.days.len(), roster.assignment_count());
            println!("Planned {days} day(s), {total} assignment(s)");
            storage.save(planner.planbook())?;
            0
        }
        Commands::List { out_json, out_csv } => {
            let book = planner.planbook();
            let Some(roster) = &book.roster else {
                bail!("no roster planned yet");
            };
            if let Some(path) = out_json {
                io::export_roster_json(path, roster)?;
            }
            if let Some(path) = out_csv {
                io::export_roster_csv(path, roster, &book.staff)?;
            }
            // compact printout
            for day in &roster.days {
                for a in &day.assignments {
                    let name = book
                        .find_staff(&a.staff)
                        .map(|m| m.name.as_str())
                        .unwrap_or("-");
                    println!("{} | {} | {}", day.date, a.slot.as_str(), name);
                }
            }
            0
        }
        Commands::Check { catalog, report } => {
            if planner.planbook().roster.is_none() {
                bail!("no roster planned yet");
            }
            let catalog = load_catalog(catalog.as_deref())?;
            let issues = planner.detect_issues(&catalog);
            if issues.is_empty() {
                println!("OK: no issues");
                0
            } else {
                eprintln!("Found {} issue(s)", issues.len());
                if let Some(path) = report {
                    let mut w = csv::Writer::from_path(path)?;
                    w.write_record(["date", "kind", "slot", "staff", "assigned", "target"])?;
                    for issue in &issues {
                        match issue {
                            RosterIssue::UnderCoverage {
                                date,
                                slot,
                                assigned,
                                target,
                            } => w.write_record([
                                date.to_string().as_str(),
                                "under_coverage",
                                slot.as_str(),
                                "",
                                assigned.to_string().as_str(),
                                target.to_string().as_str(),
                            ])?,
                            RosterIssue::DoubleBooking { date, staff } => w.write_record([
                                date.to_string().as_str(),
                                "double_booking",
                                "",
                                staff.as_str(),
                                "",
                                "",
                            ])?,
                            RosterIssue::UnknownSlot { date, slot } => w.write_record([
                                date.to_string().as_str(),
                                "unknown_slot",
                                slot.as_str(),
                                "",
                                "",
                                "",
                            ])?,
                        }
                    }
                    w.flush()?;
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Periods { year, month } => {
            for p in periods_for_month(year, month)? {
                let half = match p.half {
                    PeriodHalf::First => 1,
                    PeriodHalf::Second => 2,
                };
                println!(
                    "{}-{:02} P{} | {} → {} | submit by {}",
                    p.year, p.month, half, p.start, p.end, p.submission_deadline
                );
            }
            0
        }
        Commands::Remind { staff, out, date } => {
            let date: NaiveDate = match date {
                Some(d) => d.parse()?,
                None => chrono::Utc::now().date_naive(),
            };
            let period = period_for_date(date)?;
            let renderer = TextReminder;
            let reminder = prepare_submission_reminder(
                planner.planbook(),
                &StaffId::new(&staff),
                &period,
                &renderer,
            )?;
            std::fs::write(&out, reminder.content)?;
            println!(
                "Reminder generated for {} (submission due {})",
                reminder.staff_name, reminder.deadline
            );
            0
        }
    };

    std::process::exit(code);
}

fn load_catalog(path: Option<&str>) -> Result<SlotCatalog> {
    match path {
        Some(p) => shiftplan::load_catalog_from_file(p),
        None => Ok(SlotCatalog::standard()),
    }
}
