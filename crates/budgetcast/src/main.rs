use budgetcast::data::settings_data::Settings;
use budgetcast::data::storage::DataDirectory;
use budgetcast::util::format::CurrencyPreset;
use budgetcast::{App, init_logging};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "budgetcast")]
#[command(about = "A terminal budget forecast: plan, track and re-project a balance")]
struct Args {
    /// Path to the data directory (default: ~/.budgetcast/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Balance on day 0
    #[arg(long)]
    start: Option<f64>,

    /// Balance to reach on the final day
    #[arg(long)]
    target: Option<f64>,

    /// Number of days after day 0
    #[arg(long)]
    days: Option<usize>,

    /// Calendar date of day 0 (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<String>,

    /// Currency display format
    #[arg(long, value_enum)]
    currency: Option<CurrencyPreset>,

    /// Write the effective settings to settings.yaml before starting
    #[arg(long)]
    init_settings: bool,
}

impl Args {
    /// Command line values win over the settings file
    fn apply_to(&self, settings: &mut Settings) -> color_eyre::Result<()> {
        if let Some(start) = self.start {
            settings.start_amount = start;
        }
        if let Some(target) = self.target {
            settings.target_amount = target;
        }
        if let Some(days) = self.days {
            settings.day_count = days;
        }
        if let Some(date) = &self.start_date {
            settings.start_date = Some(date.parse::<jiff::civil::Date>()?);
        }
        if let Some(currency) = self.currency {
            settings.currency = currency;
        }
        Ok(())
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(DataDirectory::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let storage = DataDirectory::new(data_dir);
    let mut settings = match storage.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "Falling back to default settings");
            Settings::default()
        }
    };
    args.apply_to(&mut settings)?;
    settings.forecast_config().validate()?;

    if args.init_settings {
        storage.save_settings(&settings)?;
        tracing::info!(path = %storage.settings_path().display(), "Settings written");
    }

    let mut app = App::new(&settings)?;

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
