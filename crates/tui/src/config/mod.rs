use clap::Parser;
use engine::{Category, Currency, FinanceItem, Ledger, MoneyCents, SWIPE_THRESHOLD, Session};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/saldo.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Raw salary, coerced like the salary form (bad input becomes 0).
    pub salary: String,
    pub currency: String,
    /// Drag distance, in terminal columns, that turns the carousel page.
    pub swipe_threshold: f64,
    pub log_file: Option<String>,
    pub log_level: String,
    /// Replaces the sample items when present.
    pub items: Option<Vec<SeedItem>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            salary: "5000".to_string(),
            currency: Currency::default().code().to_string(),
            swipe_threshold: SWIPE_THRESHOLD,
            log_file: None,
            log_level: "info".to_string(),
            items: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedItem {
    pub title: String,
    pub amount: String,
    pub category: Category,
    #[serde(default)]
    pub description: Option<String>,
}

impl AppConfig {
    pub fn currency(&self) -> Result<Currency> {
        Ok(Currency::try_from(self.currency.as_str())?)
    }

    /// Builds the session the view starts from.
    pub fn session(&self) -> Result<Session> {
        let mut builder = Ledger::builder().salary(engine::coerce_salary(&self.salary));
        if let Some(items) = &self.items {
            let items = items
                .iter()
                .map(|seed| -> std::result::Result<FinanceItem, engine::EngineError> {
                    FinanceItem::new(
                        seed.title.clone(),
                        MoneyCents::parse_non_negative(&seed.amount)?,
                        seed.category,
                        seed.description.clone(),
                    )
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;
            builder = builder.items(items);
        }
        Ok(Session::new(builder.build()?).with_swipe_threshold(self.swipe_threshold))
    }
}

#[derive(Debug, Parser)]
#[command(name = "saldo", disable_version_flag = true)]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the starting salary.
    #[arg(long)]
    salary: Option<String>,
    /// Override the display currency (BRL, EUR, USD).
    #[arg(long)]
    currency: Option<String>,
    /// Override the swipe threshold, in columns.
    #[arg(long)]
    swipe_threshold: Option<f64>,
    /// Write logs to this file (nothing is logged otherwise).
    #[arg(long)]
    log_file: Option<String>,
    /// Override the log level (error, warn, info, debug, trace).
    #[arg(long)]
    log_level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    load_from(Args::parse())
}

pub fn load_from(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("SALDO"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(salary) = args.salary {
        settings.salary = salary;
    }
    if let Some(currency) = args.currency {
        settings.currency = currency;
    }
    if let Some(swipe_threshold) = args.swipe_threshold {
        settings.swipe_threshold = swipe_threshold;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}
