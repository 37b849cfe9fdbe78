//! Command-line front end
//!
//! Collects the household from flags, falling back to interactive prompts
//! for anything missing, and prints the assessment.

pub mod prompt;
pub mod render;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use crate::calculator::{Assessment, Calculator};
use crate::config::CalculatorConfig;
use crate::error::CalculatorError;
use crate::loader::{BasketSource, FileSource, HttpSource};
use crate::models::{Household, Perception, Person, Region, region_for_province};

pub use prompt::Prompter;

/// Estimate whether a household is below the INDEC poverty and destitution lines.
#[derive(Parser, Debug)]
#[command(name = "canasta", version, about)]
pub struct Cli {
    /// Region code (1, 40-44) or name
    #[arg(long, conflicts_with = "province")]
    pub region: Option<Region>,

    /// Province, resolved to its region
    #[arg(long)]
    pub province: Option<String>,

    /// Household member as AGE:SEX, respondent first (repeatable)
    #[arg(long = "member", value_name = "AGE:SEX")]
    pub members: Vec<Person>,

    /// Total monthly household income in pesos, e.g. 400000 or 400.000,50
    #[arg(long, value_parser = prompt::parse_income)]
    pub income: Option<f64>,

    /// Your own guess: below, above or unsure
    #[arg(long)]
    pub perception: Option<Perception>,

    /// Read the basket spreadsheet from a local file
    #[arg(long, conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Download the basket spreadsheet from this URL
    #[arg(long)]
    pub url: Option<String>,

    /// Download timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Retries after a failed download
    #[arg(long, default_value_t = 2)]
    pub retries: u32,

    /// Print the assessment as JSON
    #[arg(long)]
    pub json: bool,

    /// Fail instead of prompting for missing values
    #[arg(long)]
    pub no_input: bool,
}

impl Cli {
    /// Calculator configuration from the flags
    #[must_use]
    pub fn config(&self) -> CalculatorConfig {
        let config = CalculatorConfig::default()
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_max_retries(self.retries);
        match &self.url {
            Some(url) => config.with_source_url(url),
            None => config,
        }
    }

    /// Region from `--region` or `--province`
    pub fn region(&self) -> Result<Option<Region>, CalculatorError> {
        match (&self.region, &self.province) {
            (Some(region), _) => Ok(Some(*region)),
            (None, Some(province)) => region_for_province(province).map(Some),
            (None, None) => Ok(None),
        }
    }

    /// Household from `--member` flags
    pub fn household(&self) -> Option<Household> {
        Household::from_members(self.members.iter().copied()).ok()
    }
}

/// Answers gathered from flags and prompts
struct Inputs {
    region: Region,
    household: Household,
    income: f64,
    perception: Perception,
}

fn missing(what: &str) -> anyhow::Error {
    anyhow::anyhow!("{what} not given and --no-input is set")
}

fn gather_inputs<R: BufRead, W: Write>(
    cli: &Cli,
    period_label: &str,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<Inputs> {
    let perception = match cli.perception {
        Some(perception) => perception,
        None if cli.no_input => Perception::Unsure,
        None => prompter.ask_perception()?,
    };

    let household = match cli.household() {
        Some(household) => household,
        None if cli.no_input => return Err(missing("--member")),
        None => prompter.ask_household()?,
    };

    let region = match cli.region()? {
        Some(region) => region,
        None if cli.no_input => return Err(missing("--region or --province")),
        None => prompter.ask_region()?,
    };

    let income = match cli.income {
        Some(income) => income,
        None if cli.no_input => return Err(missing("--income")),
        None => prompter.ask_income(period_label)?,
    };

    Ok(Inputs {
        region,
        household,
        income,
        perception,
    })
}

async fn load_with_spinner<S: BasketSource>(
    source: &S,
    config: &CalculatorConfig,
) -> anyhow::Result<Calculator> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Descargando datos desde {}...", source.describe()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = Calculator::load(source, config).await;
    spinner.finish_and_clear();

    result.with_context(|| {
        "No se pudieron obtener los valores de la canasta básica. Probá nuevamente más tarde."
    })
}

/// Assess the household described by `cli`, asking `prompter` for anything missing
pub fn assess_with<R: BufRead, W: Write>(
    cli: &Cli,
    calculator: &Calculator,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<Assessment> {
    let inputs = gather_inputs(cli, &calculator.period().label(), prompter)?;
    let assessment = calculator.assess(
        inputs.region,
        &inputs.household,
        inputs.income,
        inputs.perception,
    )?;
    Ok(assessment)
}

/// Run the command line front end
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config();
    info!("{config}");

    let calculator = match &cli.file {
        Some(path) => load_with_spinner(&FileSource::new(path), &config).await?,
        None => load_with_spinner(&HttpSource::new(&config)?, &config).await?,
    };

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let assessment = assess_with(&cli, &calculator, &mut prompter)?;

    let output = if cli.json {
        render::render_json(&assessment)?
    } else {
        render::render_text(&assessment)
    };
    println!("{output}");

    Ok(())
}
