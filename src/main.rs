//! Command-line front end for Reactor Explorer.
//!
//! Every command is a short sequence of application events run through
//! [`dispatch`]; results are printed from the resulting state.
//!
//! # Commands
//!
//! - `login`: submit credentials (flags or `REACTOR_*` environment variables)
//! - `logout`: clear the session store
//! - `companies`: list companies
//! - `properties <COMPANY>`: list a company's properties
//! - `details --company C --property P`: fetch, search and render a property

use clap::{Parser, Subcommand};
use reactor_explorer::app::selection::resolve;
use reactor_explorer::app::{dispatch, AppState, StatusKind};
use reactor_explorer::domain::{Choice, Credentials};
use reactor_explorer::observability::init_tracing;
use reactor_explorer::{connector, initialize, Config, Event, ExplorerError, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Fallback terminal width when `COLUMNS` is unset.
const DEFAULT_COLUMNS: usize = 100;

#[derive(Debug, Parser)]
#[command(name = "reactor-explorer", version, about = "Explore tag-management property configuration")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for the session store and trace file.
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[arg(long, global = true)]
    api_base_url: Option<String>,

    /// Built-in theme: catppuccin-mocha, catppuccin-latte or plain.
    #[arg(long, global = true)]
    theme: Option<String>,

    #[arg(long, global = true)]
    trace_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Save credentials and list the companies they can see.
    Login {
        #[arg(long, env = "REACTOR_ACCESS_TOKEN", hide_env_values = true, default_value = "")]
        access_token: String,
        #[arg(long, env = "REACTOR_ORG_ID", default_value = "")]
        org_id: String,
        #[arg(long, env = "REACTOR_CLIENT_ID", default_value = "")]
        client_id: String,
        #[arg(long, env = "REACTOR_CLIENT_SECRET", hide_env_values = true, default_value = "")]
        client_secret: String,
    },

    /// Forget stored credentials.
    Logout,

    /// List companies.
    Companies,

    /// List the properties of a company (id or name).
    Properties { company: String },

    /// Fetch and render a property's rules, data elements and extensions.
    Details {
        /// Company id or name.
        #[arg(long)]
        company: String,

        /// Property id or name.
        #[arg(long)]
        property: String,

        /// Only rules whose name contains this text.
        #[arg(long, default_value = "")]
        query: String,

        #[arg(long)]
        include_unpublished: bool,

        /// Add an attribute table to every item.
        #[arg(long)]
        show_attributes: bool,

        /// Keyword to search for in the rendered results.
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        expand_all: bool,
    },
}

impl Cli {
    /// File configuration with flags applied on top.
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(url) = &self.api_base_url {
            config.api_base_url.clone_from(url);
        }
        if self.data_dir.is_some() {
            config.data_dir.clone_from(&self.data_dir);
        }
        if self.theme.is_some() {
            config.theme.clone_from(&self.theme);
            config.theme_file = None;
        }
        if self.trace_level.is_some() {
            config.trace_level.clone_from(&self.trace_level);
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config);

    match run(cli.command, &config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &Config) -> Result<ExitCode> {
    let mut state = initialize(config)?;
    let connect = connector(config);
    let mut out = std::io::stdout().lock();

    match command {
        Command::Login {
            access_token,
            org_id,
            client_id,
            client_secret,
        } => {
            let form = Credentials::from_form(&access_token, &org_id, &client_id, &client_secret);
            dispatch(&mut state, Event::SubmitCredentials(form), &connect).await?;
            print_status(&state);
            if status_failed(&state) {
                return Ok(ExitCode::FAILURE);
            }
            print_choices(&mut out, "Companies", &state.companies)?;
        }
        Command::Logout => {
            dispatch(&mut state, Event::Logout, &connect).await?;
            print_status(&state);
        }
        Command::Companies => {
            if !start(&mut state, &connect).await? {
                return Ok(ExitCode::FAILURE);
            }
            print_choices(&mut out, "Companies", &state.companies)?;
        }
        Command::Properties { company } => {
            if !start(&mut state, &connect).await? {
                return Ok(ExitCode::FAILURE);
            }
            let company = pick(&state.companies, &company, "company")?;
            dispatch(&mut state, Event::SelectCompany(company), &connect).await?;
            if status_failed(&state) {
                print_status(&state);
                return Ok(ExitCode::FAILURE);
            }
            print_choices(&mut out, "Properties", &state.properties)?;
        }
        Command::Details {
            company,
            property,
            query,
            include_unpublished,
            show_attributes,
            search,
            expand_all,
        } => {
            if !start(&mut state, &connect).await? {
                return Ok(ExitCode::FAILURE);
            }
            let company = pick(&state.companies, &company, "company")?;
            dispatch(&mut state, Event::SelectCompany(company), &connect).await?;
            if status_failed(&state) {
                print_status(&state);
                return Ok(ExitCode::FAILURE);
            }
            let property = pick(&state.properties, &property, "property")?;

            let mut events = vec![
                Event::SelectProperty(property),
                Event::SetQuery(query),
                Event::SetIncludeUnpublished(include_unpublished),
                Event::SetShowAttributes(show_attributes),
                Event::GetDetails,
            ];
            if let Some(keyword) = search {
                events.push(Event::Search(keyword));
            }
            if expand_all {
                events.push(Event::ToggleAll);
            }
            for event in events {
                dispatch(&mut state, event, &connect).await?;
            }

            reactor_explorer::ui::render(&state, &mut out, terminal_columns())?;
            if state.alert.is_some() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Loads stored credentials and lists companies; `false` when that failed.
async fn start<F, C>(state: &mut AppState, connect: &C) -> Result<bool>
where
    F: reactor_explorer::api::ResourceFetcher,
    C: Fn(&Credentials) -> Result<F>,
{
    dispatch(state, Event::Start, connect).await?;
    if !state.credentials.is_complete() {
        eprintln!("No stored credentials. Run `reactor-explorer login` first.");
        return Ok(false);
    }
    if status_failed(state) {
        print_status(state);
        return Ok(false);
    }
    Ok(true)
}

fn pick(choices: &[Choice], selector: &str, what: &str) -> Result<String> {
    resolve(choices, selector)
        .map(|choice| choice.id.clone())
        .ok_or_else(|| ExplorerError::Validation(format!("no {what} matches '{selector}'")))
}

fn status_failed(state: &AppState) -> bool {
    state.status.as_ref().is_some_and(|status| status.kind == StatusKind::Error)
}

fn print_status(state: &AppState) {
    if let Some(status) = &state.status {
        eprintln!("{}", status.text);
    }
}

fn print_choices<W: Write>(out: &mut W, title: &str, choices: &[Choice]) -> Result<()> {
    writeln!(out, "{title} ({})", choices.len())?;
    let width = choices.iter().map(|c| c.id.chars().count()).max().unwrap_or(0);
    for choice in choices {
        writeln!(out, "  {:<width$}  {}", choice.id, choice.name)?;
    }
    Ok(())
}

fn terminal_columns() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse().ok())
        .filter(|&cols| cols > 0)
        .unwrap_or(DEFAULT_COLUMNS)
}
