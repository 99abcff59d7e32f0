use clap::{Args, Parser, Subcommand};
use dinehub::config::ConfigError;
use dinehub::deletion::DeletionError;
use dinehub::dialog::{AssumeYes, Dialog, TerminalDialog};
use dinehub::forms::FormError;
use dinehub::render::render_table;
use dinehub::{
    ApiError, ClientConfig, DeleteOutcome, Field, HttpRestaurantApi, LoadOutcome, RestaurantScreen, Session,
    WriteOutcome,
};
use tracing::{Level, warn};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing session token; pass --token or set DINEHUB_TOKEN")]
    MissingToken,
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("api client setup failed: {0}")]
    Api(#[from] ApiError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Deletion(#[from] DeletionError),
    #[error("could not load restaurants; see log output")]
    LoadFailed,
    #[error("{0} failed; see messages above")]
    WriteFailed(&'static str),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "dinehub", about = "Manage Dine Hub restaurant records")]
struct Cli {
    /// API origin; overrides `DINEHUB_API_URL`.
    #[arg(long)]
    api_url: Option<String>,

    #[arg(long, env = "DINEHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every restaurant.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Add a restaurant.
    Create(CreateArgs),
    /// Change an existing restaurant.
    Edit(EditArgs),
    /// Remove a restaurant after confirmation.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct CreateArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    address: String,
    #[arg(long)]
    telephone: String,
}

#[derive(Args, Debug)]
struct EditArgs {
    id: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    telephone: Option<String>,
}

type Screen = RestaurantScreen<HttpRestaurantApi, Box<dyn Dialog>>;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!(error = %e, ".env file ignored");
        }
    }

    let mut config = ClientConfig::from_env()?;
    if let Some(url) = &cli.api_url {
        config = config.with_api_url(url)?;
    }
    let api = HttpRestaurantApi::new(&config)?;

    let dialog: Box<dyn Dialog> = match &cli.command {
        Command::Delete { yes: true, .. } => Box::new(AssumeYes::new(TerminalDialog::stdio())),
        _ => Box::new(TerminalDialog::stdio()),
    };
    let mut screen = RestaurantScreen::new(Session::from_token(cli.token), api, dialog);

    match cli.command {
        Command::List { json } => run_list(&mut screen, json).await,
        Command::Create(args) => run_create(&mut screen, args).await,
        Command::Edit(args) => run_edit(&mut screen, args).await,
        Command::Delete { id, .. } => run_delete(&mut screen, &id).await,
    }
}

/// `-v` flags win over `DINEHUB_LOG`; warnings only by default.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => std::env::var("DINEHUB_LOG").map_or(Level::WARN, |raw| raw.parse().unwrap_or(Level::WARN)),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

async fn mount(screen: &mut Screen) -> Result<(), CliError> {
    match screen.mount().await {
        LoadOutcome::Loaded(_) | LoadOutcome::AlreadyMounted => Ok(()),
        LoadOutcome::Skipped => Err(CliError::MissingToken),
        LoadOutcome::Failed => Err(CliError::LoadFailed),
    }
}

async fn run_list(screen: &mut Screen, json: bool) -> Result<(), CliError> {
    mount(screen).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(screen.restaurants())?);
    } else {
        print!("{}", render_table(screen.restaurants()));
    }
    Ok(())
}

async fn run_create(screen: &mut Screen, args: CreateArgs) -> Result<(), CliError> {
    // The create form does not depend on the list; a failed load only
    // means the table printed afterwards may be stale.
    match mount(screen).await {
        Err(CliError::LoadFailed) => {}
        other => other?,
    }

    let form = screen.create_form_mut();
    form.set(Field::Name, args.name);
    form.set(Field::Address, args.address);
    form.set(Field::Telephone, args.telephone);

    let outcome = screen_outcome(screen.submit_create().await)?;
    write_result(screen, "create", outcome)
}

async fn run_edit(screen: &mut Screen, args: EditArgs) -> Result<(), CliError> {
    mount(screen).await?;
    screen.select_for_edit_by_id(&args.id)?;

    let form = screen.edit_form_mut();
    for (field, value) in [
        (Field::Name, args.name),
        (Field::Address, args.address),
        (Field::Telephone, args.telephone),
    ] {
        if let Some(value) = value {
            form.set(field, value);
        }
    }

    let outcome = screen_outcome(screen.submit_edit().await?)?;
    write_result(screen, "update", outcome)
}

async fn run_delete(screen: &mut Screen, id: &str) -> Result<(), CliError> {
    match mount(screen).await {
        Err(CliError::LoadFailed) => {}
        other => other?,
    }

    match screen.delete(id).await? {
        DeleteOutcome::Deleted | DeleteOutcome::Cancelled => {
            print!("{}", render_table(screen.restaurants()));
            Ok(())
        }
        DeleteOutcome::Failed => Err(CliError::WriteFailed("delete")),
        DeleteOutcome::Skipped => Err(CliError::MissingToken),
    }
}

fn screen_outcome(outcome: WriteOutcome) -> Result<WriteOutcome, CliError> {
    match outcome {
        WriteOutcome::Skipped => Err(CliError::MissingToken),
        other => Ok(other),
    }
}

fn write_result(screen: &Screen, action: &'static str, outcome: WriteOutcome) -> Result<(), CliError> {
    if outcome == WriteOutcome::Failed {
        return Err(CliError::WriteFailed(action));
    }
    print!("{}", render_table(screen.restaurants()));
    Ok(())
}
