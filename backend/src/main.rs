use anyhow::{Context, Result};
use catalog::api::ProblemDetails;
use catalog::application::{
    CategoryOutput, CreateCategory, CreateCategoryCommand, DeleteCategory, DeleteCategoryCommand,
    GetCategoryById, GetCategoryCommand, ListCategories, ListCategoriesCommand,
    ListCategoriesOutput, UpdateCategory, UpdateCategoryCommand,
};
use catalog::config::AppConfig;
use catalog::domain::{CategoryId, DomainResult, Page};
use catalog::infrastructure::persistence::SqliteCategoryRepository;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Manage the categories of a video catalog")]
struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a category
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        /// Create the category inactive
        #[arg(long)]
        inactive: bool,
    },
    /// Show one category
    Get { id: CategoryId },
    /// Replace a category's name, description and activation state
    Update {
        id: CategoryId,
        #[arg(long)]
        name: String,
        /// Keeps the current description when omitted
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        inactive: bool,
    },
    /// Delete a category
    Delete { id: CategoryId },
    /// List categories one page at a time
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        per_page: u32,
        /// Only names containing this text
        #[arg(long, default_value = "")]
        search: String,
        /// name, id or createdAt
        #[arg(long, default_value = "name")]
        sort: String,
        /// asc or desc
        #[arg(long, default_value = "asc")]
        dir: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli.config.log_filter)?;

    let mut repository = SqliteCategoryRepository::new_with_path(&cli.config.database)
        .with_context(|| format!("Failed to open database {}", cli.config.database.display()))?;
    tracing::debug!(
        database = %cli.config.database.display(),
        environment = %cli.config.environment,
        "Catalog started"
    );

    match run(cli.command, &mut repository) {
        Ok(output) => {
            println!("{}", to_json(&output)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            let details = ProblemDetails::from_domain(&error, cli.config.environment);
            println!("{}", to_json(&details)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_tracing(filter: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(filter).with_context(|| format!("Invalid log filter '{}'", filter))?;
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))
}

/// Successful result of one subcommand
#[derive(Serialize)]
#[serde(untagged)]
enum Output {
    Category(CategoryOutput),
    Page(Page<ListCategoriesOutput>),
    Deleted { deleted: CategoryId },
}

fn run(command: Commands, repository: &mut SqliteCategoryRepository) -> DomainResult<Output> {
    let mut unit_of_work = repository.unit_of_work();

    match command {
        Commands::Create {
            name,
            description,
            inactive,
        } => {
            let command = CreateCategoryCommand::new(name, description, !inactive);
            CreateCategory::new(repository, &mut unit_of_work)
                .execute(command)
                .map(Output::Category)
        }
        Commands::Get { id } => GetCategoryById::new(repository)
            .execute(GetCategoryCommand { id })
            .map(Output::Category),
        Commands::Update {
            id,
            name,
            description,
            inactive,
        } => {
            let command = UpdateCategoryCommand::new(id, name, description, !inactive);
            UpdateCategory::new(repository, &mut unit_of_work)
                .execute(command)
                .map(Output::Category)
        }
        Commands::Delete { id } => {
            DeleteCategory::new(repository, &mut unit_of_work)
                .execute(DeleteCategoryCommand { id })?;
            Ok(Output::Deleted { deleted: id })
        }
        Commands::List {
            page,
            per_page,
            search,
            sort,
            dir,
        } => {
            let command = ListCategoriesCommand {
                page,
                per_page,
                search,
                sort,
                dir,
            };
            ListCategories::new(repository)
                .execute(&command)
                .map(Output::Page)
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}
