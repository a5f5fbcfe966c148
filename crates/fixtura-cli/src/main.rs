mod registry;
mod report;
mod workspace;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Utc;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use fixtura_core::{EntityKind, Gender, entity_schema};
use fixtura_generate::shapes::{catalog, person, user};
use fixtura_generate::{EntityGenerator, GenerationError, RandomSource, RelationshipLinker};
use registry::{RunManifest, init_logging, new_run_id};
use workspace::{
    CONFIG_FILE, ConfigOverrides, FixturaConfig, load_config, save_config, write_bytes_atomic,
};

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("workspace error: {0}")]
    Workspace(#[from] workspace::WorkspaceError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("core error: {0}")]
    Core(#[from] fixtura_core::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "fixtura", version, about = "Fixtura synthetic data CLI")]
struct Cli {
    /// Config file; defaults apply when it does not exist.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,
    /// Append JSON logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a batch and write it as JSON.
    Generate(GenerateArgs),
    /// Print a text report over a generated batch.
    Report(ReportArgs),
    /// Print the JSON Schema of an entity batch.
    Schema(SchemaArgs),
    /// Write a config file with the default settings.
    Init(InitArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EntityArg {
    Humans,
    Addresses,
    Users,
    Categories,
    Products,
    Catalog,
}

impl EntityArg {
    fn as_str(self) -> &'static str {
        match self {
            Self::Humans => "humans",
            Self::Addresses => "addresses",
            Self::Users => "users",
            Self::Categories => "categories",
            Self::Products => "products",
            Self::Catalog => "catalog",
        }
    }

    fn kind(self) -> EntityKind {
        match self {
            Self::Humans => EntityKind::Human,
            Self::Addresses => EntityKind::Address,
            Self::Users => EntityKind::User,
            Self::Categories => EntityKind::Category,
            Self::Products => EntityKind::ProductListing,
            Self::Catalog => EntityKind::Catalog,
        }
    }

    fn is_linked(self) -> bool {
        matches!(self, Self::Products | Self::Catalog)
    }
}

#[derive(Args, Debug)]
struct GenerationArgs {
    /// Number of entities (products, for linked batches).
    #[arg(long)]
    count: Option<i64>,
    /// Use fresh entropy instead of the fixed seed.
    #[arg(long, conflicts_with = "seeded")]
    random: bool,
    /// Use the fixed seed even if the config disables it.
    #[arg(long)]
    seeded: bool,
    /// Categories to spread products across.
    #[arg(long)]
    categories: Option<u32>,
}

impl GenerationArgs {
    fn overrides(&self) -> ConfigOverrides {
        let seeded = if self.random {
            Some(false)
        } else if self.seeded {
            Some(true)
        } else {
            None
        };
        ConfigOverrides {
            count: self.count,
            seeded,
            category_count: self.categories,
            ..ConfigOverrides::default()
        }
    }
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(value_enum)]
    entity: EntityArg,
    #[command(flatten)]
    generation: GenerationArgs,
    /// Output directory.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Write compact JSON.
    #[arg(long)]
    compact: bool,
    /// Print to stdout instead of writing a file.
    #[arg(long)]
    stdout: bool,
}

#[derive(Args, Debug)]
struct ReportArgs {
    #[command(subcommand)]
    target: ReportTarget,
}

#[derive(Subcommand, Debug)]
enum ReportTarget {
    /// Reports over generated people.
    People(PeopleReportArgs),
    /// Reports over a linked product catalog.
    Products(ProductReportArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PeopleView {
    Grouped,
    BornBetween,
    Gender,
    Masked,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(value: GenderArg) -> Self {
        match value {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Args, Debug)]
struct PeopleReportArgs {
    #[command(flatten)]
    generation: GenerationArgs,
    #[arg(long, value_enum, default_value = "grouped")]
    view: PeopleView,
    #[arg(long, default_value_t = 1950)]
    from_year: i32,
    #[arg(long, default_value_t = 1980)]
    to_year: i32,
    #[arg(long, value_enum, default_value = "female")]
    gender: GenderArg,
}

#[derive(Args, Debug)]
struct ProductReportArgs {
    #[command(flatten)]
    generation: GenerationArgs,
    /// Only list products priced above this.
    #[arg(long, default_value = "100")]
    min_price: Decimal,
    /// Only list products of this category (case-insensitive).
    #[arg(long)]
    category: Option<String>,
}

#[derive(Args, Debug)]
struct SchemaArgs {
    #[arg(value_enum)]
    entity: EntityArg,
}

#[derive(Args, Debug)]
struct InitArgs {
    /// Overwrite an existing file.
    #[arg(long)]
    force: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    match cli.command {
        Command::Generate(args) => run_generate(&cli.config, args),
        Command::Report(args) => run_report(&cli.config, args),
        Command::Schema(args) => run_schema(args),
        Command::Init(args) => run_init(&cli.config, args),
    }
}

fn resolve_config(
    path: &Path,
    overrides: ConfigOverrides,
) -> Result<FixturaConfig, CliError> {
    let config = load_config(path)?.with_overrides(overrides);
    tracing::debug!(
        event = "config_resolved",
        path = %path.display(),
        count = config.generation.count,
        seeded = config.generation.seeded,
        category_count = config.generation.category_count
    );
    Ok(config)
}

fn encode<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<Vec<u8>, CliError> {
    let mut data = if pretty {
        serde_json::to_vec_pretty(value)?
    } else {
        serde_json::to_vec(value)?
    };
    data.push(b'\n');
    Ok(data)
}

fn generate_payload(
    entity: EntityArg,
    config: &FixturaConfig,
    source: &mut RandomSource,
) -> Result<Vec<u8>, CliError> {
    let count = config.generation.count;
    let pretty = config.output.pretty;
    let linker = RelationshipLinker::from(&config.generate_options());

    match entity {
        EntityArg::Humans => {
            let people = EntityGenerator::new(person::human_rules()?).generate_with(count, source)?;
            encode(&people, pretty)
        }
        EntityArg::Addresses => {
            let addresses =
                EntityGenerator::new(person::address_rules()).generate_with(count, source)?;
            encode(&addresses, pretty)
        }
        EntityArg::Users => {
            let users = EntityGenerator::new(user::user_rules()?).generate_with(count, source)?;
            encode(&users, pretty)
        }
        EntityArg::Categories => {
            let categories =
                EntityGenerator::new(catalog::category_rules()).generate_with(count, source)?;
            encode(&categories, pretty)
        }
        EntityArg::Products => {
            let catalog = linker.link_with(count, source)?;
            encode(&catalog.linked_products(), pretty)
        }
        EntityArg::Catalog => {
            let catalog = linker.link_with(count, source)?;
            encode(&catalog, pretty)
        }
    }
}

fn run_generate(config_path: &Path, args: GenerateArgs) -> Result<(), CliError> {
    let mut overrides = args.generation.overrides();
    overrides.dir = args.out.clone();
    if args.compact {
        overrides.pretty = Some(false);
    }
    let config = resolve_config(config_path, overrides)?;

    let run_id = new_run_id();
    let started_at = Utc::now();
    let timer = Instant::now();
    let entity = args.entity;
    tracing::info!(
        event = "run_started",
        run_id = %run_id,
        entity = entity.as_str(),
        count = config.generation.count,
        seeded = config.generation.seeded
    );

    let mut source = RandomSource::for_mode(config.generation.seeded);
    let payload = generate_payload(entity, &config, &mut source)?;

    if args.stdout {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&payload)?;
        stdout.flush()?;
    } else {
        let path = config.output.dir.join(format!("{}.json", entity.as_str()));
        write_bytes_atomic(&path, &payload)?;

        let mut manifest =
            RunManifest::started(&run_id, entity.as_str(), config.generation.count, started_at);
        manifest.seeded = source.is_seeded();
        manifest.seed = source.seed();
        manifest.reference_date = source.reference_date().to_string();
        manifest.category_count = entity
            .is_linked()
            .then_some(config.generation.category_count);
        manifest.finish(path.display().to_string(), payload.len() as u64);

        let manifest_path = config
            .output
            .dir
            .join(format!("{}.run.json", entity.as_str()));
        write_bytes_atomic(&manifest_path, &encode(&manifest, true)?)?;
        tracing::info!(event = "output_written", path = %path.display(), bytes = payload.len());
    }

    tracing::info!(
        event = "run_finished",
        run_id = %run_id,
        status = "success",
        duration_ms = timer.elapsed().as_millis() as u64
    );
    Ok(())
}

fn run_report(config_path: &Path, args: ReportArgs) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();

    match args.target {
        ReportTarget::People(args) => {
            if args.from_year > args.to_year {
                return Err(CliError::InvalidConfig(format!(
                    "--from-year {} is after --to-year {}",
                    args.from_year, args.to_year
                )));
            }
            let config = resolve_config(config_path, args.generation.overrides())?;
            let mut source = RandomSource::for_mode(config.generation.seeded);
            let people = EntityGenerator::new(person::human_rules()?)
                .generate_with(config.generation.count, &mut source)?;

            match args.view {
                PeopleView::Grouped => {
                    report::people_by_gender(&mut stdout, &people, source.reference_date())?
                }
                PeopleView::BornBetween => {
                    report::people_born_between(&mut stdout, &people, args.from_year, args.to_year)?
                }
                PeopleView::Gender => {
                    report::people_of_gender(&mut stdout, &people, args.gender.into())?
                }
                PeopleView::Masked => report::masked_national_ids(&mut stdout, &people)?,
            }
        }
        ReportTarget::Products(args) => {
            let config = resolve_config(config_path, args.generation.overrides())?;
            let catalog = RelationshipLinker::from(&config.generate_options())
                .link(config.generation.count, config.generation.seeded)?;

            match args.category {
                Some(category) => report::products_in_category(&mut stdout, &catalog, &category)?,
                None => report::high_value_products(&mut stdout, &catalog, args.min_price)?,
            }
        }
    }

    stdout.flush()?;
    Ok(())
}

fn run_schema(args: SchemaArgs) -> Result<(), CliError> {
    let schema = entity_schema(args.entity.kind());
    let mut stdout = io::stdout().lock();
    stdout.write_all(&encode(&schema, true)?)?;
    Ok(())
}

fn run_init(config_path: &Path, args: InitArgs) -> Result<(), CliError> {
    if config_path.exists() && !args.force {
        return Err(CliError::InvalidConfig(format!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        )));
    }
    save_config(config_path, &FixturaConfig::default())?;
    tracing::info!(event = "config_written", path = %config_path.display());
    Ok(())
}
