use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use boxdice_client::{ApiConfig, BoxDiceClient};
use clap::{Args, Parser, Subcommand, ValueEnum};
use reqwest::Method;
use serde_json::Value;

#[derive(Debug, Parser)]
#[command(
    name = "boxdice-cli",
    version,
    about = "Small async CLI for querying the BoxDice website API"
)]
struct Cli {
    /// BoxDice tenant domain (for example agency.boxdice.com.au).
    #[arg(long, env = "BOXDICE_DOMAIN")]
    domain: Option<String>,

    /// Explicit base URL, overriding the domain-derived one.
    #[arg(long, env = "BOXDICE_BASE_URL")]
    base_url: Option<String>,

    /// API key sent as `Authorization: Api-Key token=<key>`.
    #[arg(long, env = "BOXDICE_API_KEY")]
    api_key: String,

    /// Emit compact JSON instead of pretty-printed output.
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch one page of a list endpoint.
    List(ListArgs),
    /// Send a raw HTTP request using method + endpoint path.
    Request(RequestArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Resource collection to list.
    resource: ListResource,

    /// Restrict results to one office, where the endpoint supports it.
    #[arg(long)]
    office_id: Option<u64>,

    /// Opaque pagination cursor from the previous page's `paging.next`.
    #[arg(long)]
    after: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ListResource {
    Contacts,
    SalesListings,
    RentalListings,
    Offices,
    Consultants,
    Projects,
    PropertyTypes,
    PropertyCategories,
    PropertyOtherCategories,
    Suburbs,
}

impl ListResource {
    fn endpoint(self) -> &'static str {
        match self {
            Self::Contacts => "contacts",
            Self::SalesListings => "sales_listings",
            Self::RentalListings => "rental_listings",
            Self::Offices => "offices",
            Self::Consultants => "consultants",
            Self::Projects => "projects",
            Self::PropertyTypes => "property_types",
            Self::PropertyCategories => "property_categories",
            Self::PropertyOtherCategories => "property_other_categories",
            Self::Suburbs => "suburbs",
        }
    }
}

#[derive(Debug, Args)]
struct RequestArgs {
    /// HTTP method (GET, POST, PATCH, DELETE, ...).
    method: String,

    /// Endpoint path relative to the website API root (for example: contacts).
    path: String,

    /// Query parameter in form key=value. Repeat as needed.
    #[arg(long = "query", value_name = "KEY=VALUE")]
    query: Vec<String>,

    #[command(flatten)]
    body: BodyInput,
}

#[derive(Debug, Args)]
struct BodyInput {
    /// JSON request body literal.
    #[arg(long, conflicts_with = "body_file")]
    body_json: Option<String>,

    /// Path to a file containing a JSON request body.
    #[arg(long, value_name = "PATH", conflicts_with = "body_json")]
    body_file: Option<PathBuf>,
}

/// Entry point for the async CLI.
///
/// Parses command-line arguments, builds an authenticated client, dispatches
/// subcommands, and prints JSON output.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let client = match (&cli.base_url, &cli.domain) {
        (Some(url), _) => BoxDiceClient::with_base_url(url, &cli.api_key)
            .with_context(|| format!("failed to create client with base URL '{url}'"))?,
        (None, Some(domain)) => BoxDiceClient::new(&ApiConfig {
            api_key: cli.api_key.clone(),
            domain: domain.clone(),
        })
        .with_context(|| format!("failed to create client for domain '{domain}'"))?,
        (None, None) => bail!("either --domain or --base-url is required"),
    };

    let output = match &cli.command {
        Command::List(args) => list_resource(&client, args).await.with_context(|| {
            format!("list request failed for '{}'", args.resource.endpoint())
        })?,
        Command::Request(args) => send_request(&client, args)
            .await
            .with_context(|| format!("request failed: {} {}", args.method, args.path))?,
    };

    print_json(&output, cli.compact).context("failed to print JSON output")?;
    Ok(())
}

/// Fetches one page of a list endpoint and returns the raw response body.
async fn list_resource(client: &BoxDiceClient, args: &ListArgs) -> Result<Value> {
    let mut params: Vec<(&str, String)> = Vec::new();
    if let Some(office_id) = args.office_id {
        params.push(("office_id", office_id.to_string()));
    }
    if let Some(after) = &args.after {
        params.push(("after", after.clone()));
    }

    let value = client
        .request_json_with_query(Method::GET, args.resource.endpoint(), &params, None)
        .await?;
    Ok(value)
}

/// Sends a raw HTTP request using method + endpoint path.
async fn send_request(client: &BoxDiceClient, args: &RequestArgs) -> Result<Value> {
    // Validate method eagerly so CLI errors are explicit before any network call.
    let method = Method::from_str(&args.method)
        .with_context(|| format!("invalid HTTP method '{}'", args.method))?;
    let query = parse_pairs(&args.query, "--query").context("failed to parse --query arguments")?;
    let body = parse_body(&args.body).context("failed to parse request body input")?;
    let borrowed_query: Vec<(&str, String)> = query
        .iter()
        .map(|(key, value)| (key.as_str(), value.clone()))
        .collect();

    let value = client
        .request_json_with_query(method, &args.path, &borrowed_query, body)
        .await
        .with_context(|| format!("HTTP request failed for endpoint '{}'", args.path))?;
    Ok(value)
}

/// Parses repeated `key=value` arguments into owned key/value pairs.
///
/// Returns an error when a value does not include `=` or has an empty key.
fn parse_pairs(values: &[String], flag_name: &str) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::with_capacity(values.len());
    for item in values {
        let Some((key, value)) = item.split_once('=') else {
            bail!("invalid {flag_name} value '{item}': expected key=value");
        };
        if key.is_empty() {
            bail!("invalid {flag_name} value '{item}': empty key");
        }
        pairs.push((key.to_owned(), value.to_owned()));
    }
    Ok(pairs)
}

/// Parses an optional JSON body from inline text or a file path.
///
/// Exactly one of `--body-json` or `--body-file` may be set.
fn parse_body(body: &BodyInput) -> Result<Option<Value>> {
    match (&body.body_json, &body.body_file) {
        // Inline JSON body for quick ad-hoc calls.
        (Some(raw), None) => serde_json::from_str(raw)
            .context("failed to parse JSON from --body-json")
            .map(Some),
        (None, Some(path)) => {
            // File-based body for larger payloads and reusable fixtures.
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read --body-file '{}'", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| {
                    format!("failed to parse JSON in --body-file '{}'", path.display())
                })
                .map(Some)
        }
        (None, None) => Ok(None),
        (Some(_), Some(_)) => bail!("use only one of --body-json or --body-file"),
    }
}

/// Prints a JSON value either compact or pretty-formatted.
fn print_json(value: &Value, compact: bool) -> Result<()> {
    // Keep output machine-friendly by defaulting to valid JSON in both modes.
    if compact {
        println!(
            "{}",
            serde_json::to_string(value).context("Failed to render JSON")?
        );
    } else {
        println!(
            "{}",
            serde_json::to_string_pretty(value).context("Failed to render JSON")?
        );
    }
    Ok(())
}
