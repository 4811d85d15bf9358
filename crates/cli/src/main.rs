// ABOUTME: CLI for the Telegraph client: converts HTML to page content and calls the API.
// ABOUTME: Prints results as JSON so they can be piped into other tools.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde_json::Value;
use telegraph_client::{
    content_format, AccountField, Client, ContentNode, ContentSource, CreateAccountParams,
    EditAccountInfoParams, ExcludeTags, Filter, PageListParams, PageParams, ViewsParams,
    DEFAULT_API_URL, DEFAULT_UPLOAD_URL,
};
use tracing_subscriber::EnvFilter;

/// Publish and inspect Telegraph pages.
#[derive(Parser, Debug)]
#[command(name = "telegraph", version)]
#[command(about = "Convert HTML to Telegraph content and call the Telegraph API", long_about = None)]
struct Cli {
    /// Access token for secured methods.
    #[arg(long, env = "TELEGRAPH_ACCESS_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    /// API base URL.
    #[arg(long, default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    /// Upload endpoint URL.
    #[arg(long, default_value = DEFAULT_UPLOAD_URL, global = true)]
    upload_url: String,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false, global = true)]
    compact: bool,

    /// Log requests to stderr.
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an HTML file (or "-" for stdin) to content nodes.
    Convert(ConvertArgs),
    /// Create a new account and print it, including its access token.
    CreateAccount {
        short_name: String,
        #[arg(long)]
        author_name: Option<String>,
        #[arg(long)]
        author_url: Option<String>,
    },
    /// Update the account's names and profile link.
    EditAccount {
        #[arg(long)]
        short_name: Option<String>,
        #[arg(long)]
        author_name: Option<String>,
        #[arg(long)]
        author_url: Option<String>,
    },
    /// Show account information.
    AccountInfo {
        /// Also return auth_url and page_count.
        #[arg(long)]
        all: bool,
    },
    /// Revoke the access token and print the new one.
    RevokeToken,
    /// Convert an HTML file and publish it as a new page.
    CreatePage {
        title: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Convert an HTML file and replace an existing page with it.
    EditPage {
        path: String,
        title: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Fetch a page.
    GetPage {
        path: String,
        #[arg(long)]
        content: bool,
    },
    /// List the account's pages.
    ListPages {
        #[arg(long)]
        offset: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show view counts for a page.
    Views {
        path: String,
        #[arg(long)]
        year: Option<u32>,
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        day: Option<u32>,
        #[arg(long)]
        hour: Option<u32>,
    },
    /// Upload media files and print their server paths.
    Upload {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(ClapArgs, Debug)]
struct ConvertArgs {
    /// HTML file, or "-" for stdin.
    input: String,

    /// Drop elements with this tag and everything inside them (repeatable).
    #[arg(long = "exclude", value_name = "TAG")]
    exclude: Vec<String>,
}

#[derive(ClapArgs, Debug)]
struct PageArgs {
    #[command(flatten)]
    source: ConvertArgs,
    #[arg(long)]
    author_name: Option<String>,
    #[arg(long)]
    author_url: Option<String>,
    /// Include content in the returned page.
    #[arg(long)]
    return_content: bool,
}

impl PageArgs {
    fn params(&self) -> PageParams {
        PageParams {
            author_name: self.author_name.clone().unwrap_or_default(),
            author_url: self.author_url.clone().unwrap_or_default(),
            return_content: self.return_content,
        }
    }
}

fn convert(args: &ConvertArgs) -> Result<Vec<ContentNode>> {
    let source = if args.input == "-" {
        ContentSource::from_reader(io::stdin().lock())
    } else {
        let path = Path::new(&args.input);
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        ContentSource::from(bytes)
    };

    let excluded = ExcludeTags::new(&args.exclude);
    let mut filters: Vec<&dyn Filter> = Vec::new();
    if !excluded.is_empty() {
        filters.push(&excluded);
    }

    Ok(content_format(source, &filters)?)
}

fn build_client(cli: &Cli) -> Client {
    Client::builder()
        .api_url(&cli.api_url)
        .upload_url(&cli.upload_url)
        .access_token(cli.token.clone().unwrap_or_default())
        .build()
}

async fn run(cli: &Cli) -> Result<Value> {
    let client = build_client(cli);
    let value = match &cli.command {
        Command::Convert(args) => serde_json::to_value(convert(args)?)?,
        Command::CreateAccount {
            short_name,
            author_name,
            author_url,
        } => {
            let params = CreateAccountParams {
                author_name: author_name.clone().unwrap_or_default(),
                author_url: author_url.clone().unwrap_or_default(),
            };
            serde_json::to_value(client.create_account(short_name, Some(&params), &[]).await?)?
        }
        Command::EditAccount {
            short_name,
            author_name,
            author_url,
        } => {
            let params = EditAccountInfoParams {
                short_name: short_name.clone().unwrap_or_default(),
                author_name: author_name.clone().unwrap_or_default(),
                author_url: author_url.clone().unwrap_or_default(),
            };
            serde_json::to_value(client.edit_account_info(&params, &[]).await?)?
        }
        Command::AccountInfo { all } => {
            let fields: &[AccountField] = if *all {
                &[
                    AccountField::ShortName,
                    AccountField::AuthorName,
                    AccountField::AuthorUrl,
                    AccountField::AuthUrl,
                    AccountField::PageCount,
                ]
            } else {
                &[]
            };
            serde_json::to_value(client.get_account_info(fields, &[]).await?)?
        }
        Command::RevokeToken => serde_json::to_value(client.revoke_access_token(&[]).await?)?,
        Command::CreatePage { title, page } => {
            let content = convert(&page.source)?;
            if content.is_empty() {
                bail!("{} produced no content", page.source.input);
            }
            serde_json::to_value(
                client
                    .create_page(title, &content, Some(&page.params()), &[])
                    .await?,
            )?
        }
        Command::EditPage { path, title, page } => {
            let content = convert(&page.source)?;
            if content.is_empty() {
                bail!("{} produced no content", page.source.input);
            }
            serde_json::to_value(
                client
                    .edit_page(path, title, &content, Some(&page.params()), &[])
                    .await?,
            )?
        }
        Command::GetPage { path, content } => {
            serde_json::to_value(client.get_page(path, *content, &[]).await?)?
        }
        Command::ListPages { offset, limit } => {
            let params = PageListParams {
                offset: *offset,
                limit: *limit,
            };
            serde_json::to_value(client.get_page_list(&params, &[]).await?)?
        }
        Command::Views {
            path,
            year,
            month,
            day,
            hour,
        } => {
            let params = ViewsParams {
                year: *year,
                month: *month,
                day: *day,
                hour: *hour,
            };
            serde_json::to_value(client.get_views(path, &params, &[]).await?)?
        }
        Command::Upload { files } => {
            serde_json::to_value(client.upload(files.as_slice(), &[]).await?)?
        }
    };

    Ok(value)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("telegraph_client=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let output = run(&cli).await?;

    if cli.compact {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}
