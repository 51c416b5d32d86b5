use anyhow::Context;
use blog_api::{BlogClient, BlogQuery, DEFAULT_LIMIT};
use clap::{Parser, Subcommand};

use crate::checks::Check;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Parser)]
#[command(
    name = "blog-verify",
    about = "Print what a running blog API returns from its health and blog endpoints"
)]
pub struct Cli {
    /// API root the endpoints are resolved against.
    #[arg(long, env = "BLOG_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Page size requested from `/blogs`.
    #[arg(long, env = "BLOG_API_LIMIT", default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    #[arg(long)]
    pub page: Option<u32>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub search: Option<String>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Health check followed by the blog listing (default).
    All,
    /// GET /health only.
    Health,
    /// GET /blogs only.
    Blogs,
    /// GET /blogs/{slug}.
    Blog { slug: String },
}

impl Cli {
    /// Build the API client; a malformed `--base-url` fails the run.
    pub fn client(&self) -> anyhow::Result<BlogClient> {
        BlogClient::new(&self.base_url)
            .with_context(|| format!("invalid --base-url {:?}", self.base_url))
    }

    /// The checks to run, in order.
    pub fn checks(&self) -> Vec<Check> {
        match &self.command {
            None | Some(Commands::All) => vec![Check::Health, Check::Blogs],
            Some(Commands::Health) => vec![Check::Health],
            Some(Commands::Blogs) => vec![Check::Blogs],
            Some(Commands::Blog { slug }) => vec![Check::Blog(slug.clone())],
        }
    }

    pub fn query(&self) -> BlogQuery {
        BlogQuery {
            page: self.page,
            limit: Some(self.limit),
            category: self.category.clone(),
            search: self.search.clone(),
        }
    }
}
