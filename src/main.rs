use clap::Parser;
use log::{debug, info};
use std::time::Duration;
use tokio::io::{stdin, stdout, BufReader};

use recipehub::shell::{self, Session};
use recipehub::{HubConfig, Page, RecipeHub};

#[derive(Parser)]
#[command(name = "recipehub")]
#[command(about = "Browse recipes from TheMealDB", long_about = None)]
struct Cli {
    /// Page to open: /Home, /recipes or /category/<name>
    #[arg(default_value = "/Home")]
    path: String,

    /// Page number to show on paginated listings
    #[arg(long, short)]
    page: Option<u32>,

    /// Filter /recipes by category
    #[arg(long, short)]
    category: Option<String>,

    /// Search /recipes by ingredient
    #[arg(long, short)]
    search: Option<String>,

    /// Override the recipe provider's base address
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Print the visible page as JSON instead of text
    #[arg(long, conflicts_with = "interactive")]
    json: bool,

    /// Keep reading navigation commands from stdin
    #[arg(long, short)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Cli::parse();

    let config = HubConfig::load()?;
    debug!("{:?}", config);

    let mut builder = RecipeHub::builder().config(config);
    if let Some(url) = args.base_url {
        builder = builder.base_url(url);
    }
    if let Some(secs) = args.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let hub = builder.build()?;

    let mut session = Session::start(&hub, &args.path).await;
    if let Some(category) = args.category {
        session.execute(shell::Command::Category(category)).await?;
    }
    if let Some(term) = args.search {
        session.execute(shell::Command::Search(term)).await?;
    }
    if let Some(page) = args.page {
        session.execute(shell::Command::Page(page)).await?;
    }

    if args.interactive {
        info!("Starting interactive session at {}", args.path);
        shell::run(&mut session, BufReader::new(stdin()), stdout()).await?;
    } else if args.json {
        println!("{}", page_json(session.page())?);
    } else {
        print!("{}", session.render());
    }

    Ok(())
}

fn page_json(page: &Page) -> Result<String, serde_json::Error> {
    match page {
        Page::Home(home) => serde_json::to_string_pretty(home.state()),
        Page::Recipes(recipes) => match recipes.view() {
            Some(view) => serde_json::to_string_pretty(&view),
            None => serde_json::to_string_pretty(recipes.state()),
        },
        Page::Category(category) => match category.view() {
            Some(view) => serde_json::to_string_pretty(&view),
            None => serde_json::to_string_pretty(category.state()),
        },
        Page::NotFound => {
            serde_json::to_string_pretty(&serde_json::json!({ "status": "not_found" }))
        }
    }
}
