use log::{debug, info};
use std::env;

use recipe_browser::{BrowserConfig, HttpRecipeSource, RecipeBrowser};

fn print_usage() {
    eprintln!("Usage: recipe-browser [SEARCH_TERM] [--tag TAG]...");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the search term and tags from command-line arguments
    let mut search_term = String::new();
    let mut tags: Vec<String> = Vec::new();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tag" => {
                let tag = args.next().ok_or("--tag requires a value")?;
                tags.push(tag);
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            _ => search_term = arg,
        }
    }

    let config = BrowserConfig::load()?;
    debug!("{:#?}", config);

    let source = HttpRecipeSource::from_config(&config)?;
    info!("Loading recipes from {}", source.url());
    let mut browser = RecipeBrowser::load(&source).await?;

    browser.set_search_term(search_term);
    for tag in &tags {
        browser.toggle_tag(tag);
    }

    let visible = browser.visible_recipes();
    println!("{} of {} recipes", visible.len(), browser.recipes().len());
    for recipe in visible {
        println!("  {} [{}]", recipe.title, recipe.tags.join(", "));
    }

    println!("Tags:");
    for tag in browser.tag_counts() {
        println!("  {} ({})", tag.name, tag.count);
    }

    Ok(())
}
