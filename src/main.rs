use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use recipe_lens::enrichment::YoutubeClient;
use recipe_lens::providers::prompt::split_ingredient_list;
use recipe_lens::{
    render, AppConfig, Enricher, Enrichment, ImageSource, ProviderKind, Recipe, RecipeLens,
    RecipeLensBuilder,
};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

#[derive(Parser)]
#[command(name = "recipe-lens")]
#[command(about = "Turn food photos and ingredient lists into recipes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// AI provider to use (google, openai, anthropic)
    #[arg(long, global = true)]
    provider: Option<String>,

    /// Model name override
    #[arg(long, global = true)]
    model: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip the video and shopping link lookups
    #[arg(long, global = true)]
    no_enrich: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a recipe from a photo of a dish
    Dish {
        /// Path to the image
        image: PathBuf,
        /// Extra characteristics or flavors to consider
        #[arg(long)]
        characteristics: Option<String>,
    },
    /// Generate a recipe from available ingredients
    Ingredients {
        /// Photo of the ingredients
        #[arg(long)]
        image: Option<PathBuf>,
        /// Comma-separated ingredient list
        #[arg(long)]
        list: Option<String>,
    },
    /// Parse raw model output from a file (or stdin) without calling any API
    Parse {
        file: Option<PathBuf>,
    },
    /// Find a video tutorial for a dish
    Video { query: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Html,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Dish {
            image,
            characteristics,
        } => {
            let mut builder = apply_overrides(&cli, RecipeLens::builder())?
                .dish_image(ImageSource::Path(image.to_string_lossy().into_owned()));
            if let Some(characteristics) = characteristics {
                builder = builder.characteristics(characteristics.as_str());
            }
            let generated = builder.build().await?;
            print_recipe(&generated.recipe, generated.enrichment.as_ref(), cli.format)?;
        }
        Commands::Ingredients { image, list } => {
            if image.is_none() && list.is_none() {
                return Err("Provide --image, --list or both".into());
            }

            let mut builder = apply_overrides(&cli, RecipeLens::builder())?;
            if let Some(image) = image {
                let image = ImageSource::Path(image.to_string_lossy().into_owned());
                builder = builder.ingredients_image(image);
            }
            if let Some(list) = list {
                builder = builder.ingredients(split_ingredient_list(list));
            }
            let generated = builder.build().await?;
            print_recipe(&generated.recipe, generated.enrichment.as_ref(), cli.format)?;
        }
        Commands::Parse { file } => {
            let text = match file {
                Some(path) => tokio::fs::read_to_string(path).await?,
                None => {
                    let mut text = String::new();
                    tokio::io::stdin().read_to_string(&mut text).await?;
                    text
                }
            };

            let recipe = recipe_lens::parse(&text);
            debug!("{:#?}", recipe);

            let enrichment = if cli.no_enrich || recipe.is_empty() {
                None
            } else {
                let config = AppConfig::load()?;
                let client = reqwest::Client::new();
                Some(Enricher::new(&config, client).enrich(&recipe).await)
            };
            print_recipe(&recipe, enrichment.as_ref(), cli.format)?;
        }
        Commands::Video { query } => {
            let config = AppConfig::load()?;
            let youtube = YoutubeClient::new(&config.youtube, reqwest::Client::new());
            match youtube.search_video(query).await {
                Some(url) => println!("{}", url),
                None => return Err(format!("No video found for '{}'", query).into()),
            }
        }
    }

    Ok(())
}

fn apply_overrides(
    cli: &Cli,
    mut builder: RecipeLensBuilder,
) -> Result<RecipeLensBuilder, Box<dyn std::error::Error>> {
    if let Some(name) = &cli.provider {
        let kind = ProviderKind::from_name(name)
            .ok_or_else(|| format!("Unknown provider: {}", name))?;
        builder = builder.provider(kind);
    }
    if let Some(model) = &cli.model {
        builder = builder.model(model.as_str());
    }
    if !cli.no_enrich {
        builder = builder.with_enrichment();
    }
    Ok(builder)
}

fn print_recipe(
    recipe: &Recipe,
    enrichment: Option<&Enrichment>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Text => print!("{}", render::render_text(recipe, enrichment)),
        OutputFormat::Html => print!("{}", render::render_html(recipe, enrichment)),
        OutputFormat::Json => {
            let mut value = serde_json::to_value(recipe)?;
            if let Some(enrichment) = enrichment {
                value["enrichment"] = serde_json::to_value(enrichment)?;
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}
