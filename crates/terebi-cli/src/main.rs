//! Terminal front-end for the terebi catalog screens.
//!
//! Each subcommand drives one screen to completion and renders its
//! final state; `Failed` states map to a non-zero exit.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use terebi_api::TmdbClient;
use terebi_core::models::{DetailBundle, MediaItem, MediaType};
use terebi_core::watchlist::Watchlist;
use terebi_screens::detail::DetailScreen;
use terebi_screens::home::HomeScreen;
use terebi_screens::listing::ListingData;
use terebi_screens::movies::MoviesScreen;
use terebi_screens::search::SearchScreen;
use terebi_screens::trending::TrendingScreen;
use terebi_screens::tv::TvScreen;
use terebi_screens::ScreenState;

#[derive(Parser)]
#[command(name = "terebi", about = "Browse the TMDB catalog", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Home feed: hero, trending, top-rated, and recommendations.
    Home,
    /// Popular and top-rated movies.
    Movies,
    /// Popular and top-rated TV series.
    Tv,
    /// Today's trending titles.
    Trending,
    /// Multi-search across movies and TV.
    Search { query: String },
    /// Full detail for one title.
    Detail {
        #[arg(value_parser = parse_media_type)]
        media_type: MediaType,
        id: u64,
    },
    /// Toggle a title on or off the watchlist.
    Watchlist {
        #[arg(value_parser = parse_media_type)]
        media_type: MediaType,
        id: u64,
    },
}

fn parse_media_type(tag: &str) -> Result<MediaType, String> {
    MediaType::from_tag(tag).ok_or_else(|| format!("expected movie, tv, or person, got {tag:?}"))
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "terebi=info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Command::Watchlist { media_type, id } = cli.command {
        return toggle_watchlist(media_type, id);
    }

    let client = match TmdbClient::new() {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Home => {
            let mut screen = HomeScreen::new(client);
            screen.load_if_needed().await;
            render(screen.state(), |data| {
                print_row("Hero", &data.hero);
                print_row("Trending Now", &data.trending_now);
                print_row("Top Rated Movies", &data.top_movies);
                print_row("Top Rated TV", &data.top_tv);
                print_row("We Highly Recommend", &data.highly_recommend);
            })
        }
        Command::Movies => {
            let mut screen = MoviesScreen::new(client);
            screen.load_if_needed().await;
            render(screen.state(), print_listing)
        }
        Command::Tv => {
            let mut screen = TvScreen::new(client);
            screen.load_if_needed().await;
            render(screen.state(), print_listing)
        }
        Command::Trending => {
            let mut screen = TrendingScreen::new(client);
            screen.load_if_needed().await;
            render(screen.state(), |data| print_row("Trending", data.grid()))
        }
        Command::Search { query } => {
            let mut screen = SearchScreen::new(client);
            screen.search(&query).await;
            if let ScreenState::Idle = screen.state() {
                println!("empty query");
                return ExitCode::SUCCESS;
            }
            render(screen.state(), |items| print_row("Results", items))
        }
        Command::Detail { media_type, id } => {
            let Some(watchlist) = Watchlist::open_default() else {
                eprintln!("error: no usable data directory for the watchlist");
                return ExitCode::FAILURE;
            };
            let media = MediaItem {
                id,
                title: String::new(),
                poster_path: None,
                backdrop_path: None,
                overview: String::new(),
                vote_average: 0.0,
                media_type,
            };
            let mut screen = DetailScreen::new(client, Arc::new(watchlist), media);
            screen.load_if_needed().await;
            render(screen.state(), print_detail)
        }
        Command::Watchlist { .. } => unreachable!("handled before client construction"),
    }
}

fn toggle_watchlist(media_type: MediaType, id: u64) -> ExitCode {
    let Some(watchlist) = Watchlist::open_default() else {
        eprintln!("error: no usable data directory for the watchlist");
        return ExitCode::FAILURE;
    };
    match watchlist.toggle(media_type, id) {
        Ok(true) => {
            println!("added {media_type}-{id}");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("removed {media_type}-{id}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn render<T>(state: &ScreenState<T>, show: impl FnOnce(&T)) -> ExitCode {
    if let Some(message) = state.error() {
        eprintln!("error: {message}");
        return ExitCode::FAILURE;
    }
    if let Some(data) = state.data() {
        show(data);
    }
    ExitCode::SUCCESS
}

fn print_row(label: &str, items: &[MediaItem]) {
    if items.is_empty() {
        return;
    }
    println!("{label}:");
    for item in items {
        println!(
            "  [{}] {} ({:.1}) #{}",
            item.media_type.label(),
            item.title_text(),
            item.vote_average,
            item.id,
        );
    }
}

fn print_listing(data: &ListingData) {
    print_row("Popular", &data.popular);
    print_row("Top Rated", &data.top_rated);
}

fn print_detail(bundle: &DetailBundle) {
    match &bundle.release_year {
        Some(year) => println!("{} ({year})", bundle.title),
        None => println!("{}", bundle.title),
    }
    if let Some(tagline) = &bundle.tagline {
        println!("{tagline}");
    }
    if !bundle.overview.is_empty() {
        println!("\n{}", bundle.overview);
    }
    if !bundle.genres.is_empty() {
        let names: Vec<&str> = bundle.genres.iter().map(|g| g.name.as_str()).collect();
        println!("\nGenres: {}", names.join(", "));
    }

    if !bundle.cast.is_empty() {
        println!("\nCast:");
        for member in &bundle.cast {
            match &member.character {
                Some(role) => println!("  {} as {role}", member.name),
                None => println!("  {}", member.name),
            }
        }
    }
    if !bundle.directors.is_empty() {
        let names: Vec<&str> = bundle.directors.iter().map(|c| c.name.as_str()).collect();
        println!("Directed by: {}", names.join(", "));
    }
    if !bundle.creators.is_empty() {
        let names: Vec<&str> = bundle.creators.iter().map(|c| c.name.as_str()).collect();
        println!("Created by: {}", names.join(", "));
    }
    if !bundle.executive_producers.is_empty() {
        let names: Vec<&str> = bundle
            .executive_producers
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        println!("Executive producers: {}", names.join(", "));
    }

    if !bundle.quick_providers.is_empty() {
        println!("\nWatch now:");
        for quick in &bundle.quick_providers {
            println!("  {}: {}", quick.name, quick.url);
        }
    }
    if !bundle.reviews.is_empty() {
        println!("\nReviews:");
        for review in &bundle.reviews {
            println!("  {}:", review.author);
            for line in review.content.lines().take(3) {
                println!("    {line}");
            }
        }
    }

    println!(
        "\nWatchlist: {}",
        if bundle.in_watchlist { "yes" } else { "no" }
    );
}
