//! Detail screen for one media item: full detail record, credits,
//! reviews, and regional watch providers, fetched concurrently and
//! committed as a single bundle.

use std::sync::Arc;

use terebi_api::types::{CreditsRecord, MovieDetailRecord, TvDetailRecord};
use terebi_api::{TmdbClient, TmdbError};
use terebi_core::models::{
    release_year, CastMember, CrewMember, DetailBundle, MediaItem, MediaType, Review,
    WatchProviderRegion,
};
use terebi_core::quick_providers::{match_providers, QuickProvider};
use terebi_core::watchlist::{Watchlist, WatchlistError};

use crate::state::ScreenState;

const CAST_LIMIT: usize = 12;
const CREW_LIMIT: usize = 4;
const REVIEW_LIMIT: usize = 3;

pub struct DetailScreen {
    client: Arc<TmdbClient>,
    watchlist: Arc<Watchlist>,
    media: MediaItem,
    state: ScreenState<DetailBundle>,
    has_loaded: bool,
}

impl DetailScreen {
    pub fn new(client: Arc<TmdbClient>, watchlist: Arc<Watchlist>, media: MediaItem) -> Self {
        Self {
            client,
            watchlist,
            media,
            state: ScreenState::Idle,
            has_loaded: false,
        }
    }

    pub fn media(&self) -> &MediaItem {
        &self.media
    }

    pub fn state(&self) -> &ScreenState<DetailBundle> {
        &self.state
    }

    pub async fn load_if_needed(&mut self) {
        if self.has_loaded {
            return;
        }
        self.load().await;
    }

    pub async fn reload(&mut self) {
        self.has_loaded = false;
        self.load().await;
    }

    /// Flip watchlist membership for this item, keeping the ready
    /// bundle's flag in sync. Returns the new membership.
    pub fn toggle_watchlist(&mut self) -> Result<bool, WatchlistError> {
        let member = self.watchlist.toggle(self.media.media_type, self.media.id)?;
        if let ScreenState::Ready(bundle) = &mut self.state {
            bundle.in_watchlist = member;
        }
        Ok(member)
    }

    async fn load(&mut self) {
        self.state = ScreenState::Loading;

        match self.fetch().await {
            Ok(bundle) => {
                self.state = ScreenState::Ready(bundle);
                self.has_loaded = true;
            }
            Err(e) => {
                tracing::warn!(error = %e, "detail load failed");
                self.state = ScreenState::Failed(e.to_string());
            }
        }
    }

    async fn fetch(&self) -> Result<DetailBundle, TmdbError> {
        let media = &self.media;
        let in_watchlist = self.watchlist.contains(&media.watchlist_key());
        let region = device_region();

        match media.media_type {
            MediaType::Movie => {
                let (detail, credits, reviews, providers) = tokio::try_join!(
                    self.client.movie_detail(media.id),
                    self.client.credits(media.id, MediaType::Movie),
                    self.client.reviews(media.id, MediaType::Movie),
                    self.client.watch_providers(media.id, MediaType::Movie, &region),
                )?;
                Ok(assemble_movie(detail, credits, reviews, providers, in_watchlist))
            }
            MediaType::Tv => {
                let (detail, credits, reviews, providers) = tokio::try_join!(
                    self.client.tv_detail(media.id),
                    self.client.credits(media.id, MediaType::Tv),
                    self.client.reviews(media.id, MediaType::Tv),
                    self.client.watch_providers(media.id, MediaType::Tv, &region),
                )?;
                Ok(assemble_tv(detail, credits, reviews, providers, in_watchlist))
            }
            // People have no detail endpoints; show what the catalog
            // row already carried.
            MediaType::Person => Ok(person_bundle(media, in_watchlist)),
        }
    }
}

// ── Bundle assembly ─────────────────────────────────────────────

struct CreditPeople {
    cast: Vec<CastMember>,
    directors: Vec<CrewMember>,
    executive_producers: Vec<CrewMember>,
}

/// Slice credits: first 12 cast, first 4 directors, first 4 executive
/// producers, source order preserved.
fn split_credits(credits: CreditsRecord) -> CreditPeople {
    let mut cast = credits.cast;
    cast.truncate(CAST_LIMIT);

    let directors = credits
        .crew
        .iter()
        .filter(|member| member.job.as_deref() == Some("Director"))
        .take(CREW_LIMIT)
        .cloned()
        .collect();
    let executive_producers = credits
        .crew
        .iter()
        .filter(|member| member.job.as_deref() == Some("Executive Producer"))
        .take(CREW_LIMIT)
        .cloned()
        .collect();

    CreditPeople {
        cast,
        directors,
        executive_producers,
    }
}

fn quick_matches(providers: Option<&WatchProviderRegion>) -> Vec<QuickProvider> {
    providers
        .and_then(|region| region.flatrate.as_deref())
        .map(match_providers)
        .unwrap_or_default()
}

fn assemble_movie(
    detail: MovieDetailRecord,
    credits: CreditsRecord,
    mut reviews: Vec<Review>,
    mut providers: Option<WatchProviderRegion>,
    in_watchlist: bool,
) -> DetailBundle {
    let people = split_credits(credits);
    reviews.truncate(REVIEW_LIMIT);
    if let Some(region) = providers.as_mut() {
        region.sort_offers();
    }

    DetailBundle {
        title: detail.title,
        tagline: detail.tagline.filter(|t| !t.is_empty()),
        overview: detail.overview,
        release_year: release_year(detail.release_date.as_deref()),
        genres: detail.genres,
        cast: people.cast,
        directors: people.directors,
        creators: Vec::new(),
        executive_producers: people.executive_producers,
        reviews,
        quick_providers: quick_matches(providers.as_ref()),
        providers,
        in_watchlist,
    }
}

fn assemble_tv(
    detail: TvDetailRecord,
    credits: CreditsRecord,
    mut reviews: Vec<Review>,
    mut providers: Option<WatchProviderRegion>,
    in_watchlist: bool,
) -> DetailBundle {
    let people = split_credits(credits);
    reviews.truncate(REVIEW_LIMIT);
    if let Some(region) = providers.as_mut() {
        region.sort_offers();
    }

    // Executive producers are surfaced only when TMDB lists no creators.
    let executive_producers = if detail.created_by.is_empty() {
        people.executive_producers
    } else {
        Vec::new()
    };

    DetailBundle {
        title: detail.name,
        tagline: detail.tagline.filter(|t| !t.is_empty()),
        overview: detail.overview,
        release_year: release_year(detail.first_air_date.as_deref()),
        genres: detail.genres,
        cast: people.cast,
        directors: people.directors,
        creators: detail.created_by,
        executive_producers,
        reviews,
        quick_providers: quick_matches(providers.as_ref()),
        providers,
        in_watchlist,
    }
}

fn person_bundle(media: &MediaItem, in_watchlist: bool) -> DetailBundle {
    DetailBundle {
        title: media.title_text().to_string(),
        overview: media.overview.clone(),
        in_watchlist,
        ..DetailBundle::default()
    }
}

// ── Region lookup ───────────────────────────────────────────────

/// Two-letter region from the process locale (`LC_ALL` then `LANG`,
/// e.g. `en_US.UTF-8` → `US`), falling back to "US".
fn device_region() -> String {
    for var in ["LC_ALL", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            if let Some(region) = region_from_locale(&value) {
                return region;
            }
        }
    }
    "US".to_string()
}

fn region_from_locale(locale: &str) -> Option<String> {
    let tag = locale.split('.').next()?;
    let region = tag.split(['_', '-']).nth(1)?;
    (region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()))
        .then(|| region.to_ascii_uppercase())
}
