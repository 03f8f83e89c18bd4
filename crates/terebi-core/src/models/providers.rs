use serde::Deserialize;

/// A single streaming offer from TMDB's watch-provider listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WatchProvider {
    pub provider_id: u64,
    pub provider_name: String,
    pub logo_path: Option<String>,
    pub display_priority: Option<i32>,
}

/// Provider availability for one region, keyed by offer type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WatchProviderRegion {
    /// TMDB deep link for this title in this region.
    pub link: Option<String>,
    /// Subscription streaming.
    pub flatrate: Option<Vec<WatchProvider>>,
    pub rent: Option<Vec<WatchProvider>>,
    pub buy: Option<Vec<WatchProvider>>,
    pub free: Option<Vec<WatchProvider>>,
    /// Ad-supported streaming.
    pub ads: Option<Vec<WatchProvider>>,
}

impl WatchProviderRegion {
    /// Sort every offer list by display priority.
    pub fn sort_offers(&mut self) {
        for list in [
            &mut self.flatrate,
            &mut self.rent,
            &mut self.buy,
            &mut self.free,
            &mut self.ads,
        ]
        .into_iter()
        .flatten()
        {
            sort_by_priority(list);
        }
    }
}

/// Sort providers ascending by display priority; missing priority sorts
/// last. `sort_by_key` is stable, so equal priorities keep source order.
pub fn sort_by_priority(providers: &mut [WatchProvider]) {
    providers.sort_by_key(|p| p.display_priority.unwrap_or(i32::MAX));
}
