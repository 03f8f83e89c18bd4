//! Quick-launch shortcuts for recognized streaming providers.
//!
//! TMDB's provider listings carry display names only; this module maps the
//! well-known ones to their websites so a detail screen can offer "open in
//! Netflix"-style shortcuts.

use std::collections::HashSet;

use crate::models::WatchProvider;

/// Most shortcuts surfaced per detail screen.
const MAX_QUICK_PROVIDERS: usize = 6;

/// Ordered lookup table: lowercase name fragment → canonical site.
/// The first matching fragment wins, so more specific fragments come first.
const PROVIDER_SITES: &[(&str, &str)] = &[
    ("netflix", "https://www.netflix.com"),
    ("disney", "https://www.disneyplus.com"),
    ("hulu", "https://www.hulu.com"),
    ("apple tv", "https://tv.apple.com"),
    ("prime video", "https://www.amazon.com/gp/video"),
    ("amazon", "https://www.amazon.com/gp/video"),
    ("hbo", "https://www.max.com"),
    ("max", "https://www.max.com"),
    ("paramount", "https://www.paramountplus.com"),
    ("peacock", "https://www.peacocktv.com"),
    ("crunchyroll", "https://www.crunchyroll.com"),
    ("youtube", "https://www.youtube.com"),
    ("tubi", "https://tubitv.com"),
    ("pluto", "https://pluto.tv"),
    ("plex", "https://watch.plex.tv"),
    ("starz", "https://www.starz.com"),
    ("mubi", "https://mubi.com"),
];

/// A shortcut from a recognized provider to its website.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickProvider {
    pub provider_id: u64,
    pub name: String,
    pub url: &'static str,
}

/// Match providers against the site table, preserving input order.
///
/// Each provider id is considered at most once; the first fragment hit
/// wins; collection short-circuits at [`MAX_QUICK_PROVIDERS`].
pub fn match_providers(providers: &[WatchProvider]) -> Vec<QuickProvider> {
    let mut seen = HashSet::new();
    let mut matches = Vec::new();

    for provider in providers {
        if matches.len() == MAX_QUICK_PROVIDERS {
            break;
        }
        if !seen.insert(provider.provider_id) {
            continue;
        }
        let name = provider.provider_name.to_lowercase();
        if let Some((_, url)) = PROVIDER_SITES.iter().find(|(frag, _)| name.contains(frag)) {
            matches.push(QuickProvider {
                provider_id: provider.provider_id,
                name: provider.provider_name.clone(),
                url,
            });
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(id: u64, name: &str) -> WatchProvider {
        WatchProvider {
            provider_id: id,
            provider_name: name.into(),
            logo_path: None,
            display_priority: None,
        }
    }

    #[test]
    fn test_known_providers_match_in_input_order() {
        let providers = vec![
            provider(8, "Netflix"),
            provider(350, "Apple TV+"),
            provider(999, "UnknownCo"),
        ];
        let matches = match_providers(&providers);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].name, "Netflix");
        assert_eq!(matches[0].url, "https://www.netflix.com");
        assert_eq!(matches[1].name, "Apple TV+");
        assert_eq!(matches[1].url, "https://tv.apple.com");
    }

    #[test]
    fn test_duplicate_ids_match_once() {
        let providers = vec![provider(8, "Netflix"), provider(8, "Netflix")];
        assert_eq!(match_providers(&providers).len(), 1);
    }

    #[test]
    fn test_caps_at_six() {
        let providers: Vec<WatchProvider> = [
            "Netflix",
            "Hulu",
            "Disney Plus",
            "Max",
            "Peacock Premium",
            "Paramount+",
            "Crunchyroll",
        ]
        .iter()
        .enumerate()
        .map(|(i, name)| provider(i as u64 + 1, name))
        .collect();

        assert_eq!(match_providers(&providers).len(), 6);
    }
}
