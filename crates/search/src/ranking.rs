//! In-memory weighted ranking.
//!
//! Case-insensitive substring scoring over the fields a reader would scan,
//! title weighted highest. Equivalent to the server-side FTS path for
//! testing purposes; used where the collection is already in memory.

use portal_core::{MIN_QUERY_LEN, PortalItem, fold_diacritics};

/// Field weights, title first.
const TITLE_WEIGHT: f64 = 2.0;
const DESCRIPTION_WEIGHT: f64 = 1.5;
const SLUG_WEIGHT: f64 = 1.2;
const SUMMARY_WEIGHT: f64 = 0.8;

/// An item with its relevance score, higher is better.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedItem<'a> {
    pub item: &'a PortalItem,
    pub score: f64,
}

/// `query` must already be folded via [`fold_diacritics`].
fn field_score(field: &str, query: &str, weight: f64) -> f64 {
    let haystack = fold_diacritics(field);
    if !haystack.contains(query) {
        return 0.0;
    }
    // Whole-field and word-boundary matches outrank buried substrings
    if haystack == query {
        return weight * 3.0;
    }
    if haystack.split_whitespace().any(|w| w == query || w.starts_with(query)) {
        return weight * 2.0;
    }
    weight
}

fn item_score(item: &PortalItem, query: &str) -> f64 {
    field_score(&item.title, query, TITLE_WEIGHT)
        + field_score(&item.description, query, DESCRIPTION_WEIGHT)
        + field_score(&item.slug, query, SLUG_WEIGHT)
        + field_score(&item.summary, query, SUMMARY_WEIGHT)
}

/// Rank `items` against `query`, best first, capped at `limit`.
///
/// Queries shorter than [`MIN_QUERY_LEN`] characters rank nothing.
#[must_use]
pub fn rank_items<'a>(items: &'a [PortalItem], query: &str, limit: usize) -> Vec<RankedItem<'a>> {
    let query = fold_diacritics(query.trim());
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    let mut ranked: Vec<RankedItem<'a>> = items
        .iter()
        .map(|item| RankedItem { item, score: item_score(item, &query) })
        .filter(|r| r.score > 0.0)
        .collect();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "test code")]

    use chrono::Utc;
    use portal_core::{FoodData, ItemPayload, Macros, PortalItem};

    use super::*;

    fn food(slug: &str, title: &str, description: &str, summary: &str) -> PortalItem {
        PortalItem {
            id: format!("item-{slug}"),
            slug: slug.to_owned(),
            title: title.to_owned(),
            description: description.to_owned(),
            source: "UNICAMP/TACO".to_owned(),
            updated_at: Utc::now(),
            accent_color: "#3b82f6".to_owned(),
            summary: summary.to_owned(),
            highlights: vec![],
            affiliate: None,
            payload: ItemPayload::Food(FoodData {
                serving_size: "100g".to_owned(),
                macros: Macros { calories: 76.0, protein: 4.8, carbs: 13.6, fat: 0.5, fiber: 8.5 },
                micros: vec![],
            }),
        }
    }

    fn collection() -> Vec<PortalItem> {
        vec![
            food("feijao-carioca-cozido", "Feijão, carioca, cozido", "Leguminosas", ""),
            food("arroz-integral-cozido", "Arroz, integral, cozido", "Cereais", "Vai bem com feijão"),
            food("ovo-cozido", "Ovo, de galinha, inteiro, cozido", "Ovos", ""),
        ]
    }

    #[test]
    fn one_char_query_is_empty_not_error() {
        let items = collection();
        assert!(rank_items(&items, "f", 10).is_empty());
        assert!(rank_items(&items, " ", 10).is_empty());
    }

    #[test]
    fn title_match_outranks_summary_match() {
        let items = collection();
        let ranked = rank_items(&items, "feijao", 10);
        // "feijao" appears in the first item's slug+title region and in the
        // second item's summary only
        assert_eq!(ranked.first().unwrap().item.slug, "feijao-carioca-cozido");
        assert!(ranked.first().unwrap().score > ranked.last().unwrap().score);
    }

    #[test]
    fn matching_is_accent_insensitive() {
        let items = collection();
        assert_eq!(rank_items(&items, "feijao", 10).len(), 2);
        assert_eq!(rank_items(&items, "feijão", 10).len(), 2);
    }

    #[test]
    fn cap_limits_results() {
        let items = collection();
        let ranked = rank_items(&items, "cozido", 1);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn no_match_is_empty() {
        let items = collection();
        assert!(rank_items(&items, "picanha", 10).is_empty());
    }
}
