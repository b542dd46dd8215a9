//! Query-string construction for `/Users/{id}/Items`.
//!
//! Pure functions so every parameter combination stays unit-testable
//! without a server.

use kurage_core::browse::{PageRequest, PlayedFilter};

/// Fields requested for browse pages.
pub const SUMMARY_FIELDS: &str = "OriginalTitle,ProductionYear,PremiereDate,RunTimeTicks,\
     ChildCount,RecursiveItemCount,CommunityRating,Taglines,Genres,UserData";

/// Fields requested for the detail and random-pick fetches.
pub const DETAIL_FIELDS: &str = "Overview,People,ProviderIds,Genres,ProductionYear,PremiereDate,\
     RunTimeTicks,Taglines,Tags,UserData,OriginalTitle,ChildCount,RecursiveItemCount,\
     CommunityRating";

/// Build the parameter list for a browse page fetch.
///
/// A search term widens the query to a recursive walk across libraries
/// and drops the scope, the way the web UI's global search behaves; a
/// plain scoped browse lists a single library non-recursively.
pub fn item_query(req: &PageRequest) -> Vec<(&'static str, String)> {
    let mut params: Vec<(&'static str, String)> = vec![
        ("EnableUserData", "true".into()),
        ("EnableTotalRecordCount", "true".into()),
        ("ImageTypeLimit", "1".into()),
        ("SortBy", "SortName".into()),
        ("SortOrder", "Ascending".into()),
        ("IncludeItemTypes", "Movie,Series".into()),
    ];

    if let Some(term) = req.filters.search_term() {
        params.push(("Recursive", "true".into()));
        params.push(("SearchTerm", term.into()));
    } else if let Some(scope) = &req.scope {
        params.push(("ParentId", scope.clone()));
    } else {
        params.push(("Recursive", "true".into()));
    }

    if let Some(genre) = &req.filters.genre_id {
        params.push(("GenreIds", genre.clone()));
    }
    if let Some(year) = req.filters.year {
        params.push(("Years", year.to_string()));
    }
    if let Some(filter) = played_param(req.filters.played) {
        params.push(("Filters", filter.into()));
    }

    params.push(("Fields", SUMMARY_FIELDS.into()));
    params.push(("StartIndex", req.offset.to_string()));
    params.push(("Limit", req.limit.to_string()));
    params
}

/// Build the parameter list for a random single-item pick.
pub fn random_query(scope: Option<&str>, exclude_played: bool) -> Vec<(&'static str, String)> {
    let mut params: Vec<(&'static str, String)> = vec![
        ("SortBy", "Random".into()),
        ("Limit", "1".into()),
        ("Recursive", "true".into()),
        ("EnableUserData", "true".into()),
        ("IncludeItemTypes", "Movie,Series".into()),
        ("Fields", DETAIL_FIELDS.into()),
    ];
    if let Some(scope) = scope {
        params.push(("ParentId", scope.into()));
    }
    if exclude_played {
        params.push(("Filters", "IsUnplayed".into()));
    }
    params
}

/// Build the parameter list for a series' season listing.
pub fn seasons_query(series_id: &str) -> Vec<(&'static str, String)> {
    vec![
        ("ParentId", series_id.into()),
        ("IncludeItemTypes", "Season".into()),
        ("SortBy", "ParentIndexNumber".into()),
        ("SortOrder", "Ascending".into()),
        ("Fields", "ChildCount,UserData".into()),
    ]
}

fn played_param(played: PlayedFilter) -> Option<&'static str> {
    match played {
        PlayedFilter::Any => None,
        PlayedFilter::Played => Some("IsPlayed"),
        PlayedFilter::Unplayed => Some("IsUnplayed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurage_core::browse::{FilterSet, PAGE_SIZE};

    fn request(scope: Option<&str>, filters: FilterSet, offset: usize) -> PageRequest {
        PageRequest {
            epoch: 1,
            scope: scope.map(String::from),
            filters,
            offset,
            limit: PAGE_SIZE,
        }
    }

    fn value<'a>(params: &'a [(&str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn scoped_browse_is_non_recursive() {
        let params = item_query(&request(Some("lib-1"), FilterSet::default(), 0));
        assert_eq!(value(&params, "ParentId"), Some("lib-1"));
        assert_eq!(value(&params, "Recursive"), None);
        assert_eq!(value(&params, "SearchTerm"), None);
        assert_eq!(value(&params, "StartIndex"), Some("0"));
        assert_eq!(value(&params, "Limit"), Some("50"));
        assert_eq!(value(&params, "SortBy"), Some("SortName"));
        assert_eq!(value(&params, "IncludeItemTypes"), Some("Movie,Series"));
    }

    #[test]
    fn search_widens_to_recursive_and_drops_scope() {
        let filters = FilterSet {
            search: "  matrix ".into(),
            ..Default::default()
        };
        let params = item_query(&request(Some("lib-1"), filters, 0));
        assert_eq!(value(&params, "Recursive"), Some("true"));
        assert_eq!(value(&params, "SearchTerm"), Some("matrix"));
        assert_eq!(value(&params, "ParentId"), None);
    }

    #[test]
    fn blank_search_is_not_sent() {
        let filters = FilterSet {
            search: "   ".into(),
            ..Default::default()
        };
        let params = item_query(&request(Some("lib-1"), filters, 0));
        assert_eq!(value(&params, "SearchTerm"), None);
        assert_eq!(value(&params, "ParentId"), Some("lib-1"));
    }

    #[test]
    fn unscoped_browse_is_recursive() {
        let params = item_query(&request(None, FilterSet::default(), 50));
        assert_eq!(value(&params, "Recursive"), Some("true"));
        assert_eq!(value(&params, "ParentId"), None);
        assert_eq!(value(&params, "StartIndex"), Some("50"));
    }

    #[test]
    fn predicates_map_to_server_params() {
        let filters = FilterSet {
            genre_id: Some("g-9".into()),
            year: Some(1999),
            played: PlayedFilter::Unplayed,
            ..Default::default()
        };
        let params = item_query(&request(Some("lib-1"), filters, 0));
        assert_eq!(value(&params, "GenreIds"), Some("g-9"));
        assert_eq!(value(&params, "Years"), Some("1999"));
        assert_eq!(value(&params, "Filters"), Some("IsUnplayed"));

        let filters = FilterSet {
            played: PlayedFilter::Played,
            ..Default::default()
        };
        let params = item_query(&request(Some("lib-1"), filters, 0));
        assert_eq!(value(&params, "Filters"), Some("IsPlayed"));
    }

    #[test]
    fn random_query_respects_scope_and_played_toggle() {
        let params = random_query(Some("lib-1"), true);
        assert_eq!(value(&params, "SortBy"), Some("Random"));
        assert_eq!(value(&params, "Limit"), Some("1"));
        assert_eq!(value(&params, "ParentId"), Some("lib-1"));
        assert_eq!(value(&params, "Filters"), Some("IsUnplayed"));

        let params = random_query(None, false);
        assert_eq!(value(&params, "ParentId"), None);
        assert_eq!(value(&params, "Filters"), None);
    }

    #[test]
    fn seasons_query_sorts_by_season_index() {
        let params = seasons_query("series-1");
        assert_eq!(value(&params, "ParentId"), Some("series-1"));
        assert_eq!(value(&params, "SortBy"), Some("ParentIndexNumber"));
        assert_eq!(value(&params, "SortOrder"), Some("Ascending"));
    }
}
