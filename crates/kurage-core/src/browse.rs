//! The item-browsing pipeline: debounced search, cursor pagination and
//! stale-request supersession.
//!
//! `BrowseController` is a plain state machine with no I/O. Every mutation
//! returns a [`Command`] telling the caller what to do next — run a page
//! fetch, arm the search debounce timer, or nothing. Fetch results come
//! back through [`BrowseController::apply_page`] / [`fail_page`] tagged
//! with the epoch they were issued under; results from a superseded epoch
//! are discarded, never merged.
//!
//! One *epoch* is the lifetime of a distinct (library scope, filter set)
//! combination. Changing any part of it clears the result list, resets the
//! cursor and bumps the epoch counter.

use crate::models::MediaItem;

/// Items requested per page.
pub const PAGE_SIZE: usize = 50;

/// Quiet period after the last search keystroke before a fetch fires,
/// in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Play-state predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayedFilter {
    /// No play-state restriction.
    #[default]
    Any,
    Played,
    Unplayed,
}

/// The active filter combination. Mutating any field starts a new epoch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSet {
    pub search: String,
    pub genre_id: Option<String>,
    pub year: Option<u32>,
    pub played: PlayedFilter,
}

impl FilterSet {
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search.trim();
        (!term.is_empty()).then_some(term)
    }

    /// True when any predicate beyond the default is active.
    pub fn is_restricted(&self) -> bool {
        self.genre_id.is_some() || self.year.is_some() || self.played != PlayedFilter::Any
    }
}

/// One page fetch, tagged with the epoch it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub epoch: u64,
    /// Library scope; `None` browses across all libraries.
    pub scope: Option<String>,
    pub filters: FilterSet,
    pub offset: usize,
    pub limit: usize,
}

impl PageRequest {
    /// The server walks folder trees when searching globally; a scoped
    /// browse lists only direct children.
    pub fn recursive(&self) -> bool {
        self.scope.is_none() || self.filters.search_term().is_some()
    }
}

/// A fetched page of results.
#[derive(Debug, Clone, Default)]
pub struct ItemPage {
    pub items: Vec<MediaItem>,
    pub total_count: u64,
}

/// What the caller should do after a controller mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    None,
    /// Run this page fetch now.
    Fetch(PageRequest),
    /// Wait [`SEARCH_DEBOUNCE_MS`], then call
    /// [`BrowseController::debounce_elapsed`] with this generation.
    Debounce { generation: u64 },
}

/// Lifecycle of the current epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowsePhase {
    /// No fetch has run (or the first page failed).
    #[default]
    Idle,
    /// First page of the epoch in flight.
    Loading,
    /// At least one page applied; more may be available.
    Loaded,
    /// A follow-up page in flight.
    LoadingMore,
    /// The last page came up short; the cursor is done.
    Exhausted,
}

/// Paginated, filterable result list for one library scope.
#[derive(Debug, Default)]
pub struct BrowseController {
    scope: Option<String>,
    filters: FilterSet,
    items: Vec<MediaItem>,
    total_count: u64,
    /// Offset of the next page to fetch.
    next_offset: usize,
    /// Offset of the page currently in flight, if any.
    pending_offset: Option<usize>,
    has_more: bool,
    phase: BrowsePhase,
    epoch: u64,
    debounce_generation: u64,
    last_error: Option<String>,
}

impl BrowseController {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Accessors ─────────────────────────────────────────────────

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Total match count as reported by the first page of this epoch.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn phase(&self) -> BrowsePhase {
        self.phase
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, BrowsePhase::Loading | BrowsePhase::LoadingMore)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // ── Epoch triggers ────────────────────────────────────────────

    /// Enter a library (or `None` for the all-libraries view), dropping
    /// any search/filter state from the previous scope.
    pub fn set_scope(&mut self, scope: Option<String>) -> Command {
        if self.scope == scope && self.epoch > 0 {
            return Command::None;
        }
        self.scope = scope;
        self.filters = FilterSet::default();
        self.begin_epoch();
        Command::Fetch(self.page_request())
    }

    /// Update the search term. The fetch is deferred behind the debounce
    /// timer; only the generation returned last wins.
    pub fn set_search(&mut self, search: String) -> Command {
        if self.filters.search == search {
            return Command::None;
        }
        self.filters.search = search;
        self.begin_epoch();
        Command::Debounce {
            generation: self.debounce_generation,
        }
    }

    /// Called after the quiet period. Fires the fetch only if no newer
    /// search edit arrived in the meantime.
    pub fn debounce_elapsed(&mut self, generation: u64) -> Command {
        if generation != self.debounce_generation {
            return Command::None;
        }
        Command::Fetch(self.page_request())
    }

    pub fn set_genre(&mut self, genre_id: Option<String>) -> Command {
        if self.filters.genre_id == genre_id {
            return Command::None;
        }
        self.filters.genre_id = genre_id;
        self.begin_epoch();
        Command::Fetch(self.page_request())
    }

    pub fn set_year(&mut self, year: Option<u32>) -> Command {
        if self.filters.year == year {
            return Command::None;
        }
        self.filters.year = year;
        self.begin_epoch();
        Command::Fetch(self.page_request())
    }

    pub fn set_played(&mut self, played: PlayedFilter) -> Command {
        if self.filters.played == played {
            return Command::None;
        }
        self.filters.played = played;
        self.begin_epoch();
        Command::Fetch(self.page_request())
    }

    /// Restart the current epoch from offset 0, keeping scope and filters.
    pub fn refresh(&mut self) -> Command {
        self.begin_epoch();
        Command::Fetch(self.page_request())
    }

    // ── Pagination ────────────────────────────────────────────────

    /// The visibility signal at the end of the list. Fires a follow-up
    /// fetch only from `Loaded` with more pages available — a signal
    /// arriving while a fetch is in flight is ignored.
    pub fn load_more(&mut self) -> Command {
        if self.phase != BrowsePhase::Loaded || !self.has_more {
            return Command::None;
        }
        self.phase = BrowsePhase::LoadingMore;
        Command::Fetch(self.page_request())
    }

    /// Merge a fetched page. Returns `false` when the page belonged to a
    /// superseded epoch and was discarded.
    pub fn apply_page(&mut self, epoch: u64, page: ItemPage) -> bool {
        if epoch != self.epoch {
            tracing::debug!(epoch, current = self.epoch, "Discarding stale page");
            return false;
        }
        let offset = self.pending_offset.take().unwrap_or(self.next_offset);
        let first_page = offset == 0;

        if first_page {
            self.total_count = page.total_count;
        }
        // Pagination is decided on the size the server returned, before
        // the local play-state pass below can shrink the page.
        self.has_more = page.items.len() == PAGE_SIZE;

        let mut items = page.items;
        if self.filters.played == PlayedFilter::Unplayed {
            items.retain(|item| !item.is_played());
        }

        if first_page {
            self.items = items;
        } else {
            self.items.extend(items);
        }

        self.next_offset = offset + PAGE_SIZE;
        self.phase = if self.has_more {
            BrowsePhase::Loaded
        } else {
            BrowsePhase::Exhausted
        };
        self.last_error = None;
        true
    }

    /// Record a failed fetch. The list and cursor stay untouched so the
    /// same trigger can re-fire; a failed first page returns to `Idle`.
    pub fn fail_page(&mut self, epoch: u64, error: String) -> bool {
        if epoch != self.epoch {
            return false;
        }
        tracing::warn!("Page fetch failed: {error}");
        let offset = self.pending_offset.take();
        self.phase = match offset {
            Some(0) | None => BrowsePhase::Idle,
            Some(_) => BrowsePhase::Loaded,
        };
        self.last_error = Some(error);
        true
    }

    // ── Internals ─────────────────────────────────────────────────

    fn begin_epoch(&mut self) {
        self.epoch += 1;
        // Any epoch start supersedes a pending debounced fetch; the new
        // epoch either fetches immediately or arms a fresh generation.
        self.debounce_generation += 1;
        self.items.clear();
        self.total_count = 0;
        self.next_offset = 0;
        self.pending_offset = None;
        self.has_more = true;
        self.phase = BrowsePhase::Loading;
        self.last_error = None;
    }

    fn page_request(&mut self) -> PageRequest {
        self.pending_offset = Some(self.next_offset);
        PageRequest {
            epoch: self.epoch,
            scope: self.scope.clone(),
            filters: self.filters.clone(),
            offset: self.next_offset,
            limit: PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserData;

    fn item(id: &str) -> MediaItem {
        MediaItem {
            id: id.into(),
            name: id.into(),
            ..Default::default()
        }
    }

    fn played_item(id: &str) -> MediaItem {
        MediaItem {
            user_data: Some(UserData {
                played: true,
                ..Default::default()
            }),
            ..item(id)
        }
    }

    fn page_of(count: usize, start: usize, total: u64) -> ItemPage {
        ItemPage {
            items: (start..start + count)
                .map(|i| item(&format!("item-{i}")))
                .collect(),
            total_count: total,
        }
    }

    fn fetch(cmd: Command) -> PageRequest {
        match cmd {
            Command::Fetch(req) => req,
            other => panic!("expected Fetch, got {other:?}"),
        }
    }

    fn debounce(cmd: Command) -> u64 {
        match cmd {
            Command::Debounce { generation } => generation,
            other => panic!("expected Debounce, got {other:?}"),
        }
    }

    #[test]
    fn scope_entry_fetches_first_page() {
        let mut browse = BrowseController::new();
        let req = fetch(browse.set_scope(Some("movies".into())));
        assert_eq!(req.offset, 0);
        assert_eq!(req.limit, PAGE_SIZE);
        assert!(!req.recursive());
        assert_eq!(browse.phase(), BrowsePhase::Loading);
    }

    #[test]
    fn global_search_is_recursive() {
        let mut browse = BrowseController::new();
        fetch(browse.set_scope(None));
        let generation = debounce(browse.set_search("matrix".into()));
        let req = fetch(browse.debounce_elapsed(generation));
        assert!(req.recursive());
        assert_eq!(req.filters.search_term(), Some("matrix"));
    }

    #[test]
    fn scoped_search_is_recursive_too() {
        let mut browse = BrowseController::new();
        fetch(browse.set_scope(Some("movies".into())));
        let generation = debounce(browse.set_search("heat".into()));
        let req = fetch(browse.debounce_elapsed(generation));
        assert!(req.recursive());
        assert_eq!(req.scope.as_deref(), Some("movies"));
    }

    #[test]
    fn full_page_scenario_three_pages() {
        // §8 scenario: 50-item pages, total 420, two load-mores → 150 items.
        let mut browse = BrowseController::new();
        let req = fetch(browse.set_scope(Some("movies".into())));
        assert!(browse.apply_page(req.epoch, page_of(50, 0, 420)));
        assert_eq!(browse.total_count(), 420);
        assert!(browse.has_more());
        assert_eq!(browse.phase(), BrowsePhase::Loaded);

        let req = fetch(browse.load_more());
        assert_eq!(req.offset, 50);
        assert!(browse.apply_page(req.epoch, page_of(50, 50, 420)));

        let req = fetch(browse.load_more());
        assert_eq!(req.offset, 100);
        assert!(browse.apply_page(req.epoch, page_of(50, 100, 420)));

        assert_eq!(browse.items().len(), 150);
        assert_eq!(browse.phase(), BrowsePhase::Loaded);
    }

    #[test]
    fn short_page_exhausts_pagination() {
        let mut browse = BrowseController::new();
        let req = fetch(browse.set_scope(Some("movies".into())));
        browse.apply_page(req.epoch, page_of(12, 0, 12));
        assert!(!browse.has_more());
        assert_eq!(browse.phase(), BrowsePhase::Exhausted);
        assert_eq!(browse.load_more(), Command::None);
    }

    #[test]
    fn empty_first_page_is_not_an_error() {
        let mut browse = BrowseController::new();
        let req = fetch(browse.set_scope(Some("movies".into())));
        browse.apply_page(req.epoch, ItemPage::default());
        assert!(browse.items().is_empty());
        assert_eq!(browse.total_count(), 0);
        assert!(browse.last_error().is_none());
        assert_eq!(browse.phase(), BrowsePhase::Exhausted);
    }

    #[test]
    fn load_more_while_in_flight_is_ignored() {
        let mut browse = BrowseController::new();
        let req = fetch(browse.set_scope(Some("movies".into())));
        browse.apply_page(req.epoch, page_of(50, 0, 100));
        let _in_flight = fetch(browse.load_more());
        // Second signal while LoadingMore: re-entrancy guard.
        assert_eq!(browse.load_more(), Command::None);
    }

    #[test]
    fn load_more_before_first_page_is_ignored() {
        let mut browse = BrowseController::new();
        fetch(browse.set_scope(Some("movies".into())));
        assert_eq!(browse.load_more(), Command::None);
    }

    #[test]
    fn stale_epoch_page_is_discarded() {
        let mut browse = BrowseController::new();
        let old = fetch(browse.set_scope(Some("movies".into())));
        // Filter changes while the first fetch is still in flight.
        let new = fetch(browse.set_year(Some(1999)));
        assert!(!browse.apply_page(old.epoch, page_of(50, 0, 420)));
        assert!(browse.items().is_empty());
        assert_eq!(browse.phase(), BrowsePhase::Loading);
        // The current epoch's page still lands.
        assert!(browse.apply_page(new.epoch, page_of(7, 0, 7)));
        assert_eq!(browse.items().len(), 7);
    }

    #[test]
    fn settled_list_reflects_last_filters_only() {
        let mut browse = BrowseController::new();
        let first = fetch(browse.set_scope(Some("movies".into())));
        let second = fetch(browse.set_genre(Some("g1".into())));
        let third = fetch(browse.set_genre(Some("g2".into())));

        // Responses arrive late and out of order.
        assert!(!browse.apply_page(second.epoch, page_of(50, 0, 99)));
        assert!(browse.apply_page(third.epoch, page_of(3, 0, 3)));
        assert!(!browse.apply_page(first.epoch, page_of(50, 0, 420)));

        assert_eq!(browse.items().len(), 3);
        assert_eq!(browse.total_count(), 3);
        assert_eq!(browse.filters().genre_id.as_deref(), Some("g2"));
    }

    #[test]
    fn debounce_coalesces_keystrokes() {
        // §8 scenario: three keystrokes, one fetch with the final text.
        let mut browse = BrowseController::new();
        fetch(browse.set_scope(None));
        let g1 = debounce(browse.set_search("m".into()));
        let g2 = debounce(browse.set_search("ma".into()));
        let g3 = debounce(browse.set_search("matrix".into()));

        assert_eq!(browse.debounce_elapsed(g1), Command::None);
        assert_eq!(browse.debounce_elapsed(g2), Command::None);
        let req = fetch(browse.debounce_elapsed(g3));
        assert_eq!(req.filters.search, "matrix");
    }

    #[test]
    fn filter_change_cancels_pending_debounce() {
        // A genre click during the quiet period fetches immediately with
        // the typed text included; the stale timer must not fire a
        // second fetch into the new epoch.
        let mut browse = BrowseController::new();
        fetch(browse.set_scope(Some("movies".into())));
        let generation = debounce(browse.set_search("ma".into()));
        let req = fetch(browse.set_genre(Some("g1".into())));
        assert_eq!(req.filters.search, "ma");
        assert_eq!(browse.debounce_elapsed(generation), Command::None);
    }

    #[test]
    fn unchanged_search_does_not_restart_epoch() {
        let mut browse = BrowseController::new();
        let req = fetch(browse.set_scope(Some("movies".into())));
        browse.apply_page(req.epoch, page_of(50, 0, 420));
        assert_eq!(browse.set_search(String::new()), Command::None);
        assert_eq!(browse.items().len(), 50);
    }

    #[test]
    fn unplayed_post_filter_drops_played_rows() {
        // §8 scenario: 50 fetched, 3 played → 47 kept, has_more from 50.
        let mut browse = BrowseController::new();
        fetch(browse.set_scope(Some("movies".into())));
        let req = fetch(browse.set_played(PlayedFilter::Unplayed));

        let mut page = page_of(47, 0, 420);
        page.items.push(played_item("p-1"));
        page.items.push(played_item("p-2"));
        page.items.push(played_item("p-3"));
        assert_eq!(page.items.len(), 50);

        browse.apply_page(req.epoch, page);
        assert_eq!(browse.items().len(), 47);
        assert!(browse.has_more());
        assert_eq!(browse.phase(), BrowsePhase::Loaded);
    }

    #[test]
    fn played_filter_keeps_played_rows() {
        let mut browse = BrowseController::new();
        fetch(browse.set_scope(Some("movies".into())));
        let req = fetch(browse.set_played(PlayedFilter::Played));
        let mut page = page_of(4, 0, 5);
        page.items.push(played_item("p-1"));
        browse.apply_page(req.epoch, page);
        // Server-side filtering is trusted for Played; no local pass.
        assert_eq!(browse.items().len(), 5);
    }

    #[test]
    fn failed_first_page_returns_to_idle() {
        let mut browse = BrowseController::new();
        let req = fetch(browse.set_scope(Some("movies".into())));
        assert!(browse.fail_page(req.epoch, "boom".into()));
        assert_eq!(browse.phase(), BrowsePhase::Idle);
        assert_eq!(browse.last_error(), Some("boom"));
        assert!(browse.items().is_empty());
        // Refresh retries the same combination under a new epoch.
        let retry = fetch(browse.refresh());
        assert_eq!(retry.offset, 0);
        assert!(retry.epoch > req.epoch);
    }

    #[test]
    fn failed_load_more_rearms_the_trigger() {
        let mut browse = BrowseController::new();
        let req = fetch(browse.set_scope(Some("movies".into())));
        browse.apply_page(req.epoch, page_of(50, 0, 420));

        let more = fetch(browse.load_more());
        assert!(browse.fail_page(more.epoch, "timeout".into()));
        assert_eq!(browse.phase(), BrowsePhase::Loaded);
        assert_eq!(browse.items().len(), 50);

        // Same trigger fires again at the same offset.
        let retry = fetch(browse.load_more());
        assert_eq!(retry.offset, 50);
        assert!(browse.apply_page(retry.epoch, page_of(50, 50, 420)));
        assert_eq!(browse.items().len(), 100);
    }

    #[test]
    fn stale_failure_is_discarded() {
        let mut browse = BrowseController::new();
        let old = fetch(browse.set_scope(Some("movies".into())));
        let new = fetch(browse.set_year(Some(2001)));
        assert!(!browse.fail_page(old.epoch, "late failure".into()));
        assert_eq!(browse.phase(), BrowsePhase::Loading);
        assert!(browse.apply_page(new.epoch, page_of(1, 0, 1)));
    }

    #[test]
    fn idempotent_refetch_yields_same_order() {
        let mut browse = BrowseController::new();
        let first = fetch(browse.set_scope(Some("movies".into())));
        browse.apply_page(first.epoch, page_of(50, 0, 420));
        let ids_a: Vec<String> = browse.items().iter().map(|i| i.id.clone()).collect();

        let again = fetch(browse.refresh());
        assert_eq!(again.offset, first.offset);
        assert_eq!(again.filters, first.filters);
        browse.apply_page(again.epoch, page_of(50, 0, 420));
        let ids_b: Vec<String> = browse.items().iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn scope_change_resets_filters() {
        let mut browse = BrowseController::new();
        fetch(browse.set_scope(Some("movies".into())));
        fetch(browse.set_year(Some(1984)));
        let req = fetch(browse.set_scope(Some("shows".into())));
        assert_eq!(req.filters, FilterSet::default());
        assert_eq!(browse.total_count(), 0);
    }
}
