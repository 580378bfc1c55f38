//! Application state: route stack, listing coordinator and detail fetcher.
//!
//! All state lives on the main loop thread. The listing coordinator owns the
//! filter/page state and derives a [`QueryKey`] from it; the app loop calls
//! [`ListState::sync_fetch`] after every event so any key change turns into
//! exactly one fetch decision. Responses come back tagged with the key (or
//! id) they were issued for and are discarded when the tag no longer matches
//! the current state.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use ratatui::widgets::TableState;

use crate::api::{CharacterDetail, CharacterPage, QueryKey};
use crate::client::ClientError;

/// Quiet period before a typed search string is committed into the query key.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(2000);

/// Gender filter options, in cycle order. The upstream filter is
/// case-sensitive about `unknown`.
pub const GENDER_OPTIONS: [&str; 5] = ["", "Male", "Female", "unknown", "Genderless"];

/// Species filter options, in cycle order.
pub const SPECIES_OPTIONS: [&str; 8] = [
    "",
    "Human",
    "Alien",
    "Humanoid",
    "Robot",
    "Animal",
    "Mythological Creature",
    "unknown",
];

/// One entry of the in-app route stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Listing view; the page number is the only filter value that survives
    /// navigating away and back.
    List { page: u32 },
    /// Detail view for one character id.
    Detail { id: String },
}

/// Input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Keystrokes edit the search input.
    Search,
}

/// Render state of a fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Error(String),
}

/// What the app loop should do after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchDecision {
    /// Key unchanged, nothing to do.
    Idle,
    /// Key changed but a cached page was served; no request needed.
    Cached,
    /// Key changed; issue one request for this key.
    Issue(QueryKey),
}

/// Listing coordinator state.
#[derive(Debug)]
pub struct ListState {
    pub page: u32,
    gender_index: usize,
    species_index: usize,
    /// Raw search text, visible in the input box immediately.
    pub search_input: String,
    /// Search text as committed into the query key after the quiet period.
    pub committed_search: String,
    /// Pending trailing-edge commit; replaced on every keystroke.
    debounce_deadline: Option<Instant>,
    pub load: LoadState<CharacterPage>,
    /// Key the most recent fetch decision was made for.
    issued_key: Option<QueryKey>,
    /// Authoritative page bound from the most recent `info.pages`.
    pub known_pages: Option<u32>,
    /// Pages already resolved during this mount, keyed by query key.
    cache: HashMap<QueryKey, CharacterPage>,
    pub table: TableState,
}

impl ListState {
    pub fn new(page: u32) -> Self {
        Self {
            page: page.max(1),
            gender_index: 0,
            species_index: 0,
            search_input: String::new(),
            committed_search: String::new(),
            debounce_deadline: None,
            load: LoadState::Loading,
            issued_key: None,
            known_pages: None,
            cache: HashMap::new(),
            table: TableState::default(),
        }
    }

    pub fn gender(&self) -> &'static str {
        GENDER_OPTIONS[self.gender_index]
    }

    pub fn species(&self) -> &'static str {
        SPECIES_OPTIONS[self.species_index]
    }

    /// Derives the current query key from page and all active filter values.
    pub fn query_key(&self) -> QueryKey {
        QueryKey {
            page: self.page,
            gender: self.gender().to_string(),
            species: self.species().to_string(),
            search: self.committed_search.clone(),
        }
    }

    /// Sets the page, clamped to the last known `info.pages`. A page set
    /// before any bound is known is accepted as-is; the readout corrects
    /// itself once the first response arrives.
    pub fn set_page(&mut self, page: u32) {
        let page = page.max(1);
        self.page = match self.known_pages {
            Some(pages) => page.min(pages.max(1)),
            None => page,
        };
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Applies the next gender option immediately (no debounce).
    pub fn cycle_gender(&mut self) {
        self.gender_index = (self.gender_index + 1) % GENDER_OPTIONS.len();
    }

    /// Applies the next species option immediately (no debounce).
    pub fn cycle_species(&mut self) {
        self.species_index = (self.species_index + 1) % SPECIES_OPTIONS.len();
    }

    /// Appends to the raw search text and (re)arms the debounce deadline.
    pub fn push_search_char(&mut self, c: char) {
        self.search_input.push(c);
        self.arm_debounce();
    }

    /// Removes the last character and (re)arms the debounce deadline.
    pub fn pop_search_char(&mut self) {
        self.search_input.pop();
        self.arm_debounce();
    }

    /// Clears the search box and (re)arms the debounce deadline.
    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.arm_debounce();
    }

    fn arm_debounce(&mut self) {
        self.debounce_deadline = Some(Instant::now() + SEARCH_DEBOUNCE);
    }

    /// Commits the raw search text into the query key once the quiet period
    /// has passed. Called on every tick. Returns true when a commit happened.
    pub fn poll_debounce(&mut self) -> bool {
        self.poll_debounce_at(Instant::now())
    }

    fn poll_debounce_at(&mut self, now: Instant) -> bool {
        match self.debounce_deadline {
            Some(deadline) if now >= deadline => {
                self.debounce_deadline = None;
                self.committed_search = self.search_input.clone();
                true
            }
            _ => false,
        }
    }

    /// Compares the derived key against the last issued one and decides
    /// whether a fetch is needed. A key already resolved during this mount
    /// is served from cache without a new request.
    pub fn sync_fetch(&mut self) -> FetchDecision {
        let key = self.query_key();
        if self.issued_key.as_ref() == Some(&key) {
            return FetchDecision::Idle;
        }

        self.issued_key = Some(key.clone());
        if let Some(page) = self.cache.get(&key) {
            let page = page.clone();
            self.clamp_selection(page.results.len());
            self.load = LoadState::Loaded(page);
            return FetchDecision::Cached;
        }

        self.load = LoadState::Loading;
        FetchDecision::Issue(key)
    }

    /// Applies a listing result. Returns false when the result is stale,
    /// i.e. its key no longer matches the current derived key; stale results
    /// are dropped so an out-of-order arrival can never replace newer data.
    pub fn apply_characters(
        &mut self,
        key: QueryKey,
        result: Result<CharacterPage, ClientError>,
    ) -> bool {
        if key != self.query_key() {
            return false;
        }

        match result {
            Ok(page) => {
                self.known_pages = Some(page.info.pages);
                self.clamp_selection(page.results.len());
                self.cache.insert(key, page.clone());
                self.load = LoadState::Loaded(page);
            }
            Err(e) => {
                self.load = LoadState::Error(e.to_string());
            }
        }
        true
    }

    fn clamp_selection(&mut self, rows: usize) {
        if rows == 0 {
            self.table.select(None);
        } else {
            let selected = self.table.selected().unwrap_or(0).min(rows - 1);
            self.table.select(Some(selected));
        }
    }

    fn row_count(&self) -> usize {
        match &self.load {
            LoadState::Loaded(page) => page.results.len(),
            _ => 0,
        }
    }

    pub fn select_up(&mut self) {
        if self.row_count() > 0 {
            let selected = self.table.selected().unwrap_or(0).saturating_sub(1);
            self.table.select(Some(selected));
        }
    }

    pub fn select_down(&mut self) {
        let rows = self.row_count();
        if rows > 0 {
            let selected = (self.table.selected().unwrap_or(0) + 1).min(rows - 1);
            self.table.select(Some(selected));
        }
    }

    /// Id of the currently selected row, if any.
    pub fn selected_id(&self) -> Option<String> {
        let LoadState::Loaded(page) = &self.load else {
            return None;
        };
        let selected = self.table.selected()?;
        page.results.get(selected).map(|c| c.id.clone())
    }
}

/// Detail fetcher state: `Loading -> {Loaded | Error}`, terminal, no retry.
#[derive(Debug)]
pub struct DetailState {
    pub id: String,
    pub load: LoadState<CharacterDetail>,
    pub scroll: u16,
}

impl DetailState {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            load: LoadState::Loading,
            scroll: 0,
        }
    }

    /// Applies a detail result; a result tagged with a different id is
    /// dropped (it belongs to a view that was already left).
    pub fn apply_character(
        &mut self,
        id: &str,
        result: Result<CharacterDetail, ClientError>,
    ) -> bool {
        if id != self.id {
            return false;
        }
        self.load = match result {
            Ok(character) => LoadState::Loaded(character),
            Err(e) => LoadState::Error(e.to_string()),
        };
        true
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Route stack; the last entry is the current view.
    routes: Vec<Route>,
    pub list: ListState,
    /// Present while the detail view is mounted.
    pub detail: Option<DetailState>,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub help_scroll: usize,
}

impl AppState {
    pub fn new(start_page: u32) -> Self {
        let page = start_page.max(1);
        Self {
            routes: vec![Route::List { page }],
            list: ListState::new(page),
            detail: None,
            input_mode: InputMode::Normal,
            show_help: false,
            help_scroll: 0,
        }
    }

    /// The current route (top of the stack).
    pub fn route(&self) -> &Route {
        self.routes.last().expect("route stack is never empty")
    }

    pub fn on_list(&self) -> bool {
        matches!(self.route(), Route::List { .. })
    }

    /// Pushes the detail route and mounts a fresh detail fetch.
    pub fn open_detail(&mut self, id: String) {
        self.detail = Some(DetailState::new(id.clone()));
        self.routes.push(Route::Detail { id });
        self.input_mode = InputMode::Normal;
    }

    /// Pops the current route. Returning to the list remounts it with fresh
    /// filters; only the page number survives, via the route entry. Returns
    /// true when a pop happened.
    pub fn navigate_back(&mut self) -> bool {
        if self.routes.len() < 2 {
            return false;
        }
        self.routes.pop();
        if let Route::List { page } = self.route() {
            self.list = ListState::new(*page);
            self.detail = None;
        }
        true
    }

    /// Rewrites the page number on the list route entry. The navigation
    /// history side effect of changing pages: the page survives a round trip
    /// through the detail view while every other filter resets.
    pub fn record_page(&mut self) {
        let page = self.list.page;
        if let Some(Route::List { page: recorded }) = self.routes.first_mut() {
            *recorded = page;
        }
    }

    /// Routes a detail result to the mounted detail view, dropping it when
    /// the view is gone or keyed to another id.
    pub fn apply_detail(
        &mut self,
        id: &str,
        result: Result<CharacterDetail, ClientError>,
    ) -> bool {
        match &mut self.detail {
            Some(detail) => detail.apply_character(id, result),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CharacterSummary, PageInfo};

    fn page_of(names: &[&str], pages: u32) -> CharacterPage {
        CharacterPage {
            results: names
                .iter()
                .enumerate()
                .map(|(i, name)| CharacterSummary {
                    id: (i + 1).to_string(),
                    name: name.to_string(),
                    gender: "Female".to_string(),
                    species: "Human".to_string(),
                    image: String::new(),
                })
                .collect(),
            info: PageInfo {
                count: names.len() as u32,
                pages,
                next: None,
                prev: None,
            },
        }
    }

    #[test]
    fn each_filter_change_issues_exactly_one_fetch() {
        let mut list = ListState::new(1);

        let FetchDecision::Issue(initial) = list.sync_fetch() else {
            panic!("initial sync must issue a fetch");
        };
        assert_eq!(initial.page, 1);
        assert_eq!(list.sync_fetch(), FetchDecision::Idle);

        list.cycle_gender();
        let FetchDecision::Issue(key) = list.sync_fetch() else {
            panic!("gender change must issue a fetch");
        };
        assert_eq!(key.gender, "Male");
        assert_eq!(list.sync_fetch(), FetchDecision::Idle);

        list.cycle_species();
        let FetchDecision::Issue(key) = list.sync_fetch() else {
            panic!("species change must issue a fetch");
        };
        // The new key reflects all current values at once.
        assert_eq!(key.gender, "Male");
        assert_eq!(key.species, "Human");
        assert_eq!(key.search, "");
        assert_eq!(list.sync_fetch(), FetchDecision::Idle);
    }

    #[test]
    fn debounce_commits_once_after_quiet_period() {
        let mut list = ListState::new(1);
        list.push_search_char('a');
        list.push_search_char('b');
        list.push_search_char('c');

        // Still within the quiet window: nothing committed.
        assert!(!list.poll_debounce_at(Instant::now()));
        assert_eq!(list.committed_search, "");
        assert_eq!(list.search_input, "abc");

        // Past the deadline: exactly one commit, of the final text.
        let later = Instant::now() + SEARCH_DEBOUNCE + Duration::from_millis(1);
        assert!(list.poll_debounce_at(later));
        assert_eq!(list.committed_search, "abc");

        // The deadline is consumed; no second commit.
        assert!(!list.poll_debounce_at(later + Duration::from_secs(5)));
    }

    #[test]
    fn stale_response_is_discarded_in_favor_of_current_key() {
        let mut list = ListState::new(1);
        let FetchDecision::Issue(k1) = list.sync_fetch() else {
            panic!("expected fetch");
        };

        // Key changes to K2 while K1 is still in flight.
        list.next_page();
        let FetchDecision::Issue(k2) = list.sync_fetch() else {
            panic!("expected fetch");
        };

        // K2 resolves first, then K1 arrives late.
        assert!(list.apply_characters(k2, Ok(page_of(&["Summer Smith"], 42))));
        assert!(!list.apply_characters(k1, Ok(page_of(&["Rick Sanchez"], 42))));

        let LoadState::Loaded(page) = &list.load else {
            panic!("expected loaded state");
        };
        assert_eq!(page.results[0].name, "Summer Smith");
    }

    #[test]
    fn new_page_replaces_previous_data() {
        let mut list = ListState::new(1);
        let FetchDecision::Issue(k1) = list.sync_fetch() else {
            panic!("expected fetch");
        };
        assert!(list.apply_characters(k1, Ok(page_of(&["Rick Sanchez", "Morty Smith"], 42))));

        list.next_page();
        let FetchDecision::Issue(k2) = list.sync_fetch() else {
            panic!("expected fetch");
        };
        assert_eq!(list.load, LoadState::Loading);
        assert!(list.apply_characters(k2, Ok(page_of(&["Beth Smith"], 42))));

        let LoadState::Loaded(page) = &list.load else {
            panic!("expected loaded state");
        };
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].name, "Beth Smith");
    }

    #[test]
    fn info_pages_is_the_authoritative_page_bound() {
        let mut list = ListState::new(1);

        // Bound not yet known: any page is accepted.
        list.set_page(99);
        assert_eq!(list.page, 99);

        let key = list.query_key();
        let _ = list.sync_fetch();
        assert!(list.apply_characters(key, Ok(page_of(&[], 42))));
        assert_eq!(list.known_pages, Some(42));

        // Once known, the bound clamps further page changes.
        list.set_page(50);
        assert_eq!(list.page, 42);
        list.set_page(42);
        list.next_page();
        assert_eq!(list.page, 42);
        list.set_page(0);
        assert_eq!(list.page, 1);
    }

    #[test]
    fn empty_results_render_zero_rows_but_keep_page_info() {
        let mut list = ListState::new(1);
        list.cycle_gender();
        list.cycle_gender(); // Female
        list.cycle_species(); // Human

        let FetchDecision::Issue(key) = list.sync_fetch() else {
            panic!("expected fetch");
        };
        assert_eq!(key.gender, "Female");
        assert_eq!(key.species, "Human");
        assert_eq!(key.search, "");
        assert_eq!(key.page, 1);

        assert!(list.apply_characters(key, Ok(page_of(&[], 3))));
        let LoadState::Loaded(page) = &list.load else {
            panic!("expected loaded state");
        };
        assert!(page.results.is_empty());
        assert_eq!(list.known_pages, Some(3));
        assert_eq!(list.table.selected(), None);
    }

    #[test]
    fn identical_key_is_served_from_cache_without_a_request() {
        let mut list = ListState::new(1);
        let FetchDecision::Issue(k1) = list.sync_fetch() else {
            panic!("expected fetch");
        };
        assert!(list.apply_characters(k1, Ok(page_of(&["Rick Sanchez"], 42))));

        list.next_page();
        let FetchDecision::Issue(k2) = list.sync_fetch() else {
            panic!("expected fetch");
        };
        assert!(list.apply_characters(k2, Ok(page_of(&["Jerry Smith"], 42))));

        // Going back to page 1 revisits a resolved key.
        list.prev_page();
        assert_eq!(list.sync_fetch(), FetchDecision::Cached);
        let LoadState::Loaded(page) = &list.load else {
            panic!("expected loaded state");
        };
        assert_eq!(page.results[0].name, "Rick Sanchez");
    }

    #[test]
    fn fetch_failure_becomes_error_state() {
        let mut list = ListState::new(1);
        let FetchDecision::Issue(key) = list.sync_fetch() else {
            panic!("expected fetch");
        };
        assert!(list.apply_characters(key, Err(ClientError::Transport("boom".to_string()))));
        assert_eq!(
            list.load,
            LoadState::Error("request failed: boom".to_string())
        );
    }

    fn detail_of(name: &str) -> CharacterDetail {
        CharacterDetail {
            id: "999".to_string(),
            name: name.to_string(),
            gender: "Male".to_string(),
            species: "Human".to_string(),
            image: String::new(),
            status: "Alive".to_string(),
            location: crate::api::Location {
                name: "Earth".to_string(),
            },
            created: "2020-01-02T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn detail_error_carries_upstream_message() {
        let mut detail = DetailState::new("999");
        assert!(detail.apply_character(
            "999",
            Err(ClientError::Api("404: Not Found".to_string()))
        ));
        assert_eq!(detail.load, LoadState::Error("404: Not Found".to_string()));
    }

    #[test]
    fn detail_result_for_another_id_is_dropped() {
        let mut detail = DetailState::new("2");
        assert!(!detail.apply_character("1", Ok(detail_of("Rick Sanchez"))));
        assert_eq!(detail.load, LoadState::Loading);
    }

    #[test]
    fn detail_result_after_unmount_is_dropped() {
        let mut state = AppState::new(1);
        state.open_detail("7".to_string());
        assert!(state.navigate_back());

        // The in-flight result lands after the view was left.
        assert!(!state.apply_detail("7", Ok(detail_of("Abadango Cluster Princess"))));
        assert!(state.detail.is_none());
    }

    #[test]
    fn back_navigation_resets_filters_but_keeps_the_page() {
        let mut state = AppState::new(1);
        state.list.set_page(5);
        state.record_page();
        state.list.cycle_gender();
        state.list.push_search_char('x');

        state.open_detail("1".to_string());
        assert!(!state.on_list());
        assert!(state.navigate_back());
        assert!(state.on_list());

        assert_eq!(state.list.page, 5);
        assert_eq!(state.list.gender(), "");
        assert_eq!(state.list.search_input, "");
        assert_eq!(state.list.committed_search, "");
    }

    #[test]
    fn back_on_the_root_route_is_a_no_op() {
        let mut state = AppState::new(1);
        assert!(!state.navigate_back());
        assert!(state.on_list());
    }
}
