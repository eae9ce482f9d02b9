use super::filter;
use super::slug::ALL_CATEGORIES;
use super::types::{Category, CategoryId, Game, GameId, LaunchTarget, SiteConfig};

/// The loaded catalog plus the two filter inputs.
///
/// Read access is free; the collections are only mutated through the
/// `pub(crate)` merge methods, which the controller calls after the backend
/// has acknowledged a write.
#[derive(Debug, Clone)]
pub struct CatalogState {
    games: Vec<Game>,
    categories: Vec<Category>,
    site_config: SiteConfig,
    active_category: String,
    search_query: String,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), SiteConfig::default())
    }
}

/// What the game grid should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView<'a> {
    /// Nothing matches the current filters.
    Empty,
    Games(Vec<GameCard<'a>>),
}

/// One grid card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCard<'a> {
    pub game: &'a Game,
    pub category_name: &'a str,
}

/// One entry of the category navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTab {
    pub slug: String,
    pub label: String,
    pub active: bool,
}

/// Label of the navigation tab that clears the category filter.
pub const ALL_CATEGORIES_LABEL: &str = "All";

impl CatalogState {
    pub fn new(games: Vec<Game>, categories: Vec<Category>, site_config: SiteConfig) -> Self {
        Self {
            games,
            categories,
            site_config,
            active_category: ALL_CATEGORIES.to_string(),
            search_query: String::new(),
        }
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The site config as loaded or last saved, without fallbacks applied.
    pub fn site_config(&self) -> &SiteConfig {
        &self.site_config
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Select a category by slug. Any string is accepted; see [`filter::visible_games`].
    pub fn select_category(&mut self, slug: impl Into<String>) {
        self.active_category = slug.into();
    }

    pub fn visible_games(&self) -> Vec<&Game> {
        filter::visible_games(
            &self.games,
            &self.categories,
            &self.active_category,
            &self.search_query,
        )
    }

    pub fn grid(&self) -> GridView<'_> {
        let cards: Vec<GameCard<'_>> = self
            .visible_games()
            .into_iter()
            .map(|game| GameCard {
                game,
                category_name: self.category_name(game.category_id),
            })
            .collect();

        if cards.is_empty() {
            GridView::Empty
        } else {
            GridView::Games(cards)
        }
    }

    pub fn category_name(&self, id: CategoryId) -> &str {
        filter::category_name(&self.categories, id)
    }

    pub fn category_tabs(&self) -> Vec<CategoryTab> {
        let all = CategoryTab {
            slug: ALL_CATEGORIES.to_string(),
            label: ALL_CATEGORIES_LABEL.to_string(),
            active: self.active_category == ALL_CATEGORIES,
        };

        std::iter::once(all)
            .chain(self.categories.iter().map(|c| CategoryTab {
                slug: c.slug.clone(),
                label: c.name.clone(),
                active: self.active_category == c.slug,
            }))
            .collect()
    }

    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn launch(&self, id: GameId) -> Option<LaunchTarget> {
        self.game(id).map(|g| LaunchTarget {
            title: g.name.clone(),
            url: g.url.clone(),
        })
    }

    pub fn slug_taken(&self, slug: &str) -> bool {
        self.categories.iter().any(|c| c.slug == slug)
    }

    /// Number of games referencing the category.
    pub fn games_in_category(&self, id: CategoryId) -> usize {
        self.games.iter().filter(|g| g.category_id == id).count()
    }

    // ------------------------------------------------------------------------
    // Merges of backend-acknowledged writes
    // ------------------------------------------------------------------------

    pub(crate) fn push_game(&mut self, game: Game) {
        self.games.push(game);
    }

    /// Replace the game with id `id` in place. Returns false if absent.
    pub(crate) fn replace_game(&mut self, id: GameId, game: Game) -> bool {
        match self.games.iter_mut().find(|g| g.id == id) {
            Some(slot) => {
                *slot = game;
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove_game(&mut self, id: GameId) {
        self.games.retain(|g| g.id != id);
    }

    pub(crate) fn push_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    pub(crate) fn remove_category(&mut self, id: CategoryId) {
        self.categories.retain(|c| c.id != id);
    }

    pub(crate) fn replace_site_config(&mut self, site_config: SiteConfig) {
        self.site_config = site_config;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    fn state() -> CatalogState {
        CatalogState::new(
            vec![
                fixtures::game(1, "Zelda", 1),
                fixtures::game(2, "Mario Kart", 2),
                fixtures::game(3, "Orphan", 9),
            ],
            vec![
                fixtures::category(1, "Adventure"),
                fixtures::category(2, "Racing"),
            ],
            SiteConfig::default(),
        )
    }

    #[test]
    fn test_starts_unfiltered() {
        let state = state();
        assert_eq!(state.active_category(), ALL_CATEGORIES);
        assert_eq!(state.search_query(), "");
        assert_eq!(state.visible_games().len(), 3);
    }

    #[test]
    fn test_grid_cards_resolve_category_names() {
        let state = state();
        match state.grid() {
            GridView::Games(cards) => {
                let names: Vec<&str> = cards.iter().map(|c| c.category_name).collect();
                assert_eq!(names, vec!["Adventure", "Racing", filter::UNCATEGORIZED]);
            }
            GridView::Empty => panic!("Expected cards"),
        }
    }

    #[test]
    fn test_grid_empty_state() {
        let mut state = state();
        state.set_search_query("nothing matches");
        assert_eq!(state.grid(), GridView::Empty);
    }

    #[test]
    fn test_filters_combine() {
        let mut state = state();
        state.select_category("racing");
        state.set_search_query("KART");
        let ids: Vec<u64> = state.visible_games().iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![2]);

        state.set_search_query("zelda");
        assert_eq!(state.grid(), GridView::Empty);
    }

    #[test]
    fn test_category_tabs() {
        let mut state = state();
        state.select_category("racing");
        let tabs = state.category_tabs();
        assert_eq!(tabs.len(), 3);
        assert_eq!(tabs[0].slug, "all");
        assert_eq!(tabs[0].label, ALL_CATEGORIES_LABEL);
        assert!(!tabs[0].active);
        assert_eq!(tabs[2].label, "Racing");
        assert!(tabs[2].active);
    }

    #[test]
    fn test_launch() {
        let state = state();
        let target = state.launch(2).unwrap();
        assert_eq!(target.title, "Mario Kart");
        assert_eq!(target.url, state.game(2).unwrap().url);
        assert!(state.launch(42).is_none());
    }

    #[test]
    fn test_merges() {
        let mut state = state();
        state.push_game(fixtures::game(4, "Tetris", 1));
        assert_eq!(state.games().last().unwrap().id, 4);

        let mut renamed = fixtures::game(2, "Mario Kart 8", 2);
        renamed.keys = vec!["kart".to_string()];
        assert!(state.replace_game(2, renamed.clone()));
        assert_eq!(state.games()[1], renamed);
        assert!(!state.replace_game(77, fixtures::game(77, "Ghost", 1)));

        state.remove_game(1);
        let ids: Vec<u64> = state.games().iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);

        assert_eq!(state.games_in_category(1), 1);
        state.remove_category(1);
        assert!(state.category(1).is_none());
        assert!(!state.slug_taken("adventure"));
    }
}
