//! Plain-text rendering of the portal.

use std::fmt::Write;

use portal_core::{
    AccessGate, CatalogState, CategoryTab, GameDraft, GridView, Outcome, Portal, SiteConfig,
};

/// Shown when no game matches the current filters.
pub const EMPTY_GRID: &str = "No games found";

pub fn header(site: &SiteConfig) -> String {
    let title = site.site_title.as_deref().unwrap_or("Games");
    let mut out = format!("== {} ==\n", title);
    if let Some(logo) = site.logo_url.as_deref() {
        let _ = writeln!(out, "logo: {}", logo);
    }
    out
}

/// `[All]  Adventure  Racing`, with the active tab in brackets.
pub fn tabs(tabs: &[CategoryTab]) -> String {
    tabs.iter()
        .map(|tab| {
            if tab.active {
                format!("[{}]", tab.label)
            } else {
                tab.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn grid(grid: &GridView<'_>) -> String {
    match grid {
        GridView::Empty => format!("{}\n", EMPTY_GRID),
        GridView::Games(cards) => {
            let mut out = String::new();
            for card in cards {
                let _ = writeln!(
                    out,
                    "#{:<4} {:<32} {:<16} {}",
                    card.game.id,
                    card.game.name,
                    card.category_name,
                    card.game.size.as_str()
                );
            }
            out
        }
    }
}

/// Header, category tabs, active search and the grid.
pub fn catalog(portal: &Portal) -> String {
    let state = portal.state();
    let mut out = header(&portal.site_config());
    let _ = writeln!(out, "{}", tabs(&state.category_tabs()));
    if !state.search_query().is_empty() {
        let _ = writeln!(out, "search: \"{}\"", state.search_query());
    }
    out.push_str(&grid(&state.grid()));
    out
}

/// Existing categories, for picking the id a game form or a delete needs.
pub fn categories(state: &CatalogState) -> String {
    if state.categories().is_empty() {
        return "No categories\n".to_string();
    }

    let mut out = format!("{:<5} {:<24} {:<24} {}\n", "id", "name", "slug", "games");
    for category in state.categories() {
        let _ = writeln!(
            out,
            "{:<5} {:<24} {:<24} {}",
            category.id,
            category.name,
            category.slug,
            state.games_in_category(category.id)
        );
    }
    out
}

/// Effective site configuration, in `site key=value` form.
pub fn site(site: &SiteConfig) -> String {
    let fields = [
        ("logo_url", &site.logo_url),
        ("primary_color", &site.primary_color),
        ("secondary_color", &site.secondary_color),
        ("text_color", &site.text_color),
        ("site_title", &site.site_title),
    ];

    let mut out = String::new();
    for (key, value) in fields {
        let _ = writeln!(out, "{}={}", key, value.as_deref().unwrap_or_default());
    }
    out
}

pub fn gate(gate: &AccessGate) -> String {
    if gate.is_admin_open() {
        "Admin panel open.".to_string()
    } else if gate.is_dialog_open() {
        match gate.error() {
            Some(err) => format!("{} Enter PIN with 'pin <pin>'.", err),
            None => "Enter PIN with 'pin <pin>'.".to_string(),
        }
    } else {
        "Admin panel closed.".to_string()
    }
}

/// Edit prefill for a game, in the `add-game`/`edit-game` form order.
pub fn draft(draft: &GameDraft) -> String {
    let category = draft
        .category_id
        .map(|id| id.to_string())
        .unwrap_or_default();
    [
        draft.name.as_str(),
        draft.cover.as_str(),
        draft.url.as_str(),
        category.as_str(),
        draft.size.as_str(),
        draft.keys.as_str(),
        draft.video_preview.as_str(),
    ]
    .join(" | ")
}

/// Text printed after a successful command, or `None` when the outcome
/// calls for a redraw instead.
pub fn outcome(portal: &Portal, outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Refiltered => None,
        Outcome::Launch(target) => Some(format!("Launching {}: {}", target.title, target.url)),
        Outcome::Ignored => Some("Nothing to do.".to_string()),
        Outcome::GateChanged => Some(gate(portal.gate())),
        Outcome::Done { notice, .. } => Some(notice.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::testing::fixtures;
    use portal_core::GameSize;

    #[test]
    fn test_tabs_mark_active() {
        let mut state = CatalogState::new(
            fixtures::scenario_games(),
            fixtures::scenario_categories(),
            SiteConfig::default(),
        );
        assert_eq!(tabs(&state.category_tabs()), "[All]  adventure  racing");

        state.select_category("racing");
        assert_eq!(tabs(&state.category_tabs()), "All  adventure  [racing]");
    }

    #[test]
    fn test_grid_rows_and_empty_state() {
        let mut state = CatalogState::new(
            fixtures::scenario_games(),
            fixtures::scenario_categories(),
            SiteConfig::default(),
        );

        let rendered = grid(&state.grid());
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.contains("Mario Kart"));
        assert!(rendered.contains("racing"));

        state.set_search_query("zzz");
        assert_eq!(grid(&state.grid()), "No games found\n");
    }

    #[test]
    fn test_categories_list_ids_and_counts() {
        let mut games = fixtures::scenario_games();
        games.push(fixtures::game(3, "Outrun", 2));
        let state = CatalogState::new(
            games,
            fixtures::scenario_categories(),
            SiteConfig::default(),
        );

        let rendered = categories(&state);
        let rows: Vec<Vec<&str>> = rendered
            .lines()
            .map(|line| line.split_whitespace().collect())
            .collect();

        assert_eq!(rows[0], vec!["id", "name", "slug", "games"]);
        assert_eq!(rows[1], vec!["1", "adventure", "adventure", "1"]);
        assert_eq!(rows[2], vec!["2", "racing", "racing", "2"]);

        assert_eq!(categories(&CatalogState::default()), "No categories\n");
    }

    #[test]
    fn test_site_shows_every_field() {
        let rendered = site(&fixtures::site_fallback());

        assert!(rendered.contains("primary_color=#8B5CF6\n"));
        assert!(rendered.contains("secondary_color=#667eea\n"));
        assert!(rendered.contains("text_color=#333333\n"));
        assert!(rendered.contains("site_title=Cantry - Portal de Juegos\n"));

        let blank = site(&SiteConfig::default());
        assert_eq!(blank.lines().count(), 5);
        assert!(blank.contains("logo_url=\n"));
    }

    #[test]
    fn test_draft_prefill() {
        let mut game = fixtures::game(2, "Mario Kart", 2);
        game.keys = vec!["kart".to_string(), "racing".to_string()];
        game.size = GameSize::Large;

        let rendered = draft(&GameDraft::from(&game));
        assert!(rendered.starts_with("Mario Kart | "));
        assert!(rendered.ends_with("| 2 | large | kart, racing | "));
    }

    #[test]
    fn test_gate_messages() {
        let mut g = AccessGate::new("2729");
        assert_eq!(gate(&g), "Admin panel closed.");

        g.open_dialog();
        let _ = g.submit_pin("1111");
        assert!(gate(&g).starts_with("Incorrect PIN."));

        g.submit_pin("2729").unwrap();
        assert_eq!(gate(&g), "Admin panel open.");
    }
}
