//! Text command parsing.
//!
//! One line of input becomes one [`Input`]. Game forms use `|` between
//! fields in the order `name|cover|url|category_id|size|keys|video_preview`;
//! the last three may be left out.

use anyhow::{anyhow, bail, Context, Result};

use portal_core::{Command, GameDraft, GameId, GameSize, SiteConfig};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    /// Redraw the catalog.
    List,
    /// Print the edit prefill for a game.
    ShowGame(GameId),
    /// List categories with their ids and game counts.
    Categories,
    /// Print the effective site configuration.
    ShowSite,
    Help,
    Quit,
    Blank,
}

pub const HELP: &str = "\
Commands:
  list                          show categories and the game grid
  search [text]                 filter by name or key (no text clears)
  category <slug|all>           filter by category
  categories                    list category ids, names, slugs and game counts
  play <id>                     launch a game
  admin                         open the PIN dialog
  pin <pin>                     submit the PIN
  cancel                        close the PIN dialog
  logout                        close the admin surface
  add-game <form>               name|cover|url|category_id|size|keys|video_preview
  show-game <id>                print a game as an edit form
  edit-game <id> <form>         replace a game
  delete-game <id>
  add-category <name>
  delete-category <id>
  site                          show the current site configuration
  site key=value;...            logo_url, primary_color, secondary_color, text_color, site_title
  help
  quit";

pub fn parse_line(line: &str) -> Result<Input> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Input::Blank);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let input = match word.to_lowercase().as_str() {
        "list" | "ls" => Input::List,
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        "search" => Input::Command(Command::Search(rest.to_string())),
        "category" | "cat" => {
            Input::Command(Command::SelectCategory(required(rest, "category slug")?))
        }
        "play" => Input::Command(Command::Launch(parse_id(rest)?)),
        "admin" => Input::Command(Command::OpenGate),
        "cancel" => Input::Command(Command::CloseGate),
        "pin" => Input::Command(Command::SubmitPin(rest.to_string())),
        "logout" => Input::Command(Command::CloseAdmin),
        "add-game" => Input::Command(Command::CreateGame(parse_game_form(rest)?)),
        "show-game" => Input::ShowGame(parse_id(rest)?),
        "edit-game" => {
            let (id, form) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| anyhow!("Usage: edit-game <id> <form>"))?;
            Input::Command(Command::UpdateGame(parse_id(id)?, parse_game_form(form)?))
        }
        "delete-game" => Input::Command(Command::DeleteGame(parse_id(rest)?)),
        "add-category" => Input::Command(Command::CreateCategory(rest.to_string())),
        "delete-category" => Input::Command(Command::DeleteCategory(parse_id(rest)?)),
        "categories" | "cats" => Input::Categories,
        "site" if rest.is_empty() => Input::ShowSite,
        "site" => Input::Command(Command::UpdateSiteConfig(parse_site_form(rest)?)),
        other => bail!("Unknown command '{}'. Type 'help' for a list.", other),
    };

    Ok(input)
}

fn required(value: &str, what: &str) -> Result<String> {
    if value.is_empty() {
        bail!("Missing {}", what);
    }
    Ok(value.to_string())
}

fn parse_id(value: &str) -> Result<u64> {
    let value = value.trim();
    value
        .parse()
        .with_context(|| format!("Invalid id '{}'", value))
}

/// Parse a game form. Blank fields stay blank so validation reports them.
fn parse_game_form(form: &str) -> Result<GameDraft> {
    let fields: Vec<&str> = form.split('|').map(str::trim).collect();
    if fields.len() < 4 || fields.len() > 7 {
        bail!("Expected 4 to 7 '|'-separated fields, got {}", fields.len());
    }
    let field = |i: usize| fields.get(i).copied().unwrap_or_default();

    let category_id = match field(3) {
        "" => None,
        id => Some(parse_id(id)?),
    };
    let size: GameSize = field(4).parse()?;

    Ok(GameDraft {
        name: field(0).to_string(),
        cover: field(1).to_string(),
        url: field(2).to_string(),
        category_id,
        size,
        keys: field(5).to_string(),
        video_preview: field(6).to_string(),
    })
}

fn parse_site_form(form: &str) -> Result<SiteConfig> {
    let mut site = SiteConfig::default();

    for pair in form.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected key=value, got '{}'", pair))?;
        let value = Some(value.trim().to_string());

        match key.trim() {
            "logo_url" | "logo" => site.logo_url = value,
            "primary_color" | "primary" => site.primary_color = value,
            "secondary_color" | "secondary" => site.secondary_color = value,
            "text_color" | "text" => site.text_color = value,
            "site_title" | "title" => site.site_title = value,
            other => bail!("Unknown site field '{}'", other),
        }
    }

    Ok(site)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(line: &str) -> Command {
        match parse_line(line).unwrap() {
            Input::Command(command) => command,
            other => panic!("Expected command, got {:?}", other),
        }
    }

    #[test]
    fn test_simple_words() {
        assert_eq!(parse_line("").unwrap(), Input::Blank);
        assert_eq!(parse_line("  LIST ").unwrap(), Input::List);
        assert_eq!(parse_line("quit").unwrap(), Input::Quit);
        assert_eq!(parse_line("categories").unwrap(), Input::Categories);
        assert_eq!(command("admin"), Command::OpenGate);
        assert_eq!(command("logout"), Command::CloseAdmin);
    }

    #[test]
    fn test_filter_commands() {
        assert_eq!(
            command("search  mario kart"),
            Command::Search("mario kart".to_string())
        );
        assert_eq!(command("search"), Command::Search(String::new()));
        assert_eq!(
            command("category racing"),
            Command::SelectCategory("racing".to_string())
        );
        assert!(parse_line("category").is_err());
    }

    #[test]
    fn test_ids() {
        assert_eq!(command("play 7"), Command::Launch(7));
        assert_eq!(command("delete-category 3"), Command::DeleteCategory(3));
        assert!(parse_line("delete-game seven").is_err());
    }

    #[test]
    fn test_game_form() {
        let cmd =
            command("add-game Tetris | t.png | https://t.example | 1 | large | blocks, classic");
        let Command::CreateGame(draft) = cmd else {
            panic!("Expected CreateGame");
        };
        assert_eq!(draft.name, "Tetris");
        assert_eq!(draft.category_id, Some(1));
        assert_eq!(draft.size, GameSize::Large);
        assert_eq!(draft.keys, "blocks, classic");
        assert_eq!(draft.video_preview, "");
    }

    #[test]
    fn test_game_form_blank_fields_kept() {
        let Command::CreateGame(draft) = command("add-game  | t.png | u |  ") else {
            panic!("Expected CreateGame");
        };
        assert_eq!(draft.name, "");
        assert_eq!(draft.category_id, None);
        assert_eq!(draft.size, GameSize::Medium);
    }

    #[test]
    fn test_game_form_errors() {
        assert!(parse_line("add-game Tetris|t.png").is_err());
        assert!(parse_line("add-game a|b|c|1|huge").is_err());
        assert!(parse_line("edit-game 3").is_err());
    }

    #[test]
    fn test_edit_game() {
        let cmd = command("edit-game 2 Mario Kart|mk.png|https://mk.example|2");
        match cmd {
            Command::UpdateGame(id, draft) => {
                assert_eq!(id, 2);
                assert_eq!(draft.name, "Mario Kart");
            }
            other => panic!("Expected UpdateGame, got {:?}", other),
        }
    }

    #[test]
    fn test_site_form() {
        let cmd = command("site title=Arcade Night; primary=#000000");
        assert_eq!(
            cmd,
            Command::UpdateSiteConfig(SiteConfig {
                site_title: Some("Arcade Night".to_string()),
                primary_color: Some("#000000".to_string()),
                ..Default::default()
            })
        );
        assert_eq!(parse_line("site").unwrap(), Input::ShowSite);
        assert!(parse_line("site font=serif").is_err());
        assert!(parse_line("site title").is_err());
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_line("dance").unwrap_err();
        assert!(err.to_string().contains("Unknown command"));
    }
}
