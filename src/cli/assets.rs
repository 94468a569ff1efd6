//! Button icons.
//!
//! Icons are text art fitted to a fixed box of `ICON_WIDTH` × `ICON_HEIGHT`
//! cells, the terminal rendering of a 70×70 logical-pixel icon at 5×10
//! logical pixels per cell.

use std::fs;
use std::path::Path;

use super::tui::Button;

/// Icon box width in terminal cells.
pub(crate) const ICON_WIDTH: usize = 14;
/// Icon box height in terminal cells.
pub(crate) const ICON_HEIGHT: usize = 7;

const FIST: &str = r"
   _.-----._
  /  _  _  _\
 |  (_)(_)(_)|
 |    ___    |
  \  (___)  /
   '-.___.-'";

const HAND_PAPER: &str = r"
  .--------.
  |~~~~~~~~|
  |~~~~~~~~|
  |~~~~~~~~|
  |~~~~~~~~|
  '--------'";

const SCISSORS: &str = r"
  __      __
 (  )    /  /
  \ \  /  /
   \ \/  /
   / /\ \
  (__) (__)";

const ERROR: &str = r"
   .------.
  /  \  /  \
 |    \/    |
 |    /\    |
  \  /  \  /
   '------'";

/// Icon art fitted to the icon box, one string per row.
pub(crate) type Icon = Vec<String>;

/// Crop or pad text art to exactly `ICON_HEIGHT` rows of `ICON_WIDTH` cells.
pub(crate) fn fit(art: &str) -> Icon {
    let mut rows: Icon = art
        .lines()
        .take(ICON_HEIGHT)
        .map(|line| {
            let cropped: String = line.chars().take(ICON_WIDTH).collect();
            format!("{cropped:<ICON_WIDTH$}")
        })
        .collect();
    rows.resize(ICON_HEIGHT, " ".repeat(ICON_WIDTH));
    rows
}

/// The icon for each button, if it could be loaded.
#[derive(Debug, Clone, Default)]
pub(crate) struct Icons {
    icons: [Option<Icon>; 4],
}

impl Icons {
    /// Icons compiled into the binary.
    pub(crate) fn builtin() -> Self {
        Self {
            icons: Button::ALL.map(|button| Some(fit(builtin_art(button)))),
        }
    }

    /// Load `<dir>/<asset name>.txt` for every button.
    ///
    /// A missing, unreadable, or empty file leaves that button text-only and
    /// logs a warning.
    pub(crate) fn load(dir: &Path) -> Self {
        Self {
            icons: Button::ALL.map(|button| load_icon(dir, button)),
        }
    }

    /// Icon for a button, `None` if it is text-only.
    pub(crate) fn get(&self, button: Button) -> Option<&Icon> {
        self.icons[button.index()].as_ref()
    }

    /// Whether any button has an icon.
    pub(crate) fn any(&self) -> bool {
        self.icons.iter().any(Option::is_some)
    }
}

fn builtin_art(button: Button) -> &'static str {
    // Art starts with a newline so the raw strings line up in source
    let art = match button {
        Button::Rock => FIST,
        Button::Paper => HAND_PAPER,
        Button::Scissors => SCISSORS,
        Button::Quit => ERROR,
    };
    art.strip_prefix('\n').unwrap_or(art)
}

fn load_icon(dir: &Path, button: Button) -> Option<Icon> {
    let path = dir.join(format!("{}.txt", button.asset_name()));
    match fs::read_to_string(&path) {
        Ok(art) if art.trim().is_empty() => {
            log::warn!(
                "Icon {} is empty; showing {} as text only",
                path.display(),
                button.label()
            );
            None
        }
        Ok(art) => Some(fit(&art)),
        Err(e) => {
            log::warn!(
                "Failed to load icon {}: {e}; showing {} as text only",
                path.display(),
                button.label()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_and_crops() {
        let icon = fit("ab\nthis line is far too wide for the box");
        assert_eq!(icon.len(), ICON_HEIGHT);
        assert!(icon.iter().all(|row| row.chars().count() == ICON_WIDTH));
        assert_eq!(icon[0], format!("ab{}", " ".repeat(ICON_WIDTH - 2)));
        assert_eq!(icon[1], "this line is f");
        assert_eq!(icon[6], " ".repeat(ICON_WIDTH));
    }

    #[test]
    fn test_fit_drops_extra_rows() {
        let art = "x\n".repeat(ICON_HEIGHT + 5);
        assert_eq!(fit(&art).len(), ICON_HEIGHT);
    }

    #[test]
    fn test_builtin_icons_fit_the_box() {
        let icons = Icons::builtin();
        for button in Button::ALL {
            let icon = icons.get(button).unwrap();
            assert_eq!(icon.len(), ICON_HEIGHT);
            assert!(icon.iter().any(|row| !row.trim().is_empty()));
            // Built-in art is drawn to fit; nothing is cropped
            let art = builtin_art(button);
            assert!(art.lines().all(|line| line.chars().count() <= ICON_WIDTH));
        }
    }

    #[test]
    fn test_load_falls_back_per_button() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("fist.txt"), "ROCK\nART").unwrap();
        fs::write(dir.path().join("scissors.txt"), "   \n").unwrap();

        let icons = Icons::load(dir.path());

        let fist = icons.get(Button::Rock).unwrap();
        assert!(fist[0].starts_with("ROCK"));
        assert!(fist[1].starts_with("ART"));
        assert!(icons.get(Button::Paper).is_none());
        assert!(icons.get(Button::Scissors).is_none());
        assert!(icons.get(Button::Quit).is_none());
        assert!(icons.any());
    }

    #[test]
    fn test_load_missing_dir_is_text_only() {
        let dir = tempfile::tempdir().unwrap();
        let icons = Icons::load(&dir.path().join("nope"));
        assert!(!icons.any());
    }
}
