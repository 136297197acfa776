use std::time::Duration;

/// Side length of one grid cell in surface pixels.
///
/// The terminal front end treats one character cell as one pixel, so the
/// grid resolves to one glyph per cell. The [`crate::grid::Grid`] math works
/// for any positive cell size.
pub const CELL_SIZE: u16 = 1;

/// Body length of a freshly created snake.
pub const INITIAL_SNAKE_LENGTH: u16 = 6;

/// Row of the topmost (tail) segment of a freshly created snake.
pub const INITIAL_SNAKE_ROW: u16 = 1;

/// Smallest grid the game will start a run on.
pub const MIN_GRID_COLUMNS: u16 = 8;
pub const MIN_GRID_ROWS: u16 = 10;

/// Per-tick interval for the fast preset, in milliseconds.
pub const TICK_INTERVAL_FAST_MS: u64 = 40;

/// Per-tick interval for the normal preset, in milliseconds.
pub const TICK_INTERVAL_NORMAL_MS: u64 = 100;

/// Per-tick interval for the slow preset, in milliseconds.
pub const TICK_INTERVAL_SLOW_MS: u64 = 200;

/// Pause after game over so the final frame stays visible.
pub const GAME_OVER_GRACE: Duration = Duration::from_millis(500);

/// Timeout for one input poll inside the game loop.
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Timeout for one input poll on the start menu.
pub const MENU_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Glyph for one snake body cell.
pub const GLYPH_SNAKE: &str = "█";

/// Glyph for the food marker.
pub const GLYPH_FOOD: &str = "●";

/// Log file written in the working directory; stdout belongs to the game
/// surface while a session is active.
pub const LOG_FILE_NAME: &str = "gridsnake.log";

/// Named speed presets selectable before a run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SpeedSetting {
    Fast,
    Normal,
    Slow,
}

impl SpeedSetting {
    /// Maps a setting name to a preset. Unrecognized names fall back to
    /// [`SpeedSetting::Normal`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "fast" => Self::Fast,
            "slow" => Self::Slow,
            _ => Self::Normal,
        }
    }

    /// Returns the per-tick interval for this preset.
    #[must_use]
    pub fn tick_interval(self) -> Duration {
        let millis = match self {
            Self::Fast => TICK_INTERVAL_FAST_MS,
            Self::Normal => TICK_INTERVAL_NORMAL_MS,
            Self::Slow => TICK_INTERVAL_SLOW_MS,
        };
        Duration::from_millis(millis)
    }

    /// Returns the display name of this preset.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Normal => "normal",
            Self::Slow => "slow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SpeedSetting;

    #[test]
    fn known_names_map_to_their_preset() {
        assert_eq!(SpeedSetting::from_name("fast"), SpeedSetting::Fast);
        assert_eq!(SpeedSetting::from_name("slow"), SpeedSetting::Slow);
        assert_eq!(SpeedSetting::from_name("normal"), SpeedSetting::Normal);
        assert_eq!(SpeedSetting::from_name(" Fast "), SpeedSetting::Fast);
    }

    #[test]
    fn unknown_names_fall_back_to_normal() {
        assert_eq!(SpeedSetting::from_name(""), SpeedSetting::Normal);
        assert_eq!(SpeedSetting::from_name("ludicrous"), SpeedSetting::Normal);
    }

    #[test]
    fn preset_intervals_are_ordered() {
        assert!(SpeedSetting::Fast.tick_interval() < SpeedSetting::Normal.tick_interval());
        assert!(SpeedSetting::Normal.tick_interval() < SpeedSetting::Slow.tick_interval());
    }
}
