use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::{
    BUILTIN_SEASONS, DEFAULT_FRAMES, DEFAULT_SEASON_NAME, MonthDay, SeasonRange, prelude::*,
};

static BUILTIN: LazyLock<SeasonCatalog> = LazyLock::new(SeasonCatalog::from_builtin_table);

/// A named yearly date range with the spinner frames shown during it.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[display(fmt = "{name} ({range})")]
#[serde(try_from = "SeasonDef")]
pub struct Season {
    name:   String,
    range:  SeasonRange,
    frames: Vec<String>,
}

/// Unvalidated season as it appears in a serialized catalog.
#[derive(Deserialize)]
struct SeasonDef {
    name:   String,
    range:  SeasonRange,
    frames: Vec<String>,
}

/// Error type for building seasons and catalogs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Season name is empty or whitespace.
    #[error("Season name must not be empty")]
    EmptyName,

    /// Season has no frames to show.
    #[error("Season '{season}' has no frames")]
    EmptyFrames { season: String },

    /// Fallback frame set is empty.
    #[error("Default frame set has no frames")]
    EmptyDefaultFrames,

    /// Two seasons share a name.
    #[error("Duplicate season name: {0}")]
    DuplicateName(String),
}

impl Season {
    /// Creates a new season.
    ///
    /// # Errors
    /// Returns `CatalogError::EmptyName` or `CatalogError::EmptyFrames`.
    pub fn new<I, F>(name: impl Into<String>, range: SeasonRange, frames: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }

        let frames: Vec<String> = frames.into_iter().map(Into::into).collect();
        if frames.is_empty() {
            return Err(CatalogError::EmptyFrames { season: name });
        }

        Ok(Self { name, range, frames })
    }

    /// Returns the display name of the season
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the yearly range the season covers
    pub const fn range(&self) -> &SeasonRange {
        &self.range
    }

    /// Animation frames in display order. Never empty.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// True if `date` falls inside this season's range.
    pub fn is_active_on<D: Datelike>(&self, date: &D) -> bool {
        self.range.contains_date(date)
    }
}

impl TryFrom<SeasonDef> for Season {
    type Error = CatalogError;

    fn try_from(def: SeasonDef) -> Result<Self, Self::Error> {
        Self::new(def.name, def.range, def.frames)
    }
}

/// An ordered, immutable set of seasons plus the frames used outside them.
///
/// Lookups scan seasons in order and the first match wins, so when two
/// ranges overlap the earlier entry takes the shared days.
#[derive(Debug, Clone, PartialEq, Eq, Deref, Serialize, Deserialize)]
#[serde(try_from = "CatalogDef")]
pub struct SeasonCatalog {
    #[deref]
    seasons:        Vec<Season>,
    default_frames: Vec<String>,
}

/// Unvalidated catalog as supplied by a host's configuration.
#[derive(Deserialize)]
struct CatalogDef {
    seasons:        Vec<Season>,
    #[serde(default = "builtin_default_frames")]
    default_frames: Vec<String>,
}

impl TryFrom<CatalogDef> for SeasonCatalog {
    type Error = CatalogError;

    fn try_from(def: CatalogDef) -> Result<Self, Self::Error> {
        Self::new(def.seasons, def.default_frames)
    }
}

fn builtin_default_frames() -> Vec<String> {
    DEFAULT_FRAMES.iter().map(|frame| (*frame).to_owned()).collect()
}

impl SeasonCatalog {
    /// Creates a catalog from seasons in lookup order.
    ///
    /// Overlapping seasons are accepted and logged; the earlier one wins.
    ///
    /// # Errors
    /// Returns `CatalogError::EmptyDefaultFrames` if `default_frames` is
    /// empty, or `CatalogError::DuplicateName` if two seasons share a name.
    pub fn new<I, F>(seasons: Vec<Season>, default_frames: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        let default_frames: Vec<String> = default_frames.into_iter().map(Into::into).collect();
        if default_frames.is_empty() {
            return Err(CatalogError::EmptyDefaultFrames);
        }

        let mut names = HashSet::with_capacity(seasons.len());
        for season in &seasons {
            if !names.insert(season.name()) {
                return Err(CatalogError::DuplicateName(season.name.clone()));
            }
        }

        for (i, first) in seasons.iter().enumerate() {
            for second in &seasons[i + 1..] {
                if first.range.overlaps(&second.range) {
                    warn!(
                        first = first.name(),
                        second = second.name(),
                        "overlapping seasons: the first listed wins on shared days"
                    );
                }
            }
        }

        debug!(seasons = seasons.len(), "season catalog built");
        Ok(Self {
            seasons,
            default_frames,
        })
    }

    /// The built-in Easter, Halloween and Christmas catalog.
    /// Built on first use and shared for the life of the process.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    fn from_builtin_table() -> Self {
        let seasons = BUILTIN_SEASONS
            .iter()
            .map(|row| Season {
                name:   row.name.to_owned(),
                range:  SeasonRange::from_raw(
                    MonthDay::from_raw(row.start.0, row.start.1),
                    MonthDay::from_raw(row.end.0, row.end.1),
                ),
                frames: row.frames.iter().map(|frame| (*frame).to_owned()).collect(),
            })
            .collect();

        Self {
            seasons,
            default_frames: builtin_default_frames(),
        }
    }

    /// Seasons in lookup order
    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    /// Frames used when no season matches. Never empty.
    pub fn default_frames(&self) -> &[String] {
        &self.default_frames
    }

    /// Finds a season by name
    pub fn by_name(&self, name: &str) -> Option<&Season> {
        self.seasons.iter().find(|season| season.name == name)
    }

    /// Returns the first season, in catalog order, whose range contains `date`.
    pub fn season_on<D: Datelike>(&self, date: &D) -> Option<&Season> {
        let point = MonthDay::of(date);
        let season = self.seasons.iter().find(|season| season.range.contains(&point));

        match season {
            Some(season) => trace!(%point, season = season.name(), "season matched"),
            None => trace!(%point, "no season matched"),
        }
        season
    }

    /// Returns the frames for `date`: the matching season's, or the defaults.
    pub fn frames_on<D: Datelike>(&self, date: &D) -> &[String] {
        self.season_on(date)
            .map_or(self.default_frames.as_slice(), Season::frames)
    }

    /// Returns the matching season's name, or `DEFAULT_SEASON_NAME`.
    pub fn name_on<D: Datelike>(&self, date: &D) -> &str {
        self.season_on(date).map_or(DEFAULT_SEASON_NAME, Season::name)
    }

    /// Season for today's local date
    pub fn current_season(&self) -> Option<&Season> {
        self.season_on(&Local::now())
    }

    /// Frames for today's local date
    pub fn current_frames(&self) -> &[String] {
        self.frames_on(&Local::now())
    }

    /// Season name for today's local date
    pub fn current_name(&self) -> &str {
        self.name_on(&Local::now())
    }
}
