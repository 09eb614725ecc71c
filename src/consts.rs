/// Month index for January (months are 0-indexed)
pub const JANUARY: u8 = 0;
/// Month index for March
pub const MARCH: u8 = 2;
/// Month index for April
pub const APRIL: u8 = 3;
/// Month index for October
pub const OCTOBER: u8 = 9;
/// Month index for December
pub const DECEMBER: u8 = 11;

/// Highest valid month index (December)
pub const MAX_MONTH_INDEX: u8 = DECEMBER;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Largest day any month can have. Days are not checked against real month lengths.
pub const MAX_DAY: u8 = 31;

/// Month/day separator in the `MM-DD` text form
pub const DATE_SEPARATOR: char = '-';
/// Separator between the two ends of a range (`MM-DD/MM-DD`)
pub const RANGE_SEPARATOR: char = '/';

/// Label reported when no season matches a date
pub const DEFAULT_SEASON_NAME: &str = "Default";

/// Standard bouncing ball, used outside every season.
pub const DEFAULT_FRAMES: &[&str] = &[
    "( ●    )",
    "(  ●   )",
    "(   ●  )",
    "(    ● )",
    "(     ●)",
    "(    ● )",
    "(   ●  )",
    "(  ●   )",
    "( ●    )",
    "(●     )",
];

pub const EASTER_FRAMES: &[&str] = &[
    "🐰    ",
    " 🐰   ",
    "  🐰  ",
    "   🐰 ",
    "    🐰",
    "   🐰 ",
    "  🐰  ",
    " 🐰   ",
    "🐰    ",
    "🥚    ",
];

pub const HALLOWEEN_FRAMES: &[&str] = &[
    "🎃    ",
    " 🎃   ",
    "  🎃  ",
    "   🎃 ",
    "    🎃",
    "   🎃 ",
    "  🎃  ",
    " 🎃   ",
    "🎃    ",
    "👻    ",
];

pub const CHRISTMAS_FRAMES: &[&str] = &[
    "🎄    ",
    " 🎄   ",
    "  🎄  ",
    "   🎄 ",
    "    🎄",
    "   🎄 ",
    "  🎄  ",
    " 🎄   ",
    "🎄    ",
    "🎅    ",
];

/// One row of the built-in season table.
/// `start` and `end` are `(month index, day)` pairs, both inclusive.
pub(crate) struct BuiltinSeason {
    pub name:   &'static str,
    pub start:  (u8, u8),
    pub end:    (u8, u8),
    pub frames: &'static [&'static str],
}

/// Built-in seasons in lookup order. Easter uses a fixed window rather than
/// the computed holiday date.
pub(crate) const BUILTIN_SEASONS: &[BuiltinSeason] = &[
    BuiltinSeason {
        name:   "Easter",
        start:  (MARCH, 15),
        end:    (APRIL, 25),
        frames: EASTER_FRAMES,
    },
    BuiltinSeason {
        name:   "Halloween",
        start:  (OCTOBER, 1),
        end:    (OCTOBER, 31),
        frames: HALLOWEEN_FRAMES,
    },
    BuiltinSeason {
        name:   "Christmas",
        start:  (DECEMBER, 1),
        end:    (DECEMBER, 31),
        frames: CHRISTMAS_FRAMES,
    },
];
