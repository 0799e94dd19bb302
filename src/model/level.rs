/// Which column header a section title announces for the third axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThirdAxis {
    Area,
    Instructions,
    Mixed,
}

impl ThirdAxis {
    pub fn label(self) -> &'static str {
        match self {
            ThirdAxis::Area => "Area",
            ThirdAxis::Instructions => "Instructions",
            ThirdAxis::Mixed => "Area/Instructions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelKind {
    Normal,
    Production,
    Title(ThirdAxis),
}

impl LevelKind {
    pub fn is_level(self) -> bool {
        matches!(self, LevelKind::Normal | LevelKind::Production)
    }

    pub fn is_title(self) -> bool {
        matches!(self, LevelKind::Title(_))
    }

    /// Parses the catalog spelling (`NORMAL`, `TITLE_MIXED`, ...).
    pub fn from_catalog_name(name: &str) -> Option<Self> {
        match name.trim() {
            "NORMAL" => Some(LevelKind::Normal),
            "PRODUCTION" => Some(LevelKind::Production),
            "TITLE_NORMAL" => Some(LevelKind::Title(ThirdAxis::Area)),
            "TITLE_PRODUCTION" => Some(LevelKind::Title(ThirdAxis::Instructions)),
            "TITLE_MIXED" => Some(LevelKind::Title(ThirdAxis::Mixed)),
            _ => None,
        }
    }

    /// Axis names in storage order for a scored level; titles carry none.
    pub fn axis_names(self) -> Option<[&'static str; 3]> {
        match self {
            LevelKind::Normal => Some(["cost", "cycles", "area"]),
            LevelKind::Production => Some(["cost", "cycles", "instructions"]),
            LevelKind::Title(_) => None,
        }
    }

    pub fn catalog_name(self) -> &'static str {
        match self {
            LevelKind::Normal => "NORMAL",
            LevelKind::Production => "PRODUCTION",
            LevelKind::Title(ThirdAxis::Area) => "TITLE_NORMAL",
            LevelKind::Title(ThirdAxis::Instructions) => "TITLE_PRODUCTION",
            LevelKind::Title(ThirdAxis::Mixed) => "TITLE_MIXED",
        }
    }
}
