/// One line of a decklist: how many copies of which card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckEntry {
    pub quantity: u32,
    pub name: String,
}

/// A resolved decklist entry with the Scryfall fields the analysis needs
#[derive(Debug, Clone, PartialEq)]
pub struct CardRecord {
    pub name: String,
    /// Raw color codes as reported by Scryfall (e.g. "W", "U")
    pub color_identity: Vec<String>,
    pub type_line: Option<String>,
    pub cmc: Option<f64>,
    pub quantity: u32,
}

impl CardRecord {
    /// Returns true if the type line mentions "Land"
    pub fn is_land(&self) -> bool {
        self.type_line
            .as_deref()
            .map(|t| t.contains("Land"))
            .unwrap_or(false)
    }
}

/// Tally buckets for color identity, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorBucket {
    White,
    Blue,
    Black,
    Red,
    Green,
    Colorless,
}

impl ColorBucket {
    pub const ALL: [ColorBucket; 6] = [
        ColorBucket::White,
        ColorBucket::Blue,
        ColorBucket::Black,
        ColorBucket::Red,
        ColorBucket::Green,
        ColorBucket::Colorless,
    ];

    /// Parse a Scryfall color code. Colorless has no code of its own.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "W" => Some(ColorBucket::White),
            "U" => Some(ColorBucket::Blue),
            "B" => Some(ColorBucket::Black),
            "R" => Some(ColorBucket::Red),
            "G" => Some(ColorBucket::Green),
            _ => None,
        }
    }

    /// Short label used in printouts and charts ("C" for colorless)
    pub fn code(&self) -> &'static str {
        match self {
            ColorBucket::White => "W",
            ColorBucket::Blue => "U",
            ColorBucket::Black => "B",
            ColorBucket::Red => "R",
            ColorBucket::Green => "G",
            ColorBucket::Colorless => "C",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorBucket::White => "White",
            ColorBucket::Blue => "Blue",
            ColorBucket::Black => "Black",
            ColorBucket::Red => "Red",
            ColorBucket::Green => "Green",
            ColorBucket::Colorless => "Colorless",
        }
    }
}
