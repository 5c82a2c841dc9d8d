//! Curated heading/body font pairings.

use serde::Serialize;

/// Broad mood of a pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PairingCategory {
    Modern,
    Classic,
    Elegant,
    Bold,
    Friendly,
}

impl std::fmt::Display for PairingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PairingCategory::Modern => write!(f, "modern"),
            PairingCategory::Classic => write!(f, "classic"),
            PairingCategory::Elegant => write!(f, "elegant"),
            PairingCategory::Bold => write!(f, "bold"),
            PairingCategory::Friendly => write!(f, "friendly"),
        }
    }
}

impl std::str::FromStr for PairingCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "modern" => Ok(PairingCategory::Modern),
            "classic" => Ok(PairingCategory::Classic),
            "elegant" => Ok(PairingCategory::Elegant),
            "bold" => Ok(PairingCategory::Bold),
            "friendly" => Ok(PairingCategory::Friendly),
            other => Err(format!("unknown font pairing category '{}'", other)),
        }
    }
}

/// One font face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontSpec {
    pub family: &'static str,
    pub weight: u16,
}

/// A heading font and a body font that work together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontPairing {
    pub name: &'static str,
    pub heading: FontSpec,
    pub body: FontSpec,
    pub description: &'static str,
    pub category: PairingCategory,
}

const fn pairing(
    name: &'static str,
    heading: (&'static str, u16),
    body: (&'static str, u16),
    description: &'static str,
    category: PairingCategory,
) -> FontPairing {
    FontPairing {
        name,
        heading: FontSpec {
            family: heading.0,
            weight: heading.1,
        },
        body: FontSpec {
            family: body.0,
            weight: body.1,
        },
        description,
        category,
    }
}

/// The catalog, in display order.
pub static FONT_PAIRINGS: &[FontPairing] = &[
    pairing(
        "Modern Clean",
        ("Montserrat", 700),
        ("Open Sans", 400),
        "Geometric headings over a neutral, highly legible body",
        PairingCategory::Modern,
    ),
    pairing(
        "Startup",
        ("Poppins", 600),
        ("Inter", 400),
        "Crisp and friendly, suited to product and SaaS ads",
        PairingCategory::Modern,
    ),
    pairing(
        "Editorial",
        ("Playfair Display", 700),
        ("Source Sans Pro", 400),
        "High-contrast serif headlines with a clean sans body",
        PairingCategory::Elegant,
    ),
    pairing(
        "Luxury",
        ("Cormorant Garamond", 600),
        ("Lato", 400),
        "Refined serif display type for premium brands",
        PairingCategory::Elegant,
    ),
    pairing(
        "Classic",
        ("Merriweather", 700),
        ("Merriweather Sans", 400),
        "A traditional superfamily pairing with a trustworthy tone",
        PairingCategory::Classic,
    ),
    pairing(
        "Newsroom",
        ("Libre Baskerville", 700),
        ("Roboto", 400),
        "Bookish headings balanced by a workhorse sans",
        PairingCategory::Classic,
    ),
    pairing(
        "Impact",
        ("Oswald", 700),
        ("Roboto", 400),
        "Condensed, loud headlines for sales and promotions",
        PairingCategory::Bold,
    ),
    pairing(
        "Playful",
        ("Nunito", 800),
        ("Nunito Sans", 400),
        "Rounded letterforms for approachable, casual campaigns",
        PairingCategory::Friendly,
    ),
];

/// Look up a pairing by name, ignoring case.
pub fn find_pairing(name: &str) -> Option<&'static FontPairing> {
    FONT_PAIRINGS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

/// Pairings in one category, in catalog order.
pub fn pairings_in(category: PairingCategory) -> Vec<&'static FontPairing> {
    FONT_PAIRINGS
        .iter()
        .filter(|p| p.category == category)
        .collect()
}
