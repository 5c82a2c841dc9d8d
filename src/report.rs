//! Plain-text rendering of analysis results for the terminal.

use adforge_core::{Analysis, FontPairing, Palette, Suggestion};

/// One block per suggestion: priority, id and title, then the description indented.
pub fn render_suggestions(suggestions: &[Suggestion]) -> String {
    if suggestions.is_empty() {
        return "No suggestions. The design looks consistent.\n".to_string();
    }

    let mut out = format!("Suggestions ({}):\n", suggestions.len());
    for s in suggestions {
        out.push_str(&format!("  [{}] {} ({}): {}\n", s.priority, s.id, s.kind, s.title));
        out.push_str(&format!("      {}\n", s.description));
    }
    out
}

pub fn render_palettes(palettes: &[Palette]) -> String {
    palettes
        .iter()
        .map(|p| format!("{:<14} {}\n", p.name, p.colors.join(" ")))
        .collect()
}

pub fn render_fonts(pairings: &[&FontPairing]) -> String {
    pairings
        .iter()
        .map(|p| {
            format!(
                "{:<14} {} {} / {} {}  [{}]\n",
                p.name, p.heading.family, p.heading.weight, p.body.family, p.body.weight, p.category
            )
        })
        .collect()
}

/// Full report for `adforge analyze`.
pub fn render_analysis(analysis: &Analysis) -> String {
    let mut out = render_suggestions(&analysis.suggestions);
    out.push_str(&format!("\nPalettes from {}:\n", analysis.dominant_color));
    out.push_str(&render_palettes(&analysis.palettes));
    out
}
