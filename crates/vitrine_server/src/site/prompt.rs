//! Prompt compilation.

use vitrine_core::SitePlan;

/// Fixed system preamble describing the output contract.
const PREAMBLE: [&str; 3] = [
    "You are an AI assistant that generates complete responsive marketing websites as a single HTML document.",
    "Respond with production ready HTML and CSS only. Inline CSS is acceptable. Do not wrap the response in code fences.",
    "Embed a simple CSS reset and typography styles. Use flex and grid layouts as needed.",
];

/// Compiles the full prompt for a plan.
///
/// The preamble is followed by optional context lines (company name,
/// navigation items, requested sections, preferred colors — in that
/// fixed order, each omitted when its field is absent or empty), then
/// the caller's free text in a delimited USER REQUEST section.
pub fn compile_prompt(plan: &SitePlan) -> String {
    let mut lines: Vec<String> = PREAMBLE.iter().map(|s| s.to_string()).collect();

    if let Some(name) = &plan.company_name {
        lines.push(format!("Company name: {}.", name));
    }
    if let Some(menu) = plan.menu.as_deref().filter(|m| !m.is_empty()) {
        lines.push(format!("Navigation items: {}.", menu.join(", ")));
    }
    if let Some(layout) = plan.layout.as_deref().filter(|l| !l.is_empty()) {
        lines.push(format!("Requested sections: {}.", layout.join(", ")));
    }
    if let Some(palette) = plan.palette.as_deref().filter(|p| !p.is_empty()) {
        lines.push(format!("Preferred colours: {}.", palette.join(", ")));
    }

    lines.push("Follow the user instructions below to guide the content and tone.".to_string());
    lines.push("END OF SYSTEM PROMPT.".to_string());

    format!("{}\n\nUSER REQUEST:\n{}", lines.join("\n"), plan.prompt)
}
