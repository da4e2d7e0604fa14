#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (the
  assessment modal, analytics dashboard and chart styling in particular)
  remain present in the unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) builds.

How it works:
- We compile-time embed the unified theme using `include_str!` pointing to the
  shared `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

A substring presence check is sufficient as an early warning; parsing the CSS
properly would add dependencies for no extra signal.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".app {",
    ".page {",
    ".theme-light",
    ".theme-dark",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Home / about heroes
    ".hero {",
    ".hero--detect",
    ".hero--assess",
    ".hero--about",
    ".stat-grid__card",
    // Assessment modal
    ".modal-overlay",
    ".assessment__grid",
    ".assessment__field",
    ".assessment__result--high",
    ".assessment__result--moderate",
    ".assessment__result--low",
    // Analytics dashboard
    ".viz-toggle__button--active",
    ".viz-selector",
    ".viz-panel__status--error",
    ".spinner",
    // Charts & summaries
    ".chart-card",
    ".chart__grid",
    ".chart__box--addicted",
    ".chart__box--not-addicted",
    ".chart-legend__swatch--addicted",
    ".chart-legend__swatch--not-addicted",
    ".summary-card--addicted",
    ".summary-card--not-addicted",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 760px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars), \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn group_color_variables_present() {
    // The chart components hard-code the group fills; the stylesheet carries
    // matching variables for borders and legends. Keep the pairing intact.
    let has_addicted = THEME_CSS.contains("--addicted: #ef4444");
    let has_not_addicted = THEME_CSS.contains("--not-addicted: #10b981");
    assert!(
        has_addicted && has_not_addicted,
        "Group color variables missing (addicted: {has_addicted}, not-addicted: {has_not_addicted})"
    );
}
