//! Configuration of the scroller layout.
//!
//! The config is a KDL document decoded with `knuffel`:
//!
//! ```kdl
//! layout {
//!     gaps horizontal=8 vertical=8
//!     column-widths "one-third" "one-half" "two-thirds" "one"
//!     window-heights "one-third" "one-half" "two-thirds" "one"
//!     column-default-width "one-half"
//!     window-default-height "one"
//!     cyclesize-closest
//! }
//!
//! window-rule {
//!     match app-id="^foot$"
//!     default-column-width "one-third"
//! }
//! ```

#[macro_use]
extern crate tracing;

use std::ffi::OsStr;
use std::path::Path;

use miette::{Context, IntoDiagnostic};

pub mod layout;
pub mod size;
pub mod window_rule;

pub use crate::layout::{Gaps, Layout, SizeList};
pub use crate::size::StandardSize;
pub use crate::window_rule::{Match, RegexEq, WindowRule};

#[derive(knuffel::Decode, Debug, Default, Clone, PartialEq)]
pub struct Config {
    #[knuffel(child, default)]
    pub layout: Layout,
    #[knuffel(children(name = "window-rule"))]
    pub window_rules: Vec<WindowRule>,
}

impl Config {
    pub fn parse(filename: &str, text: &str) -> Result<Self, knuffel::Error> {
        let _span = tracy_client::span!("Config::parse");
        knuffel::parse(filename, text)
    }

    pub fn load(path: &Path) -> miette::Result<Self> {
        let _span = tracy_client::span!("Config::load");

        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .with_context(|| format!("error reading {path:?}"))?;

        let filename = path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or("config.kdl");
        let config = Self::parse(filename, &contents).context("error parsing")?;
        debug!("loaded config from {path:?}");

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[track_caller]
    fn do_parse(text: &str) -> Config {
        Config::parse("test.kdl", text)
            .map_err(miette::Report::new)
            .unwrap()
    }

    #[test]
    fn parse_empty() {
        let config = do_parse("");
        assert_eq!(config, Config::default());
        assert_eq!(config.layout.gaps(), Gaps::default());
        assert_eq!(
            config.layout.column_widths(),
            vec![
                StandardSize::OneThird,
                StandardSize::OneHalf,
                StandardSize::TwoThirds,
                StandardSize::One,
            ]
        );
        assert_eq!(config.layout.column_default_width(), StandardSize::OneHalf);
        assert_eq!(config.layout.window_default_height(), StandardSize::One);
        assert!(!config.layout.cyclesize_closest);
    }

    #[test]
    fn parse_layout() {
        let config = do_parse(
            r#"
            layout {
                gaps horizontal=16 vertical=4
                column-widths "one-fourth" "one-half" "free" "three-quarters"
                window-heights "one-third" "two-thirds"
                column-default-width "one-third"
                window-default-height "one-half"
                cyclesize-closest
                focus-wrap-changes-workspace
            }
            "#,
        );

        let layout = &config.layout;
        assert_eq!(
            layout.gaps(),
            Gaps {
                horizontal: 16,
                vertical: 4,
            }
        );
        assert_eq!(
            layout.column_widths(),
            vec![
                StandardSize::OneFourth,
                StandardSize::OneHalf,
                StandardSize::ThreeQuarters,
            ]
        );
        assert_eq!(
            layout.window_heights(),
            vec![StandardSize::OneThird, StandardSize::TwoThirds]
        );
        assert_eq!(layout.column_default_width(), StandardSize::OneThird);
        assert_eq!(layout.window_default_height(), StandardSize::OneHalf);
        assert!(layout.cyclesize_closest);
        assert!(layout.focus_wrap_changes_workspace);
    }

    #[test]
    fn parse_gaps_defaults_missing_properties() {
        let config = do_parse("layout { gaps vertical=2; }");
        assert_eq!(
            config.layout.gaps(),
            Gaps {
                horizontal: 8,
                vertical: 2,
            }
        );
    }

    #[test]
    fn parse_window_rules() {
        let config = do_parse(
            r#"
            window-rule {
                match app-id="^foot$"
                match title="scratch"
                exclude app-id="^firefox$"
                default-column-width "one-third"
            }

            window-rule {
                default-window-height "free"
            }
            "#,
        );

        assert_eq!(config.window_rules.len(), 2);

        let rule = &config.window_rules[0];
        assert_eq!(rule.matches.len(), 2);
        assert_eq!(rule.excludes.len(), 1);
        assert_eq!(rule.default_column_width, Some(StandardSize::OneThird));
        assert_eq!(rule.default_window_height, None);

        assert!(rule.applies_to(Some("foot"), None));
        assert!(rule.applies_to(Some("alacritty"), Some("scratch")));
        assert!(!rule.applies_to(Some("firefox"), Some("scratch")));
        assert!(!rule.applies_to(None, None));

        let rule = &config.window_rules[1];
        assert!(rule.applies_to(None, None));
        assert_eq!(rule.default_window_height, Some(StandardSize::Free));
    }

    #[test]
    fn unknown_size_is_an_error() {
        let err = Config::parse("test.kdl", r#"layout { column-default-width "half"; }"#);
        assert!(err.is_err());
    }

    #[test]
    fn regex_compares_by_source() {
        let a: RegexEq = "^foot$".parse().unwrap();
        let b: RegexEq = "^foot$".parse().unwrap();
        let c: RegexEq = "foot".parse().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
