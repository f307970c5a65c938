use scroller_config::{StandardSize, WindowRule};

/// Rules applied to a window, computed from the configured window rules.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedWindowRules {
    /// Width of a column created for this window.
    pub default_column_width: Option<StandardSize>,
    /// Height of this window when it is added to a column.
    pub default_window_height: Option<StandardSize>,
}

impl ResolvedWindowRules {
    pub const fn empty() -> Self {
        Self {
            default_column_width: None,
            default_window_height: None,
        }
    }

    /// Computes the rules for a window with the given app id and title.
    ///
    /// Rules apply in order, so later rules override earlier ones.
    pub fn compute(rules: &[WindowRule], app_id: Option<&str>, title: Option<&str>) -> Self {
        let _span = tracy_client::span!("ResolvedWindowRules::compute");

        let mut resolved = ResolvedWindowRules::empty();

        for rule in rules.iter().filter(|rule| rule.applies_to(app_id, title)) {
            if let Some(x) = rule.default_column_width {
                resolved.default_column_width = Some(x);
            }
            if let Some(x) = rule.default_window_height {
                resolved.default_window_height = Some(x);
            }
        }

        resolved
    }
}

#[cfg(test)]
mod tests {
    use scroller_config::Config;

    use super::*;

    #[test]
    fn later_rules_override_earlier_ones() {
        let config = Config::parse(
            "test.kdl",
            r#"
            window-rule {
                default-column-width "one-half"
                default-window-height "one-third"
            }

            window-rule {
                match app-id="^foot$"
                default-column-width "one-fourth"
            }

            window-rule {
                match app-id="^foot$"
                exclude title="^htop$"
                default-window-height "one"
            }
            "#,
        )
        .unwrap();

        let rules = &config.window_rules;

        assert_eq!(
            ResolvedWindowRules::compute(rules, Some("firefox"), None),
            ResolvedWindowRules {
                default_column_width: Some(StandardSize::OneHalf),
                default_window_height: Some(StandardSize::OneThird),
            }
        );
        assert_eq!(
            ResolvedWindowRules::compute(rules, Some("foot"), Some("bash")),
            ResolvedWindowRules {
                default_column_width: Some(StandardSize::OneFourth),
                default_window_height: Some(StandardSize::One),
            }
        );
        assert_eq!(
            ResolvedWindowRules::compute(rules, Some("foot"), Some("htop")),
            ResolvedWindowRules {
                default_column_width: Some(StandardSize::OneFourth),
                default_window_height: Some(StandardSize::OneThird),
            }
        );
    }

    #[test]
    fn no_rules_resolve_to_empty() {
        assert_eq!(
            ResolvedWindowRules::compute(&[], Some("foot"), None),
            ResolvedWindowRules::empty()
        );
    }
}
