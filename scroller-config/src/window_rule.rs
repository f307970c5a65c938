use std::str::FromStr;

use regex::Regex;

use crate::StandardSize;

#[derive(knuffel::Decode, Debug, Default, Clone, PartialEq)]
pub struct WindowRule {
    #[knuffel(children(name = "match"))]
    pub matches: Vec<Match>,
    #[knuffel(children(name = "exclude"))]
    pub excludes: Vec<Match>,

    #[knuffel(child, unwrap(argument))]
    pub default_column_width: Option<StandardSize>,
    #[knuffel(child, unwrap(argument))]
    pub default_window_height: Option<StandardSize>,
}

#[derive(knuffel::Decode, Debug, Default, Clone, PartialEq)]
pub struct Match {
    #[knuffel(property, str)]
    pub app_id: Option<RegexEq>,
    #[knuffel(property, str)]
    pub title: Option<RegexEq>,
}

/// A [`Regex`] compared by its source text.
#[derive(Debug, Clone)]
pub struct RegexEq(pub Regex);

impl PartialEq for RegexEq {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_str() == other.0.as_str()
    }
}

impl Eq for RegexEq {}

impl FromStr for RegexEq {
    type Err = <Regex as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Regex::from_str(s).map(Self)
    }
}

impl Match {
    /// Whether every property set on this match agrees with the window.
    ///
    /// A window without an app id or title never matches a property that requires one.
    pub fn matches(&self, app_id: Option<&str>, title: Option<&str>) -> bool {
        fn check(pattern: Option<&RegexEq>, value: Option<&str>) -> bool {
            match pattern {
                None => true,
                Some(RegexEq(re)) => value.is_some_and(|value| re.is_match(value)),
            }
        }

        check(self.app_id.as_ref(), app_id) && check(self.title.as_ref(), title)
    }
}

impl WindowRule {
    pub fn applies_to(&self, app_id: Option<&str>, title: Option<&str>) -> bool {
        if !self.matches.is_empty() && !self.matches.iter().any(|m| m.matches(app_id, title)) {
            return false;
        }

        !self.excludes.iter().any(|m| m.matches(app_id, title))
    }
}
