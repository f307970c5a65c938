use crate::StandardSize;

#[derive(knuffel::Decode, Debug, Default, Clone, PartialEq)]
pub struct Layout {
    #[knuffel(child)]
    pub gaps: Option<Gaps>,
    #[knuffel(child)]
    pub column_widths: Option<SizeList>,
    #[knuffel(child)]
    pub window_heights: Option<SizeList>,
    #[knuffel(child, unwrap(argument))]
    pub column_default_width: Option<StandardSize>,
    #[knuffel(child, unwrap(argument))]
    pub window_default_height: Option<StandardSize>,
    /// Cycling the size of a Free window starts from the closest standard size instead of the
    /// default one.
    #[knuffel(child)]
    pub cyclesize_closest: bool,
    /// Moving focus past the first or last window of a column with no output in that direction
    /// switches to the previous or next workspace.
    #[knuffel(child)]
    pub focus_wrap_changes_workspace: bool,
}

#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gaps {
    /// Gap between adjacent columns.
    #[knuffel(property, default = 8)]
    pub horizontal: u16,
    /// Gap between adjacent windows of a column.
    #[knuffel(property, default = 8)]
    pub vertical: u16,
}

impl Default for Gaps {
    fn default() -> Self {
        Self {
            horizontal: 8,
            vertical: 8,
        }
    }
}

#[derive(knuffel::Decode, Debug, Default, Clone, PartialEq, Eq)]
pub struct SizeList {
    #[knuffel(arguments)]
    pub sizes: Vec<StandardSize>,
}

impl Layout {
    pub fn gaps(&self) -> Gaps {
        self.gaps.unwrap_or_default()
    }

    /// Column widths to cycle through.
    ///
    /// `free` can't be cycled to, so it is dropped from the list.
    pub fn column_widths(&self) -> Vec<StandardSize> {
        resolve_list(self.column_widths.as_ref())
    }

    /// Window heights to cycle through.
    pub fn window_heights(&self) -> Vec<StandardSize> {
        resolve_list(self.window_heights.as_ref())
    }

    pub fn column_default_width(&self) -> StandardSize {
        self.column_default_width.unwrap_or(StandardSize::OneHalf)
    }

    pub fn window_default_height(&self) -> StandardSize {
        self.window_default_height.unwrap_or(StandardSize::One)
    }
}

fn resolve_list(list: Option<&SizeList>) -> Vec<StandardSize> {
    let sizes: Vec<_> = list
        .into_iter()
        .flat_map(|list| list.sizes.iter().copied())
        .filter(|size| !size.is_free())
        .collect();

    if sizes.is_empty() {
        default_sizes()
    } else {
        sizes
    }
}

fn default_sizes() -> Vec<StandardSize> {
    vec![
        StandardSize::OneThird,
        StandardSize::OneHalf,
        StandardSize::TwoThirds,
        StandardSize::One,
    ]
}
