// accent palette shared by every section of the site
//
// components never hard-code colors: they set --accent / --accent-gradient on
// their root element and the stylesheet picks them up

use std::fmt;

use content::{Category, CategoryFilter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Accent {
    Coral,
    Amber,
    Teal,
    Sky,
    Purple,
    Pink,
    Dark,
}

impl Accent {
    // the card palette, in the order cards cycle through it
    pub fn all() -> Vec<Self> {
        vec![
            Self::Coral,
            Self::Amber,
            Self::Sky,
            Self::Purple,
            Self::Teal,
            Self::Pink,
        ]
    }

    pub fn cycle(index: usize) -> Self {
        let palette = Self::all();
        palette[index % palette.len()]
    }

    pub fn for_category(category: Category) -> Self {
        match category {
            Category::ArtAndCraft => Self::Coral,
            Category::Sports => Self::Teal,
            Category::Learning => Self::Sky,
            Category::Events => Self::Amber,
            Category::Nature => Self::Purple,
        }
    }

    // unknown labels get the neutral accent rather than an error
    pub fn for_filter(filter: &CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => Self::Dark,
            CategoryFilter::Only(c) => Self::for_category(*c),
            CategoryFilter::Unknown(_) => Self::Dark,
        }
    }

    pub fn to_css_color(self) -> &'static str {
        match self {
            Self::Coral => "#FF6B6B",
            Self::Amber => "#F59E0B",
            Self::Teal => "#0D9488",
            Self::Sky => "#38BDF8",
            Self::Purple => "#A855F7",
            Self::Pink => "#EC4899",
            Self::Dark => "#1A1A2E",
        }
    }

    pub fn to_css_gradient(self) -> &'static str {
        match self {
            Self::Coral => "linear-gradient(135deg, #FF6B6B, #FF8E53)",
            Self::Amber => "linear-gradient(135deg, #F59E0B, #FCD34D)",
            Self::Teal => "linear-gradient(135deg, #0D9488, #059669, #16A34A)",
            Self::Sky => "linear-gradient(135deg, #38BDF8, #6366F1)",
            Self::Purple => "linear-gradient(135deg, #A855F7, #EC4899)",
            Self::Pink => "linear-gradient(135deg, #EC4899, #A855F7)",
            Self::Dark => "linear-gradient(135deg, #1A1A2E, #444444)",
        }
    }

    pub fn to_css_vars(self) -> String {
        format!(
            "--accent: {}; --accent-gradient: {};",
            self.to_css_color(),
            self.to_css_gradient()
        )
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Coral => "coral",
            Self::Amber => "amber",
            Self::Teal => "teal",
            Self::Sky => "sky",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Dark => "dark",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_its_own_accent() {
        let accents: Vec<_> = Category::ALL.into_iter().map(Accent::for_category).collect();

        for (i, a) in accents.iter().enumerate() {
            assert!(!accents[i + 1..].contains(a), "{a} reused");
            assert_ne!(*a, Accent::Dark);
        }
    }

    #[test]
    fn unknown_filter_falls_back_to_dark() {
        let filter = CategoryFilter::from("Music");
        assert_eq!(Accent::for_filter(&filter), Accent::Dark);
        assert_eq!(Accent::for_filter(&CategoryFilter::All), Accent::Dark);
    }

    #[test]
    fn cycle_wraps() {
        assert_eq!(Accent::cycle(0), Accent::Coral);
        assert_eq!(Accent::cycle(6), Accent::Coral);
        assert_eq!(Accent::cycle(4), Accent::Teal);
    }

    #[test]
    fn css_vars_carry_both_values() {
        let vars = Accent::Sky.to_css_vars();
        assert!(vars.contains("--accent: #38BDF8;"));
        assert!(vars.contains("--accent-gradient: linear-gradient"));
    }
}
