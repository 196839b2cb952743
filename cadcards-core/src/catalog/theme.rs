//! Category themes
//!
//! Each category maps to a fixed label and icon. The icon is a
//! closed enum so a typo is a compile error rather than a missing glyph.

use super::Category;

/// Icon shown next to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeIcon {
    Layers,
    Terminal,
    TriangleAlert,
    Cuboid,
    Ruler,
    Book,
}

impl ThemeIcon {
    /// Single-width glyph for terminal rendering
    pub fn glyph(&self) -> char {
        match self {
            ThemeIcon::Layers => '≡',
            ThemeIcon::Terminal => '>',
            ThemeIcon::TriangleAlert => '▲',
            ThemeIcon::Cuboid => '■',
            ThemeIcon::Ruler => '⊢',
            ThemeIcon::Book => '§',
        }
    }
}

/// Display configuration for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTheme {
    pub category: Category,
    /// Tab label (`SPECIFICATIONS` is shortened to `SPECS`)
    pub label: &'static str,
    pub icon: ThemeIcon,
}

impl Category {
    pub fn theme(&self) -> CategoryTheme {
        let (label, icon) = match self {
            Category::Details => ("DETAILS", ThemeIcon::Ruler),
            Category::Blocks => ("BLOCKS", ThemeIcon::Cuboid),
            Category::Symbols => ("SYMBOLS", ThemeIcon::TriangleAlert),
            Category::Layers => ("LAYERS", ThemeIcon::Layers),
            Category::Specifications => ("SPECS", ThemeIcon::Book),
            Category::Macros => ("MACROS", ThemeIcon::Terminal),
        };
        CategoryTheme {
            category: *self,
            label,
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_distinct_icon() {
        let icons: std::collections::HashSet<ThemeIcon> =
            Category::ALL.iter().map(|c| c.theme().icon).collect();
        assert_eq!(icons.len(), Category::ALL.len());
    }

    #[test]
    fn test_specifications_label_is_short() {
        assert_eq!(Category::Specifications.theme().label, "SPECS");
    }
}
