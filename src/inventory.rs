//! Inventory labels

/// Size label for listings without a size reference.
pub const ONE_SIZE: &str = "One Size";

/// Default seller label for listings owned by the platform.
pub const DEFAULT_PLATFORM_SELLER: &str = "Grailify Store";

/// Size requested for a new listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSelection<'a> {
    /// No size reference is stored.
    OneSize,

    /// Must match a size of the item's category.
    Named(&'a str),
}

impl<'a> SizeSelection<'a> {
    /// Interpret seller input; empty or [`ONE_SIZE`] (any case) selects no size.
    pub fn parse(input: &'a str) -> Self {
        let input = input.trim();

        if input.is_empty() || input.eq_ignore_ascii_case(ONE_SIZE) {
            SizeSelection::OneSize
        } else {
            SizeSelection::Named(input)
        }
    }
}

/// Label for an optional size value.
pub fn size_label(size: Option<String>) -> String {
    size.unwrap_or_else(|| ONE_SIZE.to_string())
}
