use std::fmt;

use crate::domain::property::Property;

/// One listing tile: image, name, location, nightly price, rating and a link
/// to the detail page.
pub struct PropertyCard<'a> {
    property: &'a Property,
}

impl<'a> PropertyCard<'a> {
    pub fn new(property: &'a Property) -> Self {
        Self { property }
    }
}

impl fmt::Display for PropertyCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.property;
        writeln!(f, "### {}", p.name)?;
        writeln!(f, "![{}]({})", p.name, p.image_or_default())?;
        writeln!(f, "{}", p.address)?;
        writeln!(f, "${} / night | ⭐ {}", p.price, p.rating)?;
        writeln!(f, "[View Details]({})", p.detail_path())
    }
}
