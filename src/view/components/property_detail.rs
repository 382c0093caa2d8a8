use std::fmt;

use crate::domain::property::Property;

/// Full property view shown above the reviews on the detail page.
pub struct PropertyDetail<'a> {
    property: &'a Property,
}

impl<'a> PropertyDetail<'a> {
    pub fn new(property: &'a Property) -> Self {
        Self { property }
    }
}

impl fmt::Display for PropertyDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.property;
        writeln!(f, "# {}", p.name)?;
        writeln!(f, "![{}]({})", p.name, p.image_or_default())?;
        writeln!(f, "Location: {}", p.address)?;
        writeln!(f, "Price: ${} / night", p.price)?;
        writeln!(f, "Rating: ⭐ {}", p.rating)?;
        if let Some(ref description) = p.description
            && !description.trim().is_empty()
        {
            writeln!(f, "\n## Description\n{description}")?;
        }
        writeln!(f, "\n[Book this stay](/booking)")
    }
}
