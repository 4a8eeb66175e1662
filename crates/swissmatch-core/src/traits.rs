// crates/swissmatch-core/src/traits.rs
use crate::model::{Canton, Community, Names, ZipCode};
use crate::text::equals_canonical;

/// Records that carry a set of localized names.
///
/// Implementors expose their [`Names`]; the name indices and the matching
/// helpers below work on every spelling, not only the native one.
///
/// # Examples
/// ```rust
/// use swissmatch_core::model::Names;
/// use swissmatch_core::traits::Named;
///
/// struct Place(Names);
/// impl Named for Place {
///     fn names(&self) -> &Names { &self.0 }
/// }
///
/// let place = Place(Names::native("Genève").with(swissmatch_core::Locale::De, "Genf"));
/// assert!(place.is_named("geneve"));
/// assert!(place.is_named("GENF"));
/// ```
pub trait Named {
    fn names(&self) -> &Names;

    /// True if any spelling of this record shares a canonical form with `q`.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        self.names()
            .variants()
            .into_iter()
            .any(|name| equals_canonical(name, q))
    }
}

impl Named for Canton {
    #[inline]
    fn names(&self) -> &Names {
        &self.names
    }
}

impl Named for Community {
    #[inline]
    fn names(&self) -> &Names {
        &self.names
    }
}

impl Named for ZipCode {
    #[inline]
    fn names(&self) -> &Names {
        &self.names
    }
}
