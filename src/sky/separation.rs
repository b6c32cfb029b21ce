use crate::catalog::domain::{GalacticPosition, Source};

/// Default search radius of the cursor lookup, in degrees
pub const DEFAULT_SEARCH_RADIUS_DEG: f64 = 3.0;

/// Great-circle distance in degrees between two galactic positions given in
/// degrees.
pub fn angular_separation(l1_deg: f64, b1_deg: f64, l2_deg: f64, b2_deg: f64) -> f64 {
    GalacticPosition::new(l1_deg, b1_deg).angular_separation(&GalacticPosition::new(l2_deg, b2_deg))
}

/// Closest source to a sky position
#[derive(Debug, Clone, Copy)]
pub struct NearestMatch<'a> {
    pub source: &'a Source,
    pub separation_deg: f64,
}

/// Finds the candidate closest to galactic `(l, b)`.
///
/// Returns `None` when there are no candidates or when the closest one is
/// farther than `max_deg`. Ties keep the earliest candidate.
pub fn nearest_source<'a, I>(
    candidates: I,
    l_deg: f64,
    b_deg: f64,
    max_deg: f64,
) -> Option<NearestMatch<'a>>
where
    I: IntoIterator<Item = &'a Source>,
{
    let target = GalacticPosition::new(l_deg, b_deg);

    candidates
        .into_iter()
        .map(|source| NearestMatch {
            source,
            separation_deg: source.galactic().angular_separation(&target),
        })
        .fold(None, |best: Option<NearestMatch<'a>>, candidate| match best {
            Some(b) if b.separation_deg <= candidate.separation_deg => Some(b),
            _ => Some(candidate),
        })
        .filter(|m| m.separation_deg <= max_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::source::tests::crab_attributes;
    use crate::catalog::domain::{CatalogIndex, EquatorialPosition};
    use approx::assert_abs_diff_eq;
    use std::sync::Arc;

    fn source_at(id: i64, name: &str, l: f64, b: f64) -> Source {
        let mut attrs = crab_attributes();
        attrs.id = id;
        attrs.canonical_name = name.to_string();
        let fk5 = GalacticPosition::new(l, b).to_fk5();
        attrs.position = EquatorialPosition::fk5(fk5.ra(), fk5.dec());
        Source::new(attrs, Arc::new(CatalogIndex::new()))
    }

    #[test]
    fn test_angular_separation() {
        assert_abs_diff_eq!(angular_separation(0.0, 0.0, 90.0, 0.0), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(angular_separation(359.0, 0.0, 1.0, 0.0), 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(angular_separation(10.0, 90.0, 200.0, 90.0), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(angular_separation(0.0, 0.0, 180.0, 0.0), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_nearest_source_within_radius() {
        let sources = vec![
            source_at(1, "A", 10.0, 0.0),
            source_at(2, "B", 12.0, 1.0),
            source_at(3, "C", 300.0, -5.0),
        ];
        let found = nearest_source(&sources, 11.5, 0.5, DEFAULT_SEARCH_RADIUS_DEG).unwrap();
        assert_eq!(found.source.canonical_name(), "B");
        assert!(found.separation_deg < 1.0);

        let found = nearest_source(&sources, -61.0, -5.0, DEFAULT_SEARCH_RADIUS_DEG).unwrap();
        assert_eq!(found.source.canonical_name(), "C");
    }

    #[test]
    fn test_nearest_source_outside_radius() {
        let sources = vec![source_at(1, "A", 10.0, 0.0)];
        assert!(nearest_source(&sources, 20.0, 0.0, DEFAULT_SEARCH_RADIUS_DEG).is_none());
        assert!(nearest_source(&sources, 20.0, 0.0, 15.0).is_some());
    }

    #[test]
    fn test_nearest_source_empty() {
        let sources: Vec<Source> = Vec::new();
        assert!(nearest_source(&sources, 0.0, 0.0, 180.0).is_none());
    }

    #[test]
    fn test_ties_keep_first() {
        let sources = vec![source_at(1, "A", 1.0, 0.0), source_at(2, "B", 1.0, 0.0)];
        let found = nearest_source(&sources, 0.0, 0.0, 3.0).unwrap();
        assert_eq!(found.source.id(), 1);
    }
}
