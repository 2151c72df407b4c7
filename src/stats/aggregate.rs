use crate::domain::Polygon;

/// Total area of every polygon yielded by `polygons`; `0.0` when there are none
pub fn sum_areas<'a, I>(polygons: I) -> f64
where
    I: IntoIterator<Item = &'a Polygon>,
{
    // seeded with +0.0; an empty float `sum()` yields -0.0 and would print "-0.0"
    polygons.into_iter().map(Polygon::area).fold(0.0, |acc, a| acc + a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_empty() {
        let none: Vec<Polygon> = Vec::new();
        assert_eq!(sum_areas(&none), 0.0);
    }

    #[test]
    fn test_sum_keeps_fractions() {
        let half = Polygon::try_from(vec![(0, 0), (1, 0), (0, 1)]).unwrap();
        let polygons = vec![half.clone(), half.clone(), half];
        assert_eq!(sum_areas(&polygons), 1.5);
    }

    #[test]
    fn test_sum_filtered_iterator() {
        let square = Polygon::try_from(vec![(0, 0), (2, 0), (2, 2), (0, 2)]).unwrap();
        let triangle = Polygon::try_from(vec![(0, 0), (4, 0), (0, 3)]).unwrap();
        let polygons = vec![square, triangle];
        let odd = sum_areas(polygons.iter().filter(|p| !p.has_even_vertices()));
        assert_eq!(odd, 6.0);
    }
}
