use itertools::Itertools;

use crate::error::FenceError;
use crate::map::{Direction, Map, Neighbor, Position};
use crate::regions::Region;

/// Every (plot, direction) pair of `region` that needs a unit of fence.
pub fn borders(map: &Map, region: &Region) -> Result<Vec<(Position, Direction)>, FenceError> {
    let mut borders = Vec::new();
    for &plot in region.plots() {
        borders.extend(
            map.neighbors(plot)?
                .into_iter()
                .filter(|(_, neighbor)| *neighbor == Neighbor::Border)
                .map(|(direction, _)| (plot, direction)),
        );
    }
    Ok(borders)
}

/// Number of unit fence segments around `region`.
pub fn perimeter(map: &Map, region: &Region) -> Result<usize, FenceError> {
    Ok(borders(map, region)?.len())
}

/// Number of straight fence sides around `region`.
///
/// Border edges are grouped by the direction they face and the line they lie
/// on (the row for up/down fences, the column for left/right fences). Within a
/// line, each maximal run of consecutive coordinates is one side.
pub fn sides(map: &Map, region: &Region) -> Result<usize, FenceError> {
    let lines = borders(map, region)?
        .into_iter()
        .map(|(plot, direction)| {
            if direction.is_vertical() {
                ((direction, plot.row), plot.col)
            } else {
                ((direction, plot.col), plot.row)
            }
        })
        .into_group_map();

    Ok(lines.into_values().map(count_runs).sum())
}

/// Counts maximal runs of consecutive integers. After sorting, subtracting
/// each value's index leaves one distinct value per run.
fn count_runs(mut coords: Vec<usize>) -> usize {
    coords.sort_unstable();
    coords.dedup();
    coords
        .into_iter()
        .enumerate()
        .map(|(k, value)| value - k)
        .dedup()
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_map;
    use crate::regions::find_regions;
    use rstest::rstest;

    fn region_with_label(map: &Map, label: char) -> miette::Result<Region> {
        find_regions(map)?
            .into_iter()
            .find(|r| r.label() == label)
            .ok_or_else(|| miette::miette!("no region labelled {}", label))
    }

    #[rstest]
    #[case::empty(vec![], 0)]
    #[case::single(vec![4], 1)]
    #[case::one_run(vec![3, 1, 2], 1)]
    #[case::two_runs(vec![0, 1, 3, 4], 2)]
    #[case::all_gaps(vec![0, 2, 4, 6], 4)]
    #[case::duplicates(vec![2, 2, 3], 1)]
    fn test_count_runs(#[case] coords: Vec<usize>, #[case] expected: usize) {
        assert_eq!(expected, count_runs(coords));
    }

    #[test]
    fn test_single_plot() -> miette::Result<()> {
        let map = parse_map("A")?;
        let region = region_with_label(&map, 'A')?;
        assert_eq!(4, perimeter(&map, &region)?);
        assert_eq!(4, sides(&map, &region)?);
        Ok(())
    }

    #[rstest]
    #[case::bar(1, 4)]
    #[case::column(5, 1)]
    #[case::square(3, 3)]
    #[case::wide(7, 2)]
    fn test_solid_rectangle(#[case] width: usize, #[case] height: usize) -> miette::Result<()> {
        let input = vec!["R".repeat(width); height].join("\n");
        let map = parse_map(&input)?;
        let region = region_with_label(&map, 'R')?;
        assert_eq!(2 * (width + height), perimeter(&map, &region)?);
        assert_eq!(4, sides(&map, &region)?);
        Ok(())
    }

    #[test]
    fn test_ring() -> miette::Result<()> {
        let map = parse_map("XXX\nX.X\nXXX")?;
        let ring = region_with_label(&map, 'X')?;
        assert_eq!(8, ring.area());
        assert_eq!(16, perimeter(&map, &ring)?);
        assert_eq!(8, sides(&map, &ring)?);

        let hole = region_with_label(&map, '.')?;
        assert_eq!(4, perimeter(&map, &hole)?);
        assert_eq!(4, sides(&map, &hole)?);
        Ok(())
    }

    #[rstest]
    #[case::a('A', 10, 4)]
    #[case::b('B', 8, 4)]
    #[case::c('C', 10, 8)]
    #[case::d('D', 4, 4)]
    #[case::e('E', 8, 4)]
    fn test_example_regions(
        #[case] label: char,
        #[case] expected_perimeter: usize,
        #[case] expected_sides: usize,
    ) -> miette::Result<()> {
        let map = parse_map("AAAA\nBBCD\nBBCC\nEEEC")?;
        let region = region_with_label(&map, label)?;
        assert_eq!(expected_perimeter, perimeter(&map, &region)?);
        assert_eq!(expected_sides, sides(&map, &region)?);
        Ok(())
    }

    #[test]
    fn test_z_shape() -> miette::Result<()> {
        let map = parse_map("AAB\nBAA")?;
        let region = region_with_label(&map, 'A')?;
        assert_eq!(10, perimeter(&map, &region)?);
        assert_eq!(8, sides(&map, &region)?);
        Ok(())
    }

    #[test]
    fn test_jagged_l_shape() -> miette::Result<()> {
        let map = parse_map("AAA\nA")?;
        let region = region_with_label(&map, 'A')?;
        assert_eq!(10, perimeter(&map, &region)?);
        assert_eq!(6, sides(&map, &region)?);
        Ok(())
    }

    #[test]
    fn test_perimeter_bounds_sides() -> miette::Result<()> {
        let map = parse_map(include_str!("../input1.txt"))?;
        for region in find_regions(&map)? {
            let edges = perimeter(&map, &region)?;
            let straight = sides(&map, &region)?;
            assert!(edges >= straight, "region '{}'", region.label());
            assert!(straight >= 4, "region '{}'", region.label());
        }
        Ok(())
    }
}
