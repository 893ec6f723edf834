use tracing::debug;

use crate::error::FenceError;
use crate::map::{Map, Neighbor, Position};

/// A maximal 4-connected set of plots sharing one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    label: char,
    plots: Vec<Position>,
}

impl Region {
    pub fn label(&self) -> char {
        self.label
    }

    pub fn plots(&self) -> &[Position] {
        &self.plots
    }

    pub fn area(&self) -> usize {
        self.plots.len()
    }
}

/// Per-row "already claimed" markers, sized to each row so jagged maps work.
struct Visited(Vec<Vec<bool>>);

impl Visited {
    fn for_map(map: &Map) -> Self {
        Self(
            (0..map.height())
                .map(|row| vec![false; map.row_len(row)])
                .collect(),
        )
    }

    /// Marks `pos` and reports whether it was unclaimed before.
    fn claim(&mut self, pos: Position) -> bool {
        match self.0.get_mut(pos.row).and_then(|row| row.get_mut(pos.col)) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    fn is_claimed(&self, pos: Position) -> bool {
        self.0
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .unwrap_or(true)
    }
}

/// Partitions the whole map into regions. Seeds are taken in row-major order
/// and every plot ends up in exactly one region.
#[tracing::instrument(skip(map))]
pub fn find_regions(map: &Map) -> Result<Vec<Region>, FenceError> {
    let mut visited = Visited::for_map(map);
    let mut regions = Vec::new();

    for start in map.positions() {
        if visited.is_claimed(start) {
            continue;
        }

        let region = collect_region(map, start, &mut visited)?;
        debug!(
            "Region '{}' from {:?} with {} plots",
            region.label,
            start,
            region.area()
        );
        regions.push(region);
    }

    debug!("Found {} regions", regions.len());
    Ok(regions)
}

fn collect_region(
    map: &Map,
    start: Position,
    visited: &mut Visited,
) -> Result<Region, FenceError> {
    let label = map.label_at(start)?;
    let mut plots = Vec::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.claim(current) {
            continue;
        }
        plots.push(current);

        stack.extend(
            map.neighbors(current)?
                .into_iter()
                .filter_map(|(_, neighbor)| match neighbor {
                    Neighbor::Continuation(next) if !visited.is_claimed(next) => Some(next),
                    _ => None,
                }),
        );
    }

    Ok(Region { label, plots })
}
