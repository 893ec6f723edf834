use rayon::prelude::*;
use tracing::debug;

use crate::error::FenceError;
use crate::fence::{perimeter, sides};
use crate::map::Map;
use crate::regions::Region;

/// Which fence measurement a region is priced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Unit fence segments.
    Perimeter,
    /// Straight fence sides, however long.
    Sides,
}

type Measure = fn(&Map, &Region) -> Result<usize, FenceError>;

impl Metric {
    /// Picks the value matching this metric.
    pub fn select<T>(&self, perimeter: T, sides: T) -> T {
        match self {
            Metric::Perimeter => perimeter,
            Metric::Sides => sides,
        }
    }

    pub fn measure(&self, map: &Map, region: &Region) -> Result<usize, FenceError> {
        self.select::<Measure>(perimeter, sides)(map, region)
    }

    /// `area * metric` for one region.
    pub fn price(&self, map: &Map, region: &Region) -> Result<u64, FenceError> {
        Ok(priced(region.area(), self.measure(map, region)?))
    }
}

fn priced(area: usize, measure: usize) -> u64 {
    area as u64 * measure as u64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionReport {
    pub label: char,
    pub area: usize,
    pub perimeter: usize,
    pub sides: usize,
}

impl RegionReport {
    pub fn measure(&self, metric: Metric) -> usize {
        metric.select(self.perimeter, self.sides)
    }

    pub fn price(&self, metric: Metric) -> u64 {
        priced(self.area, self.measure(metric))
    }
}

/// Sum of `area * metric` over every region.
pub fn total_cost(map: &Map, regions: &[Region], metric: Metric) -> Result<u64, FenceError> {
    regions
        .iter()
        .map(|region| metric.price(map, region))
        .sum()
}

/// Same as [`total_cost`], with regions priced on the rayon pool.
pub fn par_total_cost(map: &Map, regions: &[Region], metric: Metric) -> Result<u64, FenceError> {
    regions
        .par_iter()
        .map(|region| metric.price(map, region))
        .sum()
}

/// Area, perimeter and side count for every region.
#[tracing::instrument(skip_all)]
pub fn survey(map: &Map, regions: &[Region]) -> Result<Vec<RegionReport>, FenceError> {
    regions
        .iter()
        .map(|region| {
            let report = RegionReport {
                label: region.label(),
                area: region.area(),
                perimeter: perimeter(map, region)?,
                sides: sides(map, region)?,
            };
            debug!(?report);
            Ok(report)
        })
        .collect()
}
