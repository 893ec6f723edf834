use miette::{Context, Result};
use tracing::{debug, info};

use crate::cost::{par_total_cost, Metric};
use crate::parser::parse_map;
use crate::regions::find_regions;

/// Total fencing price when every region is charged `area * perimeter`.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    info!("Pricing garden fences by perimeter");
    let map = parse_map(input).context("Failed to parse garden map")?;
    debug!("Parsed map with {} rows and {} plots", map.height(), map.plot_count());

    let regions = find_regions(&map).context("Failed to find regions")?;
    debug!("Found {} regions", regions.len());

    let price = par_total_cost(&map, &regions, Metric::Perimeter)
        .context("Failed to price regions")?;
    debug!("Total price {}", price);

    Ok(price.to_string())
}
