//! # Enumeration Driver
//!
//! Runs the generator over a catalog. A cube needs one start permutation
//! per pattern; a cuboid is tried from all six, since the box can be
//! unfolded starting from any face orientation. Combinations that fail are
//! dropped, and the survivors are sorted by `(pattern_id, variant_index)`.
//!
//! With the `parallel` feature the jobs run on the rayon thread pool. The
//! output is identical to the sequential path.

use config::constants::{MAX_DIMENSION, MIN_DIMENSION};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assemble::assemble;
use crate::config::GeneratorConfig;
use crate::edge_match::match_edges;
use crate::error::{NetError, NetResult};
use crate::net::NetData;
use crate::pattern::{Pattern, PatternCatalog};
use crate::propagate::propagate;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Box extents.
///
/// # Examples
/// ```
/// use box_net::Dimensions;
/// let dims = Dimensions::new(2.0, 3.0, 4.0);
/// assert!(!dims.is_cube());
/// assert_eq!(dims.permutations()[1], [2.0, 4.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length.
    pub l: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Dimensions {
    /// Creates a set of dimensions.
    pub fn new(l: f64, w: f64, h: f64) -> Self {
        Self { l, w, h }
    }

    /// A cube of side `n`.
    pub fn cube(n: f64) -> Self {
        Self::new(n, n, n)
    }

    /// Each axis rounded and clamped into the range the editor offers.
    ///
    /// # Examples
    /// ```
    /// use box_net::Dimensions;
    /// let dims = Dimensions::new(0.2, 4.6, 25.0).clamped();
    /// assert_eq!(dims, Dimensions::new(1.0, 5.0, 10.0));
    /// ```
    pub fn clamped(self) -> Self {
        let clamp = |v: f64| {
            let v = if v.is_finite() { v.round() } else { f64::from(MIN_DIMENSION) };
            v.clamp(f64::from(MIN_DIMENSION), f64::from(MAX_DIMENSION))
        };
        Self::new(clamp(self.l), clamp(self.w), clamp(self.h))
    }

    /// True when all three extents are equal.
    pub fn is_cube(&self) -> bool {
        self.l == self.w && self.w == self.h
    }

    /// The six start configurations `[L, W, H]` for the root face.
    pub fn permutations(&self) -> [[f64; 3]; 6] {
        let Self { l, w, h } = *self;
        [
            [l, w, h],
            [l, h, w],
            [w, l, h],
            [w, h, l],
            [h, l, w],
            [h, w, l],
        ]
    }

    /// Checks that every extent is finite and positive.
    ///
    /// # Errors
    /// Returns [`NetError::InvalidDimensions`] naming the offending axis.
    pub fn validate(&self) -> NetResult<()> {
        validate_extents([self.l, self.w, self.h])
    }
}

fn validate_extents(extents: [f64; 3]) -> NetResult<()> {
    for (axis, value) in ["l", "w", "h"].into_iter().zip(extents) {
        if !value.is_finite() || value <= 0.0 {
            return Err(NetError::InvalidDimensions(format!(
                "{axis} must be finite and positive, got {value}"
            )));
        }
    }
    Ok(())
}

/// Generates the net of `pattern` with the root face's `[L, W, H]` set to
/// `start`, using the default configuration.
///
/// # Errors
/// See [`generate_net_with`].
///
/// # Examples
/// ```
/// use box_net::{generate_net, PatternCatalog};
/// let catalog = PatternCatalog::standard();
/// let net = generate_net(catalog.get(1).unwrap(), [2.0, 3.0, 4.0], 1).unwrap();
/// assert_eq!(net.total_width, 12.0);
/// assert_eq!(net.edge_matches.len(), 7);
/// ```
pub fn generate_net(pattern: &Pattern, start: [f64; 3], variant_index: u32) -> NetResult<NetData> {
    generate_net_with(&GeneratorConfig::default(), pattern, start, variant_index)
}

/// Generates one net with an explicit configuration.
///
/// # Errors
/// - [`NetError::InvalidDimensions`] for non-finite or non-positive extents.
/// - [`NetError::UnplacedParent`] / [`NetError::DuplicateFace`] for a
///   malformed pattern.
/// - [`NetError::Overlap`] when the layout self-intersects.
pub fn generate_net_with(
    config: &GeneratorConfig,
    pattern: &Pattern,
    start: [f64; 3],
    variant_index: u32,
) -> NetResult<NetData> {
    validate_extents(start)?;
    let unfolding = propagate(&pattern.links, start, config.overlap_epsilon)?;
    let matching = match_edges(&unfolding, config.edge_key_scale);
    Ok(assemble(pattern.id, variant_index, &unfolding, matching))
}

/// Every feasible net of the standard catalog for `dims`.
///
/// # Examples
/// ```
/// use box_net::{generate_all_nets, Dimensions};
/// assert_eq!(generate_all_nets(Dimensions::cube(1.0), true).len(), 11);
/// ```
pub fn generate_all_nets(dims: Dimensions, is_cube: bool) -> Vec<NetData> {
    generate_all_nets_with(
        &PatternCatalog::standard(),
        dims,
        is_cube,
        &GeneratorConfig::default(),
    )
}

/// Every feasible net of `catalog` for `dims`.
///
/// Invalid dimensions produce an empty list.
pub fn generate_all_nets_with(
    catalog: &PatternCatalog,
    dims: Dimensions,
    is_cube: bool,
    config: &GeneratorConfig,
) -> Vec<NetData> {
    if let Err(err) = dims.validate() {
        debug!(error = %err, "rejected dimensions");
        return Vec::new();
    }

    let starts: Vec<[f64; 3]> = if is_cube {
        vec![[dims.l, dims.l, dims.l]]
    } else {
        dims.permutations().to_vec()
    };
    let jobs: Vec<(&Pattern, u32, [f64; 3])> = catalog
        .iter()
        .flat_map(|pattern| {
            starts
                .iter()
                .zip(1u32..)
                .map(move |(start, variant)| (pattern, variant, *start))
        })
        .collect();

    let run = |&(pattern, variant, start): &(&Pattern, u32, [f64; 3])| {
        match generate_net_with(config, pattern, start, variant) {
            Ok(net) => Some(net),
            Err(err) => {
                debug!(pattern = pattern.id, variant, error = %err, "dropped net");
                None
            }
        }
    };

    #[cfg(feature = "parallel")]
    let mut nets: Vec<NetData> = jobs.par_iter().filter_map(run).collect();
    #[cfg(not(feature = "parallel"))]
    let mut nets: Vec<NetData> = jobs.iter().filter_map(run).collect();

    nets.sort_by_key(|net| (net.pattern_id, net.variant_index));
    debug!(
        produced = nets.len(),
        attempted = jobs.len(),
        is_cube,
        "enumerated nets"
    );
    nets
}
