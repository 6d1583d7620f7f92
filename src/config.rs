use std::fs;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

/** how the random generator picks edges */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeSampling {
    /// exactly round(p.n.(n-1)/2) edges, sampled without replacement
    #[default]
    ExactCount,
    /// each pair included independently with probability p
    Independent,
}

/** order in which the neighbors of a vertex are stored (and thus scanned) */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborOrder {
    /// neighbor lists sorted by increasing id
    #[default]
    Ascending,
    /// neighbor lists in edge insertion order
    Insertion,
}

impl std::str::FromStr for EdgeSampling {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "exact" | "exact_count" => Ok(Self::ExactCount),
            "independent" => Ok(Self::Independent),
            _ => Err(ColorError::invalid(format!(
                "unknown sampling method '{}' (valid: 'exact', 'independent')", s
            ))),
        }
    }
}

impl std::str::FromStr for NeighborOrder {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ascending" => Ok(Self::Ascending),
            "insertion" => Ok(Self::Insertion),
            _ => Err(ColorError::invalid(format!(
                "unknown neighbor order '{}' (valid: 'ascending', 'insertion')", s
            ))),
        }
    }
}

fn default_num_trials() -> usize { 1 }

/** parameters of a run: graph size, density, color budget and number of trials */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// number of vertices
    pub n: usize,
    /// edge probability
    pub p: f64,
    /// number of colors allowed
    pub k: usize,
    /// number of random graphs to generate and color
    #[serde(default = "default_num_trials")]
    pub num_trials: usize,
    /// random seed (entropy-seeded if absent)
    #[serde(default)]
    pub seed: Option<u64>,
    /// edge sampling method
    #[serde(default)]
    pub sampling: EdgeSampling,
    /// neighbor storage order
    #[serde(default)]
    pub neighbor_order: NeighborOrder,
    /// if true, also run DSATUR on each graph
    #[serde(default)]
    pub baseline: bool,
}

impl RunConfig {
    /** creates a configuration with default sampling, order and no seed */
    pub fn new(n: usize, p: f64, k: usize, num_trials: usize) -> Self {
        Self {
            n, p, k, num_trials,
            seed: None,
            sampling: EdgeSampling::default(),
            neighbor_order: NeighborOrder::default(),
            baseline: false,
        }
    }

    /// sets the seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /** reads a configuration from a JSON file and validates it */
    pub fn from_file(filename: &str) -> Result<Self> {
        let s = fs::read_to_string(filename)?;
        let res: Self = serde_json::from_str(&s)?;
        res.validate()?;
        Ok(res)
    }

    /** checks the parameter ranges */
    pub fn validate(&self) -> Result<()> {
        validate_probability(self.p)?;
        validate_k(self.k)?;
        if self.num_trials == 0 {
            return Err(ColorError::invalid("the number of trials must be at least 1"));
        }
        Ok(())
    }

    /** builds the random number generator of the run */
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                info!("random seed: {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => {
                info!("random seed: from entropy");
                StdRng::from_entropy()
            }
        }
    }
}

/// p must be a finite number in [0,1]
pub fn validate_probability(p: f64) -> Result<()> {
    if !p.is_finite() || !(0. ..=1.).contains(&p) {
        return Err(ColorError::invalid(format!("edge probability {} not in [0,1]", p)));
    }
    Ok(())
}

/// k must be positive
pub fn validate_k(k: usize) -> Result<()> {
    if k == 0 {
        return Err(ColorError::invalid("the number of colors k must be at least 1"));
    }
    Ok(())
}
