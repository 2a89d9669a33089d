//! Filter to cap how many recordings any one artist credit contributes.
//!
//! Playlists read poorly when a single artist dominates; this stage keeps
//! at most `count` recordings per artist credit, preferring one end of the
//! ranking order when rankings are available.

use std::collections::{BTreeMap, HashSet};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::{FilterError, Result};
use crate::traits::{single_input, FilterElement};
use entities::{ArtistCreditId, Recording};

/// (identity, ranking) pair tracked per group member.
type GroupEntry = (String, Option<f64>);

/// How the members of one artist-credit group are ordered before truncation.
///
/// Selected once per invocation from the global all-rankings-present flag:
/// if even one recording in the whole input lacks a ranking, every group is
/// shuffled instead of rank-sorted. Partial ranking information is treated
/// as no ranking information.
enum GroupOrdering {
    /// Stable sort by ranking. With `keep_highest` the highest-ranked
    /// members come first, so the retained prefix is the better end.
    ByRanking { keep_highest: bool },
    /// Uniform shuffle.
    Randomize,
}

impl GroupOrdering {
    fn order(&self, group: &mut [GroupEntry], rng: &mut StdRng) {
        match self {
            GroupOrdering::ByRanking { keep_highest } => {
                group.sort_by(|a, b| {
                    let (ra, rb) = (a.1.unwrap_or(f64::MIN), b.1.unwrap_or(f64::MIN));
                    if *keep_highest {
                        rb.total_cmp(&ra)
                    } else {
                        ra.total_cmp(&rb)
                    }
                });
            }
            GroupOrdering::Randomize => group.shuffle(rng),
        }
    }
}

/// Caps the number of recordings retained per artist credit.
///
/// ## Algorithm
/// 1. Group recordings by artist credit id; any recording with no
///    attributable credit fails the whole stage (structural failure)
/// 2. Check whether every recording in the input carries a ranking
/// 3. Order each group: rank-sorted when rankings are universal (direction
///    per `exclude_lower_ranked`), uniformly shuffled otherwise
/// 4. Truncate each group to `count` members
/// 5. Emit the survivors in their original input order
pub struct ArtistCreditLimiter {
    count: usize,
    exclude_lower_ranked: bool,
    seed: Option<u64>,
}

impl ArtistCreditLimiter {
    /// Create a new ArtistCreditLimiter.
    ///
    /// # Arguments
    /// * `count` - Maximum recordings retained per artist credit
    /// * `exclude_lower_ranked` - When true the lowest-ranked recordings are
    ///   the ones removed; when false the highest-ranked are removed
    pub fn new(count: usize, exclude_lower_ranked: bool) -> Self {
        Self {
            count,
            exclude_lower_ranked,
            seed: None,
        }
    }

    /// Fix the shuffle seed so the randomized fallback is reproducible.
    ///
    /// Without a seed the shuffle draws from OS entropy and makes no
    /// reproducibility guarantee across runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl FilterElement for ArtistCreditLimiter {
    fn name(&self) -> &str {
        "ArtistCreditLimiter"
    }

    fn process(&self, inputs: Vec<Vec<Recording>>) -> Result<Vec<Recording>> {
        let recordings = single_input(inputs, self.name())?;

        // BTreeMap keeps group iteration stable, so a seeded run consumes
        // the rng stream in the same order every time.
        let mut groups: BTreeMap<ArtistCreditId, Vec<GroupEntry>> = BTreeMap::new();
        let mut all_have_rankings = true;
        for recording in &recordings {
            let credit_id = recording.artist_credit_id().ok_or_else(|| {
                FilterError::MissingArtistCredit {
                    element: self.name().to_string(),
                    mbid: recording.mbid.clone(),
                }
            })?;
            if recording.ranking.is_none() {
                all_have_rankings = false;
            }
            groups
                .entry(credit_id)
                .or_default()
                .push((recording.mbid.clone(), recording.ranking));
        }

        let ordering = if all_have_rankings {
            GroupOrdering::ByRanking {
                keep_highest: self.exclude_lower_ranked,
            }
        } else {
            GroupOrdering::Randomize
        };
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut survivors: HashSet<String> = HashSet::new();
        for group in groups.values_mut() {
            ordering.order(group, &mut rng);
            group.truncate(self.count);
            for (mbid, _) in group.iter() {
                survivors.insert(mbid.clone());
            }
        }

        // Group order is irrelevant to the caller; the output is the input
        // sequence restricted to the surviving identities.
        Ok(recordings
            .into_iter()
            .filter(|recording| survivors.contains(&recording.mbid))
            .collect())
    }
}
