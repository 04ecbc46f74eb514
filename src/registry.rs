//! Frequency plan registry and frequency to region inference.
//!
//! A [`Registry`] builds the plan of every [`Region`] once, in [`Region::PRIORITY`] order, and
//! indexes the uplink channels of the built plans by frequency. The first region to define a
//! frequency owns it. Channels allowing a single data rate are left out of the index.
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::band::{BandSource, RegionalParameters};
use crate::plan::FrequencyPlan;
use crate::region::{self, Region};
use crate::{BandOptions, Error};

/// Frequencies of the AS923 default channels, claimed by AS_923 whatever the index says.
const AS_923_JOIN_FREQUENCIES: [u64; 2] = [923_200_000, 923_400_000];
/// Frequencies of the KR920 default channels, claimed by KR_920_923 whatever the index says.
const KR_920_923_JOIN_FREQUENCIES: [u64; 3] = [922_100_000, 922_300_000, 922_500_000];

/// Outcome of building a region during table initialization.
pub type BuildOutcome = (Region, Result<(), Error>);

#[derive(Debug)]
struct Tables {
    plans: HashMap<Region, Arc<FrequencyPlan>>,
    channels: HashMap<u32, Region>,
    report: Vec<BuildOutcome>,
}

impl Tables {
    fn build<S: BandSource + ?Sized>(source: &S, options: &BandOptions) -> Self {
        let mut plans = HashMap::with_capacity(Region::PRIORITY.len());
        let mut channels = HashMap::new();
        let mut report = Vec::with_capacity(Region::PRIORITY.len());

        for region in Region::PRIORITY {
            match region::build(region, source, options) {
                Ok(plan) => {
                    debug!(
                        "built frequency plan {} with {} uplink channels",
                        region,
                        plan.band.uplink_channels.len()
                    );
                    for channel in plan.band.uplink_channels.iter().filter(|c| c.is_multi_rate()) {
                        channels.entry(channel.frequency).or_insert(region);
                    }
                    plans.insert(region, Arc::new(plan));
                    report.push((region, Ok(())));
                }
                Err(e) => {
                    warn!("skipping frequency plan {}: {}", region, e);
                    report.push((region, Err(e)));
                }
            }
        }

        info!("frequency plans initialized: {} plans, {} channels", plans.len(), channels.len());
        Self { plans, channels, report }
    }
}

/// Frequency plans of all regions and the index of their channels.
///
/// Tables are built at most once, on the first call to [`initialize_tables`](Self::initialize_tables).
/// Concurrent callers block until that build completes; afterwards all reads are lock free.
#[derive(Debug)]
pub struct Registry<S = RegionalParameters> {
    source: S,
    options: BandOptions,
    tables: OnceLock<Tables>,
}

impl Registry {
    pub fn new(options: BandOptions) -> Self {
        Self::with_source(RegionalParameters, options)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(BandOptions::default())
    }
}

impl<S: BandSource> Registry<S> {
    /// Creates a registry whose plans are built from the bands `source` provides.
    pub fn with_source(source: S, options: BandOptions) -> Self {
        Self { source, options, tables: OnceLock::new() }
    }

    pub fn options(&self) -> &BandOptions {
        &self.options
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Builds the plans of all regions and the channel index. Does nothing once done.
    pub fn initialize_tables(&self) {
        self.tables();
    }

    pub fn is_initialized(&self) -> bool {
        self.tables.get().is_some()
    }

    fn tables(&self) -> &Tables {
        self.tables.get_or_init(|| Tables::build(&self.source, &self.options))
    }

    /// The frequency plan of `region`.
    ///
    /// Plans built during initialization are shared. Before initialization, or for a region that
    /// failed to build then, the plan is built on demand and not cached.
    pub fn get(&self, region: Region) -> Result<Arc<FrequencyPlan>, Error> {
        if let Some(plan) = self.tables.get().and_then(|t| t.plans.get(&region)) {
            return Ok(Arc::clone(plan));
        }
        region::build(region, &self.source, &self.options).map(Arc::new)
    }

    /// Same as [`get`](Self::get) with the canonical region name, eg: `EU_863_870`.
    pub fn get_by_name(&self, name: &str) -> Result<Arc<FrequencyPlan>, Error> {
        self.get(name.parse()?)
    }

    /// Region a transmission on `frequency` (Hz) most likely belongs to.
    ///
    /// The AS923 and KR920 default channels are always attributed to their own region. Other
    /// frequencies are looked up in the channel index, which is empty until
    /// [`initialize_tables`](Self::initialize_tables) has run.
    pub fn guess(&self, frequency: u64) -> Option<Region> {
        let region = if AS_923_JOIN_FREQUENCIES.contains(&frequency) {
            Some(Region::AS_923)
        } else if KR_920_923_JOIN_FREQUENCIES.contains(&frequency) {
            Some(Region::KR_920_923)
        } else {
            u32::try_from(frequency).ok().and_then(|f| self.channel_region(f))
        };
        trace!("guessed region {:?} for {} Hz", region, frequency);
        region
    }

    /// Owner of `frequency` in the channel index.
    pub fn channel_region(&self, frequency: u32) -> Option<Region> {
        self.tables.get()?.channels.get(&frequency).copied()
    }

    /// The channel index, `None` before initialization.
    pub fn channel_index(&self) -> Option<&HashMap<u32, Region>> {
        self.tables.get().map(|t| &t.channels)
    }

    /// Regions whose plan was built during initialization, in priority order.
    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        let plans = self.tables.get().map(|t| &t.plans);
        Region::PRIORITY.into_iter().filter(move |r| plans.is_some_and(|p| p.contains_key(r)))
    }

    /// Outcome of every region build, in priority order. `None` before initialization.
    pub fn build_report(&self) -> Option<&[BuildOutcome]> {
        self.tables.get().map(|t| t.report.as_slice())
    }
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// The process wide registry, created with default options unless [`configure`] ran first.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(Registry::default)
}

/// Installs the options of the process wide registry.
///
/// Fails, handing `options` back, once the registry exists.
pub fn configure(options: BandOptions) -> Result<(), BandOptions> {
    GLOBAL.set(Registry::new(options)).map_err(|registry| registry.options)
}
