#![cfg_attr(docsrs, feature(doc_cfg))]

//! LoRaWAN frequency plans for network servers.
//!
//! Every supported [`Region`] maps to a [`FrequencyPlan`]: the band as defined by the LoRaWAN
//! Regional Parameters plus the channels, ADR bounds and CFList The Things Network operates on
//! top of it. The [`Registry`] also indexes the uplink channels of all plans so that the region
//! of a gateway can be inferred from the frequency of a received packet.
//!
//! ```
//! lorawan_band::initialize_tables();
//!
//! let plan = lorawan_band::get("EU_863_870").unwrap();
//! assert_eq!(plan.data_rate_string(5).unwrap(), "SF7BW125");
//!
//! assert_eq!(lorawan_band::guess_name(868_100_000), "EU_863_870");
//! assert_eq!(lorawan_band::guess(923_200_000), Some(lorawan_band::Region::AS_923));
//! assert_eq!(lorawan_band::guess_name(1), "");
//! ```
//!
//! ## Feature flags
#![doc = document_features::document_features!(feature_label = r#"<span class="stab portability"><code>{feature}</code></span>"#)]

// must be declared before the modules using its macros
mod fmt;

pub mod band;
mod error;
mod options;
pub mod plan;
pub mod region;
pub mod registry;

use std::sync::Arc;

pub use error::Error;
pub use options::BandOptions;
pub use plan::{AdrConfig, CfList, FrequencyPlan};
pub use region::Region;
pub use registry::Registry;

/// Frequency plan of the region named `name`, eg: `US_902_928`, from the process wide registry.
pub fn get(name: &str) -> Result<Arc<FrequencyPlan>, Error> {
    registry::global().get_by_name(name)
}

/// Region of a transmission on `frequency` (Hz), see [`Registry::guess`].
pub fn guess(frequency: u64) -> Option<Region> {
    registry::global().guess(frequency)
}

/// Name of the region [`guess`] returns, or an empty string when the frequency is not known.
pub fn guess_name(frequency: u64) -> &'static str {
    guess(frequency).map_or("", Region::as_str)
}

/// Initializes the process wide registry. Calling it more than once has no effect.
pub fn initialize_tables() {
    registry::global().initialize_tables();
}
