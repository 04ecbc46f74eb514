//! Frequency plans as operated by The Things Network.
//!
//! Each [`Region`] is built from a baseline [`Band`](crate::band::Band) and an overlay: replacement
//! channels, sub-band masking for the fixed channel plans, ADR bounds, and a CFList for regions
//! whose channels differ from the band's defaults.
use core::fmt;
use core::str::FromStr;

use crate::band::{Band, BandName, BandSource, DwellTime};
use crate::plan::FrequencyPlan;
use crate::{BandOptions, Error};

mod channels;

/// Number of uplink channels of the fixed channel plans (US915, AU915).
const FIXED_UPLINK_CHANNELS: usize = 72;
/// Channels per sub-band.
const SUBBAND_SIZE: usize = 8;
/// Index of the first 500 kHz uplink channel of the fixed channel plans.
const FIRST_500KHZ_CHANNEL: usize = 64;

/// Frequency plans supported by the registry, named by their canonical identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
pub enum Region {
    EU_863_870,
    US_902_928,
    CN_779_787,
    EU_433,
    AU_915_928,
    CN_470_510,
    AS_923,
    AS_920_923,
    AS_923_925,
    KR_920_923,
    IN_865_867,
    RU_864_870,
}

impl Region {
    /// Order in which regions claim frequencies: when several regions define the same channel,
    /// the region listed first owns it.
    pub const PRIORITY: [Region; 12] = [
        Region::EU_863_870,
        Region::IN_865_867,
        Region::US_902_928,
        Region::CN_779_787,
        Region::EU_433,
        Region::AS_923,
        Region::AS_920_923,
        Region::AS_923_925,
        Region::KR_920_923,
        Region::AU_915_928,
        Region::CN_470_510,
        Region::RU_864_870,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Region::EU_863_870 => "EU_863_870",
            Region::US_902_928 => "US_902_928",
            Region::CN_779_787 => "CN_779_787",
            Region::EU_433 => "EU_433",
            Region::AU_915_928 => "AU_915_928",
            Region::CN_470_510 => "CN_470_510",
            Region::AS_923 => "AS_923",
            Region::AS_920_923 => "AS_920_923",
            Region::AS_923_925 => "AS_923_925",
            Region::KR_920_923 => "KR_920_923",
            Region::IN_865_867 => "IN_865_867",
            Region::RU_864_870 => "RU_864_870",
        }
    }

    /// The band this region is built from.
    pub const fn band_name(self) -> BandName {
        match self {
            Region::EU_863_870 => BandName::EU_863_870,
            Region::US_902_928 => BandName::US_902_928,
            Region::CN_779_787 => BandName::CN_779_787,
            Region::EU_433 => BandName::EU_433,
            Region::AU_915_928 => BandName::AU_915_928,
            Region::CN_470_510 => BandName::CN_470_510,
            Region::AS_923 | Region::AS_920_923 | Region::AS_923_925 => BandName::AS_923,
            Region::KR_920_923 => BandName::KR_920_923,
            Region::IN_865_867 => BandName::IN_865_867,
            Region::RU_864_870 => BandName::RU_864_870,
        }
    }

    pub const fn dwell_time(self) -> DwellTime {
        match self {
            Region::US_902_928
            | Region::AU_915_928
            | Region::AS_923
            | Region::AS_920_923
            | Region::AS_923_925 => DwellTime::Limit400ms,
            _ => DwellTime::NoLimit,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::PRIORITY
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| Error::UnknownRegion(s.to_owned()))
    }
}

/// Builds the frequency plan of `region` from the band `source` provides.
pub(crate) fn build<S: BandSource + ?Sized>(
    region: Region,
    source: &S,
    options: &BandOptions,
) -> Result<FrequencyPlan, Error> {
    let band = source.band(region.band_name(), region.dwell_time())?;
    let mut plan = FrequencyPlan::new(band);
    match region {
        Region::EU_863_870 => {
            plan.band.replace_channels(&channels::EU_863_870);
            plan.band.rx2_data_rate = options.eu_rx2_dr;
            plan.cf_list = Some(channels::EU_863_870_CF_LIST);
            plan.adr = Some(channels::EU_863_870_ADR);
        }
        Region::US_902_928 => {
            mask_subband(&mut plan.band, options.us_fsb)?;
            plan.adr = Some(channels::US_902_928_ADR);
        }
        Region::AU_915_928 => {
            mask_subband(&mut plan.band, options.au_fsb)?;
            plan.adr = Some(channels::AU_915_928_ADR);
        }
        Region::AS_923 => {
            plan.adr = Some(channels::AS_923_ADR);
        }
        Region::AS_920_923 => {
            plan.band.replace_channels(&channels::AS_920_923);
            plan.cf_list = Some(channels::AS_920_923_CF_LIST);
            plan.adr = Some(channels::AS_923_ADR);
        }
        Region::AS_923_925 => {
            plan.band.replace_channels(&channels::AS_923_925);
            plan.cf_list = Some(channels::AS_923_925_CF_LIST);
            plan.adr = Some(channels::AS_923_ADR);
        }
        Region::KR_920_923 => {
            plan.band.replace_channels(&channels::KR_920_923);
            plan.cf_list = Some(channels::KR_920_923_CF_LIST);
        }
        Region::RU_864_870 => {
            plan.band.replace_channels(&channels::RU_864_870);
            plan.cf_list = Some(channels::RU_864_870_CF_LIST);
            plan.adr = Some(channels::RU_864_870_ADR);
        }
        Region::CN_779_787 | Region::EU_433 | Region::CN_470_510 | Region::IN_865_867 => {}
    }
    Ok(plan)
}

/// Disables every uplink channel outside sub-band `fsb`, keeping its 500 kHz channel.
///
/// Channels past the ones the band defines are ignored.
fn mask_subband(band: &mut Band, fsb: u8) -> Result<(), Error> {
    let fsb = usize::from(fsb);
    let subband = fsb * SUBBAND_SIZE..(fsb + 1) * SUBBAND_SIZE;
    for channel in 0..band.uplink_channels.len().min(FIXED_UPLINK_CHANNELS) {
        if !subband.contains(&channel) && channel != FIRST_500KHZ_CHANNEL + fsb {
            band.disable_uplink_channel(channel)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::band::RegionalParameters;

    fn build_default(region: Region) -> FrequencyPlan {
        build(region, &RegionalParameters, &BandOptions::default()).unwrap()
    }

    #[test]
    fn region_names_round_trip() {
        for region in Region::PRIORITY {
            assert_eq!(region.as_str().parse::<Region>(), Ok(region));
            assert_eq!(region.to_string(), region.as_str());
        }
        assert_eq!(
            "not-a-region".parse::<Region>(),
            Err(Error::UnknownRegion("not-a-region".to_owned()))
        );
        assert!("eu_863_870".parse::<Region>().is_err());
    }

    #[test]
    fn eu_overlay() {
        let plan = build_default(Region::EU_863_870);
        assert_eq!(plan.band.uplink_channels.len(), 9);
        assert_eq!(plan.band.uplink_channels, plan.band.downlink_channels);
        assert_eq!(plan.band.uplink_channels[1].data_rates.max_data_rate(), 6);
        assert!(!plan.band.uplink_channels[8].is_multi_rate());
        assert_eq!(plan.band.rx2_data_rate, 3);
        assert_eq!(plan.band.rx2_frequency, 869_525_000);
        assert_eq!(plan.cf_list, Some(channels::EU_863_870_CF_LIST));
        assert_eq!(plan.adr.map(|adr| adr.step_tx_power), Some(3));
    }

    #[test]
    fn eu_rx2_data_rate_override() {
        let options = BandOptions { eu_rx2_dr: 0, ..Default::default() };
        let plan = build(Region::EU_863_870, &RegionalParameters, &options).unwrap();
        assert_eq!(plan.band.rx2_data_rate, 0);
    }

    #[test]
    fn us_subband_masking() {
        let plan = build_default(Region::US_902_928);
        let enabled: Vec<usize> = plan
            .band
            .uplink_channels
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_enabled())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(enabled, vec![8, 9, 10, 11, 12, 13, 14, 15, 65]);
        assert_eq!(plan.band.enabled_uplink_channels().next().unwrap().frequency, 903_900_000);
        assert_eq!(plan.band.uplink_channels[65].frequency, 904_600_000);
        assert_eq!(plan.band.uplink_channels.len(), 72);
        assert!(plan.cf_list.is_none());
        assert_eq!(plan.adr, Some(channels::US_902_928_ADR));
    }

    #[test]
    fn au_subband_masking() {
        let options = BandOptions { au_fsb: 0, ..Default::default() };
        let plan = build(Region::AU_915_928, &RegionalParameters, &options).unwrap();
        let enabled: Vec<u32> = plan.band.enabled_uplink_channels().map(|c| c.frequency).collect();
        assert_eq!(enabled.len(), 9);
        assert_eq!(enabled[0], 915_200_000);
        assert_eq!(enabled[7], 916_600_000);
        assert_eq!(enabled[8], 915_900_000);

        let plan = build_default(Region::AU_915_928);
        let enabled: Vec<u32> = plan.band.enabled_uplink_channels().map(|c| c.frequency).collect();
        assert_eq!(enabled.first(), Some(&916_800_000));
        assert_eq!(enabled.last(), Some(&917_500_000));
        assert_eq!(plan.adr.map(|adr| adr.max_data_rate), Some(5));
    }

    #[test]
    fn subband_8_keeps_the_500khz_channels() {
        let options = BandOptions { us_fsb: 8, ..Default::default() };
        let plan = build(Region::US_902_928, &RegionalParameters, &options).unwrap();
        let enabled: Vec<usize> = plan
            .band
            .uplink_channels
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_enabled())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(enabled, (64..72).collect::<Vec<_>>());
    }

    #[test]
    fn out_of_range_subband_disables_everything() {
        let options = BandOptions { us_fsb: 9, ..Default::default() };
        let plan = build(Region::US_902_928, &RegionalParameters, &options).unwrap();
        assert_eq!(plan.band.enabled_uplink_channels().count(), 0);
    }

    /// Hands out fixed channel plans with only the first 20 uplink channels.
    struct TruncatedUplink;

    impl BandSource for TruncatedUplink {
        fn band(&self, name: BandName, dwell_time: DwellTime) -> Result<Band, Error> {
            let mut band = RegionalParameters.band(name, dwell_time)?;
            band.uplink_channels.truncate(20);
            Ok(band)
        }
    }

    #[test]
    fn masking_a_short_channel_list() {
        let plan = build(Region::US_902_928, &TruncatedUplink, &BandOptions::default()).unwrap();
        assert_eq!(plan.band.uplink_channels.len(), 20);
        let enabled: Vec<u32> = plan.band.enabled_uplink_channels().map(|c| c.frequency).collect();
        assert_eq!(enabled.len(), 8);
        assert_eq!(enabled[0], 903_900_000);

        let plan = build(Region::AU_915_928, &TruncatedUplink, &BandOptions::default()).unwrap();
        assert_eq!(plan.band.enabled_uplink_channels().count(), 8);
    }

    #[test]
    fn as923_variants() {
        let plan = build_default(Region::AS_923);
        assert_eq!(plan.band.uplink_channels.len(), 2);
        assert!(plan.cf_list.is_none());
        assert_eq!(plan.adr, Some(channels::AS_923_ADR));
        assert_eq!(plan.band.dwell_time, DwellTime::Limit400ms);

        let plan = build_default(Region::AS_920_923);
        assert_eq!(plan.band.name(), BandName::AS_923);
        assert_eq!(plan.band.uplink_channels.len(), 10);
        assert_eq!(plan.cf_list, Some(channels::AS_920_923_CF_LIST));

        let plan = build_default(Region::AS_923_925);
        assert_eq!(plan.band.uplink_channels.len(), 10);
        assert_eq!(plan.band.downlink_channels[8].frequency, 924_500_000);
        assert_eq!(plan.cf_list, Some(channels::AS_923_925_CF_LIST));
    }

    #[test]
    fn kr_has_no_adr() {
        let plan = build_default(Region::KR_920_923);
        assert_eq!(plan.band.uplink_channels.len(), 7);
        assert!(plan.adr.is_none());
        assert_eq!(plan.cf_list.map(|cf| cf.0[4]), Some(0));
    }

    #[test]
    fn ru_overlay() {
        let plan = build_default(Region::RU_864_870);
        assert_eq!(plan.band.uplink_channels.len(), 7);
        assert_eq!(plan.adr.map(|adr| adr.step_tx_power), Some(3));
        assert_eq!(plan.cf_list, Some(channels::RU_864_870_CF_LIST));
    }

    #[test]
    fn plain_regions_keep_the_band() {
        for region in
            [Region::CN_779_787, Region::EU_433, Region::CN_470_510, Region::IN_865_867]
        {
            let plan = build_default(region);
            let band = RegionalParameters.band(region.band_name(), region.dwell_time()).unwrap();
            assert_eq!(plan.band.uplink_channels, band.uplink_channels);
            assert_eq!(plan.band.downlink_channels, band.downlink_channels);
            assert!(plan.adr.is_none());
            assert!(plan.cf_list.is_none());
        }
    }

    #[test]
    fn overlay_channels_are_valid() {
        for region in Region::PRIORITY {
            let plan = build_default(region);
            for channel in &plan.band.uplink_channels {
                assert!(plan.band.is_valid_frequency(channel.frequency), "{region}: {channel:?}");
                for dr in channel.data_rates.iter() {
                    assert!(matches!(plan.band.data_rates.get(dr as usize), Some(Some(_))));
                }
            }
            if let Some(adr) = plan.adr {
                assert!(plan.tx_power_index(adr.min_tx_power).is_ok(), "{region}");
                assert!(plan.tx_power_index(adr.max_tx_power).is_ok(), "{region}");
            }
            if let Some(cf_list) = plan.cf_list {
                for f in cf_list.frequencies() {
                    assert!(plan.band.uplink_channel_index(f).is_some(), "{region}: {f}");
                }
            }
        }
    }
}
