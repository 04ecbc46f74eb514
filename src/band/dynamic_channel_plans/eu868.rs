//! EU868 region support (863..870 MHz)
use super::datarates::EU868_DATARATES;
use super::*;

const TX_POWER: [i8; 8] = [16, 14, 12, 10, 8, 6, 4, 2];

const JOIN_CHANNELS: [Channel; 3] = [
    Channel::new(868_100_000, 0, 5),
    Channel::new(868_300_000, 0, 5),
    Channel::new(868_500_000, 0, 5),
];

#[allow(clippy::upper_case_acronyms)]
pub(crate) struct EU868;

impl ChannelRegion for EU868 {
    const NAME: BandName = BandName::EU_863_870;
    const RX2: (u32, u8) = (869_525_000, 0);

    fn datarates() -> &'static [Option<Datarate>] {
        &EU868_DATARATES
    }

    fn tx_power() -> &'static [i8] {
        &TX_POWER
    }

    fn frequency_valid(f: u32) -> bool {
        (863_000_000..=870_000_000).contains(&f)
    }

    fn rx1_data_rate(uplink_dr: u8, rx1_dr_offset: u8, _dwell_time: DwellTime) -> Option<u8> {
        rx1_subtract_offset(uplink_dr, rx1_dr_offset, 7)
    }
}

impl DynamicChannelRegion for EU868 {
    fn join_channels() -> &'static [Channel] {
        &JOIN_CHANNELS
    }
}
