//! RU864 region support (864..870 MHz)
use super::datarates::EU868_DATARATES;
use super::*;

const TX_POWER: [i8; 8] = [16, 14, 12, 10, 8, 6, 4, 2];

const JOIN_CHANNELS: [Channel; 2] =
    [Channel::new(868_900_000, 0, 5), Channel::new(869_100_000, 0, 5)];

#[allow(clippy::upper_case_acronyms)]
pub(crate) struct RU864;

impl ChannelRegion for RU864 {
    const NAME: BandName = BandName::RU_864_870;
    const RX2: (u32, u8) = (869_100_000, 0);

    fn datarates() -> &'static [Option<Datarate>] {
        &EU868_DATARATES
    }

    fn tx_power() -> &'static [i8] {
        &TX_POWER
    }

    fn frequency_valid(f: u32) -> bool {
        (864_000_000..=870_000_000).contains(&f)
    }

    fn rx1_data_rate(uplink_dr: u8, rx1_dr_offset: u8, _dwell_time: DwellTime) -> Option<u8> {
        rx1_subtract_offset(uplink_dr, rx1_dr_offset, 7)
    }
}

impl DynamicChannelRegion for RU864 {
    fn join_channels() -> &'static [Channel] {
        &JOIN_CHANNELS
    }
}
