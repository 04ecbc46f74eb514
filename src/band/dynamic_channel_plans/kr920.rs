//! KR920 region support (920.9..923.3 MHz)
use super::datarates::KR920_DATARATES;
use super::*;

const TX_POWER: [i8; 8] = [14, 12, 10, 8, 6, 4, 2, 0];

const JOIN_CHANNELS: [Channel; 3] = [
    Channel::new(922_100_000, 0, 5),
    Channel::new(922_300_000, 0, 5),
    Channel::new(922_500_000, 0, 5),
];

#[allow(clippy::upper_case_acronyms)]
pub(crate) struct KR920;

impl ChannelRegion for KR920 {
    const NAME: BandName = BandName::KR_920_923;
    const RX2: (u32, u8) = (921_900_000, 0);

    fn datarates() -> &'static [Option<Datarate>] {
        &KR920_DATARATES
    }

    fn tx_power() -> &'static [i8] {
        &TX_POWER
    }

    fn frequency_valid(f: u32) -> bool {
        (920_900_000..=923_300_000).contains(&f)
    }

    fn rx1_data_rate(uplink_dr: u8, rx1_dr_offset: u8, _dwell_time: DwellTime) -> Option<u8> {
        rx1_subtract_offset(uplink_dr, rx1_dr_offset, 5)
    }
}

impl DynamicChannelRegion for KR920 {
    fn join_channels() -> &'static [Channel] {
        &JOIN_CHANNELS
    }
}
