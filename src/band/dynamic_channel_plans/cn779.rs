//! CN779 region support (779..787 MHz)
use super::datarates::EU868_DATARATES;
use super::*;

const TX_POWER: [i8; 6] = [12, 10, 8, 6, 4, 2];

const JOIN_CHANNELS: [Channel; 3] = [
    Channel::new(779_500_000, 0, 5),
    Channel::new(779_700_000, 0, 5),
    Channel::new(779_900_000, 0, 5),
];

#[allow(clippy::upper_case_acronyms)]
pub(crate) struct CN779;

impl ChannelRegion for CN779 {
    const NAME: BandName = BandName::CN_779_787;
    const RX2: (u32, u8) = (786_000_000, 0);

    fn datarates() -> &'static [Option<Datarate>] {
        &EU868_DATARATES
    }

    fn tx_power() -> &'static [i8] {
        &TX_POWER
    }

    fn frequency_valid(f: u32) -> bool {
        (779_000_000..=787_000_000).contains(&f)
    }

    fn rx1_data_rate(uplink_dr: u8, rx1_dr_offset: u8, _dwell_time: DwellTime) -> Option<u8> {
        rx1_subtract_offset(uplink_dr, rx1_dr_offset, 7)
    }
}

impl DynamicChannelRegion for CN779 {
    fn join_channels() -> &'static [Channel] {
        &JOIN_CHANNELS
    }
}
