//! EU433 region support (433.05..434.79 MHz)
use super::datarates::EU868_DATARATES;
use super::*;

const TX_POWER: [i8; 6] = [12, 10, 8, 6, 4, 2];

const JOIN_CHANNELS: [Channel; 3] = [
    Channel::new(433_175_000, 0, 5),
    Channel::new(433_375_000, 0, 5),
    Channel::new(433_575_000, 0, 5),
];

#[allow(clippy::upper_case_acronyms)]
pub(crate) struct EU433;

impl ChannelRegion for EU433 {
    const NAME: BandName = BandName::EU_433;
    const RX2: (u32, u8) = (434_665_000, 0);

    fn datarates() -> &'static [Option<Datarate>] {
        &EU868_DATARATES
    }

    fn tx_power() -> &'static [i8] {
        &TX_POWER
    }

    fn frequency_valid(f: u32) -> bool {
        (433_050_000..=434_790_000).contains(&f)
    }

    fn rx1_data_rate(uplink_dr: u8, rx1_dr_offset: u8, _dwell_time: DwellTime) -> Option<u8> {
        rx1_subtract_offset(uplink_dr, rx1_dr_offset, 7)
    }
}

impl DynamicChannelRegion for EU433 {
    fn join_channels() -> &'static [Channel] {
        &JOIN_CHANNELS
    }
}
