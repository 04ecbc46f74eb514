//! AU915 region support (915..928 MHz)
use super::datarates::AU915_DATARATES;
use super::*;

const TX_POWER: [i8; 11] = [30, 28, 26, 24, 22, 20, 18, 16, 14, 12, 10];

const RX1_DATARATES: [[u8; 6]; 7] = [
    [8, 8, 8, 8, 8, 8],
    [9, 8, 8, 8, 8, 8],
    [10, 9, 8, 8, 8, 8],
    [11, 10, 9, 8, 8, 8],
    [12, 11, 10, 9, 8, 8],
    [13, 12, 11, 10, 9, 8],
    [13, 13, 12, 11, 10, 9],
];

#[allow(clippy::upper_case_acronyms)]
pub(crate) struct AU915;

impl ChannelRegion for AU915 {
    const NAME: BandName = BandName::AU_915_928;
    const RX2: (u32, u8) = (923_300_000, 8);

    fn datarates() -> &'static [Option<Datarate>] {
        &AU915_DATARATES
    }

    fn tx_power() -> &'static [i8] {
        &TX_POWER
    }

    fn frequency_valid(f: u32) -> bool {
        (915_000_000..=928_000_000).contains(&f)
    }

    fn rx1_data_rate(uplink_dr: u8, rx1_dr_offset: u8, _dwell_time: DwellTime) -> Option<u8> {
        rx1_from_table(&RX1_DATARATES, uplink_dr, rx1_dr_offset)
    }
}

impl FixedChannelRegion for AU915 {
    fn uplink_channels() -> Vec<Channel> {
        let mut channels = channel_block(915_200_000, 200_000, 64, 0, 5);
        channels.extend(channel_block(915_900_000, 1_600_000, 8, 6, 6));
        channels
    }

    fn downlink_channels() -> Vec<Channel> {
        channel_block(923_300_000, 600_000, 8, 8, 13)
    }
}
