//! US915 region support (902..928 MHz)
//!
//! 64 125 kHz uplink channels, 8 500 kHz uplink channels and 8 500 kHz downlink channels.
use super::datarates::US915_DATARATES;
use super::*;

const TX_POWER: [i8; 11] = [30, 28, 26, 24, 22, 20, 18, 16, 14, 12, 10];

const RX1_DATARATES: [[u8; 4]; 5] = [
    [10, 9, 8, 8],
    [11, 10, 9, 8],
    [12, 11, 10, 9],
    [13, 12, 11, 10],
    [13, 13, 12, 11],
];

#[allow(clippy::upper_case_acronyms)]
pub(crate) struct US915;

impl ChannelRegion for US915 {
    const NAME: BandName = BandName::US_902_928;
    const RX2: (u32, u8) = (923_300_000, 8);

    fn datarates() -> &'static [Option<Datarate>] {
        &US915_DATARATES
    }

    fn tx_power() -> &'static [i8] {
        &TX_POWER
    }

    fn frequency_valid(f: u32) -> bool {
        (902_000_000..=928_000_000).contains(&f)
    }

    fn rx1_data_rate(uplink_dr: u8, rx1_dr_offset: u8, _dwell_time: DwellTime) -> Option<u8> {
        rx1_from_table(&RX1_DATARATES, uplink_dr, rx1_dr_offset)
    }
}

impl FixedChannelRegion for US915 {
    fn uplink_channels() -> Vec<Channel> {
        let mut channels = channel_block(902_300_000, 200_000, 64, 0, 3);
        channels.extend(channel_block(903_000_000, 1_600_000, 8, 4, 4));
        channels
    }

    fn downlink_channels() -> Vec<Channel> {
        channel_block(923_300_000, 600_000, 8, 10, 13)
    }
}
