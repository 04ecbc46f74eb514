use super::*;

mod au915;
mod cn470;
mod datarates;
mod us915;

pub(crate) use au915::AU915;
pub(crate) use cn470::CN470;
pub(crate) use us915::US915;

pub(crate) trait FixedChannelRegion: ChannelRegion {
    fn uplink_channels() -> Vec<Channel>;
    fn downlink_channels() -> Vec<Channel>;
}

pub(crate) fn fixed_band<R: FixedChannelRegion>(dwell_time: DwellTime) -> Band {
    Band {
        name: R::NAME,
        dwell_time,
        data_rates: R::datarates().to_vec(),
        tx_power: R::tx_power().to_vec(),
        uplink_channels: R::uplink_channels(),
        downlink_channels: R::downlink_channels(),
        rx2_frequency: R::RX2.0,
        rx2_data_rate: R::RX2.1,
        channel_plan: ChannelPlan::Fixed,
        rx1_data_rate: R::rx1_data_rate,
        frequency_valid: R::frequency_valid,
    }
}

/// `count` channels starting at `first`, `step` Hz apart.
fn channel_block(first: u32, step: u32, count: u32, dr_min: u8, dr_max: u8) -> Vec<Channel> {
    (0..count).map(|n| Channel::new(first + n * step, dr_min, dr_max)).collect()
}

/// Looks up the RX1 data rate in a table indexed by uplink data rate, then RX1 DR offset.
fn rx1_from_table<const N: usize>(table: &[[u8; N]], uplink_dr: u8, rx1_dr_offset: u8) -> Option<u8> {
    table.get(usize::from(uplink_dr))?.get(usize::from(rx1_dr_offset)).copied()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn au915_channels() {
        let band = fixed_band::<AU915>(DwellTime::Limit400ms);
        assert_eq!(band.uplink_channels.len(), 72);
        assert_eq!(band.uplink_channels[0].frequency, 915_200_000);
        assert_eq!(band.uplink_channels[8].frequency, 916_800_000);
        assert_eq!(band.uplink_channels[65].frequency, 917_500_000);
        assert_eq!(band.uplink_channels[65].data_rates, DataRateRange::new(6, 6));
        assert_eq!(band.rx1_data_rate(6, 0), Some(13));
        assert_eq!(band.rx1_data_rate(0, 5), Some(8));
        assert_eq!(band.rx1_data_rate(7, 0), None);
    }

    #[test]
    fn us915_rx1_table() {
        let band = fixed_band::<US915>(DwellTime::Limit400ms);
        assert_eq!(band.rx1_data_rate(0, 0), Some(10));
        assert_eq!(band.rx1_data_rate(4, 0), Some(13));
        assert_eq!(band.rx1_data_rate(3, 3), Some(10));
        assert_eq!(band.rx1_data_rate(3, 4), None);
        assert_eq!(band.rx1_data_rate(8, 0), None);
    }

    #[test]
    fn cn470_wraps_downlink_channels() {
        let band = fixed_band::<CN470>(DwellTime::NoLimit);
        assert_eq!(band.uplink_channels.len(), 96);
        assert_eq!(band.downlink_channels.len(), 48);
        assert_eq!(band.rx1_frequency(470_300_000), Ok(500_300_000));
        assert_eq!(band.rx1_frequency(479_900_000), Ok(500_300_000));
        assert_eq!(band.rx1_data_rate(5, 2), Some(3));
    }
}
