use super::*;

mod as923;
mod cn779;
mod datarates;
mod eu433;
mod eu868;
mod in865;
mod kr920;
mod ru864;

pub(crate) use as923::AS923;
pub(crate) use cn779::CN779;
pub(crate) use eu433::EU433;
pub(crate) use eu868::EU868;
pub(crate) use in865::IN865;
pub(crate) use kr920::KR920;
pub(crate) use ru864::RU864;

/// Highest RX1 DR offset that lowers the data rate.
const MAX_RX1_DR_OFFSET: u8 = 5;

pub(crate) trait DynamicChannelRegion: ChannelRegion {
    /// Default channels every end-device knows before receiving a CFList.
    fn join_channels() -> &'static [Channel];
}

pub(crate) fn dynamic_band<R: DynamicChannelRegion>(dwell_time: DwellTime) -> Band {
    let channels = R::join_channels().to_vec();
    Band {
        name: R::NAME,
        dwell_time,
        data_rates: R::datarates().to_vec(),
        tx_power: R::tx_power().to_vec(),
        downlink_channels: channels.clone(),
        uplink_channels: channels,
        rx2_frequency: R::RX2.0,
        rx2_data_rate: R::RX2.1,
        channel_plan: ChannelPlan::Dynamic,
        rx1_data_rate: R::rx1_data_rate,
        frequency_valid: R::frequency_valid,
    }
}

/// RX1 data rate of plans where the offset is subtracted from the uplink data rate.
fn rx1_subtract_offset(uplink_dr: u8, rx1_dr_offset: u8, max_dr: u8) -> Option<u8> {
    if uplink_dr > max_dr || rx1_dr_offset > MAX_RX1_DR_OFFSET {
        return None;
    }
    Some(uplink_dr.saturating_sub(rx1_dr_offset))
}

/// RX1 data rate of plans where offsets 6 and 7 raise the data rate by one and two steps.
fn rx1_signed_offset(uplink_dr: u8, rx1_dr_offset: u8, min_dr: u8, max_dr: u8) -> Option<u8> {
    if uplink_dr > max_dr {
        return None;
    }
    let dr = match rx1_dr_offset {
        0..=MAX_RX1_DR_OFFSET => uplink_dr.saturating_sub(rx1_dr_offset),
        6 => uplink_dr + 1,
        7 => uplink_dr + 2,
        _ => return None,
    };
    Some(dr.clamp(min_dr, max_dr))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn subtract_offset() {
        assert_eq!(rx1_subtract_offset(5, 0, 7), Some(5));
        assert_eq!(rx1_subtract_offset(5, 2, 7), Some(3));
        assert_eq!(rx1_subtract_offset(1, 5, 7), Some(0));
        assert_eq!(rx1_subtract_offset(8, 0, 7), None);
        assert_eq!(rx1_subtract_offset(3, 6, 7), None);
    }

    #[test]
    fn signed_offset() {
        assert_eq!(rx1_signed_offset(3, 6, 0, 5), Some(4));
        assert_eq!(rx1_signed_offset(4, 7, 0, 5), Some(5));
        assert_eq!(rx1_signed_offset(0, 1, 2, 5), Some(2));
        assert_eq!(rx1_signed_offset(6, 0, 0, 5), None);
        assert_eq!(rx1_signed_offset(3, 8, 0, 5), None);
    }

    #[test]
    fn as923_dwell_time_raises_rx1_floor() {
        let band = dynamic_band::<AS923>(DwellTime::Limit400ms);
        assert_eq!(band.rx1_data_rate(2, 1), Some(2));
        let band = dynamic_band::<AS923>(DwellTime::NoLimit);
        assert_eq!(band.rx1_data_rate(2, 1), Some(1));
    }
}
