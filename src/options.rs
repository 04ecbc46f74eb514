/// Operator settings read while building frequency plans.
///
/// With the `serde` feature the options deserialize from kebab-case keys (`eu-rx2-dr`, `us-fsb`,
/// `au-fsb`); missing keys keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct BandOptions {
    /// RX2 data rate index used in EU_863_870.
    pub eu_rx2_dr: u8,
    /// Sub-band selector of US_902_928: enables uplink channels `8 * fsb..8 * fsb + 8` and the
    /// 500 kHz channel `64 + fsb`.
    pub us_fsb: u8,
    /// Sub-band selector of AU_915_928, see [`us_fsb`](Self::us_fsb).
    pub au_fsb: u8,
}

impl Default for BandOptions {
    fn default() -> Self {
        Self { eu_rx2_dr: 3, us_fsb: 1, au_fsb: 1 }
    }
}

#[cfg(all(test, feature = "serde"))]
mod test {
    use super::*;

    #[test]
    fn deserialize_partial() {
        let options: BandOptions = serde_json::from_str(r#"{"us-fsb": 2}"#).unwrap();
        assert_eq!(options, BandOptions { us_fsb: 2, ..Default::default() });
    }

    #[test]
    fn deserialize_all() {
        let options: BandOptions =
            serde_json::from_str(r#"{"eu-rx2-dr": 0, "us-fsb": 0, "au-fsb": 7}"#).unwrap();
        assert_eq!(options, BandOptions { eu_rx2_dr: 0, us_fsb: 0, au_fsb: 7 });
    }
}
