/// A roast entry: the caption applies up to `threshold` absolute percentage
/// points. Lists are sorted ascending by threshold and the scan takes the
/// first entry whose threshold covers the value; anything beyond the last
/// threshold gets the last entry.
#[derive(Debug, Clone, Copy)]
pub struct Roast {
    pub threshold: f64,
    pub message: &'static str,
}

pub const POSITIVE_ROASTS: [Roast; 5] = [
    Roast {
        threshold: 10.0,
        message: "Up a whole few percent. Try not to spend it all in one place.",
    },
    Roast {
        threshold: 20.0,
        message: "Look at you, picking winners. Your group chat will never hear the end of this.",
    },
    Roast {
        threshold: 30.0,
        message: "Okay, this is actually pumping. Screenshot it before it changes its mind.",
    },
    Roast {
        threshold: 50.0,
        message: "This thing is mooning and you're still here reading captions.",
    },
    Roast {
        threshold: 100.0,
        message: "Generational wealth energy. Retire your whole bloodline.",
    },
];

pub const NEGATIVE_ROASTS: [Roast; 5] = [
    Roast {
        threshold: 10.0,
        message: "A gentle dip. Call it a discount and sleep fine tonight.",
    },
    Roast {
        threshold: 20.0,
        message: "Down bad, but not embarrassing-at-dinner bad. Yet.",
    },
    Roast {
        threshold: 30.0,
        message: "Your NFT is doing its best impression of a falling knife.",
    },
    Roast {
        threshold: 50.0,
        message: "This chart needs a content warning.",
    },
    Roast {
        threshold: 100.0,
        message: "Congratulations, you've minted a cautionary tale.",
    },
];

/// Fixed caption when the window has no data at all.
pub const NO_DATA_ROAST: &str = "Your NFT is as mysterious as my future";

/// Caption for a 7-day volume change; sign picks the list, magnitude picks
/// the entry.
pub fn roast_message(volume_change: Option<f64>) -> &'static str {
    let Some(value) = volume_change else {
        return NO_DATA_ROAST;
    };
    let percentage = (value * 100.0).abs();
    let roasts: &[Roast] = if value >= 0.0 {
        &POSITIVE_ROASTS
    } else {
        &NEGATIVE_ROASTS
    };

    for roast in roasts {
        if percentage <= roast.threshold {
            return roast.message;
        }
    }
    roasts[roasts.len() - 1].message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_value_uses_fixed_fallback() {
        assert_eq!(roast_message(None), NO_DATA_ROAST);
    }

    #[test]
    fn test_small_changes_pick_first_entry_per_sign() {
        assert_eq!(roast_message(Some(0.05)), POSITIVE_ROASTS[0].message);
        assert_eq!(roast_message(Some(-0.05)), NEGATIVE_ROASTS[0].message);
    }

    #[test]
    fn test_zero_is_non_negative() {
        assert_eq!(roast_message(Some(0.0)), POSITIVE_ROASTS[0].message);
    }

    #[test]
    fn test_thresholds_are_inclusive_upper_bounds() {
        assert_eq!(roast_message(Some(0.10)), POSITIVE_ROASTS[0].message);
        assert_eq!(roast_message(Some(0.1001)), POSITIVE_ROASTS[1].message);
    }

    #[test]
    fn test_beyond_all_thresholds_uses_last_entry() {
        assert_eq!(roast_message(Some(0.55)), POSITIVE_ROASTS[4].message);
        assert_eq!(roast_message(Some(-0.55)), NEGATIVE_ROASTS[4].message);
        assert_eq!(roast_message(Some(2.5)), POSITIVE_ROASTS[4].message);
        assert_eq!(roast_message(Some(-2.5)), NEGATIVE_ROASTS[4].message);
    }

    #[test]
    fn test_lists_are_threshold_sorted() {
        for list in [&POSITIVE_ROASTS, &NEGATIVE_ROASTS] {
            for pair in list.windows(2) {
                assert!(pair[0].threshold < pair[1].threshold);
            }
        }
    }
}
