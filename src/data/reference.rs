//! Compiled-in reference data: the ten nations with the best World Cup win
//! percentage, plotted on the map.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointOfInterest {
    pub latitude: f64,
    pub longitude: f64,
    pub country: &'static str,
    pub win_pct: f64,
    pub rank: u8,
}

const fn poi(latitude: f64, longitude: f64, country: &'static str, win_pct: f64, rank: u8) -> PointOfInterest {
    PointOfInterest {
        latitude,
        longitude,
        country,
        win_pct,
        rank,
    }
}

pub static TOP_TEN: [PointOfInterest; 10] = [
    poi(-10.81, -52.97, "Brazil", 63.7, 1),
    poi(40.30, -3.55, "Spain", 58.5, 2),
    poi(51.52, 9.92, "Germany", 58.5, 3),
    poi(54.24, -2.37, "England", 56.7, 4),
    poi(32.5, 54.29, "Iran", 54.5, 5),
    poi(49.74, 15.33, "Czech Republic", 53.9, 6),
    poi(-37.07, -64.85, "Argentina", 53.7, 7),
    poi(44.44, 15.73, "Croatia", 53.5, 8),
    poi(42.77, 12.49, "Italy", 52.9, 9),
    poi(-21.4, 165.46, "New Caledonia", 52.9, 10),
];

/// The reference set, used as-is.
pub fn top_ten() -> &'static [PointOfInterest] {
    &TOP_TEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_are_one_through_ten_in_order() {
        let ranks: Vec<u8> = top_ten().iter().map(|p| p.rank).collect();
        assert_eq!(ranks, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn win_percentages_never_increase() {
        assert!(top_ten().windows(2).all(|w| w[0].win_pct >= w[1].win_pct));
    }
}
