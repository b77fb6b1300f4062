use common::HistogramBin;

/// One point of a Lorenz curve: cumulative share of transactions on the x
/// axis, cumulative share of amount on the y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorenzPoint {
    pub population_share: f64,
    pub amount_share: f64,
}

impl LorenzPoint {
    pub fn new(population_share: f64, amount_share: f64) -> Self {
        Self {
            population_share,
            amount_share,
        }
    }
}

/// Derives a Lorenz curve from an amount histogram.
///
/// Buckets are ordered ascending by midpoint, then walked once while
/// accumulating running count and running amount (midpoint x count),
/// emitting the cumulative shares per bucket. The curve is anchored at
/// (0,0) and (1,1).
///
/// An empty histogram yields an empty curve, as does one whose total count
/// or total amount is not positive. Callers treat an empty curve as
/// "no data".
pub fn derive(bins: &[HistogramBin]) -> Vec<LorenzPoint> {
    if bins.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&HistogramBin> = bins.iter().collect();
    sorted.sort_by(|a, b| a.mid.total_cmp(&b.mid));

    let total_count: f64 = sorted.iter().map(|b| b.count as f64).sum();
    let total_amount: f64 = sorted.iter().map(|b| b.mid * b.count as f64).sum();

    if total_count <= 0.0 || total_amount <= 0.0 {
        log::debug!(
            "degenerate histogram (total_count={}, total_amount={}), returning empty curve",
            total_count,
            total_amount
        );
        return Vec::new();
    }

    let mut curve = Vec::with_capacity(sorted.len() + 2);
    curve.push(LorenzPoint::new(0.0, 0.0));

    let mut running_count = 0.0;
    let mut running_amount = 0.0;
    for bin in sorted {
        running_count += bin.count as f64;
        running_amount += bin.mid * bin.count as f64;
        curve.push(LorenzPoint::new(
            running_count / total_count,
            running_amount / total_amount,
        ));
    }

    curve.push(LorenzPoint::new(1.0, 1.0));
    curve
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin(mid: f64, count: u64) -> HistogramBin {
        HistogramBin::new(mid, count)
    }

    #[test]
    fn empty_histogram_yields_empty_curve() {
        assert!(derive(&[]).is_empty());
    }

    #[test]
    fn zero_count_histogram_yields_empty_curve() {
        let curve = derive(&[bin(10.0, 0), bin(20.0, 0)]);
        assert!(curve.is_empty());
    }

    #[test]
    fn zero_amount_histogram_yields_empty_curve() {
        // Counts are positive but every midpoint is zero.
        let curve = derive(&[bin(0.0, 5), bin(0.0, 3)]);
        assert!(curve.is_empty());
    }

    #[test]
    fn anchors_and_length() {
        let curve = derive(&[bin(10.0, 2), bin(30.0, 2), bin(20.0, 1)]);
        assert_eq!(curve.len(), 5);
        assert_eq!(curve.first().unwrap(), &LorenzPoint::new(0.0, 0.0));
        assert_eq!(curve.last().unwrap(), &LorenzPoint::new(1.0, 1.0));
    }

    #[test]
    fn curve_is_monotonically_non_decreasing() {
        let curve = derive(&[bin(5.0, 7), bin(50.0, 1), bin(12.5, 4), bin(80.0, 2)]);
        for pair in curve.windows(2) {
            assert!(pair[1].population_share >= pair[0].population_share);
            assert!(pair[1].amount_share >= pair[0].amount_share);
        }
    }

    #[test]
    fn unsorted_input_matches_sorted_input() {
        let sorted = [bin(1.0, 3), bin(2.0, 5), bin(4.0, 1)];
        let shuffled = [bin(4.0, 1), bin(1.0, 3), bin(2.0, 5)];
        assert_eq!(derive(&sorted), derive(&shuffled));
    }

    #[test]
    fn single_bucket_collapses_to_three_points() {
        let curve = derive(&[bin(25.0, 4)]);
        assert_eq!(curve.len(), 3);
        assert_eq!(curve[0], LorenzPoint::new(0.0, 0.0));
        assert_eq!(curve[1], LorenzPoint::new(1.0, 1.0));
        assert_eq!(curve[2], LorenzPoint::new(1.0, 1.0));
    }

    #[test]
    fn two_bucket_scenario() {
        // total count 4, total amount 2*10 + 2*30 = 80
        let curve = derive(&[bin(10.0, 2), bin(30.0, 2)]);
        assert_eq!(curve.len(), 4);
        assert_eq!(curve[1], LorenzPoint::new(0.5, 0.125));
        assert_eq!(curve[2], LorenzPoint::new(1.0, 1.0));
    }
}
