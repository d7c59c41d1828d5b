//! Probability Buckets
//! Fixed, disjoint price ranges the histogram is built from.

use crate::config::constants::simulation::MAX_PRICE;
use crate::market::exact_share;
use egui::Color32;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Bucket layout is empty")]
    Empty,
    #[error("Bucket {lo}..={hi} is inverted")]
    Inverted { lo: u8, hi: u8 },
    #[error("Prices {from}..={to} are not covered by any bucket")]
    Gap { from: u8, to: u8 },
    #[error("Bucket starting at {lo} overlaps the previous one ending at {previous_hi}")]
    Overlap { lo: u8, previous_hi: u8 },
    #[error("Bucket ending at {hi} exceeds the maximum price {max}")]
    OutOfRange { hi: u8, max: u8 },
}

/// An inclusive price range with its display label and bar colour.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub lo: u8,
    pub hi: u8,
    pub label: String,
    pub color: Color32,
}

impl Bucket {
    pub fn new(lo: u8, hi: u8, color: Color32) -> Self {
        Self {
            lo,
            hi,
            label: format!("{}–{}", lo, hi),
            color,
        }
    }

    pub fn contains(&self, value: u8) -> bool {
        (self.lo..=self.hi).contains(&value)
    }

    /// Theoretical share of skewed draws landing here, in percent.
    pub fn exact_share(&self) -> f64 {
        exact_share(self.lo, self.hi) * 100.0
    }
}

/// Ordered buckets covering every price from 0 to 99 exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketLayout {
    buckets: Vec<Bucket>,
}

impl BucketLayout {
    pub fn new(buckets: Vec<Bucket>) -> Result<Self, LayoutError> {
        if buckets.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut next_lo: u16 = 0;
        for bucket in &buckets {
            if bucket.lo > bucket.hi {
                return Err(LayoutError::Inverted {
                    lo: bucket.lo,
                    hi: bucket.hi,
                });
            }
            if bucket.hi > MAX_PRICE {
                return Err(LayoutError::OutOfRange {
                    hi: bucket.hi,
                    max: MAX_PRICE,
                });
            }
            match (bucket.lo as u16).cmp(&next_lo) {
                std::cmp::Ordering::Greater => {
                    return Err(LayoutError::Gap {
                        from: next_lo as u8,
                        to: bucket.lo - 1,
                    });
                }
                std::cmp::Ordering::Less => {
                    return Err(LayoutError::Overlap {
                        lo: bucket.lo,
                        previous_hi: (next_lo - 1) as u8,
                    });
                }
                std::cmp::Ordering::Equal => {}
            }
            next_lo = bucket.hi as u16 + 1;
        }

        if next_lo <= MAX_PRICE as u16 {
            return Err(LayoutError::Gap {
                from: next_lo as u8,
                to: MAX_PRICE,
            });
        }

        Ok(Self { buckets })
    }

    /// The six ranges shown in the "next value" histogram.
    pub fn standard() -> Result<Self, LayoutError> {
        Self::new(vec![
            Bucket::new(0, 15, Color32::from_rgb(163, 225, 163)),
            Bucket::new(16, 45, Color32::from_rgb(181, 211, 231)),
            Bucket::new(46, 68, Color32::from_rgb(246, 213, 142)),
            Bucket::new(69, 85, Color32::from_rgb(243, 166, 131)),
            Bucket::new(86, 90, Color32::from_rgb(247, 143, 179)),
            Bucket::new(91, 99, Color32::from_rgb(207, 106, 135)),
        ])
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Index of the bucket holding `value`, `None` above the maximum price.
    pub fn index_of(&self, value: u8) -> Option<usize> {
        self.buckets.iter().position(|b| b.contains(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lo: u8, hi: u8) -> Bucket {
        Bucket::new(lo, hi, Color32::GRAY)
    }

    #[test]
    fn test_standard_layout() {
        let layout = BucketLayout::standard().unwrap();
        assert_eq!(layout.len(), 6);

        let labels: Vec<&str> = layout.buckets().iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["0–15", "16–45", "46–68", "69–85", "86–90", "91–99"]
        );
    }

    #[test]
    fn test_index_of_boundaries() {
        let layout = BucketLayout::standard().unwrap();
        assert_eq!(layout.index_of(0), Some(0));
        assert_eq!(layout.index_of(15), Some(0));
        assert_eq!(layout.index_of(16), Some(1));
        assert_eq!(layout.index_of(45), Some(1));
        assert_eq!(layout.index_of(68), Some(2));
        assert_eq!(layout.index_of(69), Some(3));
        assert_eq!(layout.index_of(90), Some(4));
        assert_eq!(layout.index_of(91), Some(5));
        assert_eq!(layout.index_of(99), Some(5));
        assert_eq!(layout.index_of(100), None);
    }

    #[test]
    fn test_every_price_has_one_bucket() {
        let layout = BucketLayout::standard().unwrap();
        for v in 0..=99u8 {
            let hits = layout.buckets().iter().filter(|b| b.contains(v)).count();
            assert_eq!(hits, 1, "price {} is in {} buckets", v, hits);
        }
    }

    #[test]
    fn test_exact_shares_sum_to_hundred() {
        let layout = BucketLayout::standard().unwrap();
        let total: f64 = layout.buckets().iter().map(Bucket::exact_share).sum();
        assert!((total - 100.0).abs() < 1e-9);
        // 1 - 0.84^2
        assert!((layout.buckets()[0].exact_share() - 29.44).abs() < 1e-9);
    }

    #[test]
    fn test_layout_errors() {
        assert_eq!(BucketLayout::new(vec![]), Err(LayoutError::Empty));
        assert_eq!(
            BucketLayout::new(vec![plain(0, 10), plain(12, 99)]),
            Err(LayoutError::Gap { from: 11, to: 11 })
        );
        assert_eq!(
            BucketLayout::new(vec![plain(5, 99)]),
            Err(LayoutError::Gap { from: 0, to: 4 })
        );
        assert_eq!(
            BucketLayout::new(vec![plain(0, 50)]),
            Err(LayoutError::Gap { from: 51, to: 99 })
        );
        assert_eq!(
            BucketLayout::new(vec![plain(0, 50), plain(40, 99)]),
            Err(LayoutError::Overlap {
                lo: 40,
                previous_hi: 50
            })
        );
        assert_eq!(
            BucketLayout::new(vec![plain(0, 20), plain(30, 21)]),
            Err(LayoutError::Inverted { lo: 30, hi: 21 })
        );
        assert_eq!(
            BucketLayout::new(vec![plain(0, 120)]),
            Err(LayoutError::OutOfRange { hi: 120, max: 99 })
        );
    }
}
