//! Image quality heuristic
//!
//! Maps structural metadata to a bounded quality sub-score using resolution,
//! format, and aspect-ratio bonuses. Pure function; identical metadata always
//! yields the same score.

use crate::types::ObjectMetadata;

/// Lower bound of the quality sub-score
pub const QUALITY_MIN: i64 = 65;

/// Upper bound of the quality sub-score
pub const QUALITY_MAX: i64 = 100;

/// Starting score before bonuses
const BASE_SCORE: i64 = 70;

/// Score image quality from probed metadata
///
/// All adjustments are additive from the base of 70:
/// resolution bonus by pixel count, format bonus for png/jpeg, and an
/// aspect-ratio bonus when the image is not overly stretched. The zero-pixel
/// default record takes none of the bonuses and lands on the base score.
pub fn score(metadata: &ObjectMetadata) -> i64 {
    let mut score = BASE_SCORE;

    score += resolution_bonus(metadata.pixel_count());
    score += format_bonus(&metadata.format);

    // Zero height fails the aspect check rather than dividing by zero
    if metadata.height > 0 {
        let aspect = f64::from(metadata.width) / f64::from(metadata.height);
        if aspect > 0.5 && aspect < 2.0 {
            score += 5;
        }
    }

    score.clamp(QUALITY_MIN, QUALITY_MAX)
}

fn resolution_bonus(pixels: u64) -> i64 {
    if pixels > 2_000_000 {
        20
    } else if pixels > 1_000_000 {
        15
    } else if pixels > 500_000 {
        10
    } else if pixels > 100_000 {
        5
    } else {
        0
    }
}

fn format_bonus(format: &str) -> i64 {
    match format {
        "png" => 5,
        "jpg" | "jpeg" => 3,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(width: u32, height: u32, format: &str) -> ObjectMetadata {
        ObjectMetadata {
            width,
            height,
            format: format.into(),
            byte_size: 1024,
        }
    }

    #[test]
    fn test_unknown_metadata_scores_base() {
        // No bonuses apply to the all-zero record
        assert_eq!(score(&ObjectMetadata::unknown()), 70);
    }

    #[test]
    fn test_resolution_bonus_boundaries() {
        assert_eq!(resolution_bonus(100_000), 0);
        assert_eq!(resolution_bonus(100_001), 5);
        assert_eq!(resolution_bonus(500_000), 5);
        assert_eq!(resolution_bonus(500_001), 10);
        assert_eq!(resolution_bonus(1_000_000), 10);
        assert_eq!(resolution_bonus(1_000_001), 15);
        assert_eq!(resolution_bonus(2_000_000), 15);
        assert_eq!(resolution_bonus(2_000_001), 20);
    }

    #[test]
    fn test_format_bonus() {
        assert_eq!(format_bonus("png"), 5);
        assert_eq!(format_bonus("jpg"), 3);
        assert_eq!(format_bonus("jpeg"), 3);
        assert_eq!(format_bonus("webp"), 0);
        assert_eq!(format_bonus(""), 0);
    }

    #[test]
    fn test_aspect_ratio_bonus() {
        // 1:1 is comfortably inside (0.5, 2.0)
        assert_eq!(score(&metadata(100, 100, "")), 75);
        // 3:1 panorama fails the check
        assert_eq!(score(&metadata(300, 100, "")), 70);
        // Exactly 2.0 fails (bounds are exclusive)
        assert_eq!(score(&metadata(200, 100, "")), 70);
        assert_eq!(score(&metadata(100, 200, "")), 70);
        // Just inside the lower bound
        assert_eq!(score(&metadata(101, 200, "")), 75);
    }

    #[test]
    fn test_zero_height_does_not_panic() {
        assert_eq!(score(&metadata(500, 0, "png")), 75);
    }

    #[test]
    fn test_full_bonus_stack_clamps_at_max() {
        // >2M px (+20), png (+5), square aspect (+5): 70 + 30 clamps to 100
        assert_eq!(score(&metadata(2000, 2000, "png")), 100);
    }

    #[test]
    fn test_high_resolution_jpeg() {
        // 1.92M px (+15), jpeg (+3), 4:3 aspect (+5)
        assert_eq!(score(&metadata(1600, 1200, "jpeg")), 93);
    }

    #[test]
    fn test_score_always_in_bounds() {
        let cases = [
            metadata(0, 0, ""),
            metadata(1, 1, "bmp"),
            metadata(10_000, 10_000, "png"),
            metadata(u32::MAX, 1, "jpg"),
            metadata(1, u32::MAX, ""),
        ];

        for m in &cases {
            let s = score(m);
            assert!((QUALITY_MIN..=QUALITY_MAX).contains(&s), "out of bounds: {}", s);
        }
    }

    #[test]
    fn test_monotone_in_pixel_count() {
        // Fix format and aspect; increasing pixel count never lowers the score
        let mut last = 0;
        for side in [100u32, 320, 718, 1001, 1415, 2000] {
            let s = score(&metadata(side, side, "png"));
            assert!(s >= last, "score decreased at {}x{}", side, side);
            last = s;
        }
    }
}
