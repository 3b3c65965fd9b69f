use crate::models::AgeGroup;

/// Map an estimated age onto its bracket
///
/// `0` (and anything non-positive) means the classifier produced no estimate
/// and maps to `Unknown`, which is distinct from `Other` (an adult outside the
/// named ranges).
#[inline]
pub fn bin_age(age: i32) -> AgeGroup {
    match age {
        i32::MIN..=0 => AgeGroup::Unknown,
        18..=25 => AgeGroup::Age18To25,
        26..=35 => AgeGroup::Age26To35,
        36..=50 => AgeGroup::Age36To50,
        _ => AgeGroup::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_sentinel() {
        assert_eq!(bin_age(0), AgeGroup::Unknown);
        assert_eq!(bin_age(-4), AgeGroup::Unknown);
    }

    #[test]
    fn test_bracket_edges() {
        assert_eq!(bin_age(18), AgeGroup::Age18To25);
        assert_eq!(bin_age(25), AgeGroup::Age18To25);
        assert_eq!(bin_age(26), AgeGroup::Age26To35);
        assert_eq!(bin_age(35), AgeGroup::Age26To35);
        assert_eq!(bin_age(36), AgeGroup::Age36To50);
        assert_eq!(bin_age(50), AgeGroup::Age36To50);
    }

    #[test]
    fn test_out_of_range_is_other() {
        assert_eq!(bin_age(51), AgeGroup::Other);
        assert_eq!(bin_age(17), AgeGroup::Other);
        assert_eq!(bin_age(1), AgeGroup::Other);
        assert_eq!(bin_age(120), AgeGroup::Other);
    }
}
