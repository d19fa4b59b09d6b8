use super::constants::*;

/// Determines if the given data likely represents a DDS file.
/// This is done by checking the 'MAGIC' header, 'DDS ' at offset 0 and minimum size.
/// For full header validation, use [`parse_dds`].
///
/// [`parse_dds`]: crate::dds::parse_dds::parse_dds
#[inline(always)]
pub fn likely_dds(data: &[u8]) -> bool {
    data.len() >= DDS_HEADER_SIZE && data[..4] == DDS_MAGIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use core::iter::repeat_n;

    #[rstest]
    #[case::exact_header(128, true)]
    #[case::one_short(127, false)]
    #[case::magic_only(4, false)]
    fn likely_dds_checks_length(#[case] len: usize, #[case] expected: bool) {
        let data = DDS_MAGIC
            .into_iter()
            .chain(repeat_n(0, len - 4))
            .collect::<Vec<u8>>();
        assert_eq!(likely_dds(&data), expected);
    }

    #[test]
    fn likely_dds_rejects_invalid_magic() {
        assert!(!likely_dds(&[0u8; 128]));
    }

    #[test]
    fn likely_dds_rejects_empty_data() {
        assert!(!likely_dds(&[]));
    }
}
