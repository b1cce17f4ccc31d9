use alloc::{vec, vec::Vec};

use crate::{CharacterMask, Error, Topology};

/// The masks currently shown by a display, one per character cell.
///
/// The length only changes through [ElementArray::resize], which blanks every
/// cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementArray {
    elements: Vec<CharacterMask>,
}

impl ElementArray {
    /// Create `count` blank elements.
    pub fn new(count: usize) -> Self {
        Self {
            elements: vec![0; count],
        }
    }

    /// Replace the contents with `count` blank elements.
    pub fn resize(&mut self, count: usize) {
        self.elements.clear();
        self.elements.resize(count, 0);
    }

    /// Parse a base-10 element count and [resize](Self::resize) to it.
    ///
    /// The current elements are kept when the count does not parse.
    pub fn resize_from_str(&mut self, count: &str) -> Result<usize, Error> {
        let count = count.trim().parse::<usize>().map_err(|_| Error::InvalidCount)?;
        self.resize(count);
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_slice(&self) -> &[CharacterMask] {
        &self.elements
    }

    pub fn get(&self, index: usize) -> Option<CharacterMask> {
        self.elements.get(index).copied()
    }

    /// Blank every element, then fill from the left with the masks for
    /// `value`, using `T`'s table. `None` blanks the display.
    ///
    /// Characters past the last element are dropped. Characters missing from
    /// the table get [Topology::UNKNOWN_MASK].
    pub fn set_text<T: Topology>(&mut self, value: Option<&str>) {
        self.elements.fill(0);

        let value = value.unwrap_or("");
        for (element, c) in self.elements.iter_mut().zip(value.chars()) {
            *element = T::mask_or_unknown(c);
        }
    }

    /// Set a single element. Indices past the end are ignored.
    pub fn set_element(&mut self, index: usize, mask: CharacterMask) {
        if let Some(element) = self.elements.get_mut(index) {
            *element = mask;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Polygon, SegmentStyle};

    struct Digits;

    impl Topology for Digits {
        const SEGMENT_COUNT: usize = 7;

        fn character_mask(c: char) -> Option<CharacterMask> {
            match c {
                ' ' => Some(0),
                '0'..='9' => Some(c as u32 - '0' as u32 + 1),
                _ => None,
            }
        }

        fn compute_points(_width: f64, _height: f64, _style: &SegmentStyle) -> Vec<Polygon> {
            Vec::new()
        }
    }

    #[test_log::test]
    fn new_elements_are_blank() {
        let elements = ElementArray::new(4);
        assert_eq!(elements.as_slice(), &[0, 0, 0, 0]);
        assert!(ElementArray::default().is_empty());
    }

    #[test_log::test]
    fn resize_discards_contents() {
        let mut elements = ElementArray::new(2);
        elements.set_text::<Digits>(Some("12"));
        elements.resize(3);
        assert_eq!(elements.as_slice(), &[0, 0, 0]);
        elements.set_text::<Digits>(Some("12"));
        elements.resize(1);
        assert_eq!(elements.as_slice(), &[0]);
    }

    #[test_log::test]
    fn resize_from_str_parses_counts() {
        let mut elements = ElementArray::new(1);
        assert_eq!(elements.resize_from_str(" 5 "), Ok(5));
        assert_eq!(elements.len(), 5);
        assert_eq!(elements.resize_from_str("0"), Ok(0));
        assert!(elements.is_empty());
    }

    #[test_log::test]
    fn resize_from_str_keeps_state_on_error() {
        let mut elements = ElementArray::new(3);
        elements.set_text::<Digits>(Some("123"));
        let before = elements.clone();

        for bad in ["", "abc", "-1", "2.5", "4x"] {
            assert_eq!(elements.resize_from_str(bad), Err(Error::InvalidCount), "{bad:?}");
            assert_eq!(elements, before);
        }
    }

    #[test_log::test]
    fn set_text_left_aligns_and_blanks_the_rest() {
        let mut elements = ElementArray::new(5);
        elements.set_text::<Digits>(Some("90"));
        assert_eq!(elements.as_slice(), &[10, 1, 0, 0, 0]);
    }

    #[test_log::test]
    fn set_text_drops_overflow() {
        let mut elements = ElementArray::new(3);
        elements.set_text::<Digits>(Some("123456"));
        assert_eq!(elements.as_slice(), &[2, 3, 4]);
    }

    #[test_log::test]
    fn set_text_none_blanks_everything() {
        let mut elements = ElementArray::new(3);
        elements.set_text::<Digits>(Some("999"));
        elements.set_text::<Digits>(None);
        assert_eq!(elements.as_slice(), &[0, 0, 0]);
        elements.set_text::<Digits>(Some("999"));
        elements.set_text::<Digits>(Some(""));
        assert_eq!(elements.as_slice(), &[0, 0, 0]);
    }

    #[test_log::test]
    fn set_text_uses_unknown_mask() {
        let mut elements = ElementArray::new(3);
        elements.set_text::<Digits>(Some("1?"));
        assert_eq!(elements.as_slice(), &[2, Digits::UNKNOWN_MASK, 0]);
    }

    #[test_log::test]
    fn set_text_is_idempotent() {
        let mut once = ElementArray::new(4);
        once.set_text::<Digits>(Some("4 2x"));
        let mut twice = once.clone();
        twice.set_text::<Digits>(Some("4 2x"));
        assert_eq!(once, twice);
    }

    #[test_log::test]
    fn set_element_ignores_out_of_range() {
        let mut elements = ElementArray::new(3);
        elements.set_element(0, 7);
        elements.set_element(2, 9);
        elements.set_element(3, 11);
        elements.set_element(usize::MAX, 11);
        assert_eq!(elements.as_slice(), &[7, 0, 9]);
        assert_eq!(elements.get(0), Some(7));
        assert_eq!(elements.get(3), None);
    }
}
