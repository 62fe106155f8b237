//! Layout agreement between `ElementKind` metadata, `BufferLayout` and live
//! buffers.

use bminor_array::{header_offset, BufferLayout, Element, ElementKind, TaggedBuffer};
use bminor_test_utils::{ALL_KINDS, SAMPLE_COUNTS};

fn layout_of(kind: ElementKind, n: usize) -> BufferLayout {
    match kind {
        ElementKind::Integer => BufferLayout::for_count::<i64>(n),
        ElementKind::Float => BufferLayout::for_count::<f64>(n),
        ElementKind::Boolean => BufferLayout::for_count::<bool>(n),
    }
    .unwrap()
}

#[test]
fn offsets_match_kind_header_sizes() {
    for kind in ALL_KINDS {
        let shape = layout_of(kind, 3);
        assert_eq!(shape.elements_offset(), kind.header_size(), "{kind}");
    }
    assert_eq!(header_offset::<i64>(), 8);
    assert_eq!(header_offset::<f64>(), 8);
    assert_eq!(header_offset::<bool>(), 4);
}

#[test]
fn sizes_cover_header_and_elements() {
    for kind in ALL_KINDS {
        for &n in &SAMPLE_COUNTS {
            let n = n as usize;
            let shape = layout_of(kind, n);
            let minimum = kind.header_size() + n * kind.element_size();
            assert!(shape.size() >= minimum, "{kind} x {n}");
            assert!(shape.size() < minimum + shape.align(), "{kind} x {n}");
            assert_eq!(shape.len(), n);
        }
    }
}

fn check_live<T: Element>() {
    for &n in &SAMPLE_COUNTS {
        let buf = TaggedBuffer::<T>::new(n).unwrap();
        assert_eq!(buf.len() as i64, n);
        assert_eq!(buf.kind(), T::KIND);
        assert_eq!(buf.as_ptr() as usize % std::mem::align_of::<T>(), 0);
    }
}

#[test]
fn live_buffers_agree_with_kind() {
    check_live::<i64>();
    check_live::<f64>();
    check_live::<bool>();
}
