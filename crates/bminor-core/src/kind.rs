//! The three array element kinds supported by generated code.

use std::ffi::c_int;
use std::fmt;

/// Classification of an array's element type.
///
/// Each kind fixes both the element width and the width of the count header
/// stored in front of the element region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 64-bit signed integer elements, 64-bit integer header.
    Integer,
    /// Double-precision float elements, double-precision header.
    Float,
    /// One-byte boolean elements, native `int` header.
    Boolean,
}

impl ElementKind {
    /// All kinds, in ABI symbol order.
    pub const ALL: [ElementKind; 3] = [Self::Integer, Self::Float, Self::Boolean];

    /// Lowercase name used in exported symbol names (`array_create_<name>`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
        }
    }

    /// Size of one element in bytes.
    pub fn element_size(self) -> usize {
        match self {
            Self::Integer => std::mem::size_of::<i64>(),
            Self::Float => std::mem::size_of::<f64>(),
            Self::Boolean => std::mem::size_of::<bool>(),
        }
    }

    /// Size of the count header in bytes.
    pub fn header_size(self) -> usize {
        match self {
            Self::Integer => std::mem::size_of::<i64>(),
            Self::Float => std::mem::size_of::<f64>(),
            Self::Boolean => std::mem::size_of::<c_int>(),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_headers_span_one_element() {
        for kind in [ElementKind::Integer, ElementKind::Float] {
            assert_eq!(kind.header_size(), kind.element_size());
            assert_eq!(kind.header_size(), 8);
        }
    }

    #[test]
    fn boolean_header_is_int_sized() {
        assert_eq!(ElementKind::Boolean.element_size(), 1);
        assert_eq!(ElementKind::Boolean.header_size(), 4);
    }

    #[test]
    fn display_matches_symbol_names() {
        let names: Vec<String> = ElementKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, ["integer", "float", "boolean"]);
    }
}
