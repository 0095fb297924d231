// This file is part of fixed-block-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`FixedVec`](crate::FixedVec).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: a `FixedVec` borrows its storage, so it cannot be
//!   produced from nothing. Instead `&mut FixedVec` is a
//!   [`DeserializeSeed`]: it appends every element of a sequence to an
//!   existing vector and fails once the bound capacity is exceeded.
//!   On any error the length is rolled back, so the live elements are
//!   exactly those held before the call. Spare slots past `len` may have
//!   been written.
//!
//! ```rust
//! use fixed_block_vec::FixedVec;
//! use serde::de::DeserializeSeed;
//!
//! let mut storage = [0u16; 4];
//! let mut v = FixedVec::new(&mut storage);
//! let mut de = serde_json::Deserializer::from_str("[1,2,3]");
//! (&mut v).deserialize(&mut de).unwrap();
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! ```

// Crate imports
use crate::vec::FixedVec;

// Core imports
use core::fmt;

// External imports - serde
use serde::{
    de::{self, DeserializeSeed},
    ser, Deserialize, Deserializer, Serialize, Serializer,
};

impl<T: Copy + Serialize> Serialize for FixedVec<'_, T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct AppendVisitor<'v, 'a, T: Copy>(&'v mut FixedVec<'a, T>);

impl<'de, T> de::Visitor<'de> for AppendVisitor<'_, '_, T>
where
    T: Deserialize<'de> + Copy,
{
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "array or sequence with at most {} elements",
            self.0.spare_capacity()
        )
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let cap = self.0.capacity();
        let start = self.0.len();
        loop {
            let elem = match a.next_element::<T>() {
                Ok(Some(elem)) => elem,
                Ok(None) => return Ok(()),
                Err(e) => {
                    self.0.truncate(start);
                    return Err(e);
                }
            };
            if self.0.push_back(elem).is_err() {
                self.0.truncate(start);
                return Err(<A::Error as de::Error>::custom(format_args!(
                    "too many elements (capacity {cap})"
                )));
            }
        }
    }
}

impl<'de, T> DeserializeSeed<'de> for &mut FixedVec<'_, T>
where
    T: Deserialize<'de> + Copy,
{
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_seq(AppendVisitor(self))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::FixedVec;
    use serde::de::DeserializeSeed;

    fn append_json(v: &mut FixedVec<'_, i32>, json: &str) -> Result<(), serde_json::Error> {
        let mut de = serde_json::Deserializer::from_str(json);
        v.deserialize(&mut de)?;
        de.end()
    }

    #[test]
    fn test_serialize_live_prefix_only() {
        let mut storage = [1i32, 2, 3, 4, 5];
        let v = FixedVec::from_parts(&mut storage, 3).unwrap();
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1,2,3]");
    }

    #[test]
    fn test_deserialize_appends_into_existing_vector() {
        let mut storage = [0i32; 5];
        let mut v = FixedVec::new(&mut storage);
        v.push_back(9).unwrap();
        append_json(&mut v, "[1,2]").unwrap();
        assert_eq!(v.as_slice(), &[9, 1, 2]);
    }

    #[test]
    fn test_deserialize_over_capacity_errors() {
        let mut storage = [0i32; 3];
        let mut v = FixedVec::new(&mut storage);
        let err = append_json(&mut v, "[1,2,3,4]").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("too many elements (capacity 3)"), "msg: {msg}");
        assert!(v.is_empty());
    }

    #[test]
    fn test_deserialize_overflow_keeps_existing_elements() {
        let mut storage = [0i32; 3];
        let mut v = FixedVec::new(&mut storage);
        v.push_back(9).unwrap();
        assert!(append_json(&mut v, "[1,2,3]").is_err());
        assert_eq!(v.as_slice(), &[9]);
        // Still usable afterwards.
        append_json(&mut v, "[1,2]").unwrap();
        assert_eq!(v.as_slice(), &[9, 1, 2]);
    }

    #[test]
    fn test_deserialize_type_error_rolls_back() {
        let mut storage = [0i32; 5];
        let mut v = FixedVec::new(&mut storage);
        v.push_back(7).unwrap();
        assert!(append_json(&mut v, r#"[1,2,"x"]"#).is_err());
        assert_eq!(v.as_slice(), &[7]);
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_roundtrip_empty() {
        let mut storage = [0i32; 2];
        let mut v = FixedVec::new(&mut storage);
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[]");
        append_json(&mut v, &s).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn test_visitor_expecting_message() {
        let mut storage = [0i32; 4];
        let mut v = FixedVec::new(&mut storage);
        let err = append_json(&mut v, r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("array or sequence with at most 4 elements"),
            "unexpected error message: {msg}"
        );
    }
}
