//! The built-in block set.

use crate::ElementType;

crate::element_blocks! {
    /// Blocks for every built-in element type, each backed by a `Vec`.
    pub enum StandardBlocks {
        /// `bool` values.
        Boolean(bool => Vec<bool>) = ElementType::BOOLEAN,
        /// `i8` values.
        Int8(i8 => Vec<i8>) = ElementType::INT8,
        /// `u8` values.
        Uint8(u8 => Vec<u8>) = ElementType::UINT8,
        /// `i16` values.
        Int16(i16 => Vec<i16>) = ElementType::INT16,
        /// `u16` values.
        Uint16(u16 => Vec<u16>) = ElementType::UINT16,
        /// `i32` values.
        Int32(i32 => Vec<i32>) = ElementType::INT32,
        /// `u32` values.
        Uint32(u32 => Vec<u32>) = ElementType::UINT32,
        /// `i64` values.
        Int64(i64 => Vec<i64>) = ElementType::INT64,
        /// `u64` values.
        Uint64(u64 => Vec<u64>) = ElementType::UINT64,
        /// `f32` values.
        Float32(f32 => Vec<f32>) = ElementType::FLOAT32,
        /// `f64` values.
        Float64(f64 => Vec<f64>) = ElementType::FLOAT64,
        /// `String` values.
        String(String => Vec<String>) = ElementType::STRING,
    }
}
