//! Fixed operands summed by the `vecsum` binary

/// Number of elements in every operand
pub const LEN: usize = 16;

/// First operand: 1 through 16, ascending
pub const ASCENDING: [i32; LEN] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];

/// Second operand: 16 through 1, descending
pub const DESCENDING: [i32; LEN] = [16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1];

/// Value every element of `ASCENDING + DESCENDING` equals
pub const EXPECTED_SUM: i32 = LEN as i32 + 1;
