//! Battlefield dimensions - the grid is fixed for every battle

/// Columns per row, including the two edge columns
pub const FIELD_WIDTH: i16 = 17;

/// Number of rows
pub const FIELD_HEIGHT: i16 = 11;

/// Total number of cells, and the capacity of every hex array
pub const FIELD_SIZE: usize = (FIELD_WIDTH as usize) * (FIELD_HEIGHT as usize);

/// Number of hexagonal directions
pub const HEX_DIRECTIONS: usize = 6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_size() {
        assert_eq!(FIELD_SIZE, 187);
    }

    #[test]
    fn test_field_fits_in_index_type() {
        assert!(FIELD_SIZE < i16::MAX as usize);
    }
}
