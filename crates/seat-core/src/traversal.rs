//! Serpentine desk order.

/// Iterator over `(row, column)` positions of a grid, column by column.
///
/// Even columns (0-indexed) run top to bottom and odd columns bottom to top,
/// so consecutive positions are always physically adjacent.
#[derive(Debug, Clone)]
pub struct SerpentineOrder {
    rows: usize,
    columns: usize,
    step: usize,
}

impl SerpentineOrder {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            step: 0,
        }
    }

    fn total(&self) -> usize {
        self.rows * self.columns
    }
}

impl Iterator for SerpentineOrder {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.total() {
            return None;
        }
        let column = self.step / self.rows;
        let offset = self.step % self.rows;
        let row = if column % 2 == 0 {
            offset
        } else {
            self.rows - offset - 1
        };
        self.step += 1;
        Some((row, column))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total().saturating_sub(self.step);
        (left, Some(left))
    }
}

impl ExactSizeIterator for SerpentineOrder {}

/// Convenience constructor for [`SerpentineOrder`].
pub fn serpentine(rows: usize, columns: usize) -> SerpentineOrder {
    SerpentineOrder::new(rows, columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two_snake() {
        let order: Vec<_> = serpentine(2, 2).collect();
        assert_eq!(order, vec![(0, 0), (1, 0), (1, 1), (0, 1)]);
    }

    #[test]
    fn three_by_three_snake() {
        let order: Vec<_> = serpentine(3, 3).collect();
        assert_eq!(
            order,
            vec![
                (0, 0),
                (1, 0),
                (2, 0),
                (2, 1),
                (1, 1),
                (0, 1),
                (0, 2),
                (1, 2),
                (2, 2)
            ]
        );
    }

    #[test]
    fn consecutive_positions_are_adjacent() {
        let order: Vec<_> = serpentine(4, 5).collect();
        assert_eq!(order.len(), 20);
        for pair in order.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let distance = a.0.abs_diff(b.0) + a.1.abs_diff(b.1);
            assert_eq!(distance, 1, "{a:?} -> {b:?}");
        }
    }

    #[test]
    fn empty_grid_yields_nothing() {
        assert_eq!(serpentine(0, 3).count(), 0);
        assert_eq!(serpentine(3, 0).len(), 0);
    }
}
