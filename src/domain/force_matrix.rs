//! ForceMatrix - per color pair attraction coefficients
//!
//! Always `MAX_COLORS x MAX_COLORS`, whatever the number of active colors,
//! so adding or removing a color never reallocates. Row = acting-on color,
//! column = source color: `get(a, b)` is how strongly `b` pulls `a`. The
//! matrix need not be symmetric.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::palette::MAX_COLORS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f32>>", into = "Vec<Vec<f32>>")]
pub struct ForceMatrix {
    cells: [[f32; MAX_COLORS]; MAX_COLORS],
}

impl Default for ForceMatrix {
    fn default() -> Self {
        Self {
            cells: [[0.0; MAX_COLORS]; MAX_COLORS],
        }
    }
}

impl ForceMatrix {
    /// Build from (possibly ragged) rows; missing entries are 0.
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self, ConfigError> {
        if rows.len() > MAX_COLORS {
            return Err(ConfigError::out_of_range(
                "forces",
                format!("{} rows, at most {} colors are supported", rows.len(), MAX_COLORS),
            ));
        }

        let mut matrix = Self::default();
        for (a, row) in rows.iter().enumerate() {
            if row.len() > MAX_COLORS {
                return Err(ConfigError::out_of_range(
                    "forces",
                    format!("row {} has {} entries, at most {}", a, row.len(), MAX_COLORS),
                ));
            }
            matrix.cells[a][..row.len()].copy_from_slice(row);
        }
        Ok(matrix)
    }

    /// The top-left `colors x colors` block as rows.
    pub fn rows(&self, colors: usize) -> Vec<Vec<f32>> {
        self.cells[..colors]
            .iter()
            .map(|row| row[..colors].to_vec())
            .collect()
    }

    #[inline]
    pub fn get(&self, a: usize, b: usize) -> f32 {
        self.cells[a][b]
    }

    #[inline]
    pub fn set(&mut self, a: usize, b: usize, value: f32) {
        self.cells[a][b] = value;
    }

    /// Drop row and column `index`, shifting later colors down by one.
    /// The freed last row and column are zeroed.
    pub fn remove_color(&mut self, index: usize) {
        assert!(index < MAX_COLORS, "remove_color: index {} out of range", index);
        for row in self.cells.iter_mut() {
            row.copy_within(index + 1.., index);
            row[MAX_COLORS - 1] = 0.0;
        }
        self.cells.copy_within(index + 1.., index);
        self.cells[MAX_COLORS - 1] = [0.0; MAX_COLORS];
    }

    /// Every entry finite and in `[-1, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (a, row) in self.cells.iter().enumerate() {
            for (b, &value) in row.iter().enumerate() {
                if !value.is_finite() || !(-1.0..=1.0).contains(&value) {
                    return Err(ConfigError::out_of_range(
                        "forces",
                        format!("[{}][{}] = {} is outside [-1, 1]", a, b, value),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<f32>>> for ForceMatrix {
    type Error = ConfigError;

    fn try_from(rows: Vec<Vec<f32>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<ForceMatrix> for Vec<Vec<f32>> {
    fn from(matrix: ForceMatrix) -> Self {
        matrix.rows(MAX_COLORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ForceMatrix {
        ForceMatrix::from_rows(&[
            vec![1.0, -1.0, 1.0],
            vec![1.0, 1.0, 0.2],
            vec![-1.0, 1.0, -1.0],
        ])
        .unwrap()
    }

    #[test]
    fn is_not_required_to_be_symmetric() {
        let m = sample();
        assert_eq!(m.get(0, 1), -1.0);
        assert_eq!(m.get(1, 0), 1.0);
    }

    #[test]
    fn rows_returns_active_block() {
        let m = sample();
        assert_eq!(m.rows(2), vec![vec![1.0, -1.0], vec![1.0, 1.0]]);
    }

    #[test]
    fn remove_color_shifts_rows_and_columns() {
        let mut m = sample();
        m.remove_color(1);
        assert_eq!(m.rows(2), vec![vec![1.0, 1.0], vec![-1.0, -1.0]]);
        assert_eq!(m.get(2, 0), 0.0);
        assert_eq!(m.get(0, 2), 0.0);
    }

    #[test]
    fn validate_rejects_out_of_range_and_nan() {
        let mut m = sample();
        assert!(m.validate().is_ok());
        m.set(4, 4, 1.5);
        assert!(matches!(m.validate(), Err(ConfigError::OutOfRange { .. })));
        m.set(4, 4, f32::NAN);
        assert!(m.validate().is_err());
    }

    #[test]
    fn too_many_rows_are_rejected() {
        let rows = vec![vec![0.0]; MAX_COLORS + 1];
        assert!(ForceMatrix::from_rows(&rows).is_err());
    }

    #[test]
    fn serializes_as_nested_rows() {
        let m = sample();
        let json = serde_json::to_string(&m).unwrap();
        let back: ForceMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);

        let short: ForceMatrix = serde_json::from_str("[[0.5],[0.25,-0.5]]").unwrap();
        assert_eq!(short.get(1, 1), -0.5);
        assert_eq!(short.get(0, 1), 0.0);
    }
}
