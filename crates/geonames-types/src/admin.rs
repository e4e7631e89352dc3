//! Administrative code tuple.

use serde::{Deserialize, Serialize};

/// Administrative division codes, from first-order (state) down to fifth-order.
///
/// Dump rows carry the first four levels; the fifth is published separately
/// and stays empty there.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdminCode {
    /// First-order division code.
    pub first: String,
    /// Second-order division code.
    pub second: String,
    /// Third-order division code.
    pub third: String,
    /// Fourth-order division code.
    pub fourth: String,
    /// Fifth-order division code.
    pub fifth: String,
}

impl AdminCode {
    /// Returns the code at the given level (1-based), if the level exists.
    #[must_use]
    pub fn level(&self, level: usize) -> Option<&str> {
        match level {
            1 => Some(&self.first),
            2 => Some(&self.second),
            3 => Some(&self.third),
            4 => Some(&self.fourth),
            5 => Some(&self.fifth),
            _ => None,
        }
    }

    /// Returns the deepest non-empty level, or 0 if every level is empty.
    #[must_use]
    pub fn depth(&self) -> usize {
        (1..=5)
            .rev()
            .find(|&level| self.level(level).is_some_and(|code| !code.is_empty()))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_lookup() {
        let code = AdminCode {
            first: "07".into(),
            second: "701".into(),
            ..AdminCode::default()
        };
        assert_eq!(code.level(1), Some("07"));
        assert_eq!(code.level(3), Some(""));
        assert_eq!(code.level(6), None);
        assert_eq!(code.depth(), 2);
        assert_eq!(AdminCode::default().depth(), 0);
    }
}
