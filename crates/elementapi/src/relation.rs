//! Directed relations between elements

use std::fmt;

/// How strongly one element acts against another.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ElementRelation {
    /// 2x; the opposite direction is `Weak`
    Strong,
    /// 0.5x; the opposite direction is `Strong`
    Weak,
    /// 1x both ways
    #[default]
    General,
    /// 2x both ways
    MutualStrong,
    /// Arbitrary multipliers for each direction
    Custom {
        multiplier: f64,
        inverse_multiplier: f64,
    },
}

impl ElementRelation {
    pub fn multiplier(&self) -> f64 {
        match self {
            ElementRelation::Strong | ElementRelation::MutualStrong => 2.0,
            ElementRelation::Weak => 0.5,
            ElementRelation::General => 1.0,
            ElementRelation::Custom { multiplier, .. } => *multiplier,
        }
    }

    /// Relation for the opposite direction
    pub fn inverse(&self) -> ElementRelation {
        match *self {
            ElementRelation::Strong => ElementRelation::Weak,
            ElementRelation::Weak => ElementRelation::Strong,
            ElementRelation::Custom {
                multiplier,
                inverse_multiplier,
            } => ElementRelation::Custom {
                multiplier: inverse_multiplier,
                inverse_multiplier: multiplier,
            },
            symmetric => symmetric,
        }
    }
}

impl fmt::Display for ElementRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementRelation::Strong => "STRONG",
            ElementRelation::Weak => "WEAK",
            ElementRelation::General => "GENERAL",
            ElementRelation::MutualStrong => "MUTUAL_STRONG",
            ElementRelation::Custom { .. } => "CUSTOM",
        };
        write!(f, "{}(multiplier={})", name, self.multiplier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers() {
        assert_eq!(ElementRelation::Strong.multiplier(), 2.0);
        assert_eq!(ElementRelation::Weak.multiplier(), 0.5);
        assert_eq!(ElementRelation::General.multiplier(), 1.0);
        assert_eq!(ElementRelation::MutualStrong.multiplier(), 2.0);
    }

    #[test]
    fn test_inverses() {
        assert_eq!(ElementRelation::Strong.inverse(), ElementRelation::Weak);
        assert_eq!(ElementRelation::Weak.inverse(), ElementRelation::Strong);
        assert_eq!(ElementRelation::General.inverse(), ElementRelation::General);
        assert_eq!(
            ElementRelation::MutualStrong.inverse(),
            ElementRelation::MutualStrong
        );

        let custom = ElementRelation::Custom {
            multiplier: 1.5,
            inverse_multiplier: 0.75,
        };
        assert_eq!(custom.inverse().multiplier(), 0.75);
        assert_eq!(custom.inverse().inverse(), custom);
    }

    #[test]
    fn test_display() {
        assert_eq!(ElementRelation::Strong.to_string(), "STRONG(multiplier=2)");
    }
}
