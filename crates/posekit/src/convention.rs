use std::fmt;
use std::str::FromStr;

use crate::error::ConversionError;

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis.
    X,
    /// The y axis.
    Y,
    /// The z axis.
    Z,
}

impl Axis {
    /// The index of the axis in a 3-vector.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// The order of the axes of an Euler angle triple.
///
/// Angles `[φ_a, φ_b, φ_c]` under the convention `abc` describe the rotation matrix
/// `R = R_a(φ_a) · R_b(φ_b) · R_c(φ_c)`, i.e. the axes in order of left-hand-side matrix
/// multiplication. Read as intrinsic rotations this rotates about `a`, then about the new `b`,
/// then about the new `c`.
///
/// Only the six Tait-Bryan orderings exist, so a value of this type is always valid.
/// Parsing from a string is where malformed conventions are rejected:
///
/// ```
/// use posekit::EulerConvention;
///
/// let convention: EulerConvention = "zyx".parse().unwrap();
/// assert_eq!(convention, EulerConvention::Zyx);
/// assert!("xxy".parse::<EulerConvention>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum EulerConvention {
    /// `R = R_x · R_y · R_z`
    Xyz,
    /// `R = R_x · R_z · R_y`
    Xzy,
    /// `R = R_y · R_x · R_z`
    Yxz,
    /// `R = R_y · R_z · R_x`
    Yzx,
    /// `R = R_z · R_x · R_y`
    Zxy,
    /// `R = R_z · R_y · R_x`, yaw-pitch-roll.
    #[default]
    Zyx,
}

impl EulerConvention {
    /// All supported conventions.
    pub const ALL: [EulerConvention; 6] = [
        EulerConvention::Xyz,
        EulerConvention::Xzy,
        EulerConvention::Yxz,
        EulerConvention::Yzx,
        EulerConvention::Zxy,
        EulerConvention::Zyx,
    ];

    /// The axes in order of left-hand-side matrix multiplication.
    pub fn axes(self) -> [Axis; 3] {
        use Axis::{X, Y, Z};
        match self {
            EulerConvention::Xyz => [X, Y, Z],
            EulerConvention::Xzy => [X, Z, Y],
            EulerConvention::Yxz => [Y, X, Z],
            EulerConvention::Yzx => [Y, Z, X],
            EulerConvention::Zxy => [Z, X, Y],
            EulerConvention::Zyx => [Z, Y, X],
        }
    }

    /// Whether the axes are a cyclic (even) permutation of `xyz`.
    pub fn is_cyclic(self) -> bool {
        matches!(
            self,
            EulerConvention::Xyz | EulerConvention::Yzx | EulerConvention::Zxy
        )
    }

    /// The lowercase string form, e.g. `"zyx"`.
    pub fn as_str(self) -> &'static str {
        match self {
            EulerConvention::Xyz => "xyz",
            EulerConvention::Xzy => "xzy",
            EulerConvention::Yxz => "yxz",
            EulerConvention::Yzx => "yzx",
            EulerConvention::Zxy => "zxy",
            EulerConvention::Zyx => "zyx",
        }
    }
}

impl FromStr for EulerConvention {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EulerConvention::ALL
            .into_iter()
            .find(|convention| convention.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConversionError::InvalidConvention(s.to_string()))
    }
}

impl TryFrom<&str> for EulerConvention {
    type Error = ConversionError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for EulerConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all() -> Result<(), ConversionError> {
        for convention in EulerConvention::ALL {
            assert_eq!(convention.as_str().parse::<EulerConvention>()?, convention);
            assert_eq!(convention.to_string(), convention.as_str());
        }
        assert_eq!("ZYX".parse::<EulerConvention>()?, EulerConvention::Zyx);
        Ok(())
    }

    #[test]
    fn test_parse_invalid() {
        for s in ["", "xy", "xxy", "xyzx", "abc", "zzz", "x y"] {
            assert_eq!(
                s.parse::<EulerConvention>(),
                Err(ConversionError::InvalidConvention(s.to_string()))
            );
        }
    }

    #[test]
    fn test_default_is_zyx() {
        assert_eq!(EulerConvention::default(), EulerConvention::Zyx);
    }

    #[test]
    fn test_axes_are_permutations() {
        for convention in EulerConvention::ALL {
            let mut indices = convention.axes().map(Axis::index);
            indices.sort_unstable();
            assert_eq!(indices, [0, 1, 2]);
        }
    }

    #[test]
    fn test_parity() {
        let cyclic: Vec<_> = EulerConvention::ALL
            .into_iter()
            .filter(|c| c.is_cyclic())
            .collect();
        assert_eq!(
            cyclic,
            vec![
                EulerConvention::Xyz,
                EulerConvention::Yzx,
                EulerConvention::Zxy
            ]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_lowercase() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&EulerConvention::Yxz)?;
        assert_eq!(json, "\"yxz\"");
        let convention: EulerConvention = serde_json::from_str("\"xzy\"")?;
        assert_eq!(convention, EulerConvention::Xzy);
        Ok(())
    }
}
