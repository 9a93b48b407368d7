//! Panel orientations and the fixed cycle the slideshow walks through.

use mipidsi::options::Rotation;

/// The four addressing modes of the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "board", derive(defmt::Format))]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
    Portrait180,
    Landscape180,
}

impl Orientation {
    /// The state that follows `self` in the cycle, wrapping after
    /// `Landscape180`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Portrait => Self::Landscape,
            Self::Landscape => Self::Portrait180,
            Self::Portrait180 => Self::Landscape180,
            Self::Landscape180 => Self::Portrait,
        }
    }

    #[must_use]
    pub const fn rotation(self) -> Rotation {
        match self {
            Self::Portrait => Rotation::Deg0,
            Self::Landscape => Rotation::Deg90,
            Self::Portrait180 => Rotation::Deg180,
            Self::Landscape180 => Rotation::Deg270,
        }
    }
}

impl From<Orientation> for mipidsi::options::Orientation {
    fn from(orientation: Orientation) -> Self {
        Self::new().rotate(orientation.rotation())
    }
}

/// Walks PORTRAIT → LANDSCAPE → PORTRAIT180 → LANDSCAPE180 → PORTRAIT …
#[derive(Clone, Copy, Debug)]
pub struct OrientationCycle {
    current: Orientation,
}

impl OrientationCycle {
    /// Start the cycle at the orientation the panel was initialised with.
    #[must_use]
    pub const fn new(start: Orientation) -> Self {
        Self { current: start }
    }

    #[must_use]
    pub const fn current(&self) -> Orientation {
        self.current
    }

    /// Step once and return the orientation to request.
    pub fn advance(&mut self) -> Orientation {
        self.current = self.current.next();
        self.current
    }
}

impl Default for OrientationCycle {
    fn default() -> Self {
        Self::new(Orientation::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_after_four_steps() {
        let mut cycle = OrientationCycle::default();
        let seen = [
            cycle.advance(),
            cycle.advance(),
            cycle.advance(),
            cycle.advance(),
            cycle.advance(),
        ];
        assert_eq!(
            seen,
            [
                Orientation::Landscape,
                Orientation::Portrait180,
                Orientation::Landscape180,
                Orientation::Portrait,
                Orientation::Landscape,
            ]
        );
    }

    #[test]
    fn maps_to_panel_rotation() {
        let o: mipidsi::options::Orientation = Orientation::Portrait180.into();
        assert_eq!(o.rotation, Rotation::Deg180);
        assert!(!o.mirrored);
        assert_eq!(Orientation::Landscape.rotation(), Rotation::Deg90);
        assert_eq!(Orientation::Landscape180.rotation(), Rotation::Deg270);
    }
}
