//! Types for lunar phase events and phase windows.

/// The four named (principal) lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    New,
    FirstQuarter,
    Full,
    LastQuarter,
}

impl PhaseKind {
    /// Lunation-fraction offset of this phase: 0, 0.25, 0.5, 0.75.
    pub const fn offset(self) -> f64 {
        match self {
            Self::New => 0.0,
            Self::FirstQuarter => 0.25,
            Self::Full => 0.5,
            Self::LastQuarter => 0.75,
        }
    }

    /// Classify a lunation fraction as a named phase, within a small
    /// epsilon. Fractions away from the quarter marks are not named
    /// phases.
    pub fn from_offset(offset: f64) -> Option<Self> {
        const EPS: f64 = 0.01;
        let frac = offset.rem_euclid(1.0);
        for kind in [Self::New, Self::FirstQuarter, Self::Full, Self::LastQuarter] {
            if (frac - kind.offset()).abs() < EPS || (frac - kind.offset() - 1.0).abs() < EPS {
                return Some(kind);
            }
        }
        None
    }

    /// The corresponding display label.
    pub const fn label(self) -> PhaseLabel {
        match self {
            Self::New => PhaseLabel::New,
            Self::FirstQuarter => PhaseLabel::FirstQuarter,
            Self::Full => PhaseLabel::Full,
            Self::LastQuarter => PhaseLabel::LastQuarter,
        }
    }
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::New => "New Moon",
            Self::FirstQuarter => "First Quarter",
            Self::Full => "Full Moon",
            Self::LastQuarter => "Last Quarter",
        })
    }
}

/// Named phases plus the four interpolated labels between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseLabel {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl PhaseLabel {
    /// Label for the interval between two consecutive named phases.
    pub const fn between(prev: PhaseKind, next: PhaseKind) -> Self {
        match (prev, next) {
            (PhaseKind::New, PhaseKind::FirstQuarter) => Self::WaxingCrescent,
            (PhaseKind::FirstQuarter, PhaseKind::Full) => Self::WaxingGibbous,
            (PhaseKind::Full, PhaseKind::LastQuarter) => Self::WaningGibbous,
            (PhaseKind::LastQuarter, PhaseKind::New) => Self::WaningCrescent,
            // Non-consecutive pairs cannot bracket an instant; fall back to
            // the phase just passed.
            (p, _) => p.label(),
        }
    }
}

impl std::fmt::Display for PhaseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        })
    }
}

/// One named phase instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPhaseEvent {
    pub kind: PhaseKind,
    /// Real-valued lunation number k (integer at new moon).
    pub lunation: f64,
    /// Instant in Terrestrial Time.
    pub jde: f64,
    /// Instant in UTC.
    pub unix: i64,
}

/// The phase state around one instant: bracketing named phases, the
/// current label, and the illuminated disk fraction.
///
/// Invariant: `prev.unix <= target < next.unix`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPhaseWindow {
    pub label: PhaseLabel,
    /// Illuminated fraction of the disk, percent, one decimal.
    pub illumination_pct: f64,
    pub prev: LunarPhaseEvent,
    pub next: LunarPhaseEvent,
}
