//! Window kinds offered to the spectral pipeline

use std::fmt;
use std::str::FromStr;

use log::warn;

use super::generator::WindowError;

/// Window function kinds
///
/// The discriminant is the stable integer tag used by callers that pick a
/// window from a fixed menu (see [`WindowKind::from_tag`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowKind {
    /// Rectangular window (no tapering): w[n] = 1
    #[default]
    Rectangular = 0,

    /// Triangular window, nonzero at the far edge
    Triangular = 1,

    /// Hann window: w[n] = 0.5*(1 - cos(2πn/(N-1)))
    Hann = 2,

    /// Hamming window with α = 0.53836: w[n] = α - (1-α)*cos(2πn/(N-1))
    Hamming = 3,

    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/(N-1)) + 0.08*cos(4πn/(N-1))
    /// Useful for single tone measurement
    Blackman = 4,

    /// 4-term Blackman-Harris window (minimum sidelobe, ~92 dB)
    BlackmanHarris = 5,

    /// Bartlett window, zero at both edges
    Bartlett = 6,
}

impl WindowKind {
    /// All kinds, in menu order
    pub const ALL: [WindowKind; 7] = [
        WindowKind::Rectangular,
        WindowKind::Triangular,
        WindowKind::Hann,
        WindowKind::Hamming,
        WindowKind::Blackman,
        WindowKind::BlackmanHarris,
        WindowKind::Bartlett,
    ];

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            WindowKind::Rectangular => "Rectangular",
            WindowKind::Triangular => "Triangular",
            WindowKind::Hann => "Hann",
            WindowKind::Hamming => "Hamming",
            WindowKind::Blackman => "Blackman",
            WindowKind::BlackmanHarris => "Blackman-Harris",
            WindowKind::Bartlett => "Bartlett",
        }
    }

    /// Integer tag of this kind (its position in [`WindowKind::ALL`])
    pub fn tag(&self) -> i32 {
        *self as i32
    }

    /// Map an integer tag back to a kind
    ///
    /// Unknown tags fall back to [`WindowKind::Rectangular`], the same as an
    /// unrecognized selection in the menu.
    pub fn from_tag(tag: i32) -> Self {
        usize::try_from(tag)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or_else(|| {
                warn!("unknown window tag {}, using rectangular window", tag);
                WindowKind::Rectangular
            })
    }

    /// Lenient name lookup, falling back to [`WindowKind::Rectangular`]
    ///
    /// Use `str::parse` for the strict variant.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!("unknown window name {:?}, using rectangular window", name);
            WindowKind::Rectangular
        })
    }

    /// Whether w[n] == w[N-1-n] holds for every length
    pub fn is_symmetric(&self) -> bool {
        !matches!(self, WindowKind::Triangular)
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WindowKind {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "Blackman-Harris", "BLACKMAN_HARRIS" and "blackmanharris" all match
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "rectangular" | "rect" => Ok(WindowKind::Rectangular),
            "triangular" => Ok(WindowKind::Triangular),
            "hann" | "hanning" => Ok(WindowKind::Hann),
            "hamming" => Ok(WindowKind::Hamming),
            "blackman" => Ok(WindowKind::Blackman),
            "blackmanharris" => Ok(WindowKind::BlackmanHarris),
            "bartlett" => Ok(WindowKind::Bartlett),
            _ => Err(WindowError::UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for (i, kind) in WindowKind::ALL.iter().enumerate() {
            assert_eq!(kind.tag(), i as i32);
            assert_eq!(WindowKind::from_tag(i as i32), *kind);
        }
    }

    #[test_log::test]
    fn test_unknown_tag_falls_back_to_rectangular() {
        assert_eq!(WindowKind::from_tag(7), WindowKind::Rectangular);
        assert_eq!(WindowKind::from_tag(-1), WindowKind::Rectangular);
        assert_eq!(WindowKind::from_tag(i32::MAX), WindowKind::Rectangular);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Hann".parse::<WindowKind>().unwrap(), WindowKind::Hann);
        assert_eq!("HAMMING".parse::<WindowKind>().unwrap(), WindowKind::Hamming);
        assert_eq!(
            "BLACKMAN_HARRIS".parse::<WindowKind>().unwrap(),
            WindowKind::BlackmanHarris
        );
        assert_eq!(
            " blackman-harris ".parse::<WindowKind>().unwrap(),
            WindowKind::BlackmanHarris
        );

        // Display output parses back
        for kind in WindowKind::ALL {
            assert_eq!(kind.to_string().parse::<WindowKind>().unwrap(), kind);
        }
    }

    #[test_log::test]
    fn test_unknown_name() {
        assert!(matches!(
            "kaiser".parse::<WindowKind>(),
            Err(WindowError::UnknownKind(ref name)) if name == "kaiser"
        ));
        assert_eq!(WindowKind::from_name("kaiser"), WindowKind::Rectangular);
        assert_eq!(WindowKind::from_name("bartlett"), WindowKind::Bartlett);
    }

    #[test]
    fn test_default_is_rectangular() {
        assert_eq!(WindowKind::default(), WindowKind::Rectangular);
    }
}
