//! Well-known top-level GUANO field names.

use std::fmt;

/// Field names defined by the GUANO convention itself (no namespace).
///
/// Anything can be stored under an arbitrary string key; this enum just
/// spares callers from typo-prone literals for the common set. Every
/// variant converts to its on-disk spelling via [`GuanoField::name`] or
/// `AsRef<str>`, so the variants can be passed straight to the accessors
/// that take string keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuanoField {
    /// High-pass filter frequency in kHz.
    FilterHp,
    /// Low-pass filter frequency in kHz.
    FilterLp,
    FirmwareVersion,
    HardwareVersion,
    /// Relative humidity in percent.
    Humidity,
    /// Recording length in seconds.
    Length,
    /// GPS accuracy in meters.
    LocAccuracy,
    /// Elevation above sea level in meters.
    LocElevation,
    /// WGS84 latitude and longitude.
    LocPosition,
    Make,
    Model,
    Note,
    /// Sample rate in Hz.
    Samplerate,
    SpeciesAutoId,
    SpeciesManualId,
    Tags,
    /// Time-expansion factor; stored under the short name `TE`.
    TimeExpansion,
    /// External temperature in degrees Celsius.
    TemperatureExt,
    /// Internal temperature in degrees Celsius.
    TemperatureInt,
    /// Recording start, ISO 8601 local time.
    Timestamp,
}

impl GuanoField {
    /// Every well-known field, in the order the GUANO convention defines them.
    pub const ALL: [GuanoField; 20] = [
        GuanoField::FilterHp,
        GuanoField::FilterLp,
        GuanoField::FirmwareVersion,
        GuanoField::HardwareVersion,
        GuanoField::Humidity,
        GuanoField::Length,
        GuanoField::LocAccuracy,
        GuanoField::LocElevation,
        GuanoField::LocPosition,
        GuanoField::Make,
        GuanoField::Model,
        GuanoField::Note,
        GuanoField::Samplerate,
        GuanoField::SpeciesAutoId,
        GuanoField::SpeciesManualId,
        GuanoField::Tags,
        GuanoField::TimeExpansion,
        GuanoField::TemperatureExt,
        GuanoField::TemperatureInt,
        GuanoField::Timestamp,
    ];

    /// The field name as it appears in a metadata line.
    pub fn name(&self) -> &'static str {
        match self {
            GuanoField::FilterHp => "Filter HP",
            GuanoField::FilterLp => "Filter LP",
            GuanoField::FirmwareVersion => "Firmware Version",
            GuanoField::HardwareVersion => "Hardware Version",
            GuanoField::Humidity => "Humidity",
            GuanoField::Length => "Length",
            GuanoField::LocAccuracy => "Loc Accuracy",
            GuanoField::LocElevation => "Loc Elevation",
            GuanoField::LocPosition => "Loc Position",
            GuanoField::Make => "Make",
            GuanoField::Model => "Model",
            GuanoField::Note => "Note",
            GuanoField::Samplerate => "Samplerate",
            GuanoField::SpeciesAutoId => "Species Auto ID",
            GuanoField::SpeciesManualId => "Species Manual ID",
            GuanoField::Tags => "Tags",
            GuanoField::TimeExpansion => "TE",
            GuanoField::TemperatureExt => "Temperature Ext",
            GuanoField::TemperatureInt => "Temperature Int",
            GuanoField::Timestamp => "Timestamp",
        }
    }

    /// Look up a well-known field by its exact on-disk name.
    pub fn from_name(name: &str) -> Option<GuanoField> {
        GuanoField::ALL.iter().copied().find(|f| f.name() == name)
    }
}

impl AsRef<str> for GuanoField {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl fmt::Display for GuanoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for field in GuanoField::ALL {
            assert_eq!(
                GuanoField::from_name(field.name()),
                Some(field),
                "round trip failed for {}",
                field.name()
            );
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(GuanoField::from_name("Frequency"), None);
        assert_eq!(GuanoField::from_name("timestamp"), None, "names are case sensitive");
        assert_eq!(GuanoField::from_name(""), None);
    }

    #[test]
    fn test_short_names() {
        assert_eq!(GuanoField::TimeExpansion.name(), "TE");
        assert_eq!(GuanoField::LocPosition.as_ref(), "Loc Position");
        assert_eq!(GuanoField::SpeciesManualId.to_string(), "Species Manual ID");
    }

    #[test]
    fn test_all_lists_each_field_once() {
        assert_eq!(GuanoField::ALL.len(), 20);
        for (i, field) in GuanoField::ALL.iter().enumerate() {
            assert!(
                !GuanoField::ALL[..i].contains(field),
                "{} listed twice",
                field.name()
            );
        }
    }
}
