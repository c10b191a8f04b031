use log::info;

use crate::core::HostResult;
use crate::entry_ability::PREFIX;

/// Diagnostic fields read from the device on ability creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceField {
    Brand,
    Model,
    OsFullName,
    SdkApiVersion,
    SerialNumber,
}

impl DeviceField {
    pub const ALL: [DeviceField; 5] = [
        DeviceField::Brand,
        DeviceField::Model,
        DeviceField::OsFullName,
        DeviceField::SdkApiVersion,
        DeviceField::SerialNumber,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DeviceField::Brand => "brand",
            DeviceField::Model => "model",
            DeviceField::OsFullName => "osFullName",
            DeviceField::SdkApiVersion => "sdkApiVersion",
            DeviceField::SerialNumber => "serialNumber",
        }
    }
}

/// Device information supplied by the host
pub trait DeviceProfile {
    /// Read a single diagnostic field; individual fields may fail
    fn read(&self, field: DeviceField) -> HostResult<String>;

    /// Whether the shell is running on an emulator
    fn is_emulator(&self) -> bool;
}

/// Log every diagnostic field at info severity.
///
/// A field that cannot be read is logged and skipped; diagnostics are
/// best-effort and never abort creation.
pub fn log_diagnostics(profile: &dyn DeviceProfile) {
    for field in DeviceField::ALL {
        match profile.read(field) {
            Ok(value) => info!(target: PREFIX, "device {}={}", field.name(), value),
            Err(err) => info!(target: PREFIX, "device {} unavailable: {}", field.name(), err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HostError;
    use std::cell::RefCell;

    struct FlakyProfile {
        reads: RefCell<Vec<DeviceField>>,
    }

    impl DeviceProfile for FlakyProfile {
        fn read(&self, field: DeviceField) -> HostResult<String> {
            self.reads.borrow_mut().push(field);
            match field {
                DeviceField::SerialNumber => Err(HostError::new(201, "permission denied")),
                other => Ok(other.name().to_owned()),
            }
        }

        fn is_emulator(&self) -> bool {
            false
        }
    }

    #[test]
    fn diagnostics_attempt_every_field_despite_failures() {
        let profile = FlakyProfile {
            reads: RefCell::new(Vec::new()),
        };

        log_diagnostics(&profile);

        assert_eq!(*profile.reads.borrow(), DeviceField::ALL.to_vec());
    }

    #[test]
    fn field_names_are_stable() {
        assert_eq!(DeviceField::Brand.name(), "brand");
        assert_eq!(DeviceField::SdkApiVersion.name(), "sdkApiVersion");
    }
}
