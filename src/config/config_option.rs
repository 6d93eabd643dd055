use crate::{context::ContextState, types::err::ConfigError};

/// A configuration option, bounded by `min` and `max`.
///
/// `max_state` notes the latest state of a context at which the option may be revised.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub max_state: ContextState,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if within bounds.
    pub fn set(&mut self, value: T) -> Result<(), ConfigError> {
        if value < self.min || self.max < value {
            log::error!("Value for {} out of bounds", self.name);
            return Err(ConfigError::OutOfBounds(self.name));
        }
        self.value = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_set() {
        let mut option = ConfigOption {
            name: "lean",
            min: 0.0,
            max: 1.0,
            max_state: ContextState::Configuration,
            value: 0.5,
        };
        assert!(option.set(0.25).is_ok());
        assert_eq!(option.value, 0.25);
        assert_eq!(option.set(1.5), Err(ConfigError::OutOfBounds("lean")));
        assert_eq!(option.value, 0.25);
        assert_eq!(option.min_max(), (0.0, 1.0));
    }
}
