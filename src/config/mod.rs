/*!
Configuration of a procedure.

Each [procedure](crate::procedures) is built with a [Config], and keeps a copy of the configuration for the duration of its life.
Most options concern a single procedure, and are ignored by the others.

```rust
# use iengine::config::{Config, SymbolChoice};
let mut config = Config::default();
assert!(config.symbol_choice.set(SymbolChoice::Random).is_ok());
assert!(config.random_seed.set(7).is_ok());
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod symbol_choice;
pub use symbol_choice::SymbolChoice;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// How to choose a symbol to branch on during DPLL.
    pub symbol_choice: ConfigOption<SymbolChoice>,

    /// The seed of any source of randomness.
    pub random_seed: ConfigOption<u64>,
}

impl Default for Config {
    /// The default configuration is deterministic, and does not draw on the source of randomness.
    fn default() -> Self {
        Config {
            symbol_choice: ConfigOption {
                name: "symbol_choice",
                min: SymbolChoice::MIN,
                max: SymbolChoice::MAX,
                value: SymbolChoice::First,
            },

            random_seed: ConfigOption {
                name: "random_seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::err::ConfigError;

    #[test]
    fn bounded_set() {
        let mut option = ConfigOption {
            name: "bounded",
            min: 1_u32,
            max: 4,
            value: 2,
        };

        assert_eq!(option.set(4), Ok(()));
        assert_eq!(option.value, 4);
        assert_eq!(option.set(5), Err(ConfigError::OutOfBounds("bounded")));
        assert_eq!(option.value, 4);
        assert_eq!(option.min_max(), (1, 4));
    }

    #[test]
    fn default_is_deterministic() {
        let config = Config::default();
        assert_eq!(config.symbol_choice.value, SymbolChoice::First);
    }
}
