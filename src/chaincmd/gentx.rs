//! Optional flags for `gentx`.
//!
//! Options are `(flag, value)` pairs applied strictly left to right, so the
//! caller's ordering is the flag ordering on the command line.

const OPTION_MONIKER: &str = "--moniker";
const OPTION_COMMISSION_RATE: &str = "--commission-rate";
const OPTION_COMMISSION_MAX_RATE: &str = "--commission-max-rate";
const OPTION_COMMISSION_MAX_CHANGE_RATE: &str = "--commission-max-change-rate";
const OPTION_MIN_SELF_DELEGATION: &str = "--min-self-delegation";
const OPTION_GAS_PRICES: &str = "--gas-prices";

/// A single optional `gentx` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GentxOption {
    flag: &'static str,
    value: Option<String>,
}

impl GentxOption {
    fn new(flag: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            flag,
            value: (!value.is_empty()).then_some(value),
        }
    }

    /// Validator moniker.
    pub fn moniker(value: impl Into<String>) -> Self {
        Self::new(OPTION_MONIKER, value)
    }

    pub fn commission_rate(value: impl Into<String>) -> Self {
        Self::new(OPTION_COMMISSION_RATE, value)
    }

    pub fn commission_max_rate(value: impl Into<String>) -> Self {
        Self::new(OPTION_COMMISSION_MAX_RATE, value)
    }

    pub fn commission_max_change_rate(value: impl Into<String>) -> Self {
        Self::new(OPTION_COMMISSION_MAX_CHANGE_RATE, value)
    }

    pub fn min_self_delegation(value: impl Into<String>) -> Self {
        Self::new(OPTION_MIN_SELF_DELEGATION, value)
    }

    /// Gas prices for the generated transaction (e.g. `0.025stake`).
    pub fn gas_prices(value: impl Into<String>) -> Self {
        Self::new(OPTION_GAS_PRICES, value)
    }

    pub fn flag(&self) -> &'static str {
        self.flag
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Append this option's pair, or return `args` unchanged when empty.
    pub fn apply(&self, mut args: Vec<String>) -> Vec<String> {
        if let Some(value) = &self.value {
            args.push(self.flag.to_string());
            args.push(value.clone());
        }
        args
    }
}

/// Fold `options` into `args` in the given order.
pub fn compose(args: Vec<String>, options: &[GentxOption]) -> Vec<String> {
    options.iter().fold(args, |acc, option| option.apply(acc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_contributes_nothing() {
        let opt = GentxOption::moniker("");
        assert_eq!(opt.value(), None);
        assert_eq!(opt.apply(vec!["gentx".into()]), vec!["gentx".to_string()]);
    }

    #[test]
    fn compose_follows_caller_order() {
        let out = compose(
            vec!["gentx".into()],
            &[
                GentxOption::gas_prices("0.1stake"),
                GentxOption::commission_rate(""),
                GentxOption::moniker("alice"),
            ],
        );
        assert_eq!(out, vec!["gentx", "--gas-prices", "0.1stake", "--moniker", "alice"]);
    }
}
