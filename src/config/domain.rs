//! API domains and their gateway subscription keys.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::config::SubscriptionKey;
use crate::error::ConfigError;

/// One of the marketplace API families, each behind its own gateway
/// subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiDomain {
    /// Product management (categories, models, product packages).
    Product,
    /// Order management (order search, commercial gestures, validation).
    Order,
    /// Offer management (offers, offer packages, seller deals).
    Offer,
}

impl ApiDomain {
    /// All domains, in a stable order.
    pub const ALL: [Self; 3] = [Self::Product, Self::Order, Self::Offer];

    /// Returns the lowercase name of the domain.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Order => "order",
            Self::Offer => "offer",
        }
    }
}

impl fmt::Display for ApiDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiDomain {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "product" => Ok(Self::Product),
            "order" => Ok(Self::Order),
            "offer" => Ok(Self::Offer),
            _ => Err(ConfigError::UnknownApiDomain {
                name: s.to_string(),
            }),
        }
    }
}

/// Subscription keys indexed by API domain.
///
/// Every domain is optional. Requests issued from a branch without a key
/// carry no subscription-key header.
///
/// # Example
///
/// ```rust
/// use cdiscount_api::{ApiDomain, SubscriptionKey, SubscriptionKeys};
///
/// let keys = SubscriptionKeys::new()
///     .with(ApiDomain::Product, SubscriptionKey::new("product-key").unwrap())
///     .with(ApiDomain::Order, SubscriptionKey::new("order-key").unwrap());
///
/// assert_eq!(keys.get(ApiDomain::Product).unwrap().as_ref(), "product-key");
/// assert!(keys.get(ApiDomain::Offer).is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubscriptionKeys {
    keys: HashMap<ApiDomain, SubscriptionKey>,
}

impl SubscriptionKeys {
    /// Creates an empty key set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the key set with `key` registered for `domain`.
    #[must_use]
    pub fn with(mut self, domain: ApiDomain, key: SubscriptionKey) -> Self {
        self.insert(domain, key);
        self
    }

    /// Registers `key` for `domain`, replacing any previous key.
    pub fn insert(&mut self, domain: ApiDomain, key: SubscriptionKey) {
        self.keys.insert(domain, key);
    }

    /// Returns the key registered for `domain`, if any.
    #[must_use]
    pub fn get(&self, domain: ApiDomain) -> Option<&SubscriptionKey> {
        self.keys.get(&domain)
    }

    /// Returns `true` if no key is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Builds a key set from `(domain name, key)` pairs such as
    /// `("product", "...")`.
    ///
    /// An empty key leaves its domain without a key, as an empty environment
    /// variable does in [`CdiscountConfig::from_env`](crate::CdiscountConfig::from_env).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownApiDomain`] for an unrecognised name.
    pub fn from_pairs<I, N, K>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (N, K)>,
        N: AsRef<str>,
        K: Into<String>,
    {
        let mut keys = Self::new();
        for (name, key) in pairs {
            let domain: ApiDomain = name.as_ref().parse()?;
            let key = key.into();
            if key.is_empty() {
                continue;
            }
            keys.insert(domain, SubscriptionKey::new(key)?);
        }
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_domain_parses_known_names() {
        assert_eq!("product".parse::<ApiDomain>().unwrap(), ApiDomain::Product);
        assert_eq!("Order".parse::<ApiDomain>().unwrap(), ApiDomain::Order);
        assert_eq!(" offer ".parse::<ApiDomain>().unwrap(), ApiDomain::Offer);
    }

    #[test]
    fn test_api_domain_rejects_unknown_name() {
        let result = "catalog".parse::<ApiDomain>();
        assert!(matches!(
            result,
            Err(ConfigError::UnknownApiDomain { name }) if name == "catalog"
        ));
    }

    #[test]
    fn test_api_domain_display_matches_parse() {
        for domain in ApiDomain::ALL {
            assert_eq!(domain.to_string().parse::<ApiDomain>().unwrap(), domain);
        }
    }

    #[test]
    fn test_subscription_keys_default_is_empty() {
        let keys = SubscriptionKeys::default();
        assert!(keys.is_empty());
        for domain in ApiDomain::ALL {
            assert!(keys.get(domain).is_none());
        }
    }

    #[test]
    fn test_subscription_keys_from_pairs() {
        let keys = SubscriptionKeys::from_pairs([("product", "pk"), ("offer", "ok")]).unwrap();
        assert_eq!(keys.get(ApiDomain::Product).unwrap().as_ref(), "pk");
        assert_eq!(keys.get(ApiDomain::Offer).unwrap().as_ref(), "ok");
        assert!(keys.get(ApiDomain::Order).is_none());
    }

    #[test]
    fn test_subscription_keys_from_pairs_rejects_bad_input() {
        assert!(matches!(
            SubscriptionKeys::from_pairs([("stock", "k")]),
            Err(ConfigError::UnknownApiDomain { .. })
        ));
        assert!(matches!(
            SubscriptionKeys::from_pairs([("stock", "")]),
            Err(ConfigError::UnknownApiDomain { .. })
        ));
    }

    #[test]
    fn test_subscription_keys_from_pairs_skips_empty_keys() {
        let keys = SubscriptionKeys::from_pairs([("order", ""), ("product", "pk")]).unwrap();
        assert!(keys.get(ApiDomain::Order).is_none());
        assert_eq!(keys.get(ApiDomain::Product).unwrap().as_ref(), "pk");
    }

    #[test]
    fn test_insert_replaces_previous_key() {
        let mut keys = SubscriptionKeys::new();
        keys.insert(ApiDomain::Order, SubscriptionKey::new("first").unwrap());
        keys.insert(ApiDomain::Order, SubscriptionKey::new("second").unwrap());
        assert_eq!(keys.get(ApiDomain::Order).unwrap().as_ref(), "second");
    }
}
