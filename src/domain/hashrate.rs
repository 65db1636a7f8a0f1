use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Megahashes per second to hashes per second
pub const MHS_TO_HS: f64 = 1_000_000.0;

/// Per-currency hashrate in hashes/second
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HashrateRecord {
    pub hashrate: f64,
}

/// Result of one account fetch: currency code -> record, in the order the
/// provider declares its currencies
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchResult {
    currencies: Vec<(String, HashrateRecord)>,
}

impl Serialize for FetchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.currencies.iter().map(|(code, record)| (code, record)))
    }
}

impl FetchResult {
    /// Map every currency to the same aggregate hashrate; duplicates keep
    /// their first position
    pub fn uniform<I, S>(currencies: I, hashrate: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut result = Self::default();
        for code in currencies {
            let code = code.into();
            if result.get(&code).is_none() {
                result.currencies.push((code, HashrateRecord { hashrate }));
            }
        }
        result
    }

    pub fn get(&self, currency: &str) -> Option<&HashrateRecord> {
        self.currencies
            .iter()
            .find(|(code, _)| code == currency)
            .map(|(_, record)| record)
    }

    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        self.currencies.iter().map(|(code, _)| code.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashrateRecord)> {
        self.currencies.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Hashrate shared by all currencies, `None` when empty or not uniform
    pub fn aggregate_hashrate(&self) -> Option<f64> {
        let mut rates = self.currencies.iter().map(|(_, r)| r.hashrate);
        let first = rates.next()?;
        rates.all(|r| r == first).then_some(first)
    }
}

/// Outcome of one fetch as printed by the `ghashio-fetch` binary
#[derive(Debug, Clone, Serialize)]
pub struct FetchReport {
    pub provider: String,
    pub account: String,
    pub fetched_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<FetchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
