//! Static parameter catalog and lookups.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use super::types::ParameterEntry;

const fn entry(
    key: &'static str,
    group: &'static str,
    description: &'static str,
    example: &'static str,
    default_hint: Option<&'static str>,
) -> ParameterEntry {
    ParameterEntry::new(key, group, description, example, default_hint)
}

/// Every documented override key. Keys are unique across the whole table.
static PARAMETERS: &[ParameterEntry] = &[
    // imp
    entry(
        "bidfloor",
        "imp",
        "Minimum bid for this impression in CPM",
        "0.5",
        Some("0.0"),
    ),
    entry(
        "bidfloorcur",
        "imp",
        "Currency of the bid floor (ISO-4217)",
        "USD",
        Some("USD"),
    ),
    entry(
        "instl",
        "imp",
        "1 if the ad is interstitial or full screen",
        "1",
        Some("0"),
    ),
    entry("pos", "imp", "Ad position on screen", "1", None),
    entry(
        "secure",
        "imp",
        "1 if the creative must be served over HTTPS",
        "1",
        Some("1"),
    ),
    // site
    entry(
        "cat",
        "site",
        "IAB content categories of the site",
        "IAB1,IAB17",
        None,
    ),
    entry(
        "keywords",
        "site",
        "Comma separated keywords describing the page",
        "sports,football",
        None,
    ),
    entry(
        "ref",
        "site",
        "Referrer URL that caused navigation to the current page",
        "https://www.google.com/",
        None,
    ),
    // app
    entry(
        "bundle",
        "app",
        "Application bundle or package name",
        "com.example.game",
        None,
    ),
    entry(
        "app_name",
        "app",
        "Human readable application name",
        "Example Game",
        None,
    ),
    entry(
        "storeurl",
        "app",
        "App store URL of the installed app",
        "https://play.google.com/store/apps/details?id=com.example.game",
        None,
    ),
    // device
    entry(
        "ua",
        "device",
        "Browser user agent string",
        "Mozilla/5.0 (Linux; Android 13) AppleWebKit/537.36",
        None,
    ),
    entry(
        "ip",
        "device",
        "IPv4 address closest to the device",
        "41.58.12.7",
        None,
    ),
    entry(
        "ifa",
        "device",
        "Advertising identifier in the clear",
        "6d92078a-8246-4ba4-ae5b-76104861e7dc",
        None,
    ),
    entry("os", "device", "Device operating system", "Android", None),
    entry(
        "osv",
        "device",
        "Device operating system version",
        "13",
        None,
    ),
    entry("make", "device", "Device make", "Samsung", None),
    entry("model", "device", "Device model", "SM-A536B", None),
    entry(
        "devicetype",
        "device",
        "General type of device (OpenRTB list)",
        "4",
        None,
    ),
    entry("carrier", "device", "Carrier or ISP", "MTN", None),
    entry(
        "connectiontype",
        "device",
        "Network connection type (OpenRTB list)",
        "6",
        None,
    ),
    entry(
        "language",
        "device",
        "Browser language (ISO-639-1)",
        "en",
        Some("en"),
    ),
    // geo
    entry(
        "country",
        "geo",
        "Country code (ISO-3166-1 alpha-3)",
        "NGA",
        None,
    ),
    entry("city", "geo", "City name", "Lagos", None),
    entry("region", "geo", "Region code (ISO-3166-2)", "LA", None),
    entry("zip", "geo", "Postal code", "100001", None),
    entry("lat", "geo", "Latitude from -90.0 to +90.0", "6.5244", None),
    entry(
        "lon",
        "geo",
        "Longitude from -180.0 to +180.0",
        "3.3792",
        None,
    ),
    // user
    entry(
        "uid",
        "user",
        "Exchange specific user identifier",
        "u-5d41402abc",
        None,
    ),
    entry(
        "yob",
        "user",
        "Year of birth as a 4-digit integer",
        "1990",
        None,
    ),
    entry("gender", "user", "Gender: M, F or O", "F", None),
    // regs
    entry(
        "coppa",
        "regs",
        "1 if the request is subject to COPPA",
        "1",
        Some("0"),
    ),
    entry(
        "gdpr",
        "regs",
        "1 if the request is subject to GDPR",
        "1",
        Some("0"),
    ),
    entry(
        "gdpr_consent",
        "regs",
        "IAB TCF consent string",
        "CPXxRfAPXxRfAAfKABENB-CgAAAAAAAAAAYgAAAAAAAA",
        None,
    ),
    entry(
        "us_privacy",
        "regs",
        "IAB CCPA US privacy string",
        "1YNN",
        None,
    ),
    // request
    entry(
        "test",
        "request",
        "1 for test mode; no billable impressions",
        "1",
        Some("0"),
    ),
    entry(
        "tmax",
        "request",
        "Maximum time in milliseconds to answer",
        "300",
        None,
    ),
];

static INDEX: LazyLock<HashMap<&'static str, &'static ParameterEntry>> =
    LazyLock::new(|| PARAMETERS.iter().map(|p| (p.key, p)).collect());

/// Look up a catalog entry by exact (case-sensitive) key.
///
/// `None` only means "no hint available". Unknown keys are still legal
/// override keys.
pub fn lookup(key: &str) -> Option<&'static ParameterEntry> {
    INDEX.get(key).copied()
}

/// Whether the key is documented in the catalog.
pub fn is_known(key: &str) -> bool {
    INDEX.contains_key(key)
}

/// All entries in declaration order.
pub fn entries() -> &'static [ParameterEntry] {
    PARAMETERS
}

/// Entries grouped by `group`, groups ascending, each group sorted by key.
pub fn grouped_view() -> BTreeMap<&'static str, Vec<&'static ParameterEntry>> {
    let mut groups: BTreeMap<&'static str, Vec<&'static ParameterEntry>> = BTreeMap::new();
    for param in PARAMETERS {
        groups.entry(param.group).or_default().push(param);
    }
    for params in groups.values_mut() {
        params.sort_by(|a, b| a.key.cmp(b.key));
    }
    groups
}

/// Names of every group, ascending.
pub fn group_names() -> Vec<&'static str> {
    grouped_view().into_keys().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let mut seen = HashSet::new();
        for param in entries() {
            assert!(seen.insert(param.key), "duplicate catalog key: {}", param.key);
        }
        assert_eq!(INDEX.len(), entries().len());
    }

    #[test]
    fn test_lookup_known() {
        let param = lookup("bidfloor").expect("bidfloor is documented");
        assert_eq!(param.group, "imp");
        assert_eq!(param.example, "0.5");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(lookup("BIDFLOOR").is_none());
        assert!(!is_known("Bidfloor"));
    }

    #[test]
    fn test_lookup_unknown_is_none() {
        assert!(lookup("my_custom_flag").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_grouped_view_sorted_by_key() {
        let groups = grouped_view();
        for (group, params) in &groups {
            assert!(!params.is_empty());
            assert!(params.iter().all(|p| p.group == *group));
            let keys: Vec<&str> = params.iter().map(|p| p.key).collect();
            let mut sorted = keys.clone();
            sorted.sort();
            assert_eq!(keys, sorted, "group {} not sorted", group);
        }
    }

    #[test]
    fn test_grouped_view_covers_every_entry() {
        let total: usize = grouped_view().values().map(Vec::len).sum();
        assert_eq!(total, entries().len());
    }

    #[test]
    fn test_group_names_ascending() {
        let names = group_names();
        assert_eq!(names.join(","), "app,device,geo,imp,regs,request,site,user");
    }
}
