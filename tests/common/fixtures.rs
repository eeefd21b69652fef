use std::io::Write;
use tempfile::NamedTempFile;
use uns_domain::NetworkRecord;

/// Addresses used across the flows
pub struct TestAddresses;

impl TestAddresses {
    pub fn obsidian_notes() -> &'static str {
        "utopia.dillanet//.obsidiannotes"
    }

    pub fn alice_blog_with_query() -> &'static str {
        "utopia.alice//.blog?x=1#top"
    }

    pub fn short_network() -> &'static str {
        "utopia.ab//.x"
    }

    pub fn unknown_network() -> &'static str {
        "utopia.unknownnet//.foo"
    }

    pub fn missing_subdomain() -> &'static str {
        "utopia.dillanet//.missing"
    }
}

/// Network records used across the flows
pub struct TestRecords;

impl TestRecords {
    pub fn dillanet() -> NetworkRecord {
        NetworkRecord::new("dillanet", "dillan")
            .with_resolver("mock:static")
            .with_subdomain(".obsidiannotes", "https://notes.dillanet.org")
    }

    pub fn alice() -> NetworkRecord {
        NetworkRecord::new("alice", "alice")
            .with_resolver("mock:static")
            .with_subdomain(".blog", "https://alice.blog")
    }

    pub fn remote(network: &str, endpoints: &[String]) -> NetworkRecord {
        let mut record = NetworkRecord::new(network, "remote-owner")
            .with_subdomain(".site", format!("https://{network}.local"));
        record.resolvers = endpoints.to_vec();
        record
    }

    /// Records serialized the way a records file stores them.
    pub fn records_file(records: &[NetworkRecord]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        let json = serde_json::to_vec_pretty(records).unwrap();
        file.write_all(&json).unwrap();
        file
    }
}
